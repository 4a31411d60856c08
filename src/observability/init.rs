//! Tracing initialization and subscriber setup.

use crate::WidgetConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with stderr output.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`, if set
/// 3. Default: `"info"`
///
/// Idempotent: only the first call in a process installs a subscriber, later
/// calls return without effect.
///
/// # Example
///
/// ```
/// use asset_search::observability::init_tracing;
/// use asset_search::WidgetConfig;
///
/// let config = WidgetConfig {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &WidgetConfig) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    let _ = subscriber.try_init();
}
