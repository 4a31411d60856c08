//! Asset search: the core of the asset admin's search trigger widget.
//!
//! The widget is a collapsed search icon that expands into a text field, and
//! further into an advanced filter panel rendered from an external form schema.
//! This crate provides:
//! - The three-state visibility model (`Hidden`, `Visible`, `Expanded`)
//! - Outside-click dismissal through a scoped document click subscription
//! - Focus management for the text field
//! - Search payload construction from the text field and the filter form
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Widget Host (widget/)                              │  ← Entry point
//! │  - Builder, mount/unmount, action execution         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, transition table                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query (query/)│   │ UI (ui/)      │   │ Infrastructure│
//! │ - Payload     │   │ - View model  │   │ - Translation │
//! │ - Field policy│   │ - Labels      │   │ - Form store  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) - errors, payload, truthiness     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Widget state machine with event/action model
//! - [`domain`]: Core data types and errors
//! - [`infrastructure`]: Translation catalog and form-state store
//! - [`query`]: Search payload construction
//! - [`ui`]: View model for the host renderer
//! - [`widget`]: Host wiring, document click registry, text input capabilities
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The hosting page passes the widget's settings as string properties:
//!
//! ```text
//! id           = "AssetSearch"
//! schema_url   = "admin/assets/schema/search"
//! folder_id    = "12"
//! trace_level  = "debug"
//! catalog_file = "/srv/admin/lang/de.toml"
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod query;
pub mod ui;
pub mod widget;

pub use app::{handle_event, Action, Event, ViewState, WidgetState};
pub use domain::{FolderScopeId, FormValues, Result, SearchError, SearchPayload};
pub use infrastructure::Catalog;
pub use widget::SearchWidget;

use std::collections::BTreeMap;

/// Widget configuration parsed from the hosting page's properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// DOM id of the search group. Required to build a widget.
    pub id: Option<String>,

    /// Schema reference of the advanced filter form. Required to build a widget.
    pub schema_url: Option<String>,

    /// Current folder scope.
    pub folder_id: Option<FolderScopeId>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,

    /// Path to a TOML translation catalog. See [`infrastructure::i18n`].
    pub catalog_file: Option<String>,
}

impl WidgetConfig {
    /// Parses configuration from a property map.
    ///
    /// # Parsing Rules
    ///
    /// - Empty or whitespace-only values are treated as absent
    /// - `folder_id`: String → `i64` (absent on parse error)
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use asset_search::WidgetConfig;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("id".to_string(), "AssetSearch".to_string());
    /// map.insert("folder_id".to_string(), "12".to_string());
    ///
    /// let config = WidgetConfig::from_map(&map);
    /// assert_eq!(config.id.as_deref(), Some("AssetSearch"));
    /// assert_eq!(config.folder_id, Some(12));
    /// assert_eq!(config.schema_url, None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let folder_id = get("folder_id").and_then(|s| {
            s.parse::<FolderScopeId>()
                .map_err(|e| tracing::debug!(value = %s, error = %e, "ignoring invalid folder_id"))
                .ok()
        });

        Self {
            id: get("id"),
            schema_url: get("schema_url"),
            folder_id,
            trace_level: get("trace_level"),
            catalog_file: get("catalog_file"),
        }
    }
}

/// Loads the translation catalog named by the configuration.
///
/// Falls back to the bundled English catalog when no file is configured, and
/// to an empty catalog (fallback labels) when the file cannot be loaded.
#[must_use]
pub fn initialize(config: &WidgetConfig) -> Catalog {
    tracing::debug!("initializing search widget");

    config.catalog_file.as_ref().map_or_else(
        || Catalog::from_locale("en").unwrap_or_default(),
        |catalog_file| {
            Catalog::from_file(catalog_file).unwrap_or_else(|e| {
                tracing::debug!(catalog_file = %catalog_file, error = %e, "failed to load catalog, using fallbacks");
                Catalog::empty()
            })
        },
    )
}
