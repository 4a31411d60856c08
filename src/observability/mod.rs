//! Structured logging setup.
//!
//! All modules log through `tracing` macros: spans around event handling and
//! payload building, `debug!` on transitions and dispatch, `trace!` on per-field
//! decisions. This module installs the subscriber that turns them into output.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
