//! Infrastructure layer for the widget's external collaborators.
//!
//! The widget reads labels and form values from collaborators it does not own.
//! This module defines the seams for both and ships simple implementations.
//!
//! - [`i18n`]: Translation lookup and the TOML-backed [`Catalog`]
//! - [`store`]: Form-state store reads and the in-memory [`MemoryFormStore`]

pub mod i18n;
pub mod store;

pub use i18n::{Catalog, Translate};
pub use store::{FormStateStore, MemoryFormStore};
