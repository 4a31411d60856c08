//! Domain layer for the search widget.
//!
//! This module contains the core data types shared by the state machine and the
//! query builder, independent of any host or rendering technology.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`payload`]: Form values, search payloads and value truthiness

pub mod error;
pub mod payload;

pub use error::{Result, SearchError};
pub use payload::{is_truthy, FolderScopeId, FormValues, SearchPayload};
