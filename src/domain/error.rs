//! Error types for the search widget.
//!
//! This module defines the centralized error type [`SearchError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! The taxonomy is small on purpose: the widget core is synchronous UI-state
//! logic, so there are no transient or retryable failures. Absent optional data
//! (form values, folder scope) is not an error at all.

use thiserror::Error;

/// The main error type for search widget operations.
///
/// # Examples
///
/// ```
/// use asset_search::SearchError;
///
/// fn build() -> Result<(), SearchError> {
///     Err(SearchError::MissingCallback("dispatch"))
/// }
///
/// assert!(build().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SearchError {
    /// A rendered node required by the widget could not be located.
    ///
    /// Raised when focus acquisition finds no text-field node, or when the
    /// outside-click containment check finds no root node. Both indicate a
    /// mount-order bug in the host and are never silently ignored.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A required piece of widget configuration was not supplied.
    ///
    /// Rejected when the widget is built, never deferred until submission. The
    /// payload names the missing field (`dispatch`, `schema_url` or `id`).
    #[error("Missing required configuration: {0}")]
    MissingCallback(&'static str),

    /// The translation catalog could not be parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading the translation catalog file. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for search widget operations.
pub type Result<T> = std::result::Result<T, SearchError>;
