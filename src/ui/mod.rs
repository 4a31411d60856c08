//! Presentation layer.
//!
//! Rendering itself belongs to the host. This layer only derives what the host
//! needs to draw the widget:
//!
//! ```text
//! WidgetState → compute_viewmodel → SearchViewModel → host renderer
//! ```
//!
//! - [`viewmodel`]: View model types and label resolution

pub mod viewmodel;

pub use viewmodel::{Labels, SearchViewModel};
