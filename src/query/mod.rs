//! Query construction from the text field and the advanced filter form.
//!
//! - [`builder`]: Merges both sources into a [`SearchPayload`](crate::SearchPayload)
//! - [`policy`]: Per-field handling table for advanced filter values

pub mod builder;
pub mod policy;

pub use builder::build_payload;
pub use policy::{FieldPolicy, FIELD_POLICIES};
