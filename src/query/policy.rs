//! Per-field policy table for advanced filter values.
//!
//! Most filter fields are copied into the payload unchanged. The few that are
//! not are listed in [`FIELD_POLICIES`]; lookups for any other name fall back to
//! [`FieldPolicy::Passthrough`].

/// Form field carrying the anti-forgery token.
pub const SECURITY_ID_FIELD: &str = "SecurityID";

/// Boolean form field restricting results to the current folder.
pub const CURRENT_FOLDER_ONLY_FIELD: &str = "CurrentFolderOnly";

/// Payload field set from the text input.
pub const NAME_FIELD: &str = "Name";

/// Payload field receiving the current folder identifier.
pub const PARENT_ID_FIELD: &str = "ParentID";

/// How a truthy form value is carried into the search payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Never included. Transport-level fields, not search criteria.
    Skip,

    /// Replaced by `ParentID` set to the current folder scope.
    ScopeToFolder,

    /// Copied verbatim under its own name.
    Passthrough,
}

/// Fields whose policy differs from [`FieldPolicy::Passthrough`].
pub const FIELD_POLICIES: &[(&str, FieldPolicy)] = &[
    (SECURITY_ID_FIELD, FieldPolicy::Skip),
    (CURRENT_FOLDER_ONLY_FIELD, FieldPolicy::ScopeToFolder),
];

impl FieldPolicy {
    /// Looks up the policy for a form field name.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_search::query::FieldPolicy;
    ///
    /// assert_eq!(FieldPolicy::for_field("SecurityID"), FieldPolicy::Skip);
    /// assert_eq!(FieldPolicy::for_field("Title"), FieldPolicy::Passthrough);
    /// ```
    #[must_use]
    pub fn for_field(name: &str) -> Self {
        FIELD_POLICIES
            .iter()
            .find(|(field, _)| *field == name)
            .map_or(Self::Passthrough, |(_, policy)| *policy)
    }
}
