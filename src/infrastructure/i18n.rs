//! Translation lookup for display labels.
//!
//! Labels are resolved through the [`Translate`] trait so hosts can plug in
//! their own localization layer. [`Catalog`] is the bundled implementation: a
//! flat table of `key = "text"` pairs loaded from TOML.
//!
//! # Format
//!
//! Nested tables are flattened with `.` separators, so both forms below define
//! the key `AssetAdmin.SEARCH`:
//!
//! ```toml
//! "AssetAdmin.SEARCH" = "Search"
//!
//! [AssetAdmin]
//! SEARCH = "Search"
//! ```
//!
//! Non-string leaf values are ignored.

use crate::domain::{Result, SearchError};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// String lookup with a fallback for missing keys.
pub trait Translate {
    /// Returns the text for `key`, or `fallback` when the key is unknown.
    fn translate(&self, key: &str, fallback: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &str) -> String,
{
    fn translate(&self, key: &str, fallback: &str) -> String {
        self(key, fallback)
    }
}

/// TOML-backed translation table.
///
/// An empty catalog returns the fallback for every key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Creates a catalog with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a bundled catalog by locale name.
    ///
    /// Available locales: `en`. Returns `None` for unknown locales.
    #[must_use]
    pub fn from_locale(locale: &str) -> Option<Self> {
        let toml_str = match locale {
            "en" => include_str!("../../locales/en.toml"),
            _ => return None,
        };

        Self::from_toml_str(toml_str).ok()
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Catalog`] if the text is not valid TOML.
    ///
    /// # Example
    ///
    /// ```
    /// use asset_search::infrastructure::{Catalog, Translate};
    ///
    /// let catalog = Catalog::from_toml_str("[AssetAdmin]\nADVANCED = \"Erweitert\"")?;
    /// assert_eq!(catalog.translate("AssetAdmin.ADVANCED", "Advanced"), "Erweitert");
    /// assert_eq!(catalog.translate("AssetAdmin.CLOSE", "Close"), "Close");
    /// # Ok::<(), asset_search::SearchError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)
            .map_err(|e| SearchError::Catalog(format!("Failed to parse catalog TOML: {e}")))?;

        let mut entries = BTreeMap::new();
        flatten_into(&mut entries, None, &table);

        Ok(Self { entries })
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read ([`SearchError::Io`])
    /// - The TOML content cannot be parsed ([`SearchError::Catalog`])
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Number of keys in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, fallback: &str) -> String {
        self.entries
            .get(key)
            .map_or_else(|| fallback.to_string(), Clone::clone)
    }
}

fn flatten_into(entries: &mut BTreeMap<String, String>, prefix: Option<&str>, table: &toml::Table) {
    for (key, value) in table {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
        match value {
            toml::Value::String(text) => {
                entries.insert(full_key, text.clone());
            }
            toml::Value::Table(nested) => flatten_into(entries, Some(&full_key), nested),
            _ => {
                tracing::debug!(key = %full_key, "ignoring non-string catalog entry");
            }
        }
    }
}
