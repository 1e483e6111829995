//! Catalog identifier value object
//!
//! A catalog ID is the opaque token that identifies a title within the
//! source site's URL scheme. It is extracted from a locator string of the
//! fixed shape `https://<host>/title/<id>/...`.

use serde::{Deserialize, Serialize};

use super::errors::AnalysisError;

/// Opaque identifier for a title, extracted from a locator URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogId(String);

impl CatalogId {
    /// Extract the catalog ID from a positional-segment locator string.
    ///
    /// The locator is split on `/` and the 5th segment (index 4) is the ID,
    /// taken verbatim. Locators with fewer than 5 segments are rejected.
    pub fn extract(locator: &str) -> Result<Self, AnalysisError> {
        locator
            .split('/')
            .nth(4)
            .map(|segment| Self(segment.to_string()))
            .ok_or_else(|| AnalysisError::InvalidLocator {
                locator: locator.to_string(),
            })
    }

    /// Returns the inner ID string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
