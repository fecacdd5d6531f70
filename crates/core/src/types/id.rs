//! Newtype ID for type-safe product references.
//!
//! Catalog ids are opaque strings assigned by the product backend, so the
//! wrapper is string-based rather than numeric.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog.
///
/// Wrapping the raw string prevents accidentally mixing product ids with
/// other string fields such as variant labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the ID is the empty string.
    ///
    /// The catalog never assigns empty ids; an empty ID only shows up in
    /// malformed persisted data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
