use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RivaleError;

/// Validated company identifier.
///
/// Identifiers are opaque strings chosen by the dataset; the only structural
/// requirement is that they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Parse an identifier, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, RivaleError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RivaleError::invalid_arg("company id must not be empty"));
        }
        Ok(Self(id))
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompanyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A listed company: identity, classification, and a point-in-time market
/// snapshot.
///
/// Immutable for the process lifetime; created at load time from the
/// dataset's fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Dataset-wide unique identifier.
    pub id: CompanyId,
    /// Full legal name, e.g. "Apple Inc.".
    pub name: String,
    /// Exchange ticker symbol.
    pub ticker: String,
    /// Logo image URL for the presentation layer.
    pub logo: String,
    /// Sector classification, e.g. "Technology".
    pub sector: String,
    /// Industry classification, e.g. "Consumer Electronics".
    pub industry: String,
    /// Total market capitalization in dollars.
    pub market_cap: f64,
    /// Last traded price in dollars.
    pub price: f64,
    /// Absolute price change over the last session.
    pub price_change: f64,
    /// Relative price change over the last session, in percent.
    /// Sign-consistent with `price_change`.
    pub price_change_percent: f64,
}
