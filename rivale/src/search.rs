//! Entry-surface search overlay.
//!
//! The overlay keeps its own transient state — query text and an
//! open/closed flag — independent of any comparison page. It reads the same
//! read-only dataset through the facade and never mutates shared data.

use rivale_core::{Company, CompanyId};

use crate::Rivale;

/// Transient state of the entry surface's company search overlay.
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    query: String,
    open: bool,
}

impl SearchOverlay {
    /// A closed overlay with an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the results dropdown is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Focusing the input opens the dropdown.
    pub fn focus(&mut self) {
        self.open = true;
    }

    /// Clicking outside the overlay closes it; the query text survives.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Replace the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The clear button empties the query but keeps the dropdown open,
    /// since it refocuses the input.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Companies matching the current query, in table order.
    #[must_use]
    pub fn results(&self, rivale: &Rivale) -> Vec<Company> {
        rivale.search(&self.query)
    }

    /// Commit a selection: the overlay closes, the query resets, and the
    /// chosen id is handed back for navigation to the comparison page.
    pub fn choose(&mut self, id: &CompanyId) -> CompanyId {
        self.open = false;
        self.query.clear();
        id.clone()
    }
}
