//! Deterministic mock dataset for CI-safe examples and tests.
//!
//! The fixtures mirror a small, intentionally sparse universe: five listed
//! companies, of which only three carry financial records. The gaps are a
//! feature — they exercise every "comparison unavailable" path downstream.
#![warn(missing_docs)]

use rivale_core::{Company, CompanyDataset, CompanyId, FinancialData};

mod fixtures;

/// Mock dataset backed by static fixtures. Read-only for its lifetime.
pub struct MockDataset {
    companies: Vec<Company>,
    financials: Vec<FinancialData>,
}

impl Default for MockDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataset {
    /// Build the dataset from its fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            companies: fixtures::companies::all(),
            financials: fixtures::financials::all(),
        }
    }
}

impl CompanyDataset for MockDataset {
    fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn financials(&self, id: &CompanyId) -> Option<&FinancialData> {
        self.financials.iter().find(|f| &f.company_id == id)
    }
}
