use std::sync::Arc;

use rivale_core::{Company, CompanyDataset, CompanyId, ComparisonBundle, RivaleError};

/// Facade over an injected read-only dataset.
///
/// Owns nothing but the dataset handle; every query is a pure, synchronous
/// derivation over it.
pub struct Rivale {
    dataset: Arc<dyn CompanyDataset>,
}

impl std::fmt::Debug for Rivale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rivale").finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Rivale`] facade.
pub struct RivaleBuilder {
    dataset: Option<Arc<dyn CompanyDataset>>,
}

impl Default for RivaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RivaleBuilder {
    /// Create an empty builder; a dataset must be injected before `build`.
    #[must_use]
    pub const fn new() -> Self {
        Self { dataset: None }
    }

    /// Inject the dataset the facade will read from.
    ///
    /// The dataset is shared read-only; the facade never mutates it and
    /// holds it for its own lifetime.
    #[must_use]
    pub fn with_dataset(mut self, dataset: Arc<dyn CompanyDataset>) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Finalize the facade.
    ///
    /// Fails with `InvalidArg` when no dataset was injected — there is no
    /// implicit global fallback.
    pub fn build(self) -> Result<Rivale, RivaleError> {
        let dataset = self
            .dataset
            .ok_or_else(|| RivaleError::invalid_arg("a dataset must be injected before build"))?;
        Ok(Rivale { dataset })
    }
}

impl Rivale {
    /// Start building a facade.
    #[must_use]
    pub const fn builder() -> RivaleBuilder {
        RivaleBuilder::new()
    }

    /// Full company table, in the dataset's presentation order.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        self.dataset.companies()
    }

    /// Resolve a company by id.
    ///
    /// Absence is `NotFound`, which callers at the page level treat as the
    /// redirect signal back to the entry surface.
    pub fn company(&self, id: &CompanyId) -> Result<Company, RivaleError> {
        self.dataset
            .companies()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| RivaleError::not_found(format!("company {id}")))
    }

    /// Every company except `id`, preserving table order.
    ///
    /// The id is not validated: an unknown id simply excludes nothing and
    /// yields the full table. This is deliberate "exclude one" semantics,
    /// not a lookup.
    #[must_use]
    pub fn competitors(&self, id: &CompanyId) -> Vec<Company> {
        self.dataset
            .companies()
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect()
    }

    /// Pair the financial records of a company and a competitor.
    ///
    /// Returns `None` when either id has no financial record — including
    /// ids that resolve to listed companies, since the dataset is sparse.
    /// `None` means "comparison unavailable", not an error.
    #[must_use]
    pub fn comparison(
        &self,
        company_id: &CompanyId,
        competitor_id: &CompanyId,
    ) -> Option<ComparisonBundle> {
        let company = self.dataset.financials(company_id);
        let competitor = self.dataset.financials(competitor_id);
        match (company, competitor) {
            (Some(company), Some(competitor)) => Some(ComparisonBundle {
                company: company.clone(),
                competitor: competitor.clone(),
            }),
            _ => {
                tracing::debug!(
                    company = %company_id,
                    competitor = %competitor_id,
                    "comparison unavailable: at least one side has no financial records"
                );
                None
            }
        }
    }

    /// Case-insensitive substring search over company names and tickers.
    ///
    /// A trimmed-empty query returns the full table, matching the entry
    /// surface's behavior of listing everything until the user types.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Company> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.dataset.companies().to_vec();
        }
        let needle = trimmed.to_lowercase();
        self.dataset
            .companies()
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.ticker.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
