//! Comparison page view-model: selection state and derived projections.
//!
//! The page owns its state exclusively and mutates it only in response to
//! its own events (open, competitor click, tab click). Every derivation is
//! synchronous and total: by the time a transition returns, the bundle and
//! all projections reflect the new selection, with no partial state
//! observable to the renderer.

mod ratios;
mod table;

use std::sync::Arc;

use rivale_core::{Company, CompanyId, ComparisonBundle, FinancialMetric, RivaleError};

use crate::Rivale;

pub use ratios::{KeyRatio, RatioPair};
pub use table::{BALANCE_FIELDS, ComparisonTable, Field, INCOME_FIELDS, ValueFormat};

/// Page sections selectable from the tab strip.
///
/// Switching sections never recomputes the bundle; it only changes which
/// derived projection the renderer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Revenue trend, key metrics, and one headline ratio per category.
    #[default]
    Overview,
    /// Grouped ratio pairs across all five categories.
    Ratios,
    /// Quarterly income-statement table.
    IncomeStatement,
    /// Quarterly balance-sheet table.
    BalanceSheet,
}

impl Section {
    /// All sections, in tab order.
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Ratios,
        Self::IncomeStatement,
        Self::BalanceSheet,
    ];

    /// Stable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ratios => "Financial Ratios",
            Self::IncomeStatement => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
        }
    }
}

/// One point of the overview's quarterly revenue chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    /// Period label, e.g. "2023-Q4".
    pub period: String,
    /// The selected company's revenue for the period.
    pub company: f64,
    /// The competitor's revenue for the positionally aligned period, or
    /// `0.0` when the competitor has no row at that position.
    pub competitor: f64,
}

/// The comparison page: a resolved company, its competitor universe, and
/// the currently derived comparison bundle.
#[derive(Debug)]
pub struct ComparisonPage {
    rivale: Arc<Rivale>,
    company: Company,
    competitors: Vec<Company>,
    selected_competitor: Option<CompanyId>,
    section: Section,
    bundle: Option<ComparisonBundle>,
}

impl ComparisonPage {
    /// Open the page for `id`.
    ///
    /// Resolves the company, computes the competitor list, defaults the
    /// selection to the first competitor when one exists, and derives the
    /// initial bundle. An unresolvable id yields `NotFound` — the caller
    /// redirects to the entry surface rather than rendering an error.
    pub fn open(rivale: Arc<Rivale>, id: &CompanyId) -> Result<Self, RivaleError> {
        let company = match rivale.company(id) {
            Ok(company) => company,
            Err(err) => {
                tracing::warn!(company = %id, "company not found; redirecting to entry surface");
                return Err(err);
            }
        };
        let competitors = rivale.competitors(id);
        let selected_competitor = competitors.first().map(|c| c.id.clone());
        let bundle = selected_competitor
            .as_ref()
            .and_then(|competitor| rivale.comparison(id, competitor));
        tracing::debug!(
            company = %id,
            competitors = competitors.len(),
            has_bundle = bundle.is_some(),
            "comparison page ready"
        );
        Ok(Self {
            rivale,
            company,
            competitors,
            selected_competitor,
            section: Section::Overview,
            bundle,
        })
    }

    /// The resolved company.
    #[must_use]
    pub const fn company(&self) -> &Company {
        &self.company
    }

    /// Every other company in the dataset, in table order.
    #[must_use]
    pub fn competitors(&self) -> &[Company] {
        &self.competitors
    }

    /// The currently selected competitor's id, if any competitor exists.
    #[must_use]
    pub const fn selected_competitor(&self) -> Option<&CompanyId> {
        self.selected_competitor.as_ref()
    }

    /// The active section.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// The current comparison bundle. `None` means "comparison
    /// unavailable": no competitor selected, or either side lacks records.
    #[must_use]
    pub const fn bundle(&self) -> Option<&ComparisonBundle> {
        self.bundle.as_ref()
    }

    /// Select a competitor and synchronously recompute the bundle.
    ///
    /// Selecting the page's own company is rejected; any other id is
    /// accepted, with missing records degrading the bundle to `None`.
    pub fn select_competitor(&mut self, id: &CompanyId) -> Result<(), RivaleError> {
        if id == &self.company.id {
            return Err(RivaleError::invalid_arg(
                "cannot compare a company against itself",
            ));
        }
        self.selected_competitor = Some(id.clone());
        self.bundle = self.rivale.comparison(&self.company.id, id);
        tracing::debug!(
            company = %self.company.id,
            competitor = %id,
            has_bundle = self.bundle.is_some(),
            "competitor selected"
        );
        Ok(())
    }

    /// Switch the active section. Never recomputes the bundle.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Quarterly revenue points for the overview chart, oldest first.
    ///
    /// Rows are stored most-recent-first; the chart reads left-to-right in
    /// time, so the sequence is reversed. Competitor rows are joined by
    /// position and zero-filled when absent.
    #[must_use]
    pub fn revenue_series(&self) -> Vec<RevenuePoint> {
        let Some(bundle) = &self.bundle else {
            return Vec::new();
        };
        let mut points: Vec<RevenuePoint> = bundle
            .company
            .quarterly
            .iter()
            .enumerate()
            .map(|(i, row)| RevenuePoint {
                period: row.period.clone(),
                company: row.revenue,
                competitor: bundle
                    .competitor
                    .quarterly
                    .get(i)
                    .map_or(0.0, |r| r.revenue),
            })
            .collect();
        points.reverse();
        points
    }

    /// The first four of the company's summary metrics, for the overview's
    /// card strip.
    #[must_use]
    pub fn key_metrics(&self) -> Vec<FinancialMetric> {
        self.bundle
            .as_ref()
            .map(|bundle| bundle.company.metrics.iter().take(4).cloned().collect())
            .unwrap_or_default()
    }

    /// The company the current selection resolves to, when it is still in
    /// the competitor list.
    fn selected_competitor_company(&self) -> Option<&Company> {
        let id = self.selected_competitor.as_ref()?;
        self.competitors.iter().find(|c| &c.id == id)
    }
}
