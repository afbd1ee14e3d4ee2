//! Tabular projections of the income-statement and balance-sheet sections.

use std::fmt;

use rivale_core::format::{format_currency, percent_change};
use rivale_types::{BalanceRow, IncomeRow};

use super::ComparisonPage;

/// How a field's raw value renders inside the statement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Abbreviated dollar amount (`$1.50M`).
    Currency,
    /// Plain per-share dollar amount (`$2.18`).
    PerShare,
}

impl ValueFormat {
    /// Render `value` under this format.
    #[must_use]
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Currency => format_currency(value),
            Self::PerShare => format!("${value:.2}"),
        }
    }
}

/// One row descriptor of a statement table: a stable key, a display label,
/// a value format, and an accessor into the row type.
pub struct Field<R> {
    /// Stable machine key, e.g. "revenue".
    pub key: &'static str,
    /// Display label, e.g. "Revenue".
    pub label: &'static str,
    /// How values of this field render.
    pub format: ValueFormat,
    /// Accessor extracting this field's value from a row.
    pub get: fn(&R) -> f64,
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Fixed field layout of the income-statement table.
pub const INCOME_FIELDS: &[Field<IncomeRow>] = &[
    Field {
        key: "revenue",
        label: "Revenue",
        format: ValueFormat::Currency,
        get: |r| r.revenue,
    },
    Field {
        key: "net_income",
        label: "Net Income",
        format: ValueFormat::Currency,
        get: |r| r.net_income,
    },
    Field {
        key: "eps",
        label: "EPS",
        format: ValueFormat::PerShare,
        get: |r| r.eps,
    },
    Field {
        key: "ebitda",
        label: "EBITDA",
        format: ValueFormat::Currency,
        get: |r| r.ebitda,
    },
    Field {
        key: "operating_cash_flow",
        label: "Operating Cash Flow",
        format: ValueFormat::Currency,
        get: |r| r.operating_cash_flow,
    },
    Field {
        key: "free_cash_flow",
        label: "Free Cash Flow",
        format: ValueFormat::Currency,
        get: |r| r.free_cash_flow,
    },
];

/// Fixed field layout of the balance-sheet table.
pub const BALANCE_FIELDS: &[Field<BalanceRow>] = &[
    Field {
        key: "cash_and_equivalents",
        label: "Cash & Equivalents",
        format: ValueFormat::Currency,
        get: |r| r.cash_and_equivalents,
    },
    Field {
        key: "total_assets",
        label: "Total Assets",
        format: ValueFormat::Currency,
        get: |r| r.total_assets,
    },
    Field {
        key: "total_liabilities",
        label: "Total Liabilities",
        format: ValueFormat::Currency,
        get: |r| r.total_liabilities,
    },
    Field {
        key: "total_equity",
        label: "Total Equity",
        format: ValueFormat::Currency,
        get: |r| r.total_equity,
    },
    Field {
        key: "long_term_debt",
        label: "Long Term Debt",
        format: ValueFormat::Currency,
        get: |r| r.long_term_debt,
    },
];

/// Tabular projection of one statement section, company against competitor.
///
/// `periods` comes from the company's row sequence; both row sequences keep
/// their most-recent-first storage order and are aligned by position. The
/// renderer iterates `fields` for the row layout and never interprets the
/// data further.
#[derive(Debug, Clone)]
pub struct ComparisonTable<R> {
    /// The selected company's display name.
    pub company_name: String,
    /// The competitor's display name.
    pub competitor_name: String,
    /// Period labels, most-recent-first.
    pub periods: Vec<String>,
    /// The company's statement rows.
    pub company_rows: Vec<R>,
    /// The competitor's statement rows.
    pub competitor_rows: Vec<R>,
    /// Section-specific ordered field layout.
    pub fields: Vec<Field<R>>,
}

impl<R> ComparisonTable<R> {
    /// The empty-but-well-formed shape rendered when no comparison is
    /// available. The rendering layer iterates it like any other table and
    /// draws nothing, with no null special-casing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            company_name: String::new(),
            competitor_name: String::new(),
            periods: Vec::new(),
            company_rows: Vec::new(),
            competitor_rows: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Percent difference against the competitor for `field`.
    ///
    /// Always computed from the most recent period on both sides (index 0),
    /// regardless of which row the UI has expanded. `None` only for the
    /// empty shape, where there is no index 0 to compare.
    #[must_use]
    pub fn vs_competitor(&self, field: &Field<R>) -> Option<f64> {
        let company = self.company_rows.first()?;
        let competitor = self.competitor_rows.first()?;
        Some(percent_change((field.get)(company), (field.get)(competitor)))
    }
}

impl ComparisonPage {
    /// The income-statement projection for the current selection.
    #[must_use]
    pub fn income_table(&self) -> ComparisonTable<IncomeRow> {
        match (self.bundle(), self.selected_competitor_company()) {
            (Some(bundle), Some(competitor)) => ComparisonTable {
                company_name: self.company().name.clone(),
                competitor_name: competitor.name.clone(),
                periods: bundle
                    .company
                    .quarterly
                    .iter()
                    .map(|r| r.period.clone())
                    .collect(),
                company_rows: bundle.company.quarterly.clone(),
                competitor_rows: bundle.competitor.quarterly.clone(),
                fields: INCOME_FIELDS.to_vec(),
            },
            _ => ComparisonTable::empty(),
        }
    }

    /// The balance-sheet projection for the current selection.
    #[must_use]
    pub fn balance_table(&self) -> ComparisonTable<BalanceRow> {
        match (self.bundle(), self.selected_competitor_company()) {
            (Some(bundle), Some(competitor)) => ComparisonTable {
                company_name: self.company().name.clone(),
                competitor_name: competitor.name.clone(),
                periods: bundle
                    .company
                    .balance_sheet
                    .iter()
                    .map(|r| r.period.clone())
                    .collect(),
                company_rows: bundle.company.balance_sheet.clone(),
                competitor_rows: bundle.competitor.balance_sheet.clone(),
                fields: BALANCE_FIELDS.to_vec(),
            },
            _ => ComparisonTable::empty(),
        }
    }
}
