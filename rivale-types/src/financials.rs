use core::fmt;

use serde::{Deserialize, Serialize};

use crate::company::CompanyId;

/// Category tag for a financial ratio.
///
/// The set is fixed; grouping, the ratios tab layout, and the overview's
/// key-ratio strip all iterate [`RatioCategory::ALL`] in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioCategory {
    /// Price-relative measures (P/E, P/S, P/B).
    Valuation,
    /// Margin and return measures (ROE, net margin).
    Profitability,
    /// Year-over-year growth measures.
    Growth,
    /// Leverage and liquidity measures.
    Risk,
    /// Asset and inventory utilization measures.
    Efficiency,
}

impl RatioCategory {
    /// All categories, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Valuation,
        Self::Profitability,
        Self::Growth,
        Self::Risk,
        Self::Efficiency,
    ];

    /// Stable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valuation => "Valuation",
            Self::Profitability => "Profitability",
            Self::Growth => "Growth",
            Self::Risk => "Risk",
            Self::Efficiency => "Efficiency",
        }
    }
}

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named summary metric with optional prior-period context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetric {
    /// Display name, e.g. "Revenue (TTM)".
    pub name: String,
    /// Current value in the metric's native unit.
    pub value: f64,
    /// Prior-period value, when the dataset carries one.
    pub previous_value: Option<f64>,
    /// Absolute change from `previous_value`.
    pub change: Option<f64>,
    /// Relative change from `previous_value`, in percent.
    pub change_percent: Option<f64>,
    /// Whether the change reads as favorable. When `change` is present and
    /// non-zero this reflects its sign.
    pub is_positive: Option<bool>,
    /// Tooltip description for the presentation layer.
    pub description: Option<String>,
}

/// A named ratio tagged with a category, an industry benchmark, and a
/// polarity flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatio {
    /// Display name, e.g. "P/E Ratio". Ratio pairing across companies
    /// matches on this name exactly.
    pub name: String,
    /// Grouping category.
    pub category: RatioCategory,
    /// The company's value.
    pub value: f64,
    /// Industry-average benchmark for the same ratio.
    pub industry_avg: f64,
    /// Tooltip description for the presentation layer.
    pub description: String,
    /// Ratio polarity: whether a higher value is favorable.
    pub is_higher_better: bool,
}

/// One quarterly income-statement row. Monetary fields are in millions of
/// dollars except `eps`, which is per share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRow {
    /// Period label, e.g. "2023-Q4".
    pub period: String,
    /// Total revenue.
    pub revenue: f64,
    /// Net income.
    pub net_income: f64,
    /// Diluted earnings per share, in dollars.
    pub eps: f64,
    /// Earnings before interest, taxes, depreciation, and amortization.
    pub ebitda: f64,
    /// Cash generated by operations.
    pub operating_cash_flow: f64,
    /// Operating cash flow less capital expenditures.
    pub free_cash_flow: f64,
}

/// One quarterly balance-sheet row, in millions of dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Period label, e.g. "2023-Q4".
    pub period: String,
    /// Cash and cash equivalents.
    pub cash_and_equivalents: f64,
    /// Total assets.
    pub total_assets: f64,
    /// Total liabilities.
    pub total_liabilities: f64,
    /// Total shareholders' equity.
    pub total_equity: f64,
    /// Long-term debt.
    pub long_term_debt: f64,
}

/// Per-company bundle of financial records.
///
/// Both row sequences are ordered most-recent-first. Comparison logic
/// assumes positional period alignment between any two bundles: row `i` of
/// one company corresponds to row `i` of the other, not to a matching
/// calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialData {
    /// The company these records belong to.
    pub company_id: CompanyId,
    /// Quarterly income-statement rows, most-recent-first.
    pub quarterly: Vec<IncomeRow>,
    /// Quarterly balance-sheet rows, most-recent-first.
    pub balance_sheet: Vec<BalanceRow>,
    /// Ratios across all categories.
    pub ratios: Vec<FinancialRatio>,
    /// Summary metrics, in presentation order.
    pub metrics: Vec<FinancialMetric>,
}

/// Paired financial records for a company and a chosen competitor.
///
/// Ephemeral and derived: constructed on demand by a query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonBundle {
    /// The selected company's records.
    pub company: FinancialData,
    /// The chosen competitor's records.
    pub competitor: FinancialData,
}
