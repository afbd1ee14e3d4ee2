//! rivale-types
//!
//! Plain domain DTOs shared across the rivale workspace.
//!
//! - `company`: company identity, classification, and market snapshot.
//! - `financials`: per-company financial records (statement rows, ratios,
//!   summary metrics) and the ephemeral comparison bundle.
//! - `error`: the unified workspace error type.
//!
//! Everything here is data: no I/O, no interior mutability. Records are
//! created once at dataset load time and shared read-only after that.
#![warn(missing_docs)]

pub mod company;
pub mod error;
pub mod financials;

pub use company::{Company, CompanyId};
pub use error::RivaleError;
pub use financials::{
    BalanceRow, ComparisonBundle, FinancialData, FinancialMetric, FinancialRatio, IncomeRow,
    RatioCategory,
};
