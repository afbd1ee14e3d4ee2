//! rivale-core
//!
//! Contracts and pure utilities shared across the rivale ecosystem.
//!
//! - `dataset`: the read-only [`CompanyDataset`] contract and invariant
//!   checks for datasets that implement it.
//! - `format`: display formatting for raw financial values (currency
//!   abbreviation, percent strings, percent change).
//!
//! Domain DTOs are re-exported from `rivale-types` so downstream crates can
//! depend on `rivale-core` only.
#![warn(missing_docs)]

pub mod dataset;
pub mod format;

pub use dataset::{CompanyDataset, validate};

pub use rivale_types::{
    BalanceRow, Company, CompanyId, ComparisonBundle, FinancialData, FinancialMetric,
    FinancialRatio, IncomeRow, RatioCategory, RivaleError,
};
