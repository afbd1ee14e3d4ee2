//! Rivale pairs a public company with a chosen competitor over a pluggable,
//! read-only dataset and derives presentation-ready comparison structures.
//!
//! Overview
//! - Queries (`company`, `competitors`, `comparison`, `search`) run against
//!   a dataset injected through [`RivaleBuilder`]; nothing is global and
//!   nothing is fetched.
//! - The comparison page view-model ([`page::ComparisonPage`]) owns the
//!   selection state — selected company, selected competitor, active
//!   section — and recomputes its derived projections synchronously on
//!   every transition.
//! - The entry surface's search overlay ([`search::SearchOverlay`]) keeps
//!   its own independent transient state.
//!
//! Key behaviors and trade-offs
//! - An unresolvable company id is a redirect signal, not an in-page error:
//!   [`page::ComparisonPage::open`] returns `NotFound` and the caller sends
//!   the user back to the entry surface.
//! - Missing financial records degrade, never fail: `comparison` yields
//!   `None` and every projection renders an empty-but-well-formed shape.
//! - Statement tables compare companies positionally, always against the
//!   most recent period, regardless of which row the UI has expanded.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use rivale::Rivale;
//! use rivale::page::ComparisonPage;
//! use rivale_core::CompanyId;
//!
//! let rivale = Arc::new(
//!     Rivale::builder()
//!         .with_dataset(Arc::new(rivale_mock::MockDataset::new()))
//!         .build()?,
//! );
//!
//! let apple = CompanyId::new("1")?;
//! let mut page = ComparisonPage::open(rivale, &apple)?;
//! page.select_competitor(&CompanyId::new("3")?)?;
//! for pair in page.ratio_pairs(rivale_core::RatioCategory::Risk) {
//!     println!("{}: {} vs {}", pair.company.name, pair.company.value, pair.competitor.value);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
pub mod page;
pub mod search;

pub use core::{Rivale, RivaleBuilder};

pub use rivale_core::{
    BalanceRow, Company, CompanyDataset, CompanyId, ComparisonBundle, FinancialData,
    FinancialMetric, FinancialRatio, IncomeRow, RatioCategory, RivaleError,
};
