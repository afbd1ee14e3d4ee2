//! The read-only dataset contract and its invariant checks.

use rivale_types::{Company, CompanyId, FinancialData, RivaleError};

/// Read-only repository of companies and their financial records.
///
/// Implementations own their records for the process lifetime and are
/// safely shared without locking because no writer exists. A replacement
/// backed by a real data service must preserve the same contract:
///
/// - `companies` returns the full table in a stable presentation order;
/// - statement rows inside [`FinancialData`] are ordered most-recent-first;
/// - period sequences of any two companies are positionally aligned (row
///   `i` corresponds to row `i`, not to a matching calendar date).
pub trait CompanyDataset: Send + Sync {
    /// Full company table, in stable presentation order.
    fn companies(&self) -> &[Company];

    /// Financial records for `id`, if the dataset carries them.
    ///
    /// The dataset is intentionally sparse: a listed company may have no
    /// financial record at all. Callers treat `None` as "comparison
    /// unavailable", not as an error.
    fn financials(&self, id: &CompanyId) -> Option<&FinancialData>;
}

/// Check a dataset against its documented invariants, reporting the first
/// violation as [`RivaleError::Data`].
///
/// Checked:
/// - company ids are unique across the table;
/// - `price_change_percent` does not contradict the sign of `price_change`;
/// - each financial record is keyed to the company it was fetched for;
/// - metric `is_positive` flags match the sign of a non-zero `change`;
/// - period labels are identical across all financial records, since the
///   comparison logic aligns rows by position.
pub fn validate(dataset: &dyn CompanyDataset) -> Result<(), RivaleError> {
    let companies = dataset.companies();

    for (i, company) in companies.iter().enumerate() {
        if companies[..i].iter().any(|c| c.id == company.id) {
            return Err(RivaleError::data(format!(
                "duplicate company id {}",
                company.id
            )));
        }
        if contradicts(company.price_change, company.price_change_percent) {
            return Err(RivaleError::data(format!(
                "company {}: price change {} disagrees in sign with percent {}",
                company.id, company.price_change, company.price_change_percent
            )));
        }
    }

    let mut reference_periods: Option<(Vec<&str>, Vec<&str>)> = None;
    for company in companies {
        let Some(data) = dataset.financials(&company.id) else {
            continue;
        };
        if data.company_id != company.id {
            return Err(RivaleError::data(format!(
                "financial record for company {} is keyed to {}",
                company.id, data.company_id
            )));
        }
        for metric in &data.metrics {
            if let (Some(change), Some(is_positive)) = (metric.change, metric.is_positive) {
                if change != 0.0 && is_positive != (change > 0.0) {
                    return Err(RivaleError::data(format!(
                        "company {}: metric '{}' marks change {} as positive={}",
                        company.id, metric.name, change, is_positive
                    )));
                }
            }
        }

        let quarterly: Vec<&str> = data.quarterly.iter().map(|r| r.period.as_str()).collect();
        let balance: Vec<&str> = data.balance_sheet.iter().map(|r| r.period.as_str()).collect();
        match &reference_periods {
            None => reference_periods = Some((quarterly, balance)),
            Some((ref_quarterly, ref_balance)) => {
                if &quarterly != ref_quarterly || &balance != ref_balance {
                    return Err(RivaleError::data(format!(
                        "company {}: period sequence is not aligned with the rest of the dataset",
                        company.id
                    )));
                }
            }
        }
    }

    Ok(())
}

/// True when the two values carry strictly opposite signs.
fn contradicts(change: f64, percent: f64) -> bool {
    (change > 0.0 && percent < 0.0) || (change < 0.0 && percent > 0.0)
}
