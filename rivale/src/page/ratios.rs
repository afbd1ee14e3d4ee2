//! Ratio grouping for the ratios tab and the overview's key-ratio strip.

use rivale_types::{FinancialRatio, RatioCategory};

use super::ComparisonPage;

/// A company ratio joined to the competitor's same-name ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioPair {
    /// The selected company's ratio.
    pub company: FinancialRatio,
    /// The competitor's ratio of the same name.
    pub competitor: FinancialRatio,
    /// Polarity-aware verdict: true when the company's value is favorable
    /// relative to the competitor's per `is_higher_better`.
    pub company_leads: bool,
}

/// A category's headline ratio for the overview strip.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyRatio {
    /// The company's first ratio in the category.
    pub ratio: FinancialRatio,
    /// Polarity-aware verdict against the industry benchmark.
    pub beats_industry: bool,
}

impl ComparisonPage {
    /// The company's ratios of `category`, each joined to the competitor's
    /// ratio of the same name.
    ///
    /// Pairing matches on the exact ratio name. A company ratio with no
    /// competitor counterpart is dropped from the result, so the output is
    /// never longer than the company's ratio list for the category. With no
    /// bundle available the result is empty.
    #[must_use]
    pub fn ratio_pairs(&self, category: RatioCategory) -> Vec<RatioPair> {
        let Some(bundle) = self.bundle() else {
            return Vec::new();
        };
        bundle
            .company
            .ratios
            .iter()
            .filter(|r| r.category == category)
            .filter_map(|company| {
                let Some(competitor) = bundle
                    .competitor
                    .ratios
                    .iter()
                    .find(|r| r.name == company.name)
                else {
                    tracing::debug!(
                        ratio = %company.name,
                        category = %category,
                        "competitor has no matching ratio; dropping pair"
                    );
                    return None;
                };
                Some(RatioPair {
                    company_leads: leads(company, competitor),
                    company: company.clone(),
                    competitor: competitor.clone(),
                })
            })
            .collect()
    }

    /// One headline ratio per category, in the fixed category order.
    ///
    /// For each category the company's first ratio wins; categories without
    /// any ratio are skipped.
    #[must_use]
    pub fn key_ratios(&self) -> Vec<KeyRatio> {
        let Some(bundle) = self.bundle() else {
            return Vec::new();
        };
        RatioCategory::ALL
            .iter()
            .filter_map(|category| {
                bundle
                    .company
                    .ratios
                    .iter()
                    .find(|r| r.category == *category)
            })
            .map(|ratio| KeyRatio {
                beats_industry: beats_benchmark(ratio),
                ratio: ratio.clone(),
            })
            .collect()
    }
}

fn leads(company: &FinancialRatio, competitor: &FinancialRatio) -> bool {
    if company.is_higher_better {
        company.value > competitor.value
    } else {
        company.value < competitor.value
    }
}

fn beats_benchmark(ratio: &FinancialRatio) -> bool {
    if ratio.is_higher_better {
        ratio.value > ratio.industry_avg
    } else {
        ratio.value < ratio.industry_avg
    }
}
