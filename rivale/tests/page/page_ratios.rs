use rivale::RatioCategory;
use rivale::page::ComparisonPage;

use crate::helpers::{ALPHABET, APPLE, company, financials, id, ratio, rivale, stub_rivale};

fn apple_vs_alphabet() -> ComparisonPage {
    let mut page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");
    page.select_competitor(&id(ALPHABET)).expect("valid competitor");
    page
}

#[test]
fn risk_pairs_carry_only_risk_ratios_joined_by_name() {
    let page = apple_vs_alphabet();
    let pairs = page.ratio_pairs(RatioCategory::Risk);

    let names: Vec<_> = pairs.iter().map(|p| p.company.name.as_str()).collect();
    assert_eq!(names, vec!["D/E Ratio", "Current Ratio"]);
    for pair in &pairs {
        assert_eq!(pair.company.category, RatioCategory::Risk);
        assert_eq!(pair.competitor.category, RatioCategory::Risk);
        assert_eq!(pair.company.name, pair.competitor.name);
    }
}

#[test]
fn company_leads_honors_ratio_polarity() {
    let page = apple_vs_alphabet();
    let pairs = page.ratio_pairs(RatioCategory::Risk);

    // D/E: lower is better, Apple 1.7 vs Alphabet 0.05 — Alphabet leads.
    assert!(!pairs[0].company_leads);
    // Current Ratio: higher is better, Apple 0.94 vs Alphabet 2.10.
    assert!(!pairs[1].company_leads);

    let valuation = page.ratio_pairs(RatioCategory::Valuation);
    // P/E: lower is better, Apple 28.3 vs Alphabet 24.7 — Alphabet leads.
    assert!(!valuation[0].company_leads);

    let growth = page.ratio_pairs(RatioCategory::Growth);
    // Revenue Growth: higher is better, Apple 2.1 vs Alphabet 13.5.
    assert!(!growth[0].company_leads);
}

#[test]
fn pairs_are_empty_without_a_bundle() {
    // The default competitor for Apple is Microsoft, which has no records.
    let page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");

    for category in RatioCategory::ALL {
        assert!(page.ratio_pairs(category).is_empty());
    }
}

#[test]
fn unmatched_ratio_names_are_dropped_silently() {
    let mut mine = financials("1");
    mine.ratios.push(ratio("P/E Ratio", RatioCategory::Valuation, 20.0, false));
    mine.ratios.push(ratio("Quick Ratio", RatioCategory::Risk, 1.2, true));

    let mut theirs = financials("2");
    theirs.ratios.push(ratio("P/E Ratio", RatioCategory::Valuation, 25.0, false));

    let rivale = stub_rivale(
        vec![company("1", "Mine Corp"), company("2", "Theirs Corp")],
        vec![mine, theirs],
    );
    let page = ComparisonPage::open(rivale, &id("1")).expect("page opens");

    // The competitor has no "Quick Ratio", so the Risk group ends up empty
    // rather than erroring.
    assert!(page.ratio_pairs(RatioCategory::Risk).is_empty());

    let valuation = page.ratio_pairs(RatioCategory::Valuation);
    assert_eq!(valuation.len(), 1);
    assert!(valuation[0].company_leads);
}

#[test]
fn key_ratios_pick_one_headline_per_category_in_order() {
    let page = apple_vs_alphabet();
    let key = page.key_ratios();

    let names: Vec<_> = key.iter().map(|k| k.ratio.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "P/E Ratio",
            "ROE",
            "Revenue Growth",
            "D/E Ratio",
            "Asset Turnover",
        ]
    );

    // P/E 28.3 against a 25.2 industry average with lower-is-better polarity.
    assert!(!key[0].beats_industry);
    // ROE 143.8 against 31.2, higher is better.
    assert!(key[1].beats_industry);
}

#[test]
fn key_ratios_skip_categories_without_ratios() {
    let mut mine = financials("1");
    mine.ratios.push(ratio("Asset Turnover", RatioCategory::Efficiency, 0.8, true));
    let mut theirs = financials("2");
    theirs.ratios.push(ratio("Asset Turnover", RatioCategory::Efficiency, 0.9, true));

    let rivale = stub_rivale(
        vec![company("1", "Mine Corp"), company("2", "Theirs Corp")],
        vec![mine, theirs],
    );
    let page = ComparisonPage::open(rivale, &id("1")).expect("page opens");

    let key = page.key_ratios();
    assert_eq!(key.len(), 1);
    assert_eq!(key[0].ratio.category, RatioCategory::Efficiency);
}
