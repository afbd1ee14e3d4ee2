use rivale::page::ComparisonPage;

use crate::helpers::{ALPHABET, APPLE, company, financials, id, income_row, rivale, stub_rivale};

fn apple_vs_alphabet() -> ComparisonPage {
    let mut page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");
    page.select_competitor(&id(ALPHABET)).expect("valid competitor");
    page
}

#[test]
fn revenue_series_runs_oldest_to_newest() {
    let series = apple_vs_alphabet().revenue_series();

    assert_eq!(series.len(), 5);
    assert_eq!(series[0].period, "2022-Q4");
    assert_eq!(series[4].period, "2023-Q4");

    // Oldest points first: Apple's 2022-Q4 revenue against Alphabet's.
    assert_eq!(series[0].company, 116_801.0);
    assert_eq!(series[0].competitor, 76_048.0);
    assert_eq!(series[4].company, 119_685.0);
    assert_eq!(series[4].competitor, 86_310.0);
}

#[test]
fn revenue_series_zero_fills_missing_competitor_rows() {
    let mut mine = financials("1");
    mine.quarterly.push(income_row("2023-Q4", 200.0));
    mine.quarterly.push(income_row("2023-Q3", 150.0));

    let mut theirs = financials("2");
    theirs.quarterly.push(income_row("2023-Q4", 90.0));

    let rivale = stub_rivale(
        vec![company("1", "Mine Corp"), company("2", "Theirs Corp")],
        vec![mine, theirs],
    );
    let page = ComparisonPage::open(rivale, &id("1")).expect("page opens");

    let series = page.revenue_series();
    assert_eq!(series.len(), 2);
    // The competitor has no row aligned with 2023-Q3, so it contributes 0.
    assert_eq!(series[0].period, "2023-Q3");
    assert_eq!(series[0].competitor, 0.0);
    assert_eq!(series[1].competitor, 90.0);
}

#[test]
fn key_metrics_are_the_first_four() {
    let metrics = apple_vs_alphabet().key_metrics();

    let names: Vec<_> = metrics.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Market Cap", "Revenue (TTM)", "EPS (TTM)", "Dividend Yield"]
    );
}

#[test]
fn overview_projections_are_empty_without_a_bundle() {
    let page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");

    assert!(page.revenue_series().is_empty());
    assert!(page.key_metrics().is_empty());
    assert!(page.key_ratios().is_empty());
}
