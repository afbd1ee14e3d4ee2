use rivale::RivaleError;
use rivale::page::{ComparisonPage, Section};

use crate::helpers::{ALPHABET, APPLE, MICROSOFT, company, id, rivale, stub_rivale};

#[test]
fn unknown_company_is_a_redirect() {
    let err = ComparisonPage::open(rivale(), &id("404")).expect_err("unknown id");
    assert!(matches!(err, RivaleError::NotFound { .. }));
    assert!(err.is_redirect());
}

#[test]
fn open_defaults_to_the_first_competitor() {
    let page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");

    assert_eq!(page.company().ticker, "AAPL");
    assert_eq!(page.selected_competitor(), Some(&id(MICROSOFT)));
    assert_eq!(page.section(), Section::Overview);
    // Microsoft is listed but carries no records, so the default selection
    // starts degraded.
    assert!(page.bundle().is_none());
}

#[test]
fn open_derives_a_bundle_when_the_default_competitor_has_records() {
    // Alphabet's first competitor in table order is Apple, which has records.
    let page = ComparisonPage::open(rivale(), &id(ALPHABET)).expect("page opens");

    assert_eq!(page.selected_competitor(), Some(&id(APPLE)));
    let bundle = page.bundle().expect("bundle available");
    assert_eq!(bundle.company.company_id, id(ALPHABET));
    assert_eq!(bundle.competitor.company_id, id(APPLE));
}

#[test]
fn selecting_a_competitor_recomputes_the_bundle() {
    let mut page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");
    assert!(page.bundle().is_none());

    page.select_competitor(&id(ALPHABET)).expect("valid competitor");
    assert!(page.bundle().is_some());

    page.select_competitor(&id(MICROSOFT)).expect("valid competitor");
    assert!(page.bundle().is_none());
}

#[test]
fn selecting_the_page_company_itself_is_rejected() {
    let mut page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");

    let err = page.select_competitor(&id(APPLE)).expect_err("self-comparison");
    assert!(matches!(err, RivaleError::InvalidArg(_)));
    // The rejected selection left the state untouched.
    assert_eq!(page.selected_competitor(), Some(&id(MICROSOFT)));
}

#[test]
fn switching_sections_never_recomputes_the_bundle() {
    let mut page = ComparisonPage::open(rivale(), &id(ALPHABET)).expect("page opens");
    let before = page.bundle().cloned();

    for section in Section::ALL {
        page.set_section(section);
        assert_eq!(page.section(), section);
        assert_eq!(page.bundle().cloned(), before);
    }
}

#[test]
fn section_labels_are_stable() {
    let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Overview",
            "Financial Ratios",
            "Income Statement",
            "Balance Sheet",
        ]
    );
}

#[test]
fn a_universe_of_one_has_no_default_competitor() {
    let rivale = stub_rivale(vec![company("1", "Lonely Corp")], vec![]);
    let page = ComparisonPage::open(rivale, &id("1")).expect("page opens");

    assert!(page.competitors().is_empty());
    assert!(page.selected_competitor().is_none());
    assert!(page.bundle().is_none());
    // Dependent derivations behave exactly like "no comparison data".
    assert!(page.revenue_series().is_empty());
    assert!(page.income_table().periods.is_empty());
}
