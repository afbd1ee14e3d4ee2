use rivale::RivaleError;

use crate::helpers::{ALPHABET, APPLE, MICROSOFT, SAMSUNG, id, rivale};

#[test]
fn competitors_exclude_the_argument_and_preserve_order() {
    let rivale = rivale();
    let competitors = rivale.competitors(&id(APPLE));

    let tickers: Vec<_> = competitors.iter().map(|c| c.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["MSFT", "GOOGL", "AMZN", "SSNLF"]);
    assert!(competitors.iter().all(|c| c.id != id(APPLE)));
}

#[test]
fn competitors_for_an_unknown_id_yield_the_full_table() {
    let rivale = rivale();
    // Exclusion semantics, not a lookup: nothing matches, nothing is removed.
    assert_eq!(rivale.competitors(&id("404")).len(), 5);
}

#[test]
fn company_lookup_misses_are_not_found() {
    let rivale = rivale();

    let company = rivale.company(&id(SAMSUNG)).expect("samsung resolves");
    assert_eq!(company.name, "Samsung Electronics Co.");

    let err = rivale.company(&id("404")).expect_err("unknown id");
    assert!(matches!(err, RivaleError::NotFound { .. }));
}

#[test]
fn comparison_requires_records_on_both_sides() {
    let rivale = rivale();

    // Microsoft is a valid company id without financial records.
    assert!(rivale.comparison(&id(APPLE), &id(MICROSOFT)).is_none());
    assert!(rivale.comparison(&id(MICROSOFT), &id(ALPHABET)).is_none());
    assert!(rivale.comparison(&id("404"), &id(APPLE)).is_none());

    let bundle = rivale
        .comparison(&id(APPLE), &id(ALPHABET))
        .expect("both sides have records");
    assert_eq!(bundle.company.company_id, id(APPLE));
    assert_eq!(bundle.competitor.company_id, id(ALPHABET));
}
