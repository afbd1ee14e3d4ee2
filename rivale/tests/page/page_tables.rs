use rivale::page::{ComparisonPage, INCOME_FIELDS, ValueFormat};

use crate::helpers::{ALPHABET, APPLE, id, rivale};

fn apple_vs_alphabet() -> ComparisonPage {
    let mut page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");
    page.select_competitor(&id(ALPHABET)).expect("valid competitor");
    page
}

#[test]
fn income_table_shape() {
    let table = apple_vs_alphabet().income_table();

    assert_eq!(table.company_name, "Apple Inc.");
    assert_eq!(table.competitor_name, "Alphabet Inc.");
    assert_eq!(
        table.periods,
        vec!["2023-Q4", "2023-Q3", "2023-Q2", "2023-Q1", "2022-Q4"]
    );
    assert_eq!(table.company_rows.len(), 5);
    assert_eq!(table.competitor_rows.len(), 5);

    let keys: Vec<_> = table.fields.iter().map(|f| f.key).collect();
    assert_eq!(
        keys,
        vec![
            "revenue",
            "net_income",
            "eps",
            "ebitda",
            "operating_cash_flow",
            "free_cash_flow",
        ]
    );
}

#[test]
fn balance_table_shape() {
    let table = apple_vs_alphabet().balance_table();

    let labels: Vec<_> = table.fields.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        vec![
            "Cash & Equivalents",
            "Total Assets",
            "Total Liabilities",
            "Total Equity",
            "Long Term Debt",
        ]
    );
    assert_eq!(table.periods[0], "2023-Q4");
}

#[test]
fn vs_competitor_always_compares_the_most_recent_period() {
    let table = apple_vs_alphabet().income_table();
    let revenue = &table.fields[0];

    let expected = (119_685.0 - 86_310.0) / 86_310.0 * 100.0;
    let got = table.vs_competitor(revenue).expect("both sides have rows");
    assert!((got - expected).abs() < 1e-9);

    // The projection has no notion of an "expanded" row: the comparison is
    // a property of the table, fixed at index 0.
    let eps = table
        .fields
        .iter()
        .find(|f| f.key == "eps")
        .expect("eps field");
    let got = table.vs_competitor(eps).expect("both sides have rows");
    let expected = (2.18 - 1.89) / 1.89 * 100.0;
    assert!((got - expected).abs() < 1e-9);
}

#[test]
fn field_formats_follow_the_section_layout() {
    let table = apple_vs_alphabet().income_table();

    let eps = table.fields.iter().find(|f| f.key == "eps").expect("eps field");
    assert_eq!(eps.format, ValueFormat::PerShare);
    assert_eq!(eps.format.apply((eps.get)(&table.company_rows[0])), "$2.18");

    let revenue = &table.fields[0];
    assert_eq!(revenue.format, ValueFormat::Currency);
    // Statement values are in millions; the abbreviation applies to the raw
    // number as stored.
    assert_eq!(
        revenue.format.apply((revenue.get)(&table.company_rows[0])),
        "$119.69K"
    );
}

#[test]
fn degraded_selection_renders_the_empty_shape() {
    // Apple's default competitor is Microsoft, which has no records.
    let page = ComparisonPage::open(rivale(), &id(APPLE)).expect("page opens");

    let table = page.income_table();
    assert_eq!(table.company_name, "");
    assert_eq!(table.competitor_name, "");
    assert!(table.periods.is_empty());
    assert!(table.company_rows.is_empty());
    assert!(table.fields.is_empty());
    assert!(table.vs_competitor(&INCOME_FIELDS[0]).is_none());

    let balance = page.balance_table();
    assert!(balance.periods.is_empty());
    assert!(balance.fields.is_empty());
}
