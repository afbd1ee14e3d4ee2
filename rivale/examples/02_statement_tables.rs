use std::sync::Arc;

use rivale::Rivale;
use rivale::page::{ComparisonPage, Section};
use rivale_core::CompanyId;
use rivale_core::format::format_signed_percent;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Facade over the mock dataset, page for Samsung vs Apple.
    let rivale = Arc::new(
        Rivale::builder()
            .with_dataset(Arc::new(rivale_mock::MockDataset::new()))
            .build()?,
    );
    let mut page = ComparisonPage::open(rivale, &CompanyId::new("5")?)?;
    page.select_competitor(&CompanyId::new("1")?)?;
    page.set_section(Section::IncomeStatement);

    // 2. Render the income-statement table as plain text.
    let table = page.income_table();
    println!("{} vs {}", table.company_name, table.competitor_name);
    println!("periods: {}", table.periods.join(", "));
    for field in &table.fields {
        let latest = field.format.apply((field.get)(&table.company_rows[0]));
        let vs = table
            .vs_competitor(field)
            .map_or_else(String::new, |diff| format_signed_percent(diff, 1));
        println!("  {:<20} {:>12}  vs. competitor {:>8}", field.label, latest, vs);
    }

    // 3. Same projection for the balance sheet.
    page.set_section(Section::BalanceSheet);
    let table = page.balance_table();
    println!("\nBalance sheet, latest period:");
    for field in &table.fields {
        let latest = field.format.apply((field.get)(&table.company_rows[0]));
        println!("  {:<20} {:>12}", field.label, latest);
    }

    Ok(())
}
