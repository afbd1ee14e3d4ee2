use std::sync::Arc;

use rivale::Rivale;
use rivale::page::ComparisonPage;
use rivale_core::CompanyId;
use rivale_core::format::{format_currency, format_percent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build the facade around the deterministic mock dataset.
    let rivale = Arc::new(
        Rivale::builder()
            .with_dataset(Arc::new(rivale_mock::MockDataset::new()))
            .build()?,
    );

    // 2. Open the comparison page for Apple.
    let apple = CompanyId::new("1")?;
    let mut page = ComparisonPage::open(rivale, &apple)?;

    let company = page.company();
    println!(
        "{} ({}) — {} / {}",
        company.name, company.ticker, company.sector, company.industry
    );
    println!(
        "  price ${:.2} ({}), market cap {}",
        company.price,
        format_percent(company.price_change_percent),
        format_currency(company.market_cap),
    );

    // 3. List the competitor universe and pick one with records.
    println!("\nCompetitors:");
    for competitor in page.competitors() {
        println!("  [{}] {} ({})", competitor.id, competitor.name, competitor.ticker);
    }
    page.select_competitor(&CompanyId::new("3")?)?;

    // 4. Overview projections: key metrics and the revenue trend.
    println!("\nKey metrics:");
    for metric in page.key_metrics() {
        println!("  {} = {}", metric.name, format_currency(metric.value));
    }

    println!("\nQuarterly revenue (oldest first):");
    for point in page.revenue_series() {
        println!(
            "  {}: {} vs {}",
            point.period,
            format_currency(point.company),
            format_currency(point.competitor),
        );
    }

    Ok(())
}
