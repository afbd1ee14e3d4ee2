use std::sync::Arc;

use rivale::Rivale;
use rivale::page::ComparisonPage;
use rivale::search::SearchOverlay;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. The entry surface: a search overlay over the company universe.
    let rivale = Arc::new(
        Rivale::builder()
            .with_dataset(Arc::new(rivale_mock::MockDataset::new()))
            .build()?,
    );
    let mut overlay = SearchOverlay::new();
    overlay.focus();

    // 2. Type a query and show the matches.
    overlay.set_query("a");
    println!("matches for {:?}:", overlay.query());
    for company in overlay.results(&rivale) {
        println!("  {} ({})", company.name, company.ticker);
    }

    // 3. Choosing a result closes the overlay and navigates to the page.
    let results = overlay.results(&rivale);
    let first = results.first().expect("at least one match");
    let chosen = overlay.choose(&first.id);
    println!("\nnavigating to comparison for company {chosen}");

    let page = ComparisonPage::open(rivale, &chosen)?;
    println!(
        "{} vs {:?} — section {}",
        page.company().name,
        page.selected_competitor(),
        page.section().label(),
    );

    Ok(())
}
