use rivale_core::{Company, CompanyId};

pub fn all() -> Vec<Company> {
    vec![
        c(
            "1",
            "Apple Inc.",
            "AAPL",
            "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg",
            "Technology",
            "Consumer Electronics",
            2_850_000_000_000.0,
            185.92,
            1.28,
            0.69,
        ),
        c(
            "2",
            "Microsoft Corporation",
            "MSFT",
            "https://upload.wikimedia.org/wikipedia/commons/4/44/Microsoft_logo.svg",
            "Technology",
            "Software",
            2_830_000_000_000.0,
            420.45,
            2.31,
            0.55,
        ),
        c(
            "3",
            "Alphabet Inc.",
            "GOOGL",
            "https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg",
            "Technology",
            "Internet Services",
            1_740_000_000_000.0,
            138.72,
            -0.68,
            -0.49,
        ),
        c(
            "4",
            "Amazon.com Inc.",
            "AMZN",
            "https://upload.wikimedia.org/wikipedia/commons/a/a9/Amazon_logo.svg",
            "Consumer Cyclical",
            "Internet Retail",
            1_680_000_000_000.0,
            181.43,
            0.98,
            0.54,
        ),
        c(
            "5",
            "Samsung Electronics Co.",
            "SSNLF",
            "https://upload.wikimedia.org/wikipedia/commons/2/24/Samsung_Logo.svg",
            "Technology",
            "Consumer Electronics",
            390_000_000_000.0,
            56.28,
            -0.72,
            -1.26,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn c(
    id: &str,
    name: &str,
    ticker: &str,
    logo: &str,
    sector: &str,
    industry: &str,
    market_cap: f64,
    price: f64,
    price_change: f64,
    price_change_percent: f64,
) -> Company {
    Company {
        id: CompanyId::new(id).unwrap(),
        name: name.to_string(),
        ticker: ticker.to_string(),
        logo: logo.to_string(),
        sector: sector.to_string(),
        industry: industry.to_string(),
        market_cap,
        price,
        price_change,
        price_change_percent,
    }
}
