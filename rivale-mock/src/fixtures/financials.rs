use rivale_core::{
    BalanceRow, CompanyId, FinancialData, FinancialMetric, FinancialRatio, IncomeRow,
    RatioCategory,
};
use rivale_core::RatioCategory::{Efficiency, Growth, Profitability, Risk, Valuation};

/// Financial records exist only for Apple, Alphabet, and Samsung; Microsoft
/// and Amazon are listed without records to keep the sparse paths honest.
pub fn all() -> Vec<FinancialData> {
    vec![apple(), alphabet(), samsung()]
}

fn apple() -> FinancialData {
    FinancialData {
        company_id: CompanyId::new("1").unwrap(),
        quarterly: vec![
            q("2023-Q4", 119_685.0, 33_915.0, 2.18, 46_289.0, 31_947.0, 29_043.0),
            q("2023-Q3", 95_465.0, 26_313.0, 1.67, 41_423.0, 28_765.0, 26_082.0),
            q("2023-Q2", 94_836.0, 24_923.0, 1.58, 39_556.0, 28_566.0, 25_763.0),
            q("2023-Q1", 117_154.0, 29_998.0, 1.89, 45_037.0, 34_014.0, 30_165.0),
            q("2022-Q4", 116_801.0, 29_999.0, 1.88, 44_886.0, 30_395.0, 25_358.0),
        ],
        balance_sheet: vec![
            b("2023-Q4", 33_828.0, 352_583.0, 287_414.0, 65_169.0, 95_281.0),
            b("2023-Q3", 34_355.0, 335_033.0, 262_553.0, 72_480.0, 96_826.0),
            b("2023-Q2", 28_408.0, 336_255.0, 264_847.0, 71_408.0, 98_959.0),
            b("2023-Q1", 33_828.0, 335_998.0, 262_429.0, 73_569.0, 99_632.0),
            b("2022-Q4", 23_646.0, 352_755.0, 302_083.0, 50_672.0, 98_959.0),
        ],
        ratios: vec![
            ratio("P/E Ratio", Valuation, 28.3, 25.2, "Price to Earnings ratio", false),
            ratio("P/S Ratio", Valuation, 7.1, 5.3, "Price to Sales ratio", false),
            ratio("P/B Ratio", Valuation, 35.4, 8.7, "Price to Book ratio", false),
            ratio("ROE", Profitability, 143.8, 31.2, "Return on Equity", true),
            ratio("Net Margin", Profitability, 25.3, 17.8, "Net Profit Margin", true),
            ratio("Gross Margin", Profitability, 44.3, 41.2, "Gross Profit Margin", true),
            ratio("Revenue Growth", Growth, 2.1, 9.8, "Year-over-Year Revenue Growth", true),
            ratio("EPS Growth", Growth, 3.8, 8.9, "Year-over-Year EPS Growth", true),
            ratio("D/E Ratio", Risk, 1.7, 0.8, "Debt to Equity Ratio", false),
            ratio("Current Ratio", Risk, 0.94, 1.5, "Current Assets / Current Liabilities", true),
            ratio("Asset Turnover", Efficiency, 0.8, 0.9, "Revenue / Average Total Assets", true),
            ratio("Inventory Turnover", Efficiency, 38.7, 10.3, "COGS / Average Inventory", true),
        ],
        metrics: vec![
            snapshot_metric(
                "Market Cap",
                2_850_000_000_000.0,
                "Total market value of a company's outstanding shares of stock",
            ),
            delta_metric(
                "Revenue (TTM)",
                383_000_000_000.0,
                370_000_000_000.0,
                13_000_000_000.0,
                3.5,
                "Trailing Twelve Months Revenue",
            ),
            delta_metric(
                "EPS (TTM)",
                6.14,
                5.89,
                0.25,
                4.2,
                "Trailing Twelve Months Earnings Per Share",
            ),
            delta_metric(
                "Dividend Yield",
                0.55,
                0.62,
                -0.07,
                -11.3,
                "Annual dividend per share / price per share",
            ),
            delta_metric(
                "Free Cash Flow (TTM)",
                99_000_000_000.0,
                90_000_000_000.0,
                9_000_000_000.0,
                10.0,
                "Operating Cash Flow - Capital Expenditures",
            ),
        ],
    }
}

fn alphabet() -> FinancialData {
    FinancialData {
        company_id: CompanyId::new("3").unwrap(),
        quarterly: vec![
            q("2023-Q4", 86_310.0, 23_664.0, 1.89, 32_975.0, 28_665.0, 20_238.0),
            q("2023-Q3", 76_693.0, 19_690.0, 1.55, 29_105.0, 24_179.0, 17_536.0),
            q("2023-Q2", 74_604.0, 18_367.0, 1.44, 29_272.0, 28_466.0, 21_829.0),
            q("2023-Q1", 69_787.0, 15_051.0, 1.17, 21_091.0, 23_503.0, 17_207.0),
            q("2022-Q4", 76_048.0, 13_624.0, 1.05, 20_871.0, 23_649.0, 16_007.0),
        ],
        balance_sheet: vec![
            b("2023-Q4", 110_914.0, 393_630.0, 119_961.0, 273_669.0, 13_241.0),
            b("2023-Q3", 99_856.0, 379_541.0, 118_598.0, 260_943.0, 14_683.0),
            b("2023-Q2", 118_298.0, 376_514.0, 128_936.0, 247_578.0, 14_724.0),
            b("2023-Q1", 108_947.0, 356_979.0, 120_623.0, 236_356.0, 14_698.0),
            b("2022-Q4", 89_015.0, 335_731.0, 107_389.0, 228_342.0, 14_701.0),
        ],
        ratios: vec![
            ratio("P/E Ratio", Valuation, 24.7, 25.2, "Price to Earnings ratio", false),
            ratio("P/S Ratio", Valuation, 5.6, 5.3, "Price to Sales ratio", false),
            ratio("P/B Ratio", Valuation, 6.3, 8.7, "Price to Book ratio", false),
            ratio("ROE", Profitability, 25.6, 31.2, "Return on Equity", true),
            ratio("Net Margin", Profitability, 23.8, 17.8, "Net Profit Margin", true),
            ratio("Gross Margin", Profitability, 55.6, 41.2, "Gross Profit Margin", true),
            ratio("Revenue Growth", Growth, 13.5, 9.8, "Year-over-Year Revenue Growth", true),
            ratio("EPS Growth", Growth, 73.6, 8.9, "Year-over-Year EPS Growth", true),
            ratio("D/E Ratio", Risk, 0.05, 0.8, "Debt to Equity Ratio", false),
            ratio("Current Ratio", Risk, 2.10, 1.5, "Current Assets / Current Liabilities", true),
            ratio("Asset Turnover", Efficiency, 0.82, 0.9, "Revenue / Average Total Assets", true),
            ratio("Inventory Turnover", Efficiency, 12.7, 10.3, "COGS / Average Inventory", true),
        ],
        metrics: vec![
            snapshot_metric(
                "Market Cap",
                1_740_000_000_000.0,
                "Total market value of a company's outstanding shares of stock",
            ),
            delta_metric(
                "Revenue (TTM)",
                307_394_000_000.0,
                282_836_000_000.0,
                24_558_000_000.0,
                8.7,
                "Trailing Twelve Months Revenue",
            ),
            delta_metric(
                "EPS (TTM)",
                6.05,
                4.56,
                1.49,
                32.7,
                "Trailing Twelve Months Earnings Per Share",
            ),
            delta_metric(
                "Dividend Yield",
                0.0,
                0.0,
                0.0,
                0.0,
                "Annual dividend per share / price per share",
            ),
            delta_metric(
                "Free Cash Flow (TTM)",
                76_810_000_000.0,
                65_000_000_000.0,
                11_810_000_000.0,
                18.2,
                "Operating Cash Flow - Capital Expenditures",
            ),
        ],
    }
}

fn samsung() -> FinancialData {
    FinancialData {
        company_id: CompanyId::new("5").unwrap(),
        quarterly: vec![
            q("2023-Q4", 67_780.0, 5_310.0, 0.78, 10_540.0, 15_640.0, 5_430.0),
            q("2023-Q3", 70_980.0, 9_390.0, 1.37, 14_760.0, 16_890.0, 7_820.0),
            q("2023-Q2", 59_200.0, 4_330.0, 0.63, 8_120.0, 13_260.0, 3_450.0),
            q("2023-Q1", 63_750.0, 4_450.0, 0.65, 9_860.0, 10_120.0, 2_380.0),
            q("2022-Q4", 70_460.0, 9_530.0, 1.39, 14_890.0, 19_420.0, 9_750.0),
        ],
        balance_sheet: vec![
            b("2023-Q4", 25_670.0, 340_520.0, 97_460.0, 243_060.0, 17_890.0),
            b("2023-Q3", 24_120.0, 337_980.0, 98_750.0, 239_230.0, 16_950.0),
            b("2023-Q2", 26_540.0, 332_650.0, 95_670.0, 236_980.0, 17_230.0),
            b("2023-Q1", 23_870.0, 331_290.0, 96_540.0, 234_750.0, 18_450.0),
            b("2022-Q4", 28_430.0, 328_760.0, 96_370.0, 232_390.0, 17_670.0),
        ],
        ratios: vec![
            ratio("P/E Ratio", Valuation, 19.1, 25.2, "Price to Earnings ratio", false),
            ratio("P/S Ratio", Valuation, 1.5, 5.3, "Price to Sales ratio", false),
            ratio("P/B Ratio", Valuation, 1.6, 8.7, "Price to Book ratio", false),
            ratio("ROE", Profitability, 9.7, 31.2, "Return on Equity", true),
            ratio("Net Margin", Profitability, 9.1, 17.8, "Net Profit Margin", true),
            ratio("Gross Margin", Profitability, 30.7, 41.2, "Gross Profit Margin", true),
            ratio("Revenue Growth", Growth, -3.8, 9.8, "Year-over-Year Revenue Growth", true),
            ratio("EPS Growth", Growth, -43.9, 8.9, "Year-over-Year EPS Growth", true),
            ratio("D/E Ratio", Risk, 0.07, 0.8, "Debt to Equity Ratio", false),
            ratio("Current Ratio", Risk, 2.62, 1.5, "Current Assets / Current Liabilities", true),
            ratio("Asset Turnover", Efficiency, 0.77, 0.9, "Revenue / Average Total Assets", true),
            ratio("Inventory Turnover", Efficiency, 5.8, 10.3, "COGS / Average Inventory", true),
        ],
        metrics: vec![
            snapshot_metric(
                "Market Cap",
                390_000_000_000.0,
                "Total market value of a company's outstanding shares of stock",
            ),
            delta_metric(
                "Revenue (TTM)",
                261_710_000_000.0,
                272_390_000_000.0,
                -10_680_000_000.0,
                -3.9,
                "Trailing Twelve Months Revenue",
            ),
            delta_metric(
                "EPS (TTM)",
                3.43,
                6.11,
                -2.68,
                -43.9,
                "Trailing Twelve Months Earnings Per Share",
            ),
            delta_metric(
                "Dividend Yield",
                2.08,
                1.95,
                0.13,
                6.7,
                "Annual dividend per share / price per share",
            ),
            delta_metric(
                "Free Cash Flow (TTM)",
                19_080_000_000.0,
                38_970_000_000.0,
                -19_890_000_000.0,
                -51.0,
                "Operating Cash Flow - Capital Expenditures",
            ),
        ],
    }
}

fn q(
    period: &str,
    revenue: f64,
    net_income: f64,
    eps: f64,
    ebitda: f64,
    operating_cash_flow: f64,
    free_cash_flow: f64,
) -> IncomeRow {
    IncomeRow {
        period: period.to_string(),
        revenue,
        net_income,
        eps,
        ebitda,
        operating_cash_flow,
        free_cash_flow,
    }
}

fn b(
    period: &str,
    cash_and_equivalents: f64,
    total_assets: f64,
    total_liabilities: f64,
    total_equity: f64,
    long_term_debt: f64,
) -> BalanceRow {
    BalanceRow {
        period: period.to_string(),
        cash_and_equivalents,
        total_assets,
        total_liabilities,
        total_equity,
        long_term_debt,
    }
}

fn ratio(
    name: &str,
    category: RatioCategory,
    value: f64,
    industry_avg: f64,
    description: &str,
    is_higher_better: bool,
) -> FinancialRatio {
    FinancialRatio {
        name: name.to_string(),
        category,
        value,
        industry_avg,
        description: description.to_string(),
        is_higher_better,
    }
}

fn snapshot_metric(name: &str, value: f64, description: &str) -> FinancialMetric {
    FinancialMetric {
        name: name.to_string(),
        value,
        previous_value: None,
        change: None,
        change_percent: None,
        is_positive: None,
        description: Some(description.to_string()),
    }
}

fn delta_metric(
    name: &str,
    value: f64,
    previous_value: f64,
    change: f64,
    change_percent: f64,
    description: &str,
) -> FinancialMetric {
    FinancialMetric {
        name: name.to_string(),
        value,
        previous_value: Some(previous_value),
        change: Some(change),
        change_percent: Some(change_percent),
        is_positive: Some(change > 0.0),
        description: Some(description.to_string()),
    }
}
