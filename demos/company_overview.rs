//! Fetch the company overview and annual income statements for IBM.
//!
//! Run with: ALPHAVANTAGE_API_KEY=demo cargo run --example company_overview

use alphavantage_rs::models::{CompanyOverview, FinancialReport};
use alphavantage_rs::AlphaVantageClient;

#[tokio::main]
async fn main() -> alphavantage_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = AlphaVantageClient::from_env()?;
    let fundamentals = client.fundamentals()?;

    println!("=== IBM Company Overview ===");
    let (payload, meta) = fundamentals.company_overview("IBM").await?;
    println!("HTTP status:  {}", meta.status);

    let overview: CompanyOverview = payload.parse()?;
    println!("Name:         {}", overview.name);
    println!("Exchange:     {:?}", overview.exchange);
    println!("Sector:       {:?}", overview.sector);
    println!("Industry:     {:?}", overview.industry);
    println!("Market Cap:   {:?}", overview.market_capitalization);
    println!("P/E Ratio:    {:?}", overview.pe_ratio);
    println!("EPS:          {:?}", overview.eps);
    println!("52w High:     {:?}", overview.week_52_high);
    println!("52w Low:      {:?}", overview.week_52_low);
    println!();

    println!("=== IBM Annual Income Statements ===");
    let (payload, _meta) = fundamentals.income_statement_annual("IBM").await?;
    let reports: Vec<FinancialReport> = payload.parse()?;
    for report in reports.iter().take(5) {
        println!(
            "{}: revenue {:?}",
            report.fiscal_date_ending,
            report.fields.get("totalRevenue")
        );
    }

    Ok(())
}
