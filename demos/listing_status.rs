//! Query the delisting feed as of a date in history, as raw CSV.
//!
//! Run with: ALPHAVANTAGE_API_KEY=demo cargo run --example listing_status

use alphavantage_rs::{AlphaVantageClient, ClientConfig, ListingState, OutputFormat};
use chrono::NaiveDate;

#[tokio::main]
async fn main() -> alphavantage_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("ALPHAVANTAGE_API_KEY")
        .expect("ALPHAVANTAGE_API_KEY required");

    let config = ClientConfig::default().with_output_format(OutputFormat::Csv);
    let client = AlphaVantageClient::with_config(api_key, config)?;

    let date = NaiveDate::from_ymd_opt(2013, 8, 3);
    let (payload, meta) = client
        .listings()?
        .listing_status(date, Some(ListingState::Delisted))
        .await?;

    println!("HTTP status: {}", meta.status);
    if let Some(csv) = payload.as_csv() {
        for line in csv.lines().take(10) {
            println!("{line}");
        }
    }

    Ok(())
}
