//! Typed deserialization targets for fundamental-data payloads.
//!
//! The API reports every numeric field as a string, so these models keep
//! string values; cast what you need. They deserialize from a structured
//! [`Payload`] via [`Payload::parse`].
//!
//! [`Payload`]: crate::Payload
//! [`Payload::parse`]: crate::Payload::parse

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Company information, financial ratios, and other key metrics.
///
/// The long tail of overview fields lands in [`extra`](Self::extra).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyOverview {
    /// The equity's ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Business description.
    pub description: Option<String>,
    /// Listing exchange.
    pub exchange: Option<String>,
    /// Reporting currency.
    pub currency: Option<String>,
    /// Country of incorporation.
    pub country: Option<String>,
    /// GICS sector.
    pub sector: Option<String>,
    /// GICS industry.
    pub industry: Option<String>,
    /// Market capitalization, as reported.
    pub market_capitalization: Option<String>,
    /// Trailing price-to-earnings ratio.
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<String>,
    /// Diluted earnings per share.
    #[serde(rename = "EPS")]
    pub eps: Option<String>,
    /// Forward annual dividend yield.
    pub dividend_yield: Option<String>,
    /// 52-week high.
    #[serde(rename = "52WeekHigh")]
    pub week_52_high: Option<String>,
    /// 52-week low.
    #[serde(rename = "52WeekLow")]
    pub week_52_low: Option<String>,
    /// Every overview field not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One report from an income-statement, balance-sheet, or cash-flow series.
///
/// Statement line items vary by report type and evolve upstream, so they are
/// kept as a field map rather than dozens of optional columns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    /// Fiscal period end date.
    pub fiscal_date_ending: NaiveDate,
    /// Currency the statement is reported in.
    pub reported_currency: Option<String>,
    /// The statement's line items.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One annual or quarterly earnings report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsReport {
    /// Fiscal period end date.
    pub fiscal_date_ending: NaiveDate,
    /// Reported earnings per share.
    #[serde(rename = "reportedEPS")]
    pub reported_eps: Option<String>,
    /// Date the report was published. Quarterly series only.
    pub reported_date: Option<NaiveDate>,
    /// Analyst EPS estimate. Quarterly series only.
    #[serde(rename = "estimatedEPS")]
    pub estimated_eps: Option<String>,
    /// Absolute earnings surprise. Quarterly series only.
    pub surprise: Option<String>,
    /// Earnings surprise in percent. Quarterly series only.
    pub surprise_percentage: Option<String>,
}

/// One row of the listing & delisting status feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    /// Ticker symbol.
    pub symbol: String,
    /// Asset name.
    pub name: Option<String>,
    /// Listing exchange.
    pub exchange: Option<String>,
    /// `"Stock"` or `"ETF"`.
    pub asset_type: Option<String>,
    /// Initial listing date.
    pub ipo_date: Option<NaiveDate>,
    /// Delisting date, when delisted.
    pub delisting_date: Option<NaiveDate>,
    /// `"Active"` or `"Delisted"`.
    pub status: Option<String>,
}
