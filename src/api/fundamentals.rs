//! Fundamental data service: company overview, financial statements, and
//! earnings.

use std::sync::Arc;

use crate::client::{CallMeta, ClientInner, Payload};
use crate::endpoint::{Capabilities, EndpointSpec};
use crate::models::OutputFormat;
use crate::Result;

// Endpoint table. Each method below is a lookup into this table plus one
// call into the shared pipeline; all request logic lives there.

const OVERVIEW: EndpointSpec = EndpointSpec {
    function: "OVERVIEW",
    unwrap_key: None,
    params: &["symbol"],
};

const INCOME_STATEMENT_ANNUAL: EndpointSpec = EndpointSpec {
    function: "INCOME_STATEMENT",
    unwrap_key: Some("annualReports"),
    params: &["symbol"],
};

const INCOME_STATEMENT_QUARTERLY: EndpointSpec = EndpointSpec {
    function: "INCOME_STATEMENT",
    unwrap_key: Some("quarterlyReports"),
    params: &["symbol"],
};

const BALANCE_SHEET_ANNUAL: EndpointSpec = EndpointSpec {
    function: "BALANCE_SHEET",
    unwrap_key: Some("annualReports"),
    params: &["symbol"],
};

const BALANCE_SHEET_QUARTERLY: EndpointSpec = EndpointSpec {
    function: "BALANCE_SHEET",
    unwrap_key: Some("quarterlyReports"),
    params: &["symbol"],
};

const CASH_FLOW_ANNUAL: EndpointSpec = EndpointSpec {
    function: "CASH_FLOW",
    unwrap_key: Some("annualReports"),
    params: &["symbol"],
};

const CASH_FLOW_QUARTERLY: EndpointSpec = EndpointSpec {
    function: "CASH_FLOW",
    unwrap_key: Some("quarterlyReports"),
    params: &["symbol"],
};

const EARNINGS_ANNUAL: EndpointSpec = EndpointSpec {
    function: "EARNINGS",
    unwrap_key: Some("annualEarnings"),
    params: &["symbol"],
};

const EARNINGS_QUARTERLY: EndpointSpec = EndpointSpec {
    function: "EARNINGS",
    unwrap_key: Some("quarterlyEarnings"),
    params: &["symbol"],
};

/// Service for fundamental data lookups.
///
/// Data is generally refreshed on the same day a company reports its latest
/// earnings and financials.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: alphavantage_rs::AlphaVantageClient) -> alphavantage_rs::Result<()> {
/// let fundamentals = client.fundamentals()?;
/// let (income, _meta) = fundamentals.income_statement_annual("IBM").await?;
/// println!("{:?}", income.as_json());
/// # Ok(())
/// # }
/// ```
pub struct FundamentalsService {
    inner: Arc<ClientInner>,
}

impl FundamentalsService {
    /// Output formats this service honors. The raw CSV format is excluded:
    /// fundamental-data responses are nested JSON documents.
    pub const CAPABILITIES: Capabilities = Capabilities {
        formats: &[OutputFormat::Json, OutputFormat::Table],
    };

    pub(crate) fn new(inner: Arc<ClientInner>) -> Result<Self> {
        Self::CAPABILITIES.validate(inner.config.output, "fundamentals")?;
        Ok(Self { inner })
    }

    /// Company information, financial ratios, and other key metrics for the
    /// equity specified.
    pub async fn company_overview(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner.invoke(&OVERVIEW, &[Some(symbol)]).await
    }

    /// Annual income statements for the company of interest.
    pub async fn income_statement_annual(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner
            .invoke(&INCOME_STATEMENT_ANNUAL, &[Some(symbol)])
            .await
    }

    /// Quarterly income statements for the company of interest.
    pub async fn income_statement_quarterly(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner
            .invoke(&INCOME_STATEMENT_QUARTERLY, &[Some(symbol)])
            .await
    }

    /// Annual balance sheets for the company of interest.
    pub async fn balance_sheet_annual(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner
            .invoke(&BALANCE_SHEET_ANNUAL, &[Some(symbol)])
            .await
    }

    /// Quarterly balance sheets for the company of interest.
    pub async fn balance_sheet_quarterly(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner
            .invoke(&BALANCE_SHEET_QUARTERLY, &[Some(symbol)])
            .await
    }

    /// Annual cash flow statements for the company of interest.
    pub async fn cash_flow_annual(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner.invoke(&CASH_FLOW_ANNUAL, &[Some(symbol)]).await
    }

    /// Quarterly cash flow statements for the company of interest.
    pub async fn cash_flow_quarterly(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner
            .invoke(&CASH_FLOW_QUARTERLY, &[Some(symbol)])
            .await
    }

    /// Annual earnings history for the company of interest.
    pub async fn earnings_annual(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner.invoke(&EARNINGS_ANNUAL, &[Some(symbol)]).await
    }

    /// Quarterly earnings history, including analyst estimates and surprise
    /// metrics.
    pub async fn earnings_quarterly(&self, symbol: &str) -> Result<(Payload, CallMeta)> {
        self.inner
            .invoke(&EARNINGS_QUARTERLY, &[Some(symbol)])
            .await
    }
}
