//! Listing & delisting status service.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::client::{CallMeta, ClientInner, Payload};
use crate::endpoint::{Capabilities, EndpointSpec};
use crate::models::{ListingState, OutputFormat};
use crate::Result;

const LISTING_STATUS: EndpointSpec = EndpointSpec {
    function: "LISTING_STATUS",
    unwrap_key: None,
    params: &["date", "state"],
};

/// Service for querying US stock and ETF listing status.
///
/// # Example
///
/// ```no_run
/// use alphavantage_rs::models::ListingState;
/// use chrono::NaiveDate;
///
/// # async fn example(client: alphavantage_rs::AlphaVantageClient) -> alphavantage_rs::Result<()> {
/// let listings = client.listings()?;
/// let date = NaiveDate::from_ymd_opt(2013, 8, 3);
/// let (payload, _meta) = listings.listing_status(date, Some(ListingState::Delisted)).await?;
/// # Ok(())
/// # }
/// ```
pub struct ListingsService {
    inner: Arc<ClientInner>,
}

impl ListingsService {
    /// Output formats this service honors. The listing feed is flat, so all
    /// three representations are supported.
    pub const CAPABILITIES: Capabilities = Capabilities {
        formats: &[OutputFormat::Json, OutputFormat::Table, OutputFormat::Csv],
    };

    pub(crate) fn new(inner: Arc<ClientInner>) -> Result<Self> {
        Self::CAPABILITIES.validate(inner.config.output, "listings")?;
        Ok(Self { inner })
    }

    /// List active or delisted US stocks and ETFs.
    ///
    /// With no `date`, the feed reflects the latest trading day; with a
    /// `date`, it reflects that day in history (any date after 2010-01-01).
    /// With no `state`, the API defaults to actively traded assets. Omitted
    /// options are omitted from the outbound query entirely.
    pub async fn listing_status(
        &self,
        date: Option<NaiveDate>,
        state: Option<ListingState>,
    ) -> Result<(Payload, CallMeta)> {
        let date = date.map(|date| date.format("%Y-%m-%d").to_string());
        self.inner
            .invoke(
                &LISTING_STATUS,
                &[date.as_deref(), state.map(|state| state.as_str())],
            )
            .await
    }
}
