//! Integration tests for alphavantage-rs.
//!
//! Each test serves one canned HTTP response from a loopback listener and
//! points the client's base URL at it, so the full pipeline — query
//! assembly, transport, classification, unwrap, and output conversion — is
//! exercised without touching the real API. The listener hands back the
//! request head it received for assertions on the outbound query.

use std::sync::Once;

use chrono::NaiveDate;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use alphavantage_rs::models::{CompanyOverview, EarningsReport, FinancialReport};
use alphavantage_rs::{
    AlphaVantageClient, ClientConfig, Error, ListingState, OutputFormat,
};

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Serve exactly one canned HTTP/1.1 response, returning the base URL to
/// point the client at and a handle resolving to the received request head.
async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: String,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            head.extend_from_slice(&buf[..n]);
            if n == 0 || head.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{addr}/query"), handle)
}

fn client_with(base_url: &str, output: OutputFormat) -> AlphaVantageClient {
    init_logging();
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_output_format(output);
    AlphaVantageClient::with_config("demo", config).expect("client should build")
}

mod fundamentals_tests {
    use super::*;

    #[tokio::test]
    async fn test_company_overview_passthrough() {
        let body = json!({
            "Symbol": "IBM",
            "Name": "International Business Machines",
            "Sector": "TECHNOLOGY",
        });
        let (base_url, server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let (payload, meta) = client
            .fundamentals()
            .unwrap()
            .company_overview("IBM")
            .await
            .unwrap();

        assert_eq!(payload.as_json(), Some(&body));
        assert!(meta.status.is_success());

        let request = server.await.unwrap();
        assert!(request.contains("function=OVERVIEW"));
        assert!(request.contains("symbol=IBM"));
        assert!(request.contains("apikey=demo"));
        assert!(request.contains("datatype=json"));
    }

    #[tokio::test]
    async fn test_annual_reports_unwrap_discards_siblings() {
        let body = json!({
            "symbol": "IBM",
            "annualReports": [{"fiscalDateEnding": "2023-12-31"}],
            "quarterlyReports": [{"fiscalDateEnding": "2024-03-31"}],
        });
        let (base_url, server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let (payload, _meta) = client
            .fundamentals()
            .unwrap()
            .income_statement_annual("IBM")
            .await
            .unwrap();

        assert_eq!(
            payload.into_json(),
            Some(json!([{"fiscalDateEnding": "2023-12-31"}]))
        );

        let request = server.await.unwrap();
        assert!(request.contains("function=INCOME_STATEMENT"));
    }

    #[tokio::test]
    async fn test_quarterly_unwrap() {
        let body = json!({
            "symbol": "IBM",
            "annualReports": [{"fiscalDateEnding": "2023-12-31"}],
            "quarterlyReports": [{"fiscalDateEnding": "2024-03-31"}],
        });
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let (payload, _meta) = client
            .fundamentals()
            .unwrap()
            .balance_sheet_quarterly("IBM")
            .await
            .unwrap();

        assert_eq!(
            payload.into_json(),
            Some(json!([{"fiscalDateEnding": "2024-03-31"}]))
        );
    }

    #[tokio::test]
    async fn test_typed_parsing() {
        let body = json!({
            "Symbol": "IBM",
            "Name": "International Business Machines",
            "PERatio": "22.61",
        });
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let (payload, _meta) = client
            .fundamentals()
            .unwrap()
            .company_overview("IBM")
            .await
            .unwrap();

        let overview: CompanyOverview = payload.parse().unwrap();
        assert_eq!(overview.name, "International Business Machines");
        assert_eq!(overview.pe_ratio.as_deref(), Some("22.61"));
    }

    #[tokio::test]
    async fn test_typed_report_series() {
        let body = json!({
            "symbol": "IBM",
            "quarterlyEarnings": [{
                "fiscalDateEnding": "2024-03-31",
                "reportedEPS": "1.68",
                "estimatedEPS": "1.59",
            }],
        });
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let (payload, _meta) = client
            .fundamentals()
            .unwrap()
            .earnings_quarterly("IBM")
            .await
            .unwrap();

        let reports: Vec<EarningsReport> = payload.parse().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].reported_eps.as_deref(), Some("1.68"));
    }

    #[tokio::test]
    async fn test_table_output() {
        let body = json!({
            "symbol": "IBM",
            "annualReports": [
                {"fiscalDateEnding": "2023-12-31", "totalRevenue": "61860000000"},
                {"fiscalDateEnding": "2022-12-31", "totalRevenue": "60530000000"},
            ],
        });
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Table);

        let (payload, _meta) = client
            .fundamentals()
            .unwrap()
            .cash_flow_annual("IBM")
            .await
            .unwrap();

        let frame = payload.as_table().expect("table output");
        assert_eq!(frame.shape(), (2, 2));
        assert!(frame.column("fiscalDateEnding").is_ok());
        assert!(frame.column("totalRevenue").is_ok());
    }
}

mod classification_tests {
    use super::*;

    #[tokio::test]
    async fn test_api_error_surfaces_message() {
        let body = json!({
            "Error Message": "Invalid API call. Please retry or visit the documentation.",
        });
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let result = client
            .fundamentals()
            .unwrap()
            .company_overview("NOTASYMBOL")
            .await;

        match result {
            Err(Error::Api { message }) => assert!(message.starts_with("Invalid API call.")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_note_is_an_api_error() {
        let body = json!({
            "Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day.",
        });
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let result = client.fundamentals().unwrap().earnings_annual("IBM").await;
        assert!(matches!(result, Err(Error::Api { .. })));
    }

    #[tokio::test]
    async fn test_empty_payload() {
        let (base_url, _server) = serve_once("200 OK", "application/json", "{}".to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let result = client
            .fundamentals()
            .unwrap()
            .income_statement_quarterly("IBM")
            .await;
        assert!(matches!(result, Err(Error::EmptyResult)));
    }

    #[tokio::test]
    async fn test_http_failure_is_a_transport_error() {
        let (base_url, _server) = serve_once(
            "500 Internal Server Error",
            "text/plain",
            "upstream failure".to_string(),
        )
        .await;
        let client = client_with(&base_url, OutputFormat::Json);

        let result = client.fundamentals().unwrap().company_overview("IBM").await;
        match result {
            Err(err) => assert!(err.is_transient(), "expected transport error, got {err:?}"),
            Ok(_) => panic!("expected transport error"),
        }
    }

    #[tokio::test]
    async fn test_incompatible_format_fails_before_any_call() {
        // No server at all: the capability check must fire first.
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:1/query")
            .with_output_format(OutputFormat::Csv);
        let client = AlphaVantageClient::with_config("demo", config).unwrap();

        match client.fundamentals() {
            Err(err) => assert!(err.is_config_error()),
            Ok(_) => panic!("csv output must be rejected by the fundamentals service"),
        }
    }
}

mod listings_tests {
    use super::*;

    #[tokio::test]
    async fn test_csv_passthrough() {
        let body = "symbol,name,exchange,assetType,ipoDate,delistingDate,status\r\n\
                    A,Agilent Technologies Inc,NYSE,Stock,1999-11-18,null,Active\r\n"
            .to_string();
        let (base_url, server) = serve_once("200 OK", "text/csv", body.clone()).await;
        let client = client_with(&base_url, OutputFormat::Csv);

        let (payload, _meta) = client
            .listings()
            .unwrap()
            .listing_status(None, None)
            .await
            .unwrap();

        assert_eq!(payload.as_csv(), Some(body.as_str()));

        let request = server.await.unwrap();
        assert!(request.contains("function=LISTING_STATUS"));
        assert!(request.contains("datatype=csv"));
    }

    #[tokio::test]
    async fn test_date_and_state_are_forwarded() {
        let (base_url, server) = serve_once("200 OK", "text/csv", "symbol\r\n".to_string()).await;
        let client = client_with(&base_url, OutputFormat::Csv);

        let date = NaiveDate::from_ymd_opt(2013, 8, 3).unwrap();
        client
            .listings()
            .unwrap()
            .listing_status(Some(date), Some(ListingState::Delisted))
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.contains("date=2013-08-03"));
        assert!(request.contains("state=delisted"));
    }

    #[tokio::test]
    async fn test_omitted_options_are_omitted_from_the_query() {
        let (base_url, server) = serve_once("200 OK", "text/csv", "symbol\r\n".to_string()).await;
        let client = client_with(&base_url, OutputFormat::Csv);

        client
            .listings()
            .unwrap()
            .listing_status(None, Some(ListingState::Active))
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(!request.contains("date="));
        assert!(request.contains("state=active"));
    }

    #[tokio::test]
    async fn test_structured_listing_parses_into_entries() {
        let body = json!([
            {"symbol": "A", "name": "Agilent Technologies Inc", "status": "Active"},
            {"symbol": "AA", "name": "Alcoa Corp", "status": "Active"},
        ]);
        let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
        let client = client_with(&base_url, OutputFormat::Json);

        let (payload, _meta) = client
            .listings()
            .unwrap()
            .listing_status(None, None)
            .await
            .unwrap();

        let entries: Vec<alphavantage_rs::models::ListingEntry> = payload.parse().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol, "A");
    }
}

mod concurrency_tests {
    use super::*;

    #[tokio::test]
    async fn test_cloned_clients_issue_independent_calls() {
        let body = json!({"annualReports": [{"fiscalDateEnding": "2023-12-31"}]});
        let (first_url, _first) =
            serve_once("200 OK", "application/json", body.to_string()).await;
        let (second_url, _second) =
            serve_once("200 OK", "application/json", body.to_string()).await;

        let first = client_with(&first_url, OutputFormat::Json);
        let second = client_with(&second_url, OutputFormat::Json);

        let (a, b) = tokio::join!(
            async { first.fundamentals()?.income_statement_annual("IBM").await },
            async { second.fundamentals()?.income_statement_annual("MSFT").await },
        );

        assert!(a.is_ok());
        assert!(b.is_ok());
    }
}

/// Typed statement parsing against the unwrapped series shape.
#[tokio::test]
async fn test_financial_report_round_trip() {
    let body = json!({
        "symbol": "IBM",
        "annualReports": [{
            "fiscalDateEnding": "2023-12-31",
            "reportedCurrency": "USD",
            "totalRevenue": "61860000000",
        }],
    });
    let (base_url, _server) = serve_once("200 OK", "application/json", body.to_string()).await;
    let client = client_with(&base_url, OutputFormat::Json);

    let (payload, _meta) = client
        .fundamentals()
        .unwrap()
        .income_statement_annual("IBM")
        .await
        .unwrap();

    let reports: Vec<FinancialReport> = payload.parse().unwrap();
    assert_eq!(
        reports[0].fiscal_date_ending,
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    );
    assert_eq!(reports[0].reported_currency.as_deref(), Some("USD"));
}
