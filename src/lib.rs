//! Apartment price forecast SDK for Rust.
//!
//! Provides a client for the forecast backend (complex search, floor-area
//! buckets, deal history and 5-year predictions) and the logic that shapes
//! raw deal history into a chart-ready yearly series.
//!
//! # Quick start
//!
//! ```no_run
//! use apt_forecast_sdk::{Envelope, ForecastClient, HistoryRequest, PredictRequest};
//! use chrono::NaiveDate;
//!
//! let client = ForecastClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()
//!     .unwrap();
//!
//! // Forecast
//! let request = PredictRequest::new("상도").unwrap();
//! match client.predictions().predict(&request) {
//!     Envelope::Success(p) => println!("{} -> {}", p.latest_deal_price, p.predicted_price_5y),
//!     Envelope::Failure(err) => eprintln!("{}", err.error.user_message()),
//! }
//!
//! // Chart series for the last 5 years plus the forecast point
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let chart = client
//!     .history()
//!     .chart(&HistoryRequest::new("상도").unwrap(), today);
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod gate;
pub mod models;
pub mod queries;
pub mod transport;
pub mod units;
pub mod view;

pub use aggregate::aggregate;
#[cfg(feature = "async")]
pub use async_client::AsyncForecastClient;
pub use envelope::{ApiError, Envelope, ErrorCode};
pub use error::{ForecastError, Result};
pub use gate::{RequestGate, Ticket};
pub use queries::{AreaBucketsRequest, HistoryRequest, PredictRequest};
pub use transport::{HttpResponse, HttpTransport, Transport};
pub use view::{ChartSeries, PredictionSummary, ReferenceMarker};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Endpoint;

// ---------------------------------------------------------------------------
// ForecastClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ForecastClient`].
///
/// Use [`ForecastClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ForecastClientBuilder::build).
pub struct ForecastClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ForecastClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl ForecastClientBuilder {
    /// Set the backend base URL.
    ///
    /// If not set, `APT_FORECAST_URL` is used when present, otherwise
    /// `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of HTTP.
    ///
    /// `base_url` and `timeout` are ignored when a transport is supplied.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client. Fails only if the HTTP client cannot be created.
    pub fn build(self) -> Result<ForecastClient> {
        let (transport, base_url): (Arc<dyn Transport>, Option<String>) = match self.transport {
            Some(transport) => (transport, None),
            None => {
                let url = self.base_url.unwrap_or_else(config::default_base_url);
                let http = HttpTransport::new(url, self.timeout)?;
                let base_url = http.base_url().to_string();
                (Arc::new(http), Some(base_url))
            }
        };
        Ok(ForecastClient {
            transport,
            base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// ForecastClient
// ---------------------------------------------------------------------------

/// The main entry point for the forecast SDK.
///
/// Owns a [`Transport`] and exposes query interfaces as lightweight borrowing
/// wrappers. The client is `Send + Sync`; queries may run concurrently.
pub struct ForecastClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
}

impl ForecastClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> ForecastClientBuilder {
        ForecastClientBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the 5-year forecast query interface.
    pub fn predictions(&self) -> queries::PredictionQuery<'_> {
        queries::PredictionQuery::new(self.transport.as_ref())
    }

    /// Access the deal-history query interface.
    ///
    /// Also builds chart series via [`HistoryQuery::chart`](queries::HistoryQuery::chart).
    pub fn history(&self) -> queries::HistoryQuery<'_> {
        queries::HistoryQuery::new(self.transport.as_ref())
    }

    /// Access apartment search and floor-area bucket lookups.
    pub fn apartments(&self) -> queries::ApartmentQuery<'_> {
        queries::ApartmentQuery::new(self.transport.as_ref())
    }

    // -- Utility -----------------------------------------------------------

    /// Check that the backend answers `GET /health` with `{"status": "ok"}`.
    pub fn health(&self) -> bool {
        let resp = match self.transport.send(Endpoint::Health, None) {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "health check failed");
                return false;
            }
        };
        resp.is_success()
            && serde_json::from_str::<serde_json::Value>(&resp.body)
                .map(|v| v["status"] == "ok")
                .unwrap_or(false)
    }

    /// Base URL of the HTTP transport, or `None` for a custom transport.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Return the underlying transport for advanced usage.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ForecastClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ForecastClient(base_url={})",
            self.base_url.as_deref().unwrap_or("<custom transport>")
        )
    }
}
