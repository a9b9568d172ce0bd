//! Async wrapper around [`ForecastClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every call on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! prediction and history calls are independent and may be awaited
//! concurrently. Give each query stream its own [`RequestGate`]: a gate keeps
//! only its latest request, so sharing one between the prediction and the
//! history of the same selection would drop one of them.
//!
//! # Example
//!
//! ```no_run
//! use apt_forecast_sdk::{AsyncForecastClient, HistoryRequest, PredictRequest, RequestGate};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncForecastClient::builder().build().await.unwrap();
//!     let predictions = RequestGate::new();
//!     let charts = RequestGate::new();
//!     let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//!
//!     let predict = PredictRequest::new("상도").unwrap();
//!     let history = HistoryRequest::new("상도").unwrap();
//!     // Each is `None` if a newer request was issued on its gate meanwhile.
//!     let (prediction, chart) = tokio::join!(
//!         client.run_latest(&predictions, move |c| c.predictions().predict(&predict)),
//!         client.chart_latest(&charts, history, today),
//!     );
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::envelope::Envelope;
use crate::error::Result;
use crate::gate::RequestGate;
use crate::models::{ApartmentSummary, PriceHistory, PricePrediction};
use crate::queries::{AreaBucketsRequest, HistoryRequest, PredictRequest};
use crate::transport::Transport;
use crate::view::ChartSeries;
use crate::ForecastClient;

// ---------------------------------------------------------------------------
// AsyncForecastClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncForecastClient`].
#[derive(Default)]
pub struct AsyncForecastClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl AsyncForecastClientBuilder {
    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport instead of HTTP.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is created on the blocking thread pool, since
    /// it may not be constructed inside an async context.
    pub async fn build(self) -> Result<AsyncForecastClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = ForecastClient::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(transport) = self.transport {
                builder = builder.transport(transport);
            }
            let client = builder.build()?;
            Ok(AsyncForecastClient {
                inner: Arc::new(client),
            })
        })
        .await?
    }
}

// ---------------------------------------------------------------------------
// AsyncForecastClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`ForecastClient`].
///
/// The wrapped client is shared, not locked: concurrent calls run in
/// parallel on separate blocking threads. Cloning is cheap.
#[derive(Clone)]
pub struct AsyncForecastClient {
    inner: Arc<ForecastClient>,
}

impl AsyncForecastClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncForecastClientBuilder {
        AsyncForecastClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ForecastClient) -> T + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        Ok(tokio::task::spawn_blocking(move || f(&client)).await?)
    }

    /// Like [`run()`](Self::run), but returns `None` if a newer request was
    /// issued on `gate` before this one finished.
    pub async fn run_latest<F, T>(&self, gate: &RequestGate, f: F) -> Result<Option<T>>
    where
        F: FnOnce(&ForecastClient) -> T + Send + 'static,
        T: Send + 'static,
    {
        let ticket = gate.issue();
        let value = self.run(f).await?;
        Ok(gate.admit(ticket, value))
    }

    pub async fn predict(&self, request: PredictRequest) -> Result<Envelope<PricePrediction>> {
        self.run(move |c| c.predictions().predict(&request)).await
    }

    pub async fn history(&self, request: HistoryRequest) -> Result<Envelope<PriceHistory>> {
        self.run(move |c| c.history().get(&request)).await
    }

    pub async fn chart(
        &self,
        request: HistoryRequest,
        today: NaiveDate,
    ) -> Result<Envelope<ChartSeries>> {
        self.run(move |c| c.history().chart(&request, today)).await
    }

    /// Gated [`chart()`](Self::chart): the raw history is admitted through
    /// `gate` first and only an admitted response is aggregated. Returns
    /// `None` if a newer request was issued on `gate` in the meantime.
    pub async fn chart_latest(
        &self,
        gate: &RequestGate,
        request: HistoryRequest,
        today: NaiveDate,
    ) -> Result<Option<Envelope<ChartSeries>>> {
        let history = self
            .run_latest(gate, move |c| c.history().get(&request))
            .await?;
        Ok(history.map(|env| env.map(|history| ChartSeries::build(&history, today))))
    }

    pub async fn search(&self, query: &str) -> Result<Envelope<Vec<ApartmentSummary>>> {
        let query = query.to_string();
        self.run(move |c| c.apartments().search(&query)).await
    }

    pub async fn area_buckets(&self, request: AreaBucketsRequest) -> Result<Envelope<Vec<i64>>> {
        self.run(move |c| c.apartments().area_buckets(&request)).await
    }

    pub async fn health(&self) -> Result<bool> {
        self.run(|c| c.health()).await
    }

    /// Borrow the wrapped sync client.
    pub fn client(&self) -> &ForecastClient {
        &self.inner
    }
}
