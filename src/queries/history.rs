//! `/price-history` queries and the chart pipeline built on them.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::{Endpoint, DEFAULT_HISTORY_YEARS};
use crate::envelope::Envelope;
use crate::error::{ForecastError, Result};
use crate::models::PriceHistory;
use crate::transport::Transport;
use crate::view::ChartSeries;

// ---------------------------------------------------------------------------
// HistoryRequest
// ---------------------------------------------------------------------------

/// Deal-history request: apartment, lookback window and optional bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryRequest {
    apt_nm: String,
    years: u32,
    area_bucket: Option<i64>,
}

impl HistoryRequest {
    /// Request the default 5-year lookback. Fails if `apt_nm` is blank.
    pub fn new(apt_nm: &str) -> Result<Self> {
        Ok(Self {
            apt_nm: super::apartment_name(apt_nm)?,
            years: DEFAULT_HISTORY_YEARS,
            area_bucket: None,
        })
    }

    /// Change the lookback window. Zero years is rejected.
    pub fn with_years(mut self, years: u32) -> Result<Self> {
        if years == 0 {
            return Err(ForecastError::InvalidArgument(
                "history lookback must be at least one year".into(),
            ));
        }
        self.years = years;
        Ok(self)
    }

    pub fn with_area_bucket(mut self, area_bucket: i64) -> Self {
        self.area_bucket = Some(area_bucket);
        self
    }

    pub fn apt_nm(&self) -> &str {
        &self.apt_nm
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn area_bucket(&self) -> Option<i64> {
        self.area_bucket
    }

    pub fn to_body(&self) -> Value {
        super::with_bucket(
            json!({ "aptNm": self.apt_nm, "years": self.years }),
            self.area_bucket,
        )
    }
}

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

/// Query interface for per-bucket deal history.
pub struct HistoryQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> HistoryQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Raw history lines plus the forecast anchor, if the backend had one.
    ///
    /// Backend failures include `apartment_not_found`, `no_deals_in_range`
    /// and `no_deals_in_area`.
    pub fn get(&self, request: &HistoryRequest) -> Envelope<PriceHistory> {
        super::call(self.transport, Endpoint::History, Some(&request.to_body()))
    }

    /// Fetch history and aggregate it into a chart series, with the "now"
    /// marker placed at `today`.
    pub fn chart(&self, request: &HistoryRequest, today: NaiveDate) -> Envelope<ChartSeries> {
        self.get(request)
            .map(|history| ChartSeries::build(&history, today))
    }
}
