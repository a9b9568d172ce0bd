//! `/predict-price` queries.

use serde_json::{json, Value};

use crate::config::Endpoint;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::PricePrediction;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// PredictRequest
// ---------------------------------------------------------------------------

/// Forecast request for one apartment complex, optionally narrowed to a
/// floor-area bucket. Usable as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictRequest {
    apt_nm: String,
    area_bucket: Option<i64>,
}

impl PredictRequest {
    /// Fails with `InvalidArgument` if `apt_nm` is blank.
    pub fn new(apt_nm: &str) -> Result<Self> {
        Ok(Self {
            apt_nm: super::apartment_name(apt_nm)?,
            area_bucket: None,
        })
    }

    pub fn with_area_bucket(mut self, area_bucket: i64) -> Self {
        self.area_bucket = Some(area_bucket);
        self
    }

    pub fn apt_nm(&self) -> &str {
        &self.apt_nm
    }

    pub fn area_bucket(&self) -> Option<i64> {
        self.area_bucket
    }

    pub fn to_body(&self) -> Value {
        super::with_bucket(json!({ "aptNm": self.apt_nm }), self.area_bucket)
    }
}

// ---------------------------------------------------------------------------
// PredictionQuery
// ---------------------------------------------------------------------------

/// Query interface for 5-year price forecasts.
pub struct PredictionQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> PredictionQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Forecast from the complex's most recent deal.
    ///
    /// Backend failures include `apartment_not_found` and `missing_feature`.
    pub fn predict(&self, request: &PredictRequest) -> Envelope<PricePrediction> {
        super::call(self.transport, Endpoint::Predict, Some(&request.to_body()))
    }
}
