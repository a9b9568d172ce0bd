//! Query modules for the forecast SDK.
//!
//! Each module provides a query struct that borrows the client's
//! [`Transport`] and exposes methods returning an [`Envelope`]. Transport and
//! decoding failures are folded into `server_error` failures here, so callers
//! handle a single error channel.

pub mod apartments;
pub mod history;
pub mod predictions;

pub use apartments::{ApartmentQuery, AreaBucketsRequest};
pub use history::{HistoryQuery, HistoryRequest};
pub use predictions::{PredictRequest, PredictionQuery};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Endpoint;
use crate::envelope::{self, ApiError, Envelope};
use crate::error::{ForecastError, Result};
use crate::transport::Transport;

/// Send `body` to `endpoint` and classify the response.
pub(crate) fn call<T: DeserializeOwned>(
    transport: &dyn Transport,
    endpoint: Endpoint,
    body: Option<&Value>,
) -> Envelope<T> {
    let result = transport
        .send(endpoint, body)
        .and_then(|resp| envelope::decode(resp.status, &resp.body));

    match result {
        Ok(Envelope::Failure(err)) => {
            tracing::debug!(%endpoint, error = %err, "backend returned an error");
            Envelope::Failure(err)
        }
        Ok(success) => success,
        Err(e) => {
            tracing::warn!(%endpoint, error = %e, "request failed");
            Envelope::Failure(ApiError::server_error(e.to_string()))
        }
    }
}

/// Trim an apartment name and reject it if blank.
pub(crate) fn apartment_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ForecastError::InvalidArgument(
            "apartment name must not be empty".into(),
        ));
    }
    Ok(name.to_string())
}

/// Insert the optional bucket filter, string-encoded as the backend expects.
pub(crate) fn with_bucket(mut body: Value, area_bucket: Option<i64>) -> Value {
    if let (Some(bucket), Some(map)) = (area_bucket, body.as_object_mut()) {
        map.insert("area_bucket".into(), Value::String(bucket.to_string()));
    }
    body
}
