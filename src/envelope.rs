//! Result envelope shared by every backend call.
//!
//! The backend answers each route with either a success body or
//! `{ "error": <code>, "message"?: <text> }`. The query layer turns that into
//! an explicit [`Envelope`] using the HTTP status first and the payload shape
//! second, so callers match on a sum type instead of probing fields.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Name of the field that marks an error body on the wire.
pub const ERROR_TAG: &str = "error";

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Error codes the backend reports. Unknown codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    ApartmentNotFound,
    MissingFeature,
    NoDealsInRange,
    NoDealsInArea,
    ServerError,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::ApartmentNotFound => "apartment_not_found",
            ErrorCode::MissingFeature => "missing_feature",
            ErrorCode::NoDealsInRange => "no_deals_in_range",
            ErrorCode::NoDealsInArea => "no_deals_in_area",
            ErrorCode::ServerError => "server_error",
            ErrorCode::Other(code) => code,
        }
    }

    /// Message shown to the user for this code.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCode::ApartmentNotFound => "검색된 아파트를 찾을 수 없습니다.",
            ErrorCode::MissingFeature => "데이터가 부족하여 예측할 수 없습니다.",
            ErrorCode::NoDealsInRange => "최근 거래 데이터가 없습니다.",
            ErrorCode::NoDealsInArea => "선택한 평형의 거래 데이터가 없습니다.",
            ErrorCode::ServerError => "서버 오류가 발생했습니다.",
            ErrorCode::Other(_) => "알 수 없는 오류가 발생했습니다.",
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "apartment_not_found" => ErrorCode::ApartmentNotFound,
            "missing_feature" => ErrorCode::MissingFeature,
            "no_deals_in_range" => ErrorCode::NoDealsInRange,
            "no_deals_in_area" => ErrorCode::NoDealsInArea,
            "server_error" => ErrorCode::ServerError,
            _ => ErrorCode::Other(code),
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        ErrorCode::from(code.to_string())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Structured error body returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Model feature that was unavailable, for `missing_feature`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

impl ApiError {
    pub fn new(error: ErrorCode) -> Self {
        Self {
            error,
            message: None,
            missing: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// `server_error` carrying the given cause.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServerError).with_message(message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.missing) {
            (Some(msg), _) => write!(f, "{}: {}", self.error, msg),
            (None, Some(missing)) => write!(f, "{} ({})", self.error, missing),
            (None, None) => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for ApiError {}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Outcome of a backend call: the success payload or a structured error.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Envelope::Failure(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Envelope::Success(value) => Some(value),
            Envelope::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(err) => Some(err),
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Envelope::Success(value) => Some(value),
            Envelope::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> std::result::Result<T, ApiError> {
        match self {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(err) => Err(err),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Envelope<U> {
        match self {
            Envelope::Success(value) => Envelope::Success(f(value)),
            Envelope::Failure(err) => Envelope::Failure(err),
        }
    }
}

impl<T> From<std::result::Result<T, ApiError>> for Envelope<T> {
    fn from(result: std::result::Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Envelope::Success(value),
            Err(err) => Envelope::Failure(err),
        }
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// True if `payload` is a JSON object carrying an `error` field.
///
/// Any body with that field is treated as an error, even if it also has
/// success-shaped fields.
pub fn is_error_payload(payload: &Value) -> bool {
    payload
        .as_object()
        .is_some_and(|map| map.contains_key(ERROR_TAG))
}

/// Classify a raw HTTP response into an [`Envelope`].
///
/// A non-2xx status is always a `Failure`, whatever the body holds; an HTML
/// error page or an empty body becomes `server_error` with `HTTP <status>`.
/// Fails only if a 2xx body is not JSON or does not match `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>> {
    if !(200..300).contains(&status) {
        let err = match serde_json::from_str::<Value>(body) {
            Ok(payload) => error_from_payload(status, payload),
            Err(_) => ApiError::server_error(format!("HTTP {status}")),
        };
        return Ok(Envelope::Failure(err));
    }

    let payload: Value = serde_json::from_str(body)?;
    if is_error_payload(&payload) {
        return Ok(Envelope::Failure(error_from_payload(status, payload)));
    }

    Ok(Envelope::Success(serde_json::from_value(payload)?))
}

fn error_from_payload(status: u16, payload: Value) -> ApiError {
    if !is_error_payload(&payload) {
        return ApiError::server_error(format!("HTTP {status}"));
    }
    match serde_json::from_value::<ApiError>(payload.clone()) {
        Ok(err) => err,
        // `error` present but not a string: keep the raw value for diagnosis.
        Err(_) => ApiError::server_error(payload[ERROR_TAG].to_string()),
    }
}
