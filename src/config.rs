use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "APT_FORECAST_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Lookback window requested from `/price-history` when the caller gives none.
pub const DEFAULT_HISTORY_YEARS: u32 = 5;

/// How far ahead the backend model predicts.
pub const FORECAST_HORIZON_YEARS: i32 = 5;

/// HTTP verb used by an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Routes exposed by the forecast backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Predict,
    History,
    Search,
    AreaBuckets,
    Health,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Predict => "/predict-price",
            Endpoint::History => "/price-history",
            Endpoint::Search => "/search-apartments",
            Endpoint::AreaBuckets => "/get-area-buckets",
            Endpoint::Health => "/health",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::Health => Method::Get,
            _ => Method::Post,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Base URL from `APT_FORECAST_URL`, falling back to [`DEFAULT_BASE_URL`].
pub fn default_base_url() -> String {
    env::var(BASE_URL_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
