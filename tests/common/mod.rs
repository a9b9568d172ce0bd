//! Shared test fixtures for the forecast SDK integration tests.
//!
//! Provides `ScriptedTransport`, an in-memory [`Transport`] that replays
//! canned responses per endpoint and records every request it receives, plus
//! small builders for history payloads.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use apt_forecast_sdk::config::Endpoint;
use apt_forecast_sdk::models::{BucketLine, PredictionAnchor, TransactionPoint};
use apt_forecast_sdk::{ForecastClient, ForecastError, HttpResponse, Result, Transport};
use chrono::NaiveDate;
use serde_json::{json, Value};

/// One request seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub endpoint: Endpoint,
    pub body: Option<Value>,
}

enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

/// Replays queued responses per endpoint. An endpoint with nothing queued
/// answers 500 with a `server_error` body.
#[derive(Default)]
pub struct ScriptedTransport {
    queued: Mutex<HashMap<Endpoint, VecDeque<Scripted>>>,
    seen: Mutex<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a JSON response for `endpoint`.
    pub fn respond(&self, endpoint: Endpoint, status: u16, body: Value) {
        self.push(endpoint, Scripted::Respond(HttpResponse::new(status, body.to_string())));
    }

    /// Queue a raw (possibly non-JSON) body for `endpoint`.
    pub fn respond_raw(&self, endpoint: Endpoint, status: u16, body: &str) {
        self.push(endpoint, Scripted::Respond(HttpResponse::new(status, body)));
    }

    /// Queue a transport-level failure for `endpoint`.
    pub fn fail(&self, endpoint: Endpoint, message: &str) {
        self.push(endpoint, Scripted::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }

    fn push(&self, endpoint: Endpoint, scripted: Scripted) {
        self.queued
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(scripted);
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, endpoint: Endpoint, body: Option<&Value>) -> Result<HttpResponse> {
        self.seen.lock().unwrap().push(Recorded {
            endpoint,
            body: body.cloned(),
        });
        let next = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(|q| q.pop_front());
        match next {
            Some(Scripted::Respond(resp)) => Ok(resp),
            Some(Scripted::Fail(msg)) => Err(ForecastError::InvalidArgument(msg)),
            None => Ok(HttpResponse::new(
                500,
                json!({"error": "server_error", "message": "unscripted"}).to_string(),
            )),
        }
    }
}

/// A client wired to `transport`.
pub fn client(transport: &Arc<ScriptedTransport>) -> ForecastClient {
    ForecastClient::builder()
        .transport(transport.clone())
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn point(d: &str, price: i64) -> TransactionPoint {
    TransactionPoint {
        date: date(d),
        price,
        exclu_use_ar: 84.97,
        floor: Some(7),
    }
}

pub fn line(area_bucket: i64, points: &[(&str, i64)]) -> BucketLine {
    BucketLine {
        area_bucket,
        points: points.iter().map(|(d, p)| point(d, *p)).collect(),
    }
}

pub fn anchor(predicted_price_5y: f64) -> PredictionAnchor {
    PredictionAnchor {
        latest_deal_date: date("2023-11-20"),
        latest_deal_price: 98_000.0,
        predicted_price_5y,
        expected_change: predicted_price_5y / 98_000.0 - 1.0,
        latest_exclu_use_ar: 84.97,
        latest_area_bucket: 80,
    }
}

/// `/price-history` body as the backend sends it (floats for prices and
/// buckets, one bucket with three deals and one with a single deal).
pub fn history_body() -> Value {
    json!({
        "aptNm": "이수브라운스톤상도(527-0)",
        "umdNm": "상도동",
        "history_years": 5,
        "lines": [
            {
                "area_bucket": 55.0,
                "points": [
                    {"date": "2022-04-02", "price": 61000.0, "excluUseAr": 59.9, "floor": 3}
                ]
            },
            {
                "area_bucket": 80.0,
                "points": [
                    {"date": "2021-03-01", "price": 90000.0, "excluUseAr": 84.97, "floor": 12},
                    {"date": "2021-09-15", "price": 95000.0, "excluUseAr": 84.97, "floor": null},
                    {"date": "2023-11-20", "price": 98000.0, "excluUseAr": 84.97, "floor": 7}
                ]
            }
        ],
        "prediction": {
            "latest_deal_date": "2023-11-20",
            "latest_deal_price": 98000.0,
            "predicted_price_5y": 112345.6,
            "expected_change": 0.1464,
            "latest_excluUseAr": 84.97,
            "latest_area_bucket": 80.0
        }
    })
}

pub fn predict_body() -> Value {
    json!({
        "aptNm": "이수브라운스톤상도(527-0)",
        "umdNm": "상도동",
        "latest_deal_date": "2023-11-20",
        "latest_deal_price": 98000.0,
        "predicted_price_5y": 112000.0,
        "expected_change": 0.142857
    })
}
