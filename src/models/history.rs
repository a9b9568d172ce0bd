use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TransactionPoint — a single deal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPoint {
    pub date: NaiveDate,
    /// Deal price in 만원.
    #[serde(deserialize_with = "super::de::rounded")]
    pub price: i64,
    /// Exclusive-use floor area in square metres.
    #[serde(rename = "excluUseAr")]
    pub exclu_use_ar: f64,
    #[serde(default, deserialize_with = "super::de::rounded_opt")]
    pub floor: Option<i64>,
}

// ---------------------------------------------------------------------------
// BucketLine — deals sharing a floor-area bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketLine {
    /// Lower bound of the bucket in square metres (`75` covers 75–79㎡).
    #[serde(deserialize_with = "super::de::rounded")]
    pub area_bucket: i64,
    #[serde(default)]
    pub points: Vec<TransactionPoint>,
}

// ---------------------------------------------------------------------------
// PredictionAnchor — the deal a history forecast was computed from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionAnchor {
    pub latest_deal_date: NaiveDate,
    pub latest_deal_price: f64,
    pub predicted_price_5y: f64,
    pub expected_change: f64,
    #[serde(rename = "latest_excluUseAr")]
    pub latest_exclu_use_ar: f64,
    #[serde(deserialize_with = "super::de::rounded")]
    pub latest_area_bucket: i64,
}

// ---------------------------------------------------------------------------
// PriceHistory — `/price-history` success body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    #[serde(rename = "aptNm")]
    pub apt_nm: String,
    #[serde(rename = "umdNm")]
    pub umd_nm: String,
    pub history_years: u32,
    #[serde(default)]
    pub lines: Vec<BucketLine>,
    /// `None` when the backend could not produce a forecast.
    #[serde(default)]
    pub prediction: Option<PredictionAnchor>,
}
