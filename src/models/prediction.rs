use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PricePrediction — `/predict-price` success body
// ---------------------------------------------------------------------------

/// 5-year forecast for the most recent deal of an apartment complex.
///
/// Prices are in 만원. `expected_change` is `predicted / latest - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    #[serde(rename = "aptNm")]
    pub apt_nm: String,
    #[serde(rename = "umdNm")]
    pub umd_nm: String,
    pub latest_deal_date: NaiveDate,
    pub latest_deal_price: f64,
    pub predicted_price_5y: f64,
    pub expected_change: f64,
}
