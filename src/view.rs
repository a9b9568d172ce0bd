//! Display-ready views over backend payloads.
//!
//! Nothing here renders; these types carry the figures and labels a chart or
//! card needs. "Now" is always an injected date, never the system clock.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::aggregate;
use crate::config::FORECAST_HORIZON_YEARS;
use crate::models::{PriceHistory, PricePrediction, YearlyPoint};
use crate::units::{signed_eok, signed_percent, to_eok};

// ---------------------------------------------------------------------------
// ReferenceMarker
// ---------------------------------------------------------------------------

/// Vertical "now" marker on the chart's year axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceMarker {
    pub year: i32,
}

impl ReferenceMarker {
    pub fn at(today: NaiveDate) -> Self {
        Self { year: today.year() }
    }

    /// X-axis key the marker attaches to (matches [`YearlyPoint::year_label`]).
    pub fn axis_key(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn label(&self) -> String {
        format!("현재 ({}년)", self.year)
    }
}

// ---------------------------------------------------------------------------
// ChartSeries
// ---------------------------------------------------------------------------

/// Aggregated series plus the annotations drawn around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<YearlyPoint>,
    pub history_years: u32,
    pub horizon_years: i32,
    pub reference: ReferenceMarker,
}

impl ChartSeries {
    /// Aggregate `history` and annotate it relative to `today`.
    pub fn build(history: &PriceHistory, today: NaiveDate) -> Self {
        Self {
            points: aggregate::aggregate(history),
            history_years: history.history_years,
            horizon_years: FORECAST_HORIZON_YEARS,
            reference: ReferenceMarker::at(today),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn historical(&self) -> impl Iterator<Item = &YearlyPoint> {
        self.points.iter().filter(|p| p.actual_price().is_some())
    }

    pub fn forecast(&self) -> Option<&YearlyPoint> {
        self.points.iter().find(|p| p.predicted_price().is_some())
    }

    pub fn legend(&self) -> String {
        format!(
            "과거 {}년 ~ 향후 {}년 예측",
            self.history_years, self.horizon_years
        )
    }
}

// ---------------------------------------------------------------------------
// PredictionSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Rising => "상승",
            Direction::Falling => "하락",
        }
    }
}

/// Figures for the prediction card, prices in 억.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub latest_deal_date: NaiveDate,
    pub current_eok: f64,
    pub predicted_eok: f64,
    pub delta_eok: f64,
    pub percent_change: f64,
    pub direction: Direction,
}

impl PredictionSummary {
    pub fn from_prediction(prediction: &PricePrediction) -> Self {
        let current_eok = to_eok(prediction.latest_deal_price);
        let predicted_eok = to_eok(prediction.predicted_price_5y);
        let delta_eok = predicted_eok - current_eok;
        let direction = if delta_eok > 0.0 {
            Direction::Rising
        } else {
            Direction::Falling
        };
        Self {
            latest_deal_date: prediction.latest_deal_date,
            current_eok,
            predicted_eok,
            delta_eok,
            percent_change: prediction.expected_change * 100.0,
            direction,
        }
    }

    pub fn percent_label(&self) -> String {
        signed_percent(self.percent_change / 100.0)
    }

    pub fn delta_label(&self) -> String {
        signed_eok(self.delta_eok)
    }
}

impl From<&PricePrediction> for PredictionSummary {
    fn from(prediction: &PricePrediction) -> Self {
        Self::from_prediction(prediction)
    }
}
