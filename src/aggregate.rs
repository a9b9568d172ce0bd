//! Price-history aggregation into a chart series.
//!
//! Takes the per-bucket deal lines from `/price-history` and produces one
//! chronologically ordered series of yearly averages, followed by a single
//! forecast point [`FORECAST_HORIZON_YEARS`] after the last observed year.
//!
//! Steps:
//! 1. pick the bucket with the most deals (first one wins a tie),
//! 2. fold its deals into per-year sums, counts and latest dates,
//! 3. emit one historical point per year (mean rounded half-up),
//! 4. append the forecast point when a prediction is present,
//! 5. sort by date.
//!
//! The functions here are pure and never fail; degenerate input yields an
//! empty series.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::config::FORECAST_HORIZON_YEARS;
use crate::models::{BucketLine, PredictionAnchor, PriceHistory, TransactionPoint, YearlyPoint};
use crate::units::round_half_up;

/// Running totals for one calendar year of deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearStats {
    sum: i128,
    count: u64,
    latest: NaiveDate,
}

impl YearStats {
    fn first(point: &TransactionPoint) -> Self {
        Self {
            sum: i128::from(point.price),
            count: 1,
            latest: point.date,
        }
    }

    fn merge(self, point: &TransactionPoint) -> Self {
        Self {
            sum: self.sum + i128::from(point.price),
            count: self.count + 1,
            latest: self.latest.max(point.date),
        }
    }

    fn mean(&self) -> i64 {
        round_half_up(self.sum as f64 / self.count as f64)
    }
}

/// Build the chart series for a `/price-history` payload.
pub fn aggregate(history: &PriceHistory) -> Vec<YearlyPoint> {
    aggregate_lines(&history.lines, history.prediction.as_ref())
}

/// Build the chart series from raw bucket lines and an optional forecast.
pub fn aggregate_lines(
    lines: &[BucketLine],
    prediction: Option<&PredictionAnchor>,
) -> Vec<YearlyPoint> {
    let by_year = select_bucket(lines)
        .map(|line| yearly_stats(&line.points))
        .unwrap_or_default();

    let mut points: Vec<YearlyPoint> = by_year
        .values()
        .map(|stats| YearlyPoint::historical(stats.latest, stats.mean()))
        .collect();

    if let Some(anchor) = prediction {
        match forecast_point(&by_year, anchor) {
            Some(point) => points.push(point),
            None => tracing::debug!("forecast year not derivable from history; omitting forecast point"),
        }
    }

    sort_points(&mut points);
    tracing::debug!(
        lines = lines.len(),
        points = points.len(),
        "aggregated price history"
    );
    points
}

/// The line with the most deals. Ties go to the earliest line.
pub fn select_bucket(lines: &[BucketLine]) -> Option<&BucketLine> {
    lines.iter().fold(None, |best: Option<&BucketLine>, line| match best {
        Some(b) if b.points.len() >= line.points.len() => Some(b),
        _ => Some(line),
    })
}

/// Stable ascending sort by date; equal dates keep their emission order.
pub fn sort_points(points: &mut [YearlyPoint]) {
    points.sort_by_key(YearlyPoint::date);
}

fn yearly_stats(points: &[TransactionPoint]) -> BTreeMap<i32, YearStats> {
    points.iter().fold(BTreeMap::new(), |mut acc, point| {
        let year = point.date.year();
        let stats = match acc.get(&year) {
            Some(stats) => stats.merge(point),
            None => YearStats::first(point),
        };
        acc.insert(year, stats);
        acc
    })
}

fn forecast_point(
    by_year: &BTreeMap<i32, YearStats>,
    anchor: &PredictionAnchor,
) -> Option<YearlyPoint> {
    let latest_year = *by_year.keys().next_back()?;
    let future_year = latest_year.checked_add(FORECAST_HORIZON_YEARS)?;
    YearlyPoint::predicted(future_year, round_half_up(anchor.predicted_price_5y))
}
