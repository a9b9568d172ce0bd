//! History aggregation: bucket selection, yearly averaging, forecast merge.

mod common;

use apt_forecast_sdk::aggregate::{aggregate, aggregate_lines, select_bucket, sort_points};
use apt_forecast_sdk::models::{PointKind, PriceHistory, YearlyPoint};
use common::{anchor, date, line};

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn empty_lines_without_prediction_yield_empty_series() {
    assert!(aggregate_lines(&[], None).is_empty());
}

#[test]
fn prediction_without_history_is_omitted() {
    let a = anchor(120_000.0);
    assert!(aggregate_lines(&[], Some(&a)).is_empty());
}

#[test]
fn bucket_without_points_yields_empty_series() {
    let a = anchor(120_000.0);
    let lines = vec![line(60, &[])];
    assert!(aggregate_lines(&lines, Some(&a)).is_empty());
}

// ---------------------------------------------------------------------------
// Bucket selection
// ---------------------------------------------------------------------------

#[test]
fn largest_bucket_is_the_source() {
    let lines = vec![
        line(60, &[("2021-01-10", 1), ("2022-01-10", 1), ("2023-01-10", 1)]),
        line(
            85,
            &[
                ("2021-02-10", 500),
                ("2021-05-10", 700),
                ("2022-02-10", 800),
                ("2023-02-10", 900),
                ("2023-06-10", 1_100),
            ],
        ),
    ];

    assert_eq!(select_bucket(&lines).unwrap().area_bucket, 85);

    let series = aggregate_lines(&lines, None);
    let prices: Vec<i64> = series.iter().filter_map(|p| p.actual_price()).collect();
    assert_eq!(prices, vec![600, 800, 1_000]);
}

#[test]
fn tie_goes_to_first_bucket() {
    let lines = vec![
        line(60, &[("2021-01-10", 100), ("2022-01-10", 200)]),
        line(85, &[("2021-01-10", 900), ("2022-01-10", 900)]),
    ];
    assert_eq!(select_bucket(&lines).unwrap().area_bucket, 60);
    assert_eq!(aggregate_lines(&lines, None)[0].actual_price(), Some(100));
}

#[test]
fn select_bucket_on_empty_input_is_none() {
    assert!(select_bucket(&[]).is_none());
}

// ---------------------------------------------------------------------------
// Yearly reduction
// ---------------------------------------------------------------------------

#[test]
fn year_average_uses_latest_date() {
    let lines = vec![line(80, &[("2021-03-01", 100), ("2021-09-01", 200)])];
    let series = aggregate_lines(&lines, None);

    assert_eq!(series.len(), 1);
    let p = &series[0];
    assert_eq!(p.actual_price(), Some(150));
    assert_eq!(p.predicted_price(), None);
    assert_eq!(p.date(), date("2021-09-01"));
    assert_eq!(p.year(), 2021);
    assert_eq!(p.year_label(), "2021");
    assert_eq!(p.kind(), PointKind::Historical);
}

#[test]
fn latest_date_is_found_regardless_of_arrival_order() {
    let lines = vec![line(
        80,
        &[("2021-11-30", 300), ("2021-02-01", 100), ("2021-06-15", 200)],
    )];
    let series = aggregate_lines(&lines, None);
    assert_eq!(series[0].date(), date("2021-11-30"));
    assert_eq!(series[0].actual_price(), Some(200));
}

#[test]
fn year_average_rounds_half_up() {
    let lines = vec![line(80, &[("2022-01-01", 100), ("2022-02-01", 101)])];
    assert_eq!(aggregate_lines(&lines, None)[0].actual_price(), Some(101));
}

#[test]
fn year_average_rounds_down_below_half() {
    let lines = vec![line(
        80,
        &[("2022-01-01", 100), ("2022-02-01", 100), ("2022-03-01", 101)],
    )];
    assert_eq!(aggregate_lines(&lines, None)[0].actual_price(), Some(100));
}

// ---------------------------------------------------------------------------
// Forecast merge
// ---------------------------------------------------------------------------

#[test]
fn forecast_lands_five_years_after_last_year() {
    let lines = vec![line(
        80,
        &[
            ("2021-05-01", 90_000),
            ("2022-05-01", 93_000),
            ("2022-08-01", 95_000),
            ("2023-05-01", 98_000),
        ],
    )];
    let a = anchor(112_345.5);
    let series = aggregate_lines(&lines, Some(&a));

    // distinct years + 1
    assert_eq!(series.len(), 4);

    let forecast = series.last().unwrap();
    assert_eq!(forecast.year(), 2028);
    assert_eq!(forecast.date(), date("2028-12-31"));
    assert_eq!(forecast.predicted_price(), Some(112_346));
    assert_eq!(forecast.actual_price(), None);
    assert_eq!(forecast.kind(), PointKind::Predicted);
}

#[test]
fn every_point_has_exactly_one_price() {
    let lines = vec![
        line(60, &[("2020-01-01", 50_000)]),
        line(
            80,
            &[
                ("2020-03-01", 80_000),
                ("2021-03-01", 82_000),
                ("2023-03-01", 90_000),
            ],
        ),
    ];
    let a = anchor(100_000.0);
    for p in aggregate_lines(&lines, Some(&a)) {
        assert!(p.actual_price().is_some() ^ p.predicted_price().is_some());
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn output_is_sorted_even_for_unordered_input() {
    let lines = vec![line(
        80,
        &[
            ("2023-07-01", 300),
            ("2021-07-01", 100),
            ("2022-07-01", 200),
            ("2021-01-01", 100),
        ],
    )];
    let a = anchor(400.0);
    let series = aggregate_lines(&lines, Some(&a));

    let dates: Vec<_> = series.iter().map(YearlyPoint::date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(
        series.iter().map(YearlyPoint::year).collect::<Vec<_>>(),
        vec![2021, 2022, 2023, 2028]
    );
}

#[test]
fn sorting_sorted_output_is_idempotent() {
    let lines = vec![line(
        80,
        &[("2022-07-01", 200), ("2021-07-01", 100), ("2023-01-01", 300)],
    )];
    let a = anchor(400.0);
    let series = aggregate_lines(&lines, Some(&a));

    let mut again = series.clone();
    sort_points(&mut again);
    assert_eq!(again, series);
}

#[test]
fn sort_is_stable_for_equal_dates() {
    // A 2023 history ending on Dec 31 collides with a forecast dated 2023-12-31.
    let hist = YearlyPoint::historical(date("2023-12-31"), 100);
    let fcst = YearlyPoint::predicted(2023, 200).unwrap();
    let mut points = vec![hist.clone(), fcst.clone()];
    sort_points(&mut points);
    assert_eq!(points, vec![hist, fcst]);
}

// ---------------------------------------------------------------------------
// Wire payloads
// ---------------------------------------------------------------------------

#[test]
fn aggregates_backend_payload() {
    let history: PriceHistory = serde_json::from_value(common::history_body()).unwrap();
    let series = aggregate(&history);

    // The 80㎡ bucket (3 deals) wins over the 55㎡ bucket (1 deal).
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].date(), date("2021-09-15"));
    assert_eq!(series[0].actual_price(), Some(92_500));
    assert_eq!(series[1].date(), date("2023-11-20"));
    assert_eq!(series[1].actual_price(), Some(98_000));
    assert_eq!(series[2].year(), 2028);
    assert_eq!(series[2].predicted_price(), Some(112_346));
}

#[test]
fn yearly_point_serializes_for_charting() {
    let p = YearlyPoint::historical(date("2021-09-01"), 150);
    assert_eq!(
        serde_json::to_value(&p).unwrap(),
        serde_json::json!({
            "date": "2021-09-01",
            "year": "2021",
            "actualPrice": 150,
            "predictedPrice": null,
            "kind": "historical"
        })
    );

    let f = YearlyPoint::predicted(2028, 120_000).unwrap();
    assert_eq!(serde_json::to_value(&f).unwrap()["kind"], "predicted");
    assert_eq!(serde_json::to_value(&f).unwrap()["date"], "2028-12-31");
}
