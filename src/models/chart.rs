use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

/// Which value stream a [`YearlyPoint`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Historical,
    Predicted,
}

// ---------------------------------------------------------------------------
// YearlyPoint — one plotted datum
// ---------------------------------------------------------------------------

/// One point of the price chart.
///
/// Exactly one of [`actual_price`](Self::actual_price) and
/// [`predicted_price`](Self::predicted_price) is set, so the historical and
/// forecast lines never share a datum. Points can only be created through
/// [`historical`](Self::historical) and [`predicted`](Self::predicted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPoint {
    date: NaiveDate,
    #[serde(serialize_with = "serialize_year_label")]
    year: i32,
    actual_price: Option<i64>,
    predicted_price: Option<i64>,
    kind: PointKind,
}

impl YearlyPoint {
    /// A yearly average, dated by the latest deal of that year.
    pub fn historical(date: NaiveDate, price: i64) -> Self {
        Self {
            date,
            year: date.year(),
            actual_price: Some(price),
            predicted_price: None,
            kind: PointKind::Historical,
        }
    }

    /// A forecast value, dated at the end of `year`.
    ///
    /// Returns `None` if `year` is outside the supported calendar range.
    pub fn predicted(year: i32, price: i64) -> Option<Self> {
        let date = year_end(year)?;
        Some(Self {
            date,
            year,
            actual_price: None,
            predicted_price: Some(price),
            kind: PointKind::Predicted,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 4-digit x-axis label, as serialized under `year`.
    pub fn year_label(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn actual_price(&self) -> Option<i64> {
        self.actual_price
    }

    pub fn predicted_price(&self) -> Option<i64> {
        self.predicted_price
    }

    /// Whichever of the two prices is set.
    pub fn price(&self) -> i64 {
        self.actual_price.or(self.predicted_price).unwrap_or_default()
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }
}

/// `{year}-12-31`.
pub fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

fn serialize_year_label<S: Serializer>(year: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{year:04}"))
}
