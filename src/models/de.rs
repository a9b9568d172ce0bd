//! Deserializers for integer fields the backend emits as JSON floats.

use serde::{Deserialize, Deserializer};

use crate::units::round_half_up;

/// Accept `75000`, `75000.0` or `74999.6` and round half-up to an integer.
pub fn rounded<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(round_half_up(value))
}

pub fn rounded_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(round_half_up))
}

pub fn rounded_vec<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<f64>::deserialize(deserializer)?;
    Ok(values.into_iter().map(round_half_up).collect())
}
