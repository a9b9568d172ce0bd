//! Numeric helpers for prices and their display labels.
//!
//! Prices travel in 만원 (10,000 KRW). Charts and cards show them in 억
//! (100,000,000 KRW). Conversion is a display concern only: the aggregator
//! always works on raw 만원 values.

/// 만원 per 억.
pub const MANWON_PER_EOK: f64 = 10_000.0;

/// Round to the nearest integer, halves toward positive infinity.
///
/// Non-finite input saturates (`NaN` becomes `0`).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Convert a 만원 amount to 억.
pub fn to_eok(manwon: f64) -> f64 {
    manwon / MANWON_PER_EOK
}

/// Short y-axis tick label: `"12억"` from 10,000 만원 upward, `"8천"` below.
pub fn axis_tick_label(manwon: f64) -> String {
    if manwon >= MANWON_PER_EOK {
        format!("{:.0}억", to_eok(manwon))
    } else {
        format!("{:.0}천", manwon / 1_000.0)
    }
}

/// Tooltip label for a plotted price: `"12.3억원"` above 10,000 만원,
/// otherwise the grouped 만원 amount (`"9,800만원"`).
pub fn tooltip_label(manwon: i64) -> String {
    if manwon as f64 > MANWON_PER_EOK {
        format!("{:.1}억원", to_eok(manwon as f64))
    } else {
        format!("{}만원", group_thousands(manwon))
    }
}

/// Percentage with an explicit `+` for gains: `0.12` becomes `"+12.0%"`.
pub fn signed_percent(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if pct > 0.0 {
        format!("+{pct:.1}%")
    } else {
        format!("{pct:.1}%")
    }
}

/// Signed 억 delta: `1.3` becomes `"+1.3억원"`.
pub fn signed_eok(eok: f64) -> String {
    if eok > 0.0 {
        format!("+{eok:.1}억원")
    } else {
        format!("{eok:.1}억원")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
