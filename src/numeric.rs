use serde_json::Value;

/// Decimal places used by `round_to_nearest` when the caller doesn't pick one
pub const DEFAULT_DECIMALS: i32 = 3;

/// Round to the nearest integer, ties going toward positive infinity.
///
/// `f64::round` sends ties away from zero, so -2.5 would become -3.0.
/// Every rounding step in this crate uses this instead: round_half_up(-2.5) == -2.0.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round `number` to `decimal` decimal places.
/// Negative `decimal` rounds to tens, hundreds, ...
pub fn round_to_nearest(number: f64, decimal: i32) -> f64 {
    let tens = 10f64.powi(decimal);
    round_half_up(number * tens) / tens
}

/// True only for JSON numbers that aren't NaN
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().map_or(false, |f| !f.is_nan()),
        _ => false,
    }
}
