use super::trailing;
use crate::numeric::{round_half_up, round_to_nearest};

/// Simple Moving Average (SMA)
/// Arithmetic mean of the last `limit` values (whole series when `limit` is None).
/// Returns 0.0 for an empty series or a limit <= 0.
pub fn sma(series: &[f64], limit: Option<i64>) -> f64 {
    let window = match trailing(series, limit) {
        Some(window) => window,
        None => return 0.0,
    };

    // Accumulate value / n per term rather than sum / n, results differ in the last bits
    let count = window.len() as f64;
    window.iter().fold(0.0, |acc, value| acc + value / count)
}

/// Smoothing factor for a window of `len` values: 2 / (len + 1), kept to six decimals
fn smoothing_factor(len: usize) -> f64 {
    round_half_up(2.0 / (len as f64 + 1.0) * 1_000_000.0) / 1_000_000.0
}

/// Exponential Moving Average (EMA)
/// Returns 0.0 for an empty series or a limit <= 0, and the element itself for a
/// single-value window.
///
/// Every step over the window is rounded to two decimals before feeding the next:
/// EMA(k) = w(k) * x(k) + (1 - w(k)) * EMA(k - 1), seeded with the first windowed value.
pub fn ema(series: &[f64], limit: Option<i64>) -> f64 {
    let window = match trailing(series, limit) {
        Some(window) => window,
        None => return 0.0,
    };

    let (first, rest) = match window.split_first() {
        Some(split) => split,
        None => return 0.0,
    };

    rest.iter().enumerate().fold(*first, |prev_ema, (i, price)| {
        // i + 2 values of the window are covered at this step
        let k = smoothing_factor(i + 2);
        round_to_nearest(k * price + (1.0 - k) * prev_ema, 2)
    })
}
