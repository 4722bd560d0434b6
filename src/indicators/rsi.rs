use super::sma;
use crate::numeric::round_half_up;

/// Relative Strength Index (RSI)
/// Measures momentum by comparing magnitude of gains to losses across the series.
/// Returns an integer-valued score between 0-100:
/// - Below 30: Oversold (potentially undervalued)
/// - Above 70: Overbought (potentially overvalued)
///
/// `limit` (whole series when None) only decides whether there is enough data:
/// a limit <= 1 or a single-value series yields 100. Once past that check every
/// adjacent pair of the series is scanned, newest first.
/// With no losses at all the result is 100.
pub fn rsi(series: &[f64], limit: Option<i64>) -> f64 {
    let limit = limit.unwrap_or(series.len() as i64);
    if limit <= 1 || series.len() == 1 {
        return 100.0;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = series
        .windows(2)
        .rev()
        .map(|pair| {
            let change = pair[1] - pair[0];
            if pair[1] > pair[0] {
                (change, 0.0)
            } else if pair[1] < pair[0] {
                (0.0, pair[0] - pair[1])
            } else {
                (0.0, 0.0)
            }
        })
        .unzip();

    let avg_gain = sma(&gains, None);
    let avg_loss = sma(&losses, None);

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    round_half_up(100.0 - 100.0 / (1.0 + rs))
}
