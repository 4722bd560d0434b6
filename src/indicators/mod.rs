// Technical indicators module
// Scalar indicator values over a chronological price series (oldest first)

pub mod moving_averages;
pub mod rsi;

pub use moving_averages::{ema, sma};
pub use rsi::rsi;

/// Trailing `limit` values of `series`, or the whole series when `limit` is None
/// or exceeds its length. None when there is nothing to compute over.
fn trailing(series: &[f64], limit: Option<i64>) -> Option<&[f64]> {
    let limit = limit.unwrap_or(series.len() as i64);
    if limit <= 0 || series.is_empty() {
        return None;
    }

    let take = usize::try_from(limit).map_or(series.len(), |l| l.min(series.len()));
    Some(&series[series.len() - take..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_window() {
        let prices = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(trailing(&prices, Some(2)), Some(&prices[2..]));
        assert_eq!(trailing(&prices, None), Some(&prices[..]));
        assert_eq!(trailing(&prices, Some(99)), Some(&prices[..]));
        assert_eq!(trailing(&prices, Some(0)), None);
        assert_eq!(trailing(&[], None), None);
    }
}
