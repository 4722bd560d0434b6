use crate::indicators::{ema, rsi, sma};
use crate::models::{IndicatorKind, IndicatorSpec};
use crate::state::AppState;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum IndicatorError {
    UnknownIndicator(String),
    SeriesTooLong { len: usize, max: usize },
    NoValidIndicators,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::UnknownIndicator(name) => write!(f, "Unknown indicator: {}", name),
            IndicatorError::SeriesTooLong { len, max } => write!(
                f,
                "Series too long. At most {} points are accepted, got {}",
                max, len
            ),
            IndicatorError::NoValidIndicators => {
                write!(f, "No valid indicators requested. Use e.g. \"sma_20,ema_12,rsi_14\"")
            }
        }
    }
}

/// Dispatch a single indicator over the series
pub fn compute(kind: IndicatorKind, series: &[f64], limit: Option<i64>) -> f64 {
    match kind {
        IndicatorKind::Sma => sma(series, limit),
        IndicatorKind::Ema => ema(series, limit),
        IndicatorKind::Rsi => rsi(series, limit),
    }
}

fn check_series_len(state: &AppState, series: &[f64]) -> Result<(), IndicatorError> {
    let max = state.max_series_len();
    if series.len() > max {
        return Err(IndicatorError::SeriesTooLong {
            len: series.len(),
            max,
        });
    }
    Ok(())
}

/// Evaluate one indicator named by `kind` ("sma", "ema" or "rsi")
pub fn evaluate(
    state: &AppState,
    kind: &str,
    series: &[f64],
    limit: Option<i64>,
) -> Result<(IndicatorKind, f64), IndicatorError> {
    let kind: IndicatorKind = kind
        .parse()
        .map_err(|_| IndicatorError::UnknownIndicator(kind.to_string()))?;
    check_series_len(state, series)?;

    let value = compute(kind, series, limit);
    tracing::debug!(
        indicator = %kind,
        points = series.len(),
        ?limit,
        value,
        "Computed indicator"
    );
    Ok((kind, value))
}

/// Evaluate a comma-separated list of indicators such as "sma_20,ema,rsi_14".
/// Malformed or unknown entries are skipped; at least one must remain.
pub fn evaluate_batch(
    state: &AppState,
    series: &[f64],
    requested: &str,
) -> Result<BTreeMap<String, f64>, IndicatorError> {
    check_series_len(state, series)?;

    let mut values = BTreeMap::new();
    for token in requested.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let spec: IndicatorSpec = match token.parse() {
            Ok(spec) => spec,
            Err(e) => {
                tracing::debug!("Skipping indicator '{}': {}", token, e);
                continue;
            }
        };
        values.insert(token.to_string(), compute(spec.kind, series, spec.limit));
    }

    if values.is_empty() {
        return Err(IndicatorError::NoValidIndicators);
    }

    tracing::debug!(
        points = series.len(),
        count = values.len(),
        "Computed indicator batch"
    );
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    fn state_with_max(max_series_len: usize) -> AppState {
        AppState::new(ServiceConfig {
            max_series_len,
            ..ServiceConfig::default()
        })
    }

    #[test]
    fn test_evaluate_dispatch() {
        let state = state_with_max(100);
        let prices = [1.0, 2.0, 3.0];

        assert_eq!(evaluate(&state, "sma", &prices, None), Ok((IndicatorKind::Sma, 2.0)));
        assert_eq!(evaluate(&state, "ema", &prices, Some(1)), Ok((IndicatorKind::Ema, 3.0)));
        assert_eq!(evaluate(&state, "rsi", &prices, None), Ok((IndicatorKind::Rsi, 100.0)));
    }

    #[test]
    fn test_evaluate_unknown() {
        let state = state_with_max(100);
        assert_eq!(
            evaluate(&state, "macd", &[1.0], None),
            Err(IndicatorError::UnknownIndicator("macd".to_string()))
        );
    }

    #[test]
    fn test_series_too_long() {
        let state = state_with_max(2);
        let prices = [1.0, 2.0, 3.0];

        assert_eq!(
            evaluate(&state, "sma", &prices, None),
            Err(IndicatorError::SeriesTooLong { len: 3, max: 2 })
        );
        assert_eq!(
            evaluate_batch(&state, &prices, "sma"),
            Err(IndicatorError::SeriesTooLong { len: 3, max: 2 })
        );
    }

    #[test]
    fn test_batch_skips_malformed() {
        let state = state_with_max(100);
        let prices = [1.0, 2.0, 3.0, 4.0];

        let values = evaluate_batch(&state, &prices, "sma_2, ema_1,vwap_3,sma_x,,rsi").unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values["sma_2"], 3.5);
        assert_eq!(values["ema_1"], 4.0);
        assert_eq!(values["rsi"], 100.0);
    }

    #[test]
    fn test_batch_nothing_valid() {
        let state = state_with_max(100);
        assert_eq!(
            evaluate_batch(&state, &[1.0, 2.0], "foo,bar_2"),
            Err(IndicatorError::NoValidIndicators)
        );
        assert_eq!(
            evaluate_batch(&state, &[1.0, 2.0], ""),
            Err(IndicatorError::NoValidIndicators)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = IndicatorError::SeriesTooLong { len: 10, max: 5 };
        assert_eq!(
            err.to_string(),
            "Series too long. At most 5 points are accepted, got 10"
        );
    }
}
