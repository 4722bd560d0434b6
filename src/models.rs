use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Rsi,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "sma",
            IndicatorKind::Ema => "ema",
            IndicatorKind::Rsi => "rsi",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sma" => Ok(IndicatorKind::Sma),
            "ema" => Ok(IndicatorKind::Ema),
            "rsi" => Ok(IndicatorKind::Rsi),
            other => Err(format!("Unknown indicator: {}", other)),
        }
    }
}

/// One requested indicator: a kind and an optional window, e.g. "sma_20" or "rsi"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSpec {
    pub kind: IndicatorKind,
    pub limit: Option<i64>,
}

impl FromStr for IndicatorSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('_').collect();
        match parts.as_slice() {
            [kind] => Ok(IndicatorSpec {
                kind: kind.parse()?,
                limit: None,
            }),
            [kind, limit] => Ok(IndicatorSpec {
                kind: kind.parse()?,
                limit: Some(
                    limit
                        .parse()
                        .map_err(|_| format!("Invalid window length: {}", limit))?,
                ),
            }),
            _ => Err(format!("Malformed indicator: {}", s)),
        }
    }
}
