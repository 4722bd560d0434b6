use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
const DEFAULT_MAX_SERIES_LEN: usize = 100_000;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
    /// Longest series accepted over HTTP
    pub max_series_len: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            max_series_len: DEFAULT_MAX_SERIES_LEN,
        }
    }
}

impl ServiceConfig {
    /// Read SERIES_STATS_ADDR and SERIES_STATS_MAX_SERIES_LEN, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SERIES_STATS_ADDR") {
            match raw.trim().parse() {
                Ok(addr) => config.addr = addr,
                Err(e) => warn!(value = %raw, error = %e, "Invalid SERIES_STATS_ADDR, using default"),
            }
        }

        if let Some(raw) = lookup("SERIES_STATS_MAX_SERIES_LEN") {
            match raw.trim().parse() {
                Ok(max) => config.max_series_len = max,
                Err(e) => warn!(
                    value = %raw,
                    error = %e,
                    "Invalid SERIES_STATS_MAX_SERIES_LEN, using default"
                ),
            }
        }

        config
    }
}
