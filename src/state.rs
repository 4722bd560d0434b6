use crate::config::ServiceConfig;
use std::sync::Arc;

/// Shared with every handler. The maths is stateless, only configuration lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn max_series_len(&self) -> usize {
        self.config.max_series_len
    }
}
