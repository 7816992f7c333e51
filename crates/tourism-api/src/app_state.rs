//! Shared application state for the tourism API.
//!
//! The dataset itself is `static` and is not held here; state only carries
//! what the operational endpoints need.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::obs::metrics::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: ServiceMetrics,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    /// Flip readiness to 503. Called once the shutdown signal arrives.
    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
