//! Application state
//!
//! Per-service shared state. Both states are cheaply cloneable: the catalog
//! sits behind an `Arc` and everything else is `Copy` or a small string.
//! Nothing here is mutable after construction, so no locking is needed.

use std::sync::Arc;
use std::time::Instant;

use crate::models::CatalogItem;

/// Shared state of the public gateway
#[derive(Clone)]
pub struct GatewayState {
    /// Base URL of the internal data service
    pub internal_backend_url: Arc<str>,

    /// Process start time, for uptime reporting
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(internal_backend_url: &str) -> Self {
        Self {
            internal_backend_url: Arc::from(internal_backend_url.trim_end_matches('/')),
            started_at: Instant::now(),
        }
    }

    /// Process wall-clock age in seconds
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// Shared state of the internal data service
#[derive(Clone)]
pub struct InternalState {
    /// Read-only catalog, constructed once at startup
    pub catalog: Arc<Vec<CatalogItem>>,

    /// Process start time, for uptime reporting
    pub started_at: Instant,
}

impl InternalState {
    pub fn new(catalog: Vec<CatalogItem>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            started_at: Instant::now(),
        }
    }

    /// Process wall-clock age in seconds
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
