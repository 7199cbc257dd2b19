//! Application state shared across all handlers.

use condensate_core::{EngineConfig, Result};
use condensate_engine::Condenser;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state. The condenser is immutable, so handlers clone the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub condenser: Arc<Condenser>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_condenser(Condenser::default())
    }

    pub fn with_condenser(condenser: Condenser) -> Self {
        Self {
            condenser: Arc::new(condenser),
            start_time: Instant::now(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::with_condenser(Condenser::from_config(config)?))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
