use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning for the synthetic availability feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Period of the feed, in milliseconds.
    pub tick_interval_ms: u64,
    /// Largest bed-count swing a single tick may apply.
    pub max_delta: i64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5_000,
            max_delta: 5,
        }
    }
}

impl FeedConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Load from a JSON file.
    pub fn load(path: &str) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }
}
