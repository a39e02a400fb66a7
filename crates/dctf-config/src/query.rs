//! Status query configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default simulated latency per company, in milliseconds.
const fn default_delay_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Simulated latency before each company's status is drawn.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Seed for the simulated status draw. Unset means a fresh seed per session.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl QueryConfig {
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
