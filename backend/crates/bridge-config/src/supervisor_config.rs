use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ABORT_GRACE_MS, DEFAULT_SHUTDOWN_TIMEOUT_MS,
    MAX_ABORT_GRACE_MS, MAX_SHUTDOWN_TIMEOUT_MS, MIN_SHUTDOWN_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Teardown bounds applied by the supervisor during stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupervisorConfig {
    /// How long the server may take to drain after the shutdown signal
    pub shutdown_timeout_ms: u64,
    /// Extra time allowed for a forced release once the drain timed out
    pub abort_grace_ms: u64,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            shutdown_timeout_ms: DEFAULT_SHUTDOWN_TIMEOUT_MS,
            abort_grace_ms: DEFAULT_ABORT_GRACE_MS,
        }
    }
}

impl SupervisorConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_SHUTDOWN_TIMEOUT_MS..=MAX_SHUTDOWN_TIMEOUT_MS).contains(&self.shutdown_timeout_ms)
        {
            return Err(ConfigError::supervisor(format!(
                "supervisor.shutdown_timeout_ms must be {}-{}, got {}",
                MIN_SHUTDOWN_TIMEOUT_MS, MAX_SHUTDOWN_TIMEOUT_MS, self.shutdown_timeout_ms
            )));
        }

        if self.abort_grace_ms > MAX_ABORT_GRACE_MS {
            return Err(ConfigError::supervisor(format!(
                "supervisor.abort_grace_ms must be <= {}, got {}",
                MAX_ABORT_GRACE_MS, self.abort_grace_ms
            )));
        }

        Ok(())
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    pub fn abort_grace(&self) -> Duration {
        Duration::from_millis(self.abort_grace_ms)
    }
}
