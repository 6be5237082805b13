mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod supervisor_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use supervisor_config::SupervisorConfig;

// Server defaults
const DEFAULT_HOST: &str = "127.0.0.1";
/// Port 0 asks the OS for an ephemeral port at bind time.
const DEFAULT_PORT: u16 = 0;
const MIN_PORT: u16 = 1024;

// Supervisor defaults
const DEFAULT_SHUTDOWN_TIMEOUT_MS: u64 = 5_000;
const MIN_SHUTDOWN_TIMEOUT_MS: u64 = 1;
const MAX_SHUTDOWN_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_ABORT_GRACE_MS: u64 = 500;
const MAX_ABORT_GRACE_MS: u64 = 10_000;

// Logging defaults
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Config directory
const CONFIG_DIR_ENV: &str = "BRIDGE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".bridge";
const CONFIG_FILENAME: &str = "config.toml";
