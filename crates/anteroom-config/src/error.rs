//! Error types for configuration operations.

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Runtime mode value was invalid.
    #[error("invalid runtime mode")]
    InvalidRuntimeMode {
        /// Runtime mode payload provided by the environment.
        value: String,
    },
    /// Bind address value was invalid.
    #[error("invalid bind address")]
    InvalidBindAddr {
        /// Bind address payload provided by the environment.
        value: String,
    },
    /// HTTP port value was invalid.
    #[error("invalid http port")]
    InvalidPort {
        /// Port payload provided by the environment.
        value: String,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
