//! # Design
//!
//! - Centralize application-level errors for bootstrap and serving.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: anteroom_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying telemetry error.
        detail: anyhow::Error,
    },
    /// Gate server operations failed.
    #[error("gate server operation failed")]
    Server {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying server error.
        detail: anyhow::Error,
    },
}

impl AppError {
    /// Wrap a configuration error with its operation identifier.
    #[must_use]
    pub const fn config(operation: &'static str, source: anteroom_config::ConfigError) -> Self {
        Self::Config { operation, source }
    }

    /// Wrap a telemetry error with its operation identifier.
    #[must_use]
    pub fn telemetry(operation: &'static str, detail: anyhow::Error) -> Self {
        Self::Telemetry { operation, detail }
    }

    /// Wrap a server error with its operation identifier.
    #[must_use]
    pub fn server(operation: &'static str, detail: anyhow::Error) -> Self {
        Self::Server { operation, detail }
    }
}
