//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] std::num::ParseIntError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl CoreError {
    pub fn telemetry(message: impl Into<String>) -> Self {
        CoreError::Telemetry(message.into())
    }
}
