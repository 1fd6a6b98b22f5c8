//! Ports and Adapters Infrastructure
//!
//! Foundational types for the request executor boundary. The domain crate
//! defines the port trait; transports (HTTP clients, mocks, decorators)
//! implement it and report failures through [`PortError`].
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │        Entity Record / Sync Operations    │
//! └───────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌───────────────────────────────────────────┐
//! │        RequestExecutor (port trait)       │
//! └───────────────────────────────────────────┘
//!            ▲                      ▲
//!   ┌────────┴────────┐    ┌────────┴────────┐
//!   │  HTTP transport │    │  Mock executor  │
//!   │   (external)    │    │    (tests)      │
//!   └─────────────────┘    └─────────────────┘
//! ```

use thiserror::Error;

/// Failure reported by a request executor
///
/// The domain layer passes these on unchanged. Retry and backoff decisions
/// belong to the executor that raised them.
#[derive(Debug, Error)]
pub enum PortError {
    /// Rejected locally; nothing was sent
    #[error("invalid request: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("could not reach the CRM: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{endpoint} did not answer within {duration_ms}ms")]
    Timeout { endpoint: String, duration_ms: u64 },

    /// Credentials were refused for the tenant
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The server answered with a non-success status
    #[error("CRM answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("executor failure: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }
}

/// Marker for traits at the boundary of the domain
pub trait DomainPort: Send + Sync + 'static {}
