//! Entity domain errors
//!
//! Only two outcomes of the network operations are failures of this layer:
//! a fetch that finds nothing and a write that the server does not
//! acknowledge. Everything the request executor reports passes through
//! unchanged as [`EntityError::Transport`].

use serde_json::Value;
use thiserror::Error;

use core_kernel::{EntityId, PortError};

use crate::kind::EntityKind;
use crate::params::WriteAction;

/// Errors raised by entity sync operations
#[derive(Debug, Error)]
pub enum EntityError {
    /// Fetch by id returned an empty response or no items
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Create or update returned an empty response or no items
    #[error("failed to {action} {kind} (empty response): {payload}")]
    WriteFailed {
        action: WriteAction,
        kind: EntityKind,
        /// Pretty-printed request payload
        payload: String,
    },

    /// The response does not carry the expected `_embedded.items` envelope
    #[error("malformed {kind} response: {message}")]
    MalformedResponse { kind: EntityKind, message: String },

    /// The request executor failed
    #[error("request failed: {0}")]
    Transport(#[from] PortError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EntityError {
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        EntityError::NotFound { kind, id }
    }

    pub fn write_failed(action: WriteAction, kind: EntityKind, payload: &Value) -> Self {
        let payload = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        EntityError::WriteFailed {
            action,
            kind,
            payload,
        }
    }

    pub fn malformed(kind: EntityKind, message: impl Into<String>) -> Self {
        EntityError::MalformedResponse {
            kind,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EntityError::NotFound { .. })
    }

    pub fn is_write_failed(&self) -> bool {
        matches!(self, EntityError::WriteFailed { .. })
    }
}
