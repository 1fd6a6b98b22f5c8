//! Entity Domain Ports
//!
//! The request executor is the boundary between entity records and whatever
//! actually talks to the remote API (authentication, HTTP, retries, rate
//! limiting all live behind it).
//!
//! # Response contract
//!
//! A successful read or write answers with an envelope of the form
//! `{"_embedded": {"items": [<record>, ...]}}`. An empty answer (`null`,
//! `false`, `0`, `""`, `"0"`, `[]`, `{}`) is not an executor error; the
//! caller decides what it means.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_entity::{RequestExecutor, SyncContext};
//! use std::sync::Arc;
//!
//! let executor: Arc<dyn RequestExecutor> = Arc::new(HttpExecutor::new(credentials));
//! let ctx = SyncContext::new(executor);
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use core_kernel::{DomainPort, PortError};

/// HTTP verb of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// Read; params travel as query parameters
    Get,
    /// Write; params travel as the request body
    Post,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Get => f.write_str("GET"),
            RequestMethod::Post => f.write_str("POST"),
        }
    }
}

/// Issues requests against the remote CRM API
#[async_trait]
pub trait RequestExecutor: DomainPort {
    /// Sends `params` to `endpoint` on the tenant named by `subdomain`
    ///
    /// # Returns
    ///
    /// The decoded response body, which may be empty
    async fn request(
        &self,
        endpoint: &str,
        method: RequestMethod,
        params: Value,
        subdomain: Option<&str>,
    ) -> Result<Value, PortError>;
}

/// Whether a response counts as empty
pub fn is_empty_response(response: &Value) -> bool {
    match response {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// A request as seen by [`MockRequestExecutor`]
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub endpoint: String,
        pub method: RequestMethod,
        pub params: Value,
        pub subdomain: Option<String>,
    }

    /// In-memory executor answering from a scripted queue
    ///
    /// Once the queue runs dry every request answers `null`.
    #[derive(Debug, Default)]
    pub struct MockRequestExecutor {
        responses: Arc<Mutex<VecDeque<Result<Value, PortError>>>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockRequestExecutor {
        /// Creates a mock that answers every request with an empty response
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the response queue
        pub fn with_responses(responses: Vec<Value>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
                requests: Arc::default(),
            }
        }

        /// Queues a response
        pub async fn push_response(&self, response: Value) {
            self.responses.lock().await.push_back(Ok(response));
        }

        /// Queues a transport failure
        pub async fn push_error(&self, error: PortError) {
            self.responses.lock().await.push_back(Err(error));
        }

        /// Every request received so far, oldest first
        pub async fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().await.clone()
        }

        pub async fn last_request(&self) -> Option<RecordedRequest> {
            self.requests.lock().await.last().cloned()
        }
    }

    impl DomainPort for MockRequestExecutor {}

    #[async_trait]
    impl RequestExecutor for MockRequestExecutor {
        async fn request(
            &self,
            endpoint: &str,
            method: RequestMethod,
            params: Value,
            subdomain: Option<&str>,
        ) -> Result<Value, PortError> {
            self.requests.lock().await.push(RecordedRequest {
                endpoint: endpoint.to_string(),
                method,
                params,
                subdomain: subdomain.map(str::to_string),
            });

            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }
}
