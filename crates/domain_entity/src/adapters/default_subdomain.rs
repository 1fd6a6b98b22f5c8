//! Default subdomain routing
//!
//! Records normally carry their own subdomain, since one process may talk
//! to several tenants. Applications serving a single tenant can instead
//! configure it once: [`DefaultSubdomainExecutor`] fills it in for every
//! request that arrives without one.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use core_kernel::{ClientConfig, DomainPort, PortError};

use crate::ports::{RequestExecutor, RequestMethod};

/// Wraps an executor, substituting the configured default subdomain
pub struct DefaultSubdomainExecutor {
    inner: Arc<dyn RequestExecutor>,
    default_subdomain: Option<String>,
}

impl DefaultSubdomainExecutor {
    pub fn new(inner: Arc<dyn RequestExecutor>, config: &ClientConfig) -> Self {
        Self {
            inner,
            default_subdomain: config.default_subdomain.clone(),
        }
    }

    pub fn default_subdomain(&self) -> Option<&str> {
        self.default_subdomain.as_deref()
    }
}

impl DomainPort for DefaultSubdomainExecutor {}

#[async_trait]
impl RequestExecutor for DefaultSubdomainExecutor {
    async fn request(
        &self,
        endpoint: &str,
        method: RequestMethod,
        params: Value,
        subdomain: Option<&str>,
    ) -> Result<Value, PortError> {
        let subdomain = match subdomain {
            Some(subdomain) => subdomain,
            None => {
                let fallback = self.default_subdomain.as_deref().ok_or_else(|| {
                    PortError::validation_field(
                        "record has no subdomain and no default is configured",
                        "subdomain",
                    )
                })?;
                debug!(subdomain = %fallback, "Using default subdomain");
                fallback
            }
        };

        self.inner
            .request(endpoint, method, params, Some(subdomain))
            .await
    }
}
