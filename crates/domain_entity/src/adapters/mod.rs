//! Request executor adapters
//!
//! Decorators that implement `RequestExecutor` by wrapping another
//! executor. The transport itself lives outside this crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_entity::adapters::DefaultSubdomainExecutor;
//! use domain_entity::{RequestExecutor, SyncContext};
//! use core_kernel::ClientConfig;
//! use std::sync::Arc;
//!
//! let config = ClientConfig::load()?;
//! let executor: Arc<dyn RequestExecutor> =
//!     Arc::new(DefaultSubdomainExecutor::new(transport, &config));
//! let ctx = SyncContext::new(executor);
//! ```

pub mod default_subdomain;

pub use default_subdomain::DefaultSubdomainExecutor;
