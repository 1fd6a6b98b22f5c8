//! Test Utilities Crate
//!
//! Shared test infrastructure for the CRM entity client.
//!
//! # Modules
//!
//! - `fixtures`: Server response envelopes and record items
//! - `builders`: Builder for entity records
//! - `assertions`: Payload assertion helpers
//! - `generators`: Property-based test data generators
//! - `logging`: Tracing capture for tests

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod logging;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use logging::*;
