//! Core Kernel - Foundational types for the CRM entity client
//!
//! This crate provides the building blocks the domain crate depends on:
//! - Integer identifier newtypes for remote records
//! - An injectable clock
//! - The port error type and marker trait for request executors
//! - Client configuration and tracing setup

pub mod clock;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod telemetry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ClientConfig;
pub use error::CoreError;
pub use identifiers::{AccountId, EntityId, GroupId, RequestId, UserId};
pub use ports::{DomainPort, PortError};
pub use telemetry::init_tracing;
