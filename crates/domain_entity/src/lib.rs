//! CRM Entity Domain
//!
//! A generic mapper for records held by a remote CRM service. An
//! [`EntityRecord`] can:
//!
//! - hydrate itself from a loosely-typed mapping (constructor input or a
//!   fetched server item), accepting only the keys it declares
//! - manage per-tenant custom fields and tags as collections unique by id
//!   and by name
//! - serialize itself into the minimal payload the write endpoint expects,
//!   choosing create or update by whether it has an id
//! - fetch itself by id and save itself through a [`RequestExecutor`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use domain_entity::{EntityKind, EntityRecord, SyncContext};
//! use core_kernel::EntityId;
//!
//! let ctx = SyncContext::new(executor);
//!
//! let mut contact = EntityRecord::new(EntityKind::Contact).with_subdomain("acme");
//! contact.fill_by_id(&ctx, EntityId::new(42)).await?;
//! contact.set_custom_fields([(5_i64, "new value")]).add_tags("vip");
//! contact.save(&ctx).await?;
//! ```

pub mod adapters;
pub mod custom_field;
pub mod error;
pub mod hydrate;
pub mod kind;
pub mod one_or_many;
pub mod params;
pub mod ports;
pub mod record;
pub mod sync;
pub mod tag;

pub use adapters::DefaultSubdomainExecutor;
pub use custom_field::{CustomField, CustomFields, FieldId, FieldInput, FieldValue};
pub use error::EntityError;
pub use hydrate::HYDRATABLE_FIELDS;
pub use kind::{EntityKind, COMPANY_TYPE, CONTACT_TYPE, CUSTOMER_TYPE, LEAD_TYPE, TASK_TYPE};
pub use one_or_many::OneOrMany;
pub use params::{CustomFieldParam, EntityParams, WriteAction, WriteRequest, UPDATE_SKEW_SECS};
pub use ports::{is_empty_response, RequestExecutor, RequestMethod};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockRequestExecutor, RecordedRequest};
pub use record::EntityRecord;
pub use sync::SyncContext;
pub use tag::{Tag, Tags};
