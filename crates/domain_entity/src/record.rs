//! The entity record
//!
//! [`EntityRecord`] is the in-memory image of one record in the remote CRM,
//! or of a record about to be created there. Scalar fields are public and
//! may be assigned directly; custom fields and tags go through methods that
//! keep them unique by id and by name.
//!
//! # Examples
//!
//! ```rust
//! use domain_entity::{EntityKind, EntityRecord};
//! use serde_json::json;
//!
//! let mut lead = EntityRecord::new(EntityKind::Lead);
//! lead.name = Some("Website enquiry".to_string());
//! lead.set_custom_fields([(5_i64, "a")])
//!     .set_custom_fields([(5_i64, "b")])
//!     .add_tags(["inbound", "web"])
//!     .del_tags("web");
//!
//! assert_eq!(lead.custom_field_value(5_i64), Some(&json!("b")));
//! assert_eq!(lead.tag_names(), vec!["inbound"]);
//! ```

use serde_json::{Map, Value};

use core_kernel::{AccountId, EntityId, GroupId, RequestId, UserId};

use crate::custom_field::{CustomField, CustomFields, FieldId, FieldInput};
use crate::kind::EntityKind;
use crate::one_or_many::OneOrMany;
use crate::tag::{Tag, Tags};

/// Key consumed by the constructor as the record's tenant
pub const SUBDOMAIN_KEY: &str = "subdomain";

/// A record in the remote CRM
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    kind: EntityKind,
    /// Set once the record exists remotely; decides create vs update on save
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub responsible_user_id: Option<UserId>,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    /// Unix epoch seconds
    pub created_at: Option<i64>,
    /// Unix epoch seconds, as last read from the server. Never sent back.
    pub updated_at: Option<i64>,
    pub account_id: Option<AccountId>,
    pub group_id: Option<GroupId>,
    /// Client correlation token echoed into write payloads
    pub request_id: Option<RequestId>,
    pub(crate) custom_fields: CustomFields,
    pub(crate) tags: Tags,
    /// Tenant this record's operations are routed to
    pub subdomain: Option<String>,
}

impl EntityRecord {
    /// Creates an empty record of the given kind
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
            responsible_user_id: None,
            created_by: None,
            updated_by: None,
            created_at: None,
            updated_at: None,
            account_id: None,
            group_id: None,
            request_id: None,
            custom_fields: CustomFields::new(),
            tags: Tags::new(),
            subdomain: None,
        }
    }

    /// Creates a record from initial data
    ///
    /// `subdomain` is taken out of `data` first; the remaining keys go
    /// through the same hydration as a fetched server record.
    pub fn from_map(kind: EntityKind, mut data: Map<String, Value>) -> Self {
        let mut record = Self::new(kind);
        if let Some(subdomain) = data.remove(SUBDOMAIN_KEY) {
            match subdomain {
                Value::String(subdomain) => record.subdomain = Some(subdomain),
                Value::Null => {}
                other => tracing::trace!(value = %other, "ignoring non-string subdomain"),
            }
        }
        record.hydrate(&data);
        record
    }

    /// Routes this record's operations to `subdomain`
    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Whether the record already exists remotely
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    // ========================================================================
    // Custom fields
    // ========================================================================

    pub fn custom_fields(&self) -> &[CustomField] {
        self.custom_fields.as_slice()
    }

    /// The `value` of the first value object of custom field `id`
    ///
    /// Returns `None` when the field is absent, has no values, or its first
    /// value object lacks a `value` key.
    pub fn custom_field_value(&self, id: impl Into<FieldId>) -> Option<&Value> {
        self.custom_fields.value_of(&id.into())
    }

    /// Custom field entries whose id is among `ids`, in record order
    pub fn select_custom_fields(&self, ids: impl Into<OneOrMany<FieldId>>) -> Vec<&CustomField> {
        self.custom_fields.select(&ids.into().into_vec())
    }

    /// Upserts custom field values by id
    ///
    /// A raw value is stored as `[{value: <raw>}]`; structured value
    /// objects are stored verbatim. Existing entries keep their position.
    pub fn set_custom_fields<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldId>,
        V: Into<FieldInput>,
    {
        for (id, input) in params {
            self.custom_fields.upsert(id.into(), input.into().into_values());
        }
        self
    }

    // ========================================================================
    // Tags
    // ========================================================================

    pub fn tags(&self) -> &[Tag] {
        self.tags.as_slice()
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.names()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Appends every name not already present
    pub fn add_tags(&mut self, tags: impl Into<OneOrMany<String>>) -> &mut Self {
        for name in tags.into().into_vec() {
            self.tags.add(name);
        }
        self
    }

    /// Removes every tag whose name is listed; unknown names are ignored
    pub fn del_tags(&mut self, tags: impl Into<OneOrMany<String>>) -> &mut Self {
        self.tags.remove_all(&tags.into().into_vec());
        self
    }
}
