//! Test Data Builders
//!
//! Builder for entity records with sensible defaults, so tests only spell
//! out the fields they care about.

use fake::faker::company::en::CompanyName;
use fake::Fake;
use serde_json::Value;

use core_kernel::{EntityId, UserId};
use domain_entity::{EntityKind, EntityRecord, FieldId, FieldInput};

/// Builder for constructing test records
pub struct TestRecordBuilder {
    kind: EntityKind,
    id: Option<EntityId>,
    name: Option<String>,
    responsible_user_id: Option<UserId>,
    subdomain: Option<String>,
    custom_fields: Vec<(FieldId, FieldInput)>,
    tags: Vec<String>,
}

impl Default for TestRecordBuilder {
    fn default() -> Self {
        Self::new(EntityKind::Lead)
    }
}

impl TestRecordBuilder {
    /// Creates a builder for an unsaved record with a random name
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            id: None,
            name: Some(CompanyName().fake()),
            responsible_user_id: None,
            subdomain: Some("testtenant".to_string()),
            custom_fields: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Marks the record as already persisted
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(EntityId::new(id));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn with_responsible_user(mut self, id: i64) -> Self {
        self.responsible_user_id = Some(UserId::new(id));
        self
    }

    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    pub fn without_subdomain(mut self) -> Self {
        self.subdomain = None;
        self
    }

    pub fn with_custom_field(mut self, id: impl Into<FieldId>, value: impl Into<FieldInput>) -> Self {
        self.custom_fields.push((id.into(), value.into()));
        self
    }

    /// Sets a custom field from raw JSON
    pub fn with_custom_field_json(self, id: impl Into<FieldId>, value: Value) -> Self {
        self.with_custom_field(id, value)
    }

    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    /// Builds the record
    pub fn build(self) -> EntityRecord {
        let mut record = EntityRecord::new(self.kind);
        record.id = self.id;
        record.name = self.name;
        record.responsible_user_id = self.responsible_user_id;
        record.subdomain = self.subdomain;
        record.set_custom_fields(self.custom_fields);
        record.add_tags(self.tags);
        record
    }
}
