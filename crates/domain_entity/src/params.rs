//! Write payload serialization
//!
//! The write endpoint takes a strict subset of the record. Unset scalars are
//! omitted rather than sent as `null`, tags go out as bare names, and custom
//! fields carry only `id` and `values`.
//!
//! On update the server rejects a payload whose `updated_at` is not strictly
//! newer than the stored one. Clock skew and request latency can make a
//! true "now" lose that race, so updates stamp `updated_at` with the current
//! time plus [`UPDATE_SKEW_SECS`].

use serde::Serialize;
use std::fmt;

use core_kernel::{AccountId, Clock, EntityId, GroupId, RequestId, UserId};

use crate::custom_field::{FieldId, FieldValue};
use crate::record::EntityRecord;

/// Forward skew applied to `updated_at` on update
pub const UPDATE_SKEW_SECS: i64 = 5;

/// Whether a save creates a new record or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteAction {
    Create,
    Update,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteAction::Create => f.write_str("create"),
            WriteAction::Update => f.write_str("update"),
        }
    }
}

/// A custom field as sent to the write endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFieldParam {
    pub id: FieldId,
    pub values: Vec<FieldValue>,
}

/// The record as sent to the write endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldParam>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Body of a write request: `{"add": [...]}` or `{"update": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteRequest {
    Add(Vec<EntityParams>),
    Update(Vec<EntityParams>),
}

impl WriteRequest {
    pub fn action(&self) -> WriteAction {
        match self {
            WriteRequest::Add(_) => WriteAction::Create,
            WriteRequest::Update(_) => WriteAction::Update,
        }
    }
}

impl EntityRecord {
    /// Create when the record has no id yet, update otherwise
    pub fn write_action(&self) -> WriteAction {
        if self.id.is_some() {
            WriteAction::Update
        } else {
            WriteAction::Create
        }
    }

    /// Projects the record into the write endpoint's payload
    pub fn to_params(&self, clock: &dyn Clock) -> EntityParams {
        EntityParams {
            id: self.id,
            name: self.name.clone(),
            responsible_user_id: self.responsible_user_id,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_by: self.updated_by,
            account_id: self.account_id,
            group_id: self.group_id,
            request_id: self.request_id,
            custom_fields: self
                .custom_fields
                .iter()
                .map(|field| CustomFieldParam {
                    id: field.id().clone(),
                    values: field.values().to_vec(),
                })
                .collect(),
            tags: self.tags.iter().map(|tag| tag.name.clone()).collect(),
            updated_at: self
                .id
                .map(|_| clock.unix_timestamp() + UPDATE_SKEW_SECS),
        }
    }

    /// Wraps the payload under `add` or `update`
    pub fn write_request(&self, clock: &dyn Clock) -> WriteRequest {
        let params = vec![self.to_params(clock)];
        match self.write_action() {
            WriteAction::Create => WriteRequest::Add(params),
            WriteAction::Update => WriteRequest::Update(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::EntityKind;
    use core_kernel::FixedClock;
    use serde_json::json;

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        let record = EntityRecord::new(EntityKind::Task);
        let params = record.to_params(&FixedClock::at(0));
        assert_eq!(serde_json::to_value(params).unwrap(), json!({}));
    }

    #[test]
    fn test_update_stamps_skewed_time_over_local_value() {
        let mut record = EntityRecord::new(EntityKind::Task);
        record.id = Some(EntityId::new(10));
        record.updated_at = Some(1);
        let params = record.to_params(&FixedClock::at(1_000));
        assert_eq!(params.updated_at, Some(1_005));
    }

    #[test]
    fn test_write_request_shape() {
        let mut record = EntityRecord::new(EntityKind::Lead);
        record.name = Some("N".to_string());
        let body = serde_json::to_value(record.write_request(&FixedClock::at(0))).unwrap();
        assert_eq!(body, json!({"add": [{"name": "N"}]}));
    }
}
