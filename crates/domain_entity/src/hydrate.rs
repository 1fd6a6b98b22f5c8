//! Field hydration
//!
//! Fills a record from a loosely-typed key/value mapping. Constructor input
//! and fetched server items both go through [`EntityRecord::hydrate`], so
//! both accept the same keys. [`HYDRATABLE_FIELDS`] lists them and must stay
//! in step with the match in `assign`. Keys outside that list are dropped. Values of the wrong shape for their
//! field are dropped too; an explicit `null` clears the field.

use serde_json::{Map, Value};
use tracing::trace;

use crate::custom_field::CustomField;
use crate::record::EntityRecord;

/// Keys a record accepts from input data
pub const HYDRATABLE_FIELDS: [&str; 12] = [
    "id",
    "name",
    "responsible_user_id",
    "created_by",
    "updated_by",
    "created_at",
    "updated_at",
    "account_id",
    "group_id",
    "request_id",
    "custom_fields",
    "tags",
];

impl EntityRecord {
    /// Assigns every recognised key of `data` to the matching field
    pub fn hydrate(&mut self, data: &Map<String, Value>) {
        for (key, value) in data {
            if !self.assign(key, value) {
                trace!(key = %key, "ignoring key outside the record schema");
            }
        }
    }

    fn assign(&mut self, key: &str, value: &Value) -> bool {
        match key {
            "id" => assign_int(&mut self.id, key, value),
            "name" => assign_name(&mut self.name, value),
            "responsible_user_id" => assign_int(&mut self.responsible_user_id, key, value),
            "created_by" => assign_int(&mut self.created_by, key, value),
            "updated_by" => assign_int(&mut self.updated_by, key, value),
            "created_at" => assign_int(&mut self.created_at, key, value),
            "updated_at" => assign_int(&mut self.updated_at, key, value),
            "account_id" => assign_int(&mut self.account_id, key, value),
            "group_id" => assign_int(&mut self.group_id, key, value),
            "request_id" => assign_int(&mut self.request_id, key, value),
            "custom_fields" => self.assign_custom_fields(value),
            "tags" => self.assign_tags(value),
            _ => return false,
        }
        true
    }

    fn assign_custom_fields(&mut self, value: &Value) {
        match value {
            Value::Null => self.custom_fields.clear(),
            Value::Array(items) => {
                self.custom_fields.clear();
                for item in items {
                    match serde_json::from_value::<CustomField>(item.clone()) {
                        Ok(field) => self.custom_fields.insert(field),
                        Err(e) => trace!(error = %e, "skipping malformed custom field"),
                    }
                }
            }
            other => trace!(value = %other, "ignoring non-array custom_fields"),
        }
    }

    fn assign_tags(&mut self, value: &Value) {
        match value {
            Value::Null => self.tags.clear(),
            Value::Array(items) => {
                self.tags.clear();
                for item in items {
                    match tag_name(item) {
                        Some(name) => {
                            self.tags.add(name);
                        }
                        None => trace!(value = %item, "skipping malformed tag"),
                    }
                }
            }
            other => trace!(value = %other, "ignoring non-array tags"),
        }
    }
}

/// Reads an integer from a JSON number or a numeric string
pub(crate) fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn assign_int<T: From<i64>>(slot: &mut Option<T>, key: &str, value: &Value) {
    if value.is_null() {
        *slot = None;
        return;
    }
    match as_int(value) {
        Some(n) => *slot = Some(T::from(n)),
        None => trace!(key = %key, value = %value, "ignoring non-integer value"),
    }
}

fn assign_name(slot: &mut Option<String>, value: &Value) {
    match value {
        Value::Null => *slot = None,
        Value::String(s) => *slot = Some(s.clone()),
        Value::Number(n) => *slot = Some(n.to_string()),
        other => trace!(value = %other, "ignoring non-string name"),
    }
}

fn tag_name(item: &Value) -> Option<String> {
    match item {
        Value::String(name) => Some(name.clone()),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
