//! Custom fields
//!
//! Custom fields are per-tenant attributes defined on the remote side. Each
//! one is identified by an id and holds an ordered list of value objects
//! whose shape the server owns: only `value` is interpreted here, every other
//! key is carried through untouched.
//!
//! [`CustomFields`] keeps entries unique by id. The visible order is the
//! insertion order; an id-to-position index backs lookups and upserts.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Identifier of a custom field definition
///
/// The remote service uses integers, but string ids appear for some
/// built-in fields. Ids of different variants never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldId {
    Int(i64),
    Str(String),
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Int(id) => write!(f, "{}", id),
            FieldId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for FieldId {
    fn from(id: i64) -> Self {
        FieldId::Int(id)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        FieldId::Str(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        FieldId::Str(id)
    }
}

/// One value object of a custom field
///
/// A `value` key holding `null` is kept as `Some(Value::Null)`, so it is
/// written back exactly as it was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct FieldValue {
    /// The value itself, if the object carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Server-specific keys (`enum`, `subtype`, ...) preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldValue {
    /// Creates a value object holding only `value`
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            extra: Map::new(),
        }
    }

    /// Adds a server-specific key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Splits a JSON object into `value` and the remaining keys
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let value = map.remove("value");
        Self { value, extra: map }
    }
}

impl From<Map<String, Value>> for FieldValue {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

/// A custom field entry of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    id: FieldId,
    #[serde(default)]
    values: Vec<FieldValue>,
    /// Server-only descriptive keys such as `name` or `is_system`
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl CustomField {
    pub fn new(id: impl Into<FieldId>, values: Vec<FieldValue>) -> Self {
        Self {
            id: id.into(),
            values,
            metadata: Map::new(),
        }
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// The `value` of the first value object, if any
    pub fn first_value(&self) -> Option<&Value> {
        self.values.first().and_then(|v| v.value.as_ref())
    }
}

/// Input accepted by `set_custom_fields` for a single field id
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// A raw value, stored as a single value object `{value: ...}`
    Value(Value),
    /// Already-structured value objects, stored verbatim
    Values(Vec<FieldValue>),
}

impl FieldInput {
    pub fn into_values(self) -> Vec<FieldValue> {
        match self {
            FieldInput::Value(value) => vec![FieldValue::new(value)],
            FieldInput::Values(values) => values,
        }
    }
}

impl From<Value> for FieldInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => FieldInput::Values(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(map) => FieldValue::from_map(map),
                        other => FieldValue::new(other),
                    })
                    .collect(),
            ),
            Value::Object(map) => FieldInput::Values(vec![FieldValue::from_map(map)]),
            other => FieldInput::Value(other),
        }
    }
}

impl From<Vec<FieldValue>> for FieldInput {
    fn from(values: Vec<FieldValue>) -> Self {
        FieldInput::Values(values)
    }
}

impl From<FieldValue> for FieldInput {
    fn from(value: FieldValue) -> Self {
        FieldInput::Values(vec![value])
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Value(Value::from(value))
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Value(Value::from(value))
    }
}

impl From<i64> for FieldInput {
    fn from(value: i64) -> Self {
        FieldInput::Value(Value::from(value))
    }
}

impl From<i32> for FieldInput {
    fn from(value: i32) -> Self {
        FieldInput::Value(Value::from(value))
    }
}

impl From<f64> for FieldInput {
    fn from(value: f64) -> Self {
        FieldInput::Value(Value::from(value))
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Value(Value::from(value))
    }
}

/// Ordered custom field entries, unique by id
#[derive(Debug, Clone, Default)]
pub struct CustomFields {
    entries: Vec<CustomField>,
    positions: HashMap<FieldId, usize>,
}

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[CustomField] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomField> {
        self.entries.iter()
    }

    pub fn get(&self, id: &FieldId) -> Option<&CustomField> {
        self.positions.get(id).map(|&i| &self.entries[i])
    }

    /// The head value of the entry with `id`
    pub fn value_of(&self, id: &FieldId) -> Option<&Value> {
        self.get(id).and_then(CustomField::first_value)
    }

    /// Entries whose id is in `ids`, in record order
    pub fn select(&self, ids: &[FieldId]) -> Vec<&CustomField> {
        let wanted: HashSet<&FieldId> = ids.iter().collect();
        self.entries
            .iter()
            .filter(|field| wanted.contains(&field.id))
            .collect()
    }

    /// Replaces the values of an existing entry in place, or appends a new one
    pub fn upsert(&mut self, id: FieldId, values: Vec<FieldValue>) {
        match self.positions.get(&id) {
            Some(&i) => self.entries[i].values = values,
            None => self.insert_new(CustomField::new(id, values)),
        }
    }

    /// Inserts a whole entry, replacing any existing entry with the same id
    /// at its current position
    pub fn insert(&mut self, field: CustomField) {
        match self.positions.get(&field.id) {
            Some(&i) => self.entries[i] = field,
            None => self.insert_new(field),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn insert_new(&mut self, field: CustomField) {
        self.positions.insert(field.id.clone(), self.entries.len());
        self.entries.push(field);
    }
}

impl PartialEq for CustomFields {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<CustomField> for CustomFields {
    fn from_iter<I: IntoIterator<Item = CustomField>>(iter: I) -> Self {
        let mut fields = Self::new();
        for field in iter {
            fields.insert(field);
        }
        fields
    }
}

impl<'a> IntoIterator for &'a CustomFields {
    type Item = &'a CustomField;
    type IntoIter = std::slice::Iter<'a, CustomField>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for CustomFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upsert_keeps_position() {
        let mut fields = CustomFields::new();
        fields.upsert(FieldId::Int(1), vec![FieldValue::new("a")]);
        fields.upsert(FieldId::Int(2), vec![FieldValue::new("b")]);
        fields.upsert(FieldId::Int(1), vec![FieldValue::new("c")]);

        let ids: Vec<_> = fields.iter().map(|f| f.id().clone()).collect();
        assert_eq!(ids, vec![FieldId::Int(1), FieldId::Int(2)]);
        assert_eq!(fields.value_of(&FieldId::Int(1)), Some(&json!("c")));
    }

    #[test]
    fn test_int_and_string_ids_are_distinct() {
        let mut fields = CustomFields::new();
        fields.upsert(FieldId::Int(5), vec![FieldValue::new("int")]);
        fields.upsert(FieldId::from("5"), vec![FieldValue::new("str")]);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_field_value_keeps_extra_keys() {
        let value: FieldValue =
            serde_json::from_value(json!({"value": "x", "enum": 77})).unwrap();
        assert_eq!(value.value, Some(json!("x")));
        assert_eq!(value.extra.get("enum"), Some(&json!(77)));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"value": "x", "enum": 77}));
    }

    #[test]
    fn test_null_value_survives_a_read_write_cycle() {
        let value: FieldValue =
            serde_json::from_value(json!({"value": null, "enum": 3})).unwrap();
        assert_eq!(value.value, Some(Value::Null));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"value": null, "enum": 3}));
    }

    #[test]
    fn test_missing_value_stays_missing() {
        let value: FieldValue = serde_json::from_value(json!({"enum": 3})).unwrap();
        assert_eq!(value.value, None);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"enum": 3}));
    }

    #[test]
    fn test_field_input_from_json_array() {
        let input = FieldInput::from(json!([{"value": "a", "enum": 1}, "b"]));
        let values = input.into_values();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].extra.get("enum"), Some(&json!(1)));
        assert_eq!(values[1].value, Some(json!("b")));
    }
}
