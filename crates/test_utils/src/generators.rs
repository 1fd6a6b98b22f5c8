//! Property-Based Test Generators
//!
//! Proptest strategies for tag names, tag operations, custom field ids and
//! scalar values.

use proptest::prelude::*;
use serde_json::Value;

use domain_entity::{EntityRecord, FieldId};

/// A tag mutation applied to a record
#[derive(Debug, Clone)]
pub enum TagOp {
    Add(Vec<String>),
    Del(Vec<String>),
}

impl TagOp {
    /// Applies the operation to `record`
    pub fn apply(&self, record: &mut EntityRecord) {
        match self {
            TagOp::Add(names) => {
                record.add_tags(names.clone());
            }
            TagOp::Del(names) => {
                record.del_tags(names.clone());
            }
        }
    }
}

/// Strategy for tag names drawn from a small pool so collisions are frequent
pub fn tag_name_strategy() -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        Just("vip".to_string()),
        Just("newsletter".to_string()),
        Just("partner".to_string()),
        Just("cold".to_string()),
        "[a-z]{1,3}",
    ]
}

/// Strategy for a single add or delete of one to three names
pub fn tag_op_strategy() -> impl Strategy<Value = TagOp> {
    let names = proptest::collection::vec(tag_name_strategy(), 1..=3);
    prop_oneof![
        names.clone().prop_map(TagOp::Add),
        names.prop_map(TagOp::Del),
    ]
}

/// Strategy for sequences of tag operations
pub fn tag_ops_strategy() -> impl Strategy<Value = Vec<TagOp>> {
    proptest::collection::vec(tag_op_strategy(), 0..20)
}

/// Strategy for custom field ids of both shapes
pub fn field_id_strategy() -> impl Strategy<Value = FieldId> {
    prop_oneof![
        (1i64..50i64).prop_map(FieldId::Int),
        "[a-z]{1,4}".prop_map(FieldId::Str),
    ]
}

/// Strategy for scalar JSON values a custom field may hold
pub fn scalar_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}
