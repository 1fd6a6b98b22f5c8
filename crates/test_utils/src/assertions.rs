//! Custom Test Assertions
//!
//! Assertion helpers for write payloads that give more meaningful messages
//! than comparing whole JSON documents.

use serde_json::Value;

use domain_entity::UPDATE_SKEW_SECS;

/// Asserts that `payload` contains `key`
///
/// # Panics
///
/// Panics if `payload` is not an object or lacks `key`
pub fn assert_payload_has(payload: &Value, key: &str) {
    let object = payload
        .as_object()
        .unwrap_or_else(|| panic!("Payload is not an object: {}", payload));
    assert!(
        object.contains_key(key),
        "Expected key '{}' in payload: {}",
        key,
        payload
    );
}

/// Asserts that `payload` does not contain `key`
///
/// # Panics
///
/// Panics if `payload` is not an object or contains `key`
pub fn assert_payload_omits(payload: &Value, key: &str) {
    let object = payload
        .as_object()
        .unwrap_or_else(|| panic!("Payload is not an object: {}", payload));
    assert!(
        !object.contains_key(key),
        "Did not expect key '{}' in payload: {}",
        key,
        payload
    );
}

/// Asserts that `updated_at` was stamped with the skew applied to a time
/// read between `before` and `after`
///
/// # Panics
///
/// Panics if `updated_at` falls outside `[before + skew, after + skew]`
pub fn assert_skewed_timestamp(updated_at: i64, before: i64, after: i64) {
    let low = before + UPDATE_SKEW_SECS;
    let high = after + UPDATE_SKEW_SECS;
    assert!(
        (low..=high).contains(&updated_at),
        "updated_at {} outside skew window [{}, {}]",
        updated_at,
        low,
        high
    );
}

/// Extracts the single params object of a write body (`{"add": [..]}` or
/// `{"update": [..]}`)
///
/// # Panics
///
/// Panics if the body does not have exactly one top-level key holding a
/// one-element array
pub fn write_body_params<'a>(body: &'a Value, action_key: &str) -> &'a Value {
    let object = body
        .as_object()
        .unwrap_or_else(|| panic!("Write body is not an object: {}", body));
    assert_eq!(object.len(), 1, "Write body should have one key: {}", body);
    let items = object
        .get(action_key)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("Write body has no '{}' array: {}", action_key, body));
    assert_eq!(items.len(), 1, "Write body should carry one record: {}", body);
    &items[0]
}
