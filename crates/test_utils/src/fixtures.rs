//! Pre-built Test Fixtures
//!
//! Server response envelopes and record items shaped the way the remote API
//! returns them.

use serde_json::{json, Value};

/// Fixture for response envelopes
pub struct ResponseFixtures;

impl ResponseFixtures {
    /// Wraps items in `{"_embedded": {"items": [...]}}`
    pub fn envelope(items: Vec<Value>) -> Value {
        json!({ "_embedded": { "items": items } })
    }

    /// An envelope holding a single item
    pub fn single(item: Value) -> Value {
        Self::envelope(vec![item])
    }

    /// Write acknowledgement carrying the server-assigned id
    pub fn created(id: i64) -> Value {
        Self::single(json!({ "id": id, "request_id": 0 }))
    }

    /// A well-formed envelope with no items
    pub fn no_items() -> Value {
        Self::envelope(Vec::new())
    }

    /// What the executor hands back when the server says nothing
    pub fn empty() -> Value {
        Value::Null
    }
}

/// Fixture for server-side record items
pub struct ItemFixtures;

impl ItemFixtures {
    /// A contact as returned by a fetch, including keys the record does not declare
    pub fn contact(id: i64) -> Value {
        json!({
            "id": id,
            "name": "Jane Roe",
            "responsible_user_id": 5001,
            "created_by": 5001,
            "created_at": 1_577_836_800,
            "updated_at": 1_577_923_200,
            "account_id": 9001,
            "updated_by": 5002,
            "group_id": 0,
            "company": { "id": 300, "name": "Acme" },
            "leads": { "id": [11, 12] },
            "closest_task_at": 0,
            "is_deleted": false,
            "tags": [
                { "id": 1, "name": "vip" },
                { "id": 2, "name": "newsletter" }
            ],
            "custom_fields": [
                {
                    "id": 101,
                    "name": "Phone",
                    "code": "PHONE",
                    "is_system": true,
                    "values": [
                        { "value": "+1 555 0100", "enum": "WORK" },
                        { "value": "+1 555 0199", "enum": "MOB" }
                    ]
                },
                {
                    "id": 202,
                    "name": "Source",
                    "is_system": false,
                    "values": [{ "value": "web" }]
                }
            ],
            "_links": { "self": { "href": "/api/v2/contacts?id=1", "method": "get" } }
        })
    }

    /// A minimal lead
    pub fn lead(id: i64, name: &str) -> Value {
        json!({ "id": id, "name": name })
    }
}
