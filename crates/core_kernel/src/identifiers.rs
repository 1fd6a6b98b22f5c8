//! Strongly-typed identifiers for remote CRM records
//!
//! The remote service identifies everything with plain integers. Wrapping
//! them in newtypes keeps an entity id from being passed where a user or
//! account id is expected, while serializing transparently as the bare
//! integer the wire format uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw integer value
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Returns a human readable label for this identifier type
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Record identity
define_id!(EntityId, "entity");

// Opaque foreign identifiers into the remote system
define_id!(UserId, "user");
define_id!(AccountId, "account");
define_id!(GroupId, "group");

// Client-supplied correlation token
define_id!(RequestId, "request");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display_is_bare_integer() {
        assert_eq!(EntityId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_parsing() {
        let parsed: UserId = " 17 ".parse().unwrap();
        assert_eq!(parsed, UserId::new(17));
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_value(AccountId::new(9)).unwrap();
        assert_eq!(json, serde_json::json!(9));
    }
}
