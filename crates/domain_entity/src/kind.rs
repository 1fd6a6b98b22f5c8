//! Entity kinds and their API endpoints
//!
//! Every concrete record type differs from the others only by the endpoint
//! it reads from and writes to, so the kinds live in one enum rather than a
//! type per kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Link type code for contacts
pub const CONTACT_TYPE: u8 = 1;
/// Link type code for leads
pub const LEAD_TYPE: u8 = 2;
/// Link type code for companies
pub const COMPANY_TYPE: u8 = 3;
/// Link type code for tasks
pub const TASK_TYPE: u8 = 4;
/// Link type code for customers
pub const CUSTOMER_TYPE: u8 = 12;

/// A concrete record type in the remote CRM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Contact,
    Lead,
    Company,
    Task,
    Customer,
}

impl EntityKind {
    /// All kinds, in link type order
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Contact,
        EntityKind::Lead,
        EntityKind::Company,
        EntityKind::Task,
        EntityKind::Customer,
    ];

    /// API path used for both reads and writes of this kind
    pub const fn endpoint(self) -> &'static str {
        match self {
            EntityKind::Contact => "/api/v2/contacts",
            EntityKind::Lead => "/api/v2/leads",
            EntityKind::Company => "/api/v2/companies",
            EntityKind::Task => "/api/v2/tasks",
            EntityKind::Customer => "/api/v2/customers",
        }
    }

    /// Integer code identifying this kind in cross-entity link payloads
    pub const fn link_type(self) -> u8 {
        match self {
            EntityKind::Contact => CONTACT_TYPE,
            EntityKind::Lead => LEAD_TYPE,
            EntityKind::Company => COMPANY_TYPE,
            EntityKind::Task => TASK_TYPE,
            EntityKind::Customer => CUSTOMER_TYPE,
        }
    }

    /// Looks a kind up by its link type code
    pub fn from_link_type(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.link_type() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Contact => "Contact",
            EntityKind::Lead => "Lead",
            EntityKind::Company => "Company",
            EntityKind::Task => "Task",
            EntityKind::Customer => "Customer",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_type_codes() {
        assert_eq!(EntityKind::Contact.link_type(), 1);
        assert_eq!(EntityKind::Lead.link_type(), 2);
        assert_eq!(EntityKind::Company.link_type(), 3);
        assert_eq!(EntityKind::Task.link_type(), 4);
        assert_eq!(EntityKind::Customer.link_type(), 12);
    }

    #[test]
    fn test_from_link_type() {
        assert_eq!(EntityKind::from_link_type(12), Some(EntityKind::Customer));
        assert_eq!(EntityKind::from_link_type(5), None);
    }

    #[test]
    fn test_endpoints_are_distinct() {
        let mut endpoints: Vec<_> = EntityKind::ALL.iter().map(|k| k.endpoint()).collect();
        endpoints.sort_unstable();
        endpoints.dedup();
        assert_eq!(endpoints.len(), EntityKind::ALL.len());
    }
}
