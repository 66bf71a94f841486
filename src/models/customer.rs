//! Customer record and user roles

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Address;

/// A customer with its saved addresses. The customer id doubles as the
/// authenticated user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub primary_address: Option<Uuid>,
}

impl Customer {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            addresses: Vec::new(),
            primary_address: None,
        }
    }

    #[must_use]
    pub fn address(&self, address_id: Uuid) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == address_id)
    }

    pub fn address_mut(&mut self, address_id: Uuid) -> Option<&mut Address> {
        self.addresses.iter_mut().find(|a| a.id == address_id)
    }

    #[must_use]
    pub fn is_primary(&self, address_id: Uuid) -> bool {
        self.primary_address == Some(address_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
    Operator,
    Courier,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Customer,
        UserRole::Admin,
        UserRole::Operator,
        UserRole::Courier,
    ];
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
            Self::Operator => write!(f, "operator"),
            Self::Courier => write!(f, "courier"),
        }
    }
}
