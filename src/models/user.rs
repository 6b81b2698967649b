//! User Entity Module
//!
//! Canonical stored representation of a user, identity included.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StorageEntity;

// == User ==
/// A stored user. The `id` is minted by the service layer at creation time
/// and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable identity
    pub id: Uuid,
    /// First name
    pub name: String,
    /// Last name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Whether the account is active
    pub active: bool,
    /// Postal address
    pub address: Address,
}

// == Address ==
/// Nested address value carried by every user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
    /// Free-form street line
    pub address_string: String,
}

impl StorageEntity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_round_trip() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Anakin".to_string(),
            last_name: "Skywalker".to_string(),
            email: "anakin@starwars.com".to_string(),
            active: false,
            address: Address {
                city: "Tatooine".to_string(),
                country: "Outer Rim".to_string(),
                address_string: "Slave Quarters, Mos Espa".to_string(),
            },
        };

        let json = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_user_serializes_snake_case_fields() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Leo".to_string(),
            last_name: "Messi".to_string(),
            email: "leo.messi@gmail.com".to_string(),
            active: true,
            address: Address::default(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("last_name").is_some());
        assert!(json["address"].get("address_string").is_some());
    }
}
