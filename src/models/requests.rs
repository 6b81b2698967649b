//! Request DTOs for the user service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::Address;

/// Request body for creating or replacing a user.
///
/// Carries only mutable attributes; the identity is minted by the service
/// layer (create) or taken from the path (update). Missing fields
/// deserialize to their defaults so that `validate` can reject them with a
/// 400 instead of the framework's body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Required flag; `None` means the field was absent from the body
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub address: Address,
}

impl UserRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if a required field is missing or empty,
    /// None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("name is required".to_string());
        }
        if self.last_name.is_empty() {
            return Some("last_name is required".to_string());
        }
        if self.email.is_empty() {
            return Some("email is required".to_string());
        }
        if self.active.is_none() {
            return Some("active is required".to_string());
        }
        if self.address.city.is_empty() {
            return Some("address.city is required".to_string());
        }
        if self.address.country.is_empty() {
            return Some("address.country is required".to_string());
        }
        if self.address.address_string.is_empty() {
            return Some("address.address_string is required".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> &'static str {
        r#"{
            "name": "Leo",
            "last_name": "Messi",
            "email": "leo.messi@gmail.com",
            "active": true,
            "address": {
                "city": "Miami",
                "country": "USA",
                "address_string": "Avenida 112f # 88 - 15"
            }
        }"#
    }

    #[test]
    fn test_user_request_deserialize() {
        let req: UserRequest = serde_json::from_str(full_body()).unwrap();
        assert_eq!(req.name, "Leo");
        assert_eq!(req.last_name, "Messi");
        assert_eq!(req.active, Some(true));
        assert_eq!(req.address.city, "Miami");
    }

    #[test]
    fn test_validate_full_request() {
        let req: UserRequest = serde_json::from_str(full_body()).unwrap();
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let req: UserRequest = serde_json::from_str(r#"{"name": "Leo"}"#).unwrap();
        assert_eq!(req.name, "Leo");
        assert!(req.last_name.is_empty());
        assert!(req.active.is_none());
    }

    #[test]
    fn test_validate_missing_last_name() {
        let req: UserRequest = serde_json::from_str(r#"{"name": "Leo"}"#).unwrap();
        let msg = req.validate().unwrap();
        assert!(msg.contains("last_name"));
    }

    #[test]
    fn test_validate_missing_active_flag() {
        let json = r#"{
            "name": "Leo",
            "last_name": "Messi",
            "email": "leo.messi@gmail.com",
            "address": {
                "city": "Miami",
                "country": "USA",
                "address_string": "Avenida 112f # 88 - 15"
            }
        }"#;
        let req: UserRequest = serde_json::from_str(json).unwrap();
        let msg = req.validate().unwrap();
        assert!(msg.contains("active"));
    }

    #[test]
    fn test_validate_missing_address_fields() {
        let json = r#"{
            "name": "Leo",
            "last_name": "Messi",
            "email": "leo.messi@gmail.com",
            "active": true
        }"#;
        let req: UserRequest = serde_json::from_str(json).unwrap();
        let msg = req.validate().unwrap();
        assert!(msg.contains("address.city"));
    }
}
