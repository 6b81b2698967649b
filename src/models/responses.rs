//! Response DTOs for the user service API
//!
//! Defines the structure of outgoing HTTP response bodies. Successful
//! reads return the entity itself; these types cover the remaining
//! payloads.

use serde::Serialize;
use uuid::Uuid;

/// Response body for user creation (POST /user/)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Identity minted for the new user
    pub id: Uuid,
}

impl CreatedResponse {
    /// Creates a new CreatedResponse
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Response body for user deletion (DELETE /user/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    /// Identity that was removed
    pub id: Uuid,
}

impl DeletedResponse {
    /// Creates a new DeletedResponse
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Stable client-facing error code
    pub code: String,
    /// Human-readable description of what went wrong
    pub description: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(status: u16, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_serialize() {
        let id = Uuid::new_v4();
        let resp = CreatedResponse::new(id);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(&id.to_string()));
    }

    #[test]
    fn test_deleted_response_serialize() {
        let id = Uuid::new_v4();
        let resp = DeletedResponse::new(id);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"].as_str().unwrap(), id.to_string());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new(404, "NotFound", "cannot find entity with this id");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"].as_u64().unwrap(), 404);
        assert_eq!(json["code"].as_str().unwrap(), "NotFound");
        assert!(json["description"].as_str().unwrap().contains("entity"));
    }
}
