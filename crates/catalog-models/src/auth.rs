//! Authentication payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub use catalog_auth::Claims;

/// Self-service sign-up. New accounts start inactive until an administrator
/// enables them.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "operator")]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "admin")]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "admin123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expiry_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let dto: LoginRequest = serde_json::from_str("{}").unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_register_request_valid() {
        let dto = RegisterRequest {
            username: "operator".to_string(),
            password: "secret123".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
