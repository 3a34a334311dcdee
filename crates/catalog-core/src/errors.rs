//! Application error type and the JSON error envelope.
//!
//! Every handler returns `Result<_, AppError>`. The [`IntoResponse`] impl is
//! the single place where failures become HTTP responses, always shaped as:
//!
//! ```json
//! { "message": "Country not found with the given id_hash", "status": 400 }
//! ```
//!
//! Lookup misses are reported as `400 Bad Request`, not `404`, to match the
//! contract existing API clients rely on.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Coarse classification of an [`AppError`].
///
/// Several kinds share an HTTP status, so tests and logs use the kind to tell
/// them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    Internal,
}

/// Standard error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            status,
            error: err.into(),
        }
    }

    /// Missing or blank required input.
    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, StatusCode::BAD_REQUEST, err)
    }

    /// Duplicate unique key or a row still referenced elsewhere.
    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, StatusCode::BAD_REQUEST, err)
    }

    /// Lookup miss. Reported as 400 by convention.
    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, StatusCode::BAD_REQUEST, err)
    }

    /// Rejected credentials during login.
    pub fn invalid_credentials<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unauthorized, StatusCode::BAD_REQUEST, err)
    }

    /// Missing, malformed, or expired bearer token.
    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unauthorized, StatusCode::UNAUTHORIZED, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn route_not_found() -> Self {
        Self::new(
            ErrorKind::NotFound,
            StatusCode::NOT_FOUND,
            anyhow::anyhow!("Route not found"),
        )
    }

    /// Converts `validator` output into a single validation error whose
    /// message lists every failed field.
    pub fn from_validation(errors: ValidationErrors) -> Self {
        Self::validation(anyhow::anyhow!("{}", format_validation_errors(&errors)))
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Joins the messages of all field errors, falling back to
/// `"<field> is invalid"` when a rule carries no message.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.error, "Request failed with internal error");
        }

        let body = Json(ErrorBody {
            message: self.error.to_string(),
            status: self.status.as_u16(),
        });

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(length(min = 1))]
        code: String,
    }

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_not_found_uses_bad_request() {
        let err = AppError::not_found(anyhow::anyhow!("Country not found"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_unclassified_errors_become_internal() {
        let err: AppError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message(), "disk on fire");
    }

    #[test]
    fn test_login_and_token_failures_differ_in_status() {
        let login = AppError::invalid_credentials(anyhow::anyhow!("Invalid credentials"));
        let token = AppError::unauthorized(anyhow::anyhow!("Unauthorized: Invalid token"));
        assert_eq!(login.kind, token.kind);
        assert_eq!(login.status, StatusCode::BAD_REQUEST);
        assert_eq!(token.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_envelope_shape() {
        let (status, body) = body_of(AppError::conflict(anyhow::anyhow!("Username already exists"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Username already exists");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_internal_envelope_exposes_message() {
        let (status, body) = body_of(AppError::internal(anyhow::anyhow!("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "connection reset");
        assert_eq!(body["status"], 500);
    }

    #[test]
    fn test_from_validation_collects_messages() {
        let sample = Sample {
            name: String::new(),
            code: String::new(),
        };
        let err = AppError::from_validation(sample.validate().unwrap_err());
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message(), "code is invalid, name is required");
    }
}
