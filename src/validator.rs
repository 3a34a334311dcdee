//! JSON body extractor that runs `validator` rules and reports every failure
//! through the standard error envelope.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use catalog_core::AppError;
use serde::de::DeserializeOwned;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::validation(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::validation(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::validation(anyhow!("Invalid field type in request"));
    }

    AppError::validation(anyhow!("Invalid request body"))
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate().map_err(AppError::from_validation)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};
    use catalog_core::ErrorKind;
    use catalog_models::CreateCountryDto;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ValidatedJson(dto) = ValidatedJson::<CreateCountryDto>::from_request(
            json_request(r#"{"name":"Azerbaijan","code":"AZ"}"#),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(dto.name, "Azerbaijan");
        assert_eq!(dto.code, "AZ");
    }

    #[tokio::test]
    async fn test_empty_field_is_validation_error() {
        let err = ValidatedJson::<CreateCountryDto>::from_request(
            json_request(r#"{"name":"","code":"AZ"}"#),
            &(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(err.message(), "name is required");
    }

    #[tokio::test]
    async fn test_malformed_json_uses_envelope() {
        let err = ValidatedJson::<CreateCountryDto>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status.as_u16(), 400);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let req = axum::http::Request::builder()
            .method("POST")
            .body(Body::from(r#"{"name":"Azerbaijan","code":"AZ"}"#))
            .unwrap();

        let err = ValidatedJson::<CreateCountryDto>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(
            err.message(),
            "Missing 'Content-Type: application/json' header"
        );
    }
}
