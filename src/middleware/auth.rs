//! Bearer-token gate for protected routes.
//!
//! [`require_auth`] runs as a `route_layer`, verifies the token once and
//! stores the claims in request extensions. Handlers take [`AuthUser`] to
//! read them.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use catalog_auth::{Claims, verify_token};
use catalog_core::AppError;

use crate::state::AppState;

/// Claims of the caller, as verified by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id_hash(&self) -> &str {
        &self.0.id_hash
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .ok_or_else(|| AppError::unauthorized(anyhow!("Unauthorized: No token provided")))
}

fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;
    let claims = verify_token(&token, &state.jwt_config)?;
    Ok(AuthUser(claims))
}

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// The account is not re-read from the database: a token stays usable until
/// it expires even if the account is deactivated meanwhile.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state)?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }
        authenticate(&parts.headers, state)
    }
}
