//! HS256 access tokens.
//!
//! Verification relies on `jsonwebtoken`'s default validation, which checks
//! the signature and `exp` (with its built-in leeway).

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use catalog_config::JwtConfig;
use catalog_core::AppError;

use crate::claims::Claims;

/// `token_type` reported alongside every issued token.
pub const TOKEN_TYPE: &str = "Bearer";

/// Signs a token for the given account, valid for
/// [`JwtConfig::access_token_expiry`] seconds.
pub fn create_access_token(
    id_hash: &str,
    username: &str,
    role: &str,
    is_active: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = usize::try_from(jwt_config.access_token_expiry)
        .ok()
        .filter(|lifetime| *lifetime > 0)
        .and_then(|lifetime| now.checked_add(lifetime))
        .ok_or_else(|| {
            AppError::internal(anyhow!(
                "Invalid token lifetime: {} seconds",
                jwt_config.access_token_expiry
            ))
        })?;

    let claims = Claims {
        id_hash: id_hash.to_string(),
        username: username.to_string(),
        role: role.to_string(),
        is_active,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry, returning the embedded claims.
///
/// Every failure collapses into the same 401 so callers cannot distinguish
/// a forged token from an expired one.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Unauthorized: Invalid token")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ErrorKind;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let config = test_config();
        let token = create_access_token("a1b2c3", "admin", "ADMIN", true, &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.id_hash, "a1b2c3");
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "ADMIN");
        assert!(claims.is_active);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        for access_token_expiry in [-3600, 0] {
            let config = JwtConfig {
                access_token_expiry,
                ..test_config()
            };

            let err = create_access_token("a1", "admin", "ADMIN", true, &config).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Internal, "lifetime {access_token_expiry}");
        }
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let err = verify_token("invalid-token", &test_config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.status.as_u16(), 401);
        assert_eq!(err.message(), "Unauthorized: Invalid token");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = create_access_token("a1", "admin", "ADMIN", true, &test_config()).unwrap();

        let other = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = test_config();
        let issued = Utc::now().timestamp() as usize - 7200;
        let claims = Claims {
            id_hash: "a1".to_string(),
            username: "admin".to_string(),
            role: "ADMIN".to_string(),
            is_active: true,
            exp: issued + 3600,
            iat: issued,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
