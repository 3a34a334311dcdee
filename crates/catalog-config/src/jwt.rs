use std::env;

use crate::env_or;

/// Development fallback. Deployments must set `JWT_SECRET`.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600; // 1 hour

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds. Also reported to clients as
    /// `expiry_time` in the login response.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            access_token_expiry: positive_or_default(env_or(
                "JWT_ACCESS_EXPIRY",
                DEFAULT_ACCESS_TOKEN_EXPIRY,
            )),
        }
    }
}

/// A zero or negative lifetime would issue tokens that are already expired.
fn positive_or_default(seconds: i64) -> i64 {
    if seconds > 0 {
        seconds
    } else {
        DEFAULT_ACCESS_TOKEN_EXPIRY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_expiry_falls_back_to_default() {
        assert_eq!(positive_or_default(-60), DEFAULT_ACCESS_TOKEN_EXPIRY);
        assert_eq!(positive_or_default(0), DEFAULT_ACCESS_TOKEN_EXPIRY);
        assert_eq!(positive_or_default(900), 900);
    }
}
