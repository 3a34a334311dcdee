//! # Catalog Auth
//!
//! Bearer-token primitives for the Catalog API.
//!
//! - [`claims`]: the identity carried inside every access token
//! - [`jwt`]: HS256 token issuance and verification
//!
//! Tokens are stateless. Once issued they stay valid until `exp`, even if
//! the account is deactivated in the meantime.
//!
//! # Example
//!
//! ```ignore
//! use catalog_auth::{create_access_token, verify_token};
//! use catalog_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("a1b2", "admin", "ADMIN", true, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.username, "admin");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{TOKEN_TYPE, create_access_token, verify_token};
