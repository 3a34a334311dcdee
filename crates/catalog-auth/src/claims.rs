//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in every access token.
///
/// Enough to identify the caller without a database round trip. The
/// `isActive` flag reflects the account at issuance time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub id_hash: String,
    pub username: String,
    /// `ADMIN` or `USER`
    pub role: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}
