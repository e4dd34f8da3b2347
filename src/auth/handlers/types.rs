/**
 * Authentication Handler Types
 *
 * Request and response types for the login endpoint.
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// Fields are optional at the serde level so a missing field produces a
/// 400 naming it rather than a generic body-decode rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Username (login key)
    pub username: Option<String>,
    /// Plaintext password, verified against the stored hash
    pub password: Option<String>,
}

/// Auth response
///
/// Returned on successful login. The token is the only thing a client
/// needs to call protected endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token
    #[serde(rename = "authToken")]
    pub auth_token: String,
}
