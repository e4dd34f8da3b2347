/**
 * User Handlers
 *
 * HTTP handlers for the user resource.
 *
 * # Routes
 *
 * - `POST /api/users` - Create a user account (public)
 * - `GET /api/users/me` - Current user's identity (requires bearer token)
 *
 * # Registration Process
 *
 * 1. Validate that `username` and `password` are present
 * 2. Hash the password with bcrypt
 * 3. Insert the user; a duplicate username maps to 400
 * 4. Return the serialized identity (201), never the hash
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::conversion::map_unique_username;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::model::{create_user, UserIdentity};

/// Create-user request body
///
/// All fields are optional at the serde level so that missing required
/// fields produce a 400 naming the field instead of a generic decode
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

/// Pull a required field out of an Option, rejecting empty strings too.
fn require<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::Validation { field }),
    }
}

/// Create user handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing `username` or `password`, or the
///   username is already taken
/// * `500 Internal Server Error` - Hashing or storage failure
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserIdentity>), ApiError> {
    let username = require(&request.username, "username")?;
    let password = require(&request.password, "password")?;
    let first_name = request.first_name.as_deref().unwrap_or("");
    let last_name = request.last_name.as_deref().unwrap_or("");

    tracing::info!("creating user: {}", username);

    let password_hash = hash_password(password)?;

    let user = create_user(&state.pool, username, &password_hash, first_name, last_name)
        .await
        .map_err(map_unique_username)?;

    tracing::info!("user created: {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user.identity())))
}

/// Current user handler
///
/// Returns the identity resolved from the bearer token. No database
/// lookup happens here: between issuance and expiry the token is trusted
/// at face value.
pub async fn get_me(AuthUser(identity): AuthUser) -> Json<UserIdentity> {
    Json(identity)
}
