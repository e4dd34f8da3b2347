/**
 * Login Handler
 *
 * Implements credential verification and token issuance for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by exact username match
 * 2. Verify the password against the stored bcrypt hash
 * 3. Mint a signed token carrying the user's identity
 *
 * # Security
 *
 * - Unknown username and wrong password return the same 401 so responses
 *   cannot be used to enumerate accounts
 * - Verification is stateless per call; there is no lockout or rate
 *   limiting here
 * - Passwords are never logged or returned
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password::verify_password;
use crate::error::{ApiError, AuthFailure};
use crate::server::state::AppState;
use crate::users::model::get_user_by_username;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing `username` or `password` in the body
/// * `401 Unauthorized` - Unknown user or wrong password (same response
///   for both)
/// * `500 Internal Server Error` - Storage or token-signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = request
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::Validation { field: "username" })?;
    let password = request
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or(ApiError::Validation { field: "password" })?;

    tracing::info!("login request for: {}", username);

    let user = get_user_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login failed, unknown user: {}", username);
            ApiError::Authentication(AuthFailure::InvalidCredentials)
        })?;

    if !verify_password(password, &user.password_hash) {
        tracing::warn!("login failed, wrong password for: {}", username);
        return Err(ApiError::Authentication(AuthFailure::InvalidCredentials));
    }

    // Credential verification completed; only now does token issuance run.
    let token = state.auth.issue_token(&user.identity())?;

    tracing::info!("user logged in: {} ({})", user.username, user.id);

    Ok((StatusCode::OK, Json(AuthResponse { auth_token: token })))
}
