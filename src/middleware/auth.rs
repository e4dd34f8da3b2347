/**
 * Authentication Middleware
 *
 * The request gate for protected routes. Each incoming request either
 * ends up `accepted-with-identity` (the resolved identity is attached to
 * the request and the handler runs) or `rejected` (401 before any
 * handler is reached). There is no intermediate state.
 *
 * # Gate Stages
 *
 * 1. **Extract**: read the bearer token from the `Authorization` header.
 *    A missing or malformed header rejects the request as
 *    "no credentials supplied".
 * 2. **Verify**: check the signature against the server secret and check
 *    expiry. Either failing rejects as "invalid credentials". Both
 *    rejection kinds map to the same 401 on the wire; the distinction
 *    exists for logging only.
 * 3. **Resolve**: decode the claims into a [`UserIdentity`] and attach it
 *    to the request extensions. No database lookup happens here: the
 *    token is trusted at face value between issuance and expiry, which
 *    also means deleting a user does not invalidate tokens already in
 *    flight.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, AuthFailure};
use crate::server::state::AppState;
use crate::users::model::UserIdentity;

/// Authentication middleware for protected routes
///
/// Verifies the bearer token and attaches the resolved [`UserIdentity`]
/// to the request extensions for downstream handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Authentication(AuthFailure::MissingCredentials))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Authentication(AuthFailure::MissingCredentials))?;

    let claims = state
        .auth
        .verify_token(token)
        .map_err(|e| {
            tracing::warn!("token rejected: {:?}", e);
            ApiError::Authentication(AuthFailure::InvalidCredentials)
        })?;

    let identity = claims
        .into_identity()
        .map_err(|_| ApiError::Authentication(AuthFailure::InvalidCredentials))?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Handlers behind [`require_auth`] take this as a parameter to receive
/// the identity the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserIdentity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or(ApiError::Authentication(AuthFailure::MissingCredentials))
    }
}
