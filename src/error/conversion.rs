/**
 * Error Conversion
 *
 * This module converts [`ApiError`] values into HTTP responses. It is the
 * single place where the error taxonomy is mapped onto the wire format,
 * so individual handlers never build error responses by hand.
 *
 * # Response Format
 *
 * Error responses are JSON with a single field:
 * ```json
 * {
 *   "message": "Venue not found"
 * }
 * ```
 *
 * # Logging
 *
 * Internal errors are logged at `error` level with full detail before the
 * generic response is produced. Authentication failures are logged at
 * `warn`, distinguishing "no credentials supplied" from "invalid
 * credentials" even though both produce the same 401 on the wire.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::error::types::{ApiError, AuthFailure};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Authentication(AuthFailure::MissingCredentials) => {
                tracing::warn!("rejected request with no credentials");
            }
            ApiError::Authentication(AuthFailure::InvalidCredentials) => {
                tracing::warn!("rejected request with invalid credentials");
            }
            ApiError::Database(e) => {
                tracing::error!("database error: {:?}", e);
            }
            ApiError::Hash(e) => {
                tracing::error!("password hashing error: {:?}", e);
            }
            ApiError::Token(e) => {
                tracing::error!("token error: {:?}", e);
            }
            ApiError::Validation { field } => {
                tracing::warn!("validation failed: missing `{}`", field);
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({ "message": self.message() }));

        (status, body).into_response()
    }
}

/// Map a database insert error onto the taxonomy, turning a unique
/// violation on `users.username` into [`ApiError::UsernameTaken`].
pub fn map_unique_username(err: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return ApiError::UsernameTaken;
        }
    }
    ApiError::Database(err)
}
