/**
 * API Error Types
 *
 * This module defines the error taxonomy used across all HTTP handlers.
 * Each variant maps to a single HTTP status class, and the mapping is
 * implemented once in `conversion.rs` rather than scattered per handler.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * A required field is missing from a create/login request. The response
 * names the field so clients can correct the request.
 *
 * ## Authentication Errors
 *
 * Unknown username, wrong password, or a missing/invalid/expired token.
 * The wire message is deliberately generic so responses cannot be used
 * to enumerate usernames; the precise reason is kept for logging only.
 *
 * ## Not Found
 *
 * A lookup by id matched nothing. Lookup results are always null-checked
 * before use, so a missing record produces 404 rather than a panic or 500.
 *
 * ## Internal Errors
 *
 * Unexpected storage, hashing, or token-signing failures. Full detail is
 * logged server-side; the client only sees a generic message.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Why an authentication check failed.
///
/// Both variants map to the same 401 response, but they are logged
/// differently: a request with no credentials at all is routine, while a
/// rejected token is worth a closer look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No `Authorization` header was supplied
    MissingCredentials,
    /// Credentials were supplied but did not verify (bad login, bad or
    /// expired token)
    InvalidCredentials,
}

/// API error taxonomy
///
/// This enum represents all failures a handler can produce. Each variant
/// carries enough context for logging; the client-facing message is
/// derived in [`ApiError::message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing from the request body
    #[error("missing `{field}` in request body")]
    Validation {
        /// Name of the missing field
        field: &'static str,
    },

    /// Authentication failed
    #[error("authentication failed: {0:?}")]
    Authentication(AuthFailure),

    /// A lookup by id matched no record
    #[error("{resource} not found")]
    NotFound {
        /// Resource kind, e.g. "venue" or "user"
        resource: &'static str,
    },

    /// Username is already taken
    #[error("username already taken")]
    UsernameTaken,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `UsernameTaken` - 400 Bad Request
    /// - `Authentication` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Database` / `Hash` / `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::UsernameTaken => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing message for this error
    ///
    /// Validation and not-found errors include useful detail. Authentication
    /// and internal errors are generic: nothing in the response should help
    /// an attacker distinguish "unknown user" from "wrong password", and
    /// storage failures stay in the server logs.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { field } => format!("Missing `{}` in request body", field),
            Self::UsernameTaken => "Username already taken".to_string(),
            Self::Authentication(_) => "Unauthorized".to_string(),
            Self::NotFound { resource } => format!("{} not found", capitalize(resource)),
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
