//! rezolvd
//!
//! A CRUD HTTP API for venue records with password-based user accounts
//! and JWT bearer-token authentication, built on Axum and PostgreSQL.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, shared state, server lifecycle
//! - **`routes`** - Router assembly
//! - **`auth`** - Password hashing, token issuance, login handler
//! - **`users`** - Identity records and user endpoints
//! - **`venues`** - Venue records and venue endpoints
//! - **`middleware`** - Bearer-token verification gate
//! - **`error`** - Error taxonomy and HTTP mapping
//!
//! # Authentication Flow
//!
//! A login request flows through credential verification (username lookup
//! plus bcrypt check) and, on success, token issuance. Subsequent requests
//! to protected routes present the token as `Authorization: Bearer <token>`;
//! the middleware verifies signature and expiry and attaches the resolved
//! identity to the request, with no further database lookup.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: passwords, tokens, login
pub mod auth;

/// User records and handlers
pub mod users;

/// Venue records and handlers
pub mod venues;

/// Request middleware
pub mod middleware;

/// Error taxonomy
pub mod error;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{AppState, Config, Server};
