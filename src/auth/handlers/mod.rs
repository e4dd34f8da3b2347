//! Authentication Handlers
//!
//! HTTP handlers for authentication endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login - Credential verification and
//!   token issuance

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

pub use login::login;
pub use types::{AuthResponse, LoginRequest};
