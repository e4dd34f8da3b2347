//! Error Module
//!
//! This module defines the error taxonomy for the API server.
//! Every handler funnels its failures through [`ApiError`], which is
//! converted to an HTTP response in one place.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Categories
//!
//! - `Validation` - Missing or malformed request fields (400)
//! - `Authentication` - Missing, invalid, or expired credentials (401)
//! - `NotFound` - Lookup by id with no match (404)
//! - `Database` / `Hash` / `Token` - Internal failures (500)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return it directly.
//! The wire format is a JSON object with a single `message` field. Internal
//! detail is logged server-side and never sent to the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, AuthFailure};
