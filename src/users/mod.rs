//! Users Module
//!
//! Identity records and the handlers that manage them.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - User model, identity type, database operations
//! └── handlers.rs - HTTP handlers (create user, current user)
//! ```
//!
//! # Security
//!
//! The stored `password_hash` never appears in any serialized
//! representation of a user. Everything that leaves the server goes
//! through [`model::UserIdentity`], which carries only the public fields.

/// User model and database operations
pub mod model;

/// HTTP handlers for user endpoints
pub mod handlers;

pub use model::{User, UserIdentity};
