//! Venues Module
//!
//! The venue resource: place records with a name, categories, and nested
//! contact details.
//!
//! # Module Structure
//!
//! ```text
//! venues/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - Venue model and database operations
//! └── handlers.rs - HTTP handlers (list, get, create, delete)
//! ```
//!
//! Venues have a lifecycle independent of users. A user may own venues by
//! reference, but deleting a user does not delete its venues and deleting
//! a venue does not touch any user record.

/// Venue model and database operations
pub mod model;

/// HTTP handlers for venue endpoints
pub mod handlers;

pub use model::{Contact, Coordinates, Venue};
