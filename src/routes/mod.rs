//! Routes Module
//!
//! Router assembly: which handler serves which path, which routes sit
//! behind the authentication gate, and the layers applied to all of them.

/// Router construction
pub mod router;

pub use router::create_router;
