//! Middleware Module
//!
//! HTTP middleware applied before handlers run.
//!
//! - **`auth`** - Bearer-token verification gate for protected routes

pub mod auth;

pub use auth::{require_auth, AuthUser};
