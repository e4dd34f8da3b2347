//! Authentication Module
//!
//! Password hashing, token issuance, and the login flow.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── password.rs - bcrypt hashing and verification
//! ├── tokens.rs   - JWT issuance and verification
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs   - Handler exports
//!     ├── types.rs - Request/response types
//!     └── login.rs - Login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username and password → credentials verified → signed
//!    token returned
//! 2. **Protected request**: bearer token → signature and expiry verified
//!    → identity attached to the request → handler runs
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (work factor 10) before storage
//! - Tokens are stateless JWTs that expire after the configured lifetime
//!   (one day by default); there is no server-side revocation list
//! - Invalid credentials always return 401 with a generic message

/// bcrypt hashing and verification
pub mod password;

/// JWT token generation and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::login;
pub use handlers::types::{AuthResponse, LoginRequest};
pub use tokens::{AuthKeys, Claims};
