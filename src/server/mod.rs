//! Server Module
//!
//! Configuration, application state, and the server lifecycle.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs       - Module exports and documentation
//! ├── config.rs    - Environment configuration, read once at startup
//! ├── state.rs     - Shared application state
//! └── lifecycle.rs - Explicit start/stop server object
//! ```

/// Environment configuration
pub mod config;

/// Shared application state
pub mod state;

/// Server lifecycle (start/stop)
pub mod lifecycle;

pub use config::Config;
pub use lifecycle::Server;
pub use state::AppState;
