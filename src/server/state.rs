/**
 * Application State
 *
 * This module defines the shared state handed to every handler.
 *
 * # Thread Safety
 *
 * Nothing in the state is mutated after startup. The pool is internally
 * synchronized, and the auth keys are read-only configuration behind an
 * `Arc`, so no locking is needed anywhere in the request path. Each
 * request's authentication decision is computed fresh from the database
 * and the token payload.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::tokens::AuthKeys;
use crate::server::config::Config;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Token signing/verification keys and lifetime, built once at startup
    pub auth: Arc<AuthKeys>,
}

impl AppState {
    /// Build state from loaded configuration and a connected pool
    pub fn new(config: &Config, pool: PgPool) -> Self {
        Self {
            pool,
            auth: Arc::new(AuthKeys::new(&config.jwt_secret, config.token_lifetime)),
        }
    }
}
