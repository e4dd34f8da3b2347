/**
 * Router Configuration
 *
 * This module assembles the full Axum router.
 *
 * # Routes
 *
 * ## Public
 *
 * - `POST /api/auth/login` - Credential verification, token issuance
 * - `POST /api/users` - Create a user account
 * - `GET /api/venues` - List venues
 * - `GET /api/venues/{id}` - One venue
 *
 * ## Protected (bearer token required)
 *
 * - `GET /api/users/me` - Current user's identity
 * - `POST /api/venues` - Create a venue
 * - `DELETE /api/venues/{id}` - Delete a venue
 *
 * The protected routes sit behind [`require_auth`]; a request without a
 * valid token is rejected before any handler runs.
 *
 * # Layers
 *
 * A request timeout from configuration and HTTP tracing are applied to
 * the whole router. Unknown paths fall through to a JSON 404.
 */

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::handlers::login;
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::users::handlers::{create_user_handler, get_me};
use crate::venues::handlers::{
    create_venue_handler, delete_venue_handler, get_venue_handler, list_venues_handler,
};

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request_timeout` - Timeout applied to every request
pub fn create_router(state: AppState, request_timeout: Duration) -> Router<()> {
    let protected = Router::new()
        .route("/api/users/me", get(get_me))
        .route("/api/venues", post(create_venue_handler))
        .route("/api/venues/{id}", delete(delete_venue_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/users", post(create_user_handler))
        .route("/api/venues", get(list_venues_handler))
        .route("/api/venues/{id}", get(get_venue_handler));

    public
        .merge(protected)
        .fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Catch-all for requests to non-existent endpoints
async fn endpoint_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Endpoint Not Found" })),
    )
}
