/**
 * Venue Handlers
 *
 * HTTP handlers for the venue resource.
 *
 * # Routes
 *
 * - `GET /api/venues` - List all venues (public)
 * - `GET /api/venues/{id}` - One venue, 404 when missing (public)
 * - `POST /api/venues` - Create a venue (requires bearer token)
 * - `DELETE /api/venues/{id}` - Delete a venue (requires bearer token)
 *
 * # Validation
 *
 * Only `name` is required on creation; `categories` and `contact` default
 * to empty. Lookup results are always null-checked, so a miss produces a
 * 404 rather than a panic.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::venues::model::{
    create_venue, delete_venue, get_venue_by_id, list_venues, Contact, Venue,
};

/// Create-venue request body
///
/// `name` is validated by hand so its absence yields a 400 naming the
/// field. Everything else is optional.
#[derive(Debug, Deserialize)]
pub struct CreateVenueRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
}

/// List response wrapper, matching the original API shape
#[derive(Debug, Serialize)]
pub struct VenueList {
    pub venues: Vec<Venue>,
}

/// List all venues
pub async fn list_venues_handler(
    State(state): State<AppState>,
) -> Result<Json<VenueList>, ApiError> {
    let venues = list_venues(&state.pool).await?;
    Ok(Json(VenueList { venues }))
}

/// Get one venue by id
///
/// # Errors
///
/// * `404 Not Found` - No venue with this id
pub async fn get_venue_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Venue>, ApiError> {
    let venue = get_venue_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound { resource: "venue" })?;

    Ok(Json(venue))
}

/// Create a venue
///
/// # Errors
///
/// * `400 Bad Request` - Missing `name`
/// * `500 Internal Server Error` - Storage failure
pub async fn create_venue_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateVenueRequest>,
) -> Result<(StatusCode, Json<Venue>), ApiError> {
    let name = request
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or(ApiError::Validation { field: "name" })?;

    let venue = create_venue(&state.pool, name, &request.categories, &request.contact).await?;

    tracing::info!("venue created: {} ({})", venue.name, venue.id);

    Ok((StatusCode::CREATED, Json(venue)))
}

/// Delete a venue
///
/// # Errors
///
/// * `404 Not Found` - No venue with this id
pub async fn delete_venue_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !delete_venue(&state.pool, id).await? {
        return Err(ApiError::NotFound { resource: "venue" });
    }

    tracing::info!("venue deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
