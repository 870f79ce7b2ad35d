//! Handler for map link resolution.

use std::time::Instant;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Uri,
};
use tracing::{info, warn};

use crate::api::dto::locate::LocateResponse;
use crate::domain::entities::ResolvedLocation;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a map URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// The URL as plain text, e.g. `https://maps.app.goo.gl/AbC123`.
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "result": {
///     "place_type": "place",
///     "lat": 40.0,
///     "lon": -73.5,
///     "zoom": "15z",
///     "query": "Some Place"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns `{ "ok": false, "error": { "code", "message" } }` with the status
/// and code listed in [`crate::error`].
pub async fn locate_handler(
    State(state): State<AppState>,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LocateResponse>, AppError> {
    let started = Instant::now();

    let outcome = locate(&state, body).await;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match &outcome {
        Ok(location) => info!(
            path = %uri.path(),
            place_type = %location.kind,
            elapsed_ms,
            "Query handled"
        ),
        Err(err) => warn!(
            path = %uri.path(),
            code = err.code(),
            error = %err,
            elapsed_ms,
            "Query failed"
        ),
    }

    outcome.map(|location| Json(location.into()))
}

async fn locate(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<ResolvedLocation, AppError> {
    let body = body.map_err(|rejection| AppError::body_unreadable(rejection.body_text()))?;

    state.location_service.locate(&body).await
}
