use aerodesk_core::Flight;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::{
    decode::{json_body, path_id, require_json},
    encode::JsonBody,
    error::AppError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    let item = get(get_flight).put(update_flight).delete(delete_flight);

    Router::new()
        .route("/flights", post(create_flight))
        .route("/flights/", post(create_flight))
        .route("/flights/{id}", item.clone())
        .route("/flights/{id}/", item)
}

async fn create_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<JsonBody<Flight>, AppError> {
    info!("handling flight create");
    require_json(&headers)?;
    let flight: Flight = json_body(&body)?;
    Ok(JsonBody(state.storage.flights.create(flight)))
}

async fn get_flight(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<Flight>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling flight get {}", id);
    Ok(JsonBody(state.storage.flights.get(id)?))
}

/// The body is decoded whatever its Content-Type says.
async fn update_flight(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<JsonBody<Flight>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling flight update {}", id);
    let flight: Flight = json_body(&body)?;
    Ok(JsonBody(state.storage.flights.update(id, flight)?))
}

async fn delete_flight(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<u64>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling flight delete {}", id);
    state.storage.flights.delete(id)?;
    Ok(JsonBody(id))
}
