use aerodesk_core::Ticket;
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
    let item = get(get_ticket).put(update_ticket).delete(delete_ticket);

    Router::new()
        .route("/tickets", post(create_ticket))
        .route("/tickets/", post(create_ticket))
        .route("/tickets/{id}", item.clone())
        .route("/tickets/{id}/", item)
}

/// Stores the ticket with the flight and user exactly as sent. Neither is
/// looked up, and the flight's seat counts are left untouched.
async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<JsonBody<Ticket>, AppError> {
    info!("handling ticket create");
    require_json(&headers)?;
    let ticket: Ticket = json_body(&body)?;
    Ok(JsonBody(state.storage.tickets.create(ticket)))
}

async fn get_ticket(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<Ticket>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling ticket get {}", id);
    Ok(JsonBody(state.storage.tickets.get(id)?))
}

/// The body is decoded whatever its Content-Type says.
async fn update_ticket(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<JsonBody<Ticket>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling ticket update {}", id);
    let ticket: Ticket = json_body(&body)?;
    Ok(JsonBody(state.storage.tickets.update(id, ticket)?))
}

async fn delete_ticket(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<u64>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling ticket delete {}", id);
    state.storage.tickets.delete(id)?;
    Ok(JsonBody(id))
}
