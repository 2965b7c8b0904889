use aerodesk_core::User;
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
    let item = get(get_user).put(update_user).delete(delete_user);

    Router::new()
        .route("/users", post(create_user))
        .route("/users/", post(create_user))
        .route("/users/{id}", item.clone())
        .route("/users/{id}/", item)
}

async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<JsonBody<User>, AppError> {
    info!("handling user create");
    require_json(&headers)?;
    let user: User = json_body(&body)?;
    Ok(JsonBody(state.storage.users.create(user)))
}

async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<User>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling user get {}", id);
    Ok(JsonBody(state.storage.users.get(id)?))
}

/// The body is decoded whatever its Content-Type says.
async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<JsonBody<User>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling user update {}", id);
    let user: User = json_body(&body)?;
    Ok(JsonBody(state.storage.users.update(id, user)?))
}

async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<u64>, AppError> {
    let id = path_id(&id?.0)?;
    info!("handling user delete {}", id);
    state.storage.users.delete(id)?;
    Ok(JsonBody(id))
}
