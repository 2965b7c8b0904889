use axum::{
    body::Bytes,
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Check that a create request declares a JSON body.
///
/// A missing or unreadable header is a bad request; a readable media type
/// other than `application/json` is unsupported.
pub fn require_json(headers: &HeaderMap) -> Result<(), AppError> {
    let raw = headers
        .get(header::CONTENT_TYPE)
        .ok_or_else(|| AppError::BadRequest("missing Content-Type".to_string()))?
        .to_str()
        .map_err(|_| AppError::BadRequest("invalid Content-Type".to_string()))?;

    let media_type = raw.split(';').next().unwrap_or_default().trim();
    if media_type.is_empty() {
        return Err(AppError::BadRequest("missing Content-Type".to_string()));
    }
    if !media_type.eq_ignore_ascii_case("application/json") {
        return Err(AppError::UnsupportedMediaType(
            "expect application/json Content-Type".to_string(),
        ));
    }
    Ok(())
}

/// Decode a JSON body. Fields left out of the body take their zero values.
pub fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("problem with request body: {e}")))
}

/// Parse a path id. Only plain decimal digits are accepted, so `+1` or `-1`
/// are rejected rather than read as numbers.
pub fn path_id(raw: &str) -> Result<u64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!("invalid id: {raw}")));
    }
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {raw}")))
}
