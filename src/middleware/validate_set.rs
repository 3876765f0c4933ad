use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use super::body::{as_i32, buffer_json_body, is_falsy};
use crate::app::AppState;
use crate::error::ApiError;

const REQUIRED_FIELDS: [&str; 3] = ["workout_exercises_id", "reps", "weight"];

/// Guard for `POST /sets`.
///
/// Zero reps or weight count as missing (see `is_falsy`); negative values
/// are rejected explicitly.
pub fn validate_set(payload: &Value) -> Result<(), ApiError> {
    for field in REQUIRED_FIELDS {
        if is_falsy(payload.get(field)) {
            return Err(ApiError::field_error(field, "is required"));
        }
    }

    for field in REQUIRED_FIELDS {
        if !payload[field].is_number() {
            return Err(ApiError::field_error(field, "must be a number"));
        }
    }

    for field in ["reps", "weight"] {
        if payload[field].as_f64().is_some_and(|n| n < 0.0) {
            return Err(ApiError::field_error(field, "must not be negative"));
        }
    }

    if as_i32(&payload["workout_exercises_id"]).is_none() {
        return Err(ApiError::field_error("workout_exercises_id", "must be a whole number id"));
    }
    if as_i32(&payload["reps"]).is_none() {
        return Err(ApiError::field_error("reps", "must be a whole number"));
    }

    Ok(())
}

/// Rejects invalid sets before the handler touches the store
pub async fn validate_set_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (request, payload) = buffer_json_body(request, state.max_request_size_bytes).await?;

    validate_set(&payload).map_err(|err| {
        tracing::warn!("Rejected set: {}", err);
        err
    })?;

    Ok(next.run(request).await)
}
