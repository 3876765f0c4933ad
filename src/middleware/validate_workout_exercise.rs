use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use super::body::{as_i32, buffer_json_body, is_falsy};
use crate::app::AppState;
use crate::error::ApiError;

const REQUIRED_FIELDS: [&str; 2] = ["workout_id", "exercise_id"];

/// Guard for `POST /workout_exercises`: both ids present and numeric
pub fn validate_workout_exercise(payload: &Value) -> Result<(), ApiError> {
    for field in REQUIRED_FIELDS {
        let value = payload.get(field);

        if is_falsy(value) {
            return Err(ApiError::field_error(field, "is required"));
        }
        let Some(value) = value.filter(|v| v.is_number()) else {
            return Err(ApiError::field_error(field, "must be a number"));
        };
        if as_i32(value).is_none() {
            return Err(ApiError::field_error(field, "must be a whole number id"));
        }
    }

    Ok(())
}

/// Rejects invalid workout/exercise links before the handler touches the store
pub async fn validate_workout_exercise_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (request, payload) = buffer_json_body(request, state.max_request_size_bytes).await?;

    validate_workout_exercise(&payload).map_err(|err| {
        tracing::warn!("Rejected workout_exercise link: {}", err);
        err
    })?;

    Ok(next.run(request).await)
}
