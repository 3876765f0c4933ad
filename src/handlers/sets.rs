use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::app::AppState;
use crate::database::models::NewExerciseSet;
use crate::error::ApiError;

/// POST /sets - log one set. Runs behind `validate_set_middleware`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewExerciseSet>, JsonRejection>,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    let Json(set) = payload?;
    let created = state.store.add_set(set).await?;
    tracing::info!(
        "Logged set {} ({} x {}) under workout_exercise {}",
        created.id,
        created.reps,
        created.weight,
        created.workout_exercises_id
    );
    Ok((StatusCode::CREATED, Json("Set added")))
}
