use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::app::AppState;
use crate::database::models::NewWorkoutExercise;
use crate::error::ApiError;

/// POST /workout_exercises - record that an exercise was performed in a workout.
/// Runs behind `validate_workout_exercise_middleware`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkoutExercise>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(link) = payload?;
    let created = state.store.add_workout_exercise(link).await?;
    tracing::info!(
        "Linked exercise {} to workout {} ({})",
        created.exercise_id,
        created.workout_id,
        created.id
    );
    Ok((StatusCode::CREATED, "Exercise added to workout"))
}

/// DELETE /workout_exercises/:id - removes its sets, then the link itself
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = path?;
    let affected = state.store.delete_workout_exercise(id).await?;
    if affected == 0 {
        tracing::warn!("Delete requested for missing workout_exercise {}", id);
        return Err(ApiError::not_found(format!("Workout exercise {} not found", id)));
    }

    Ok("Exercise removed from workout")
}
