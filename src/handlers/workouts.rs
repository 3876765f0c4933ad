use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::app::AppState;
use crate::database::models::{NewWorkout, NotesUpdate, Workout, WorkoutDetailRow, WorkoutExerciseEntry};
use crate::error::ApiError;

/// GET /workouts - every workout row
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = state.store.list_workouts().await?;
    Ok(Json(workouts))
}

/// POST /workouts - create a workout
///
/// Expected Input:
/// ```json
/// { "name": "Leg day", "date": "2024-03-09" }
/// ```
/// `date` may be omitted or null, in which case today's date is stored.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkout>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(workout) = payload?;
    let created = state.store.create_workout(workout).await?;
    tracing::info!("Created workout {} ({})", created.id, created.name);
    Ok((StatusCode::CREATED, "Workout added"))
}

/// GET /workouts/:id - exercises of a workout with their sets.
///
/// One row per set; exercises without sets yield a single row with null
/// reps/weight. An unknown workout id yields an empty array.
pub async fn detail(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<WorkoutDetailRow>>, ApiError> {
    let Path(id) = path?;
    let rows = state.store.workout_detail(id).await?;
    Ok(Json(rows))
}

/// GET /workouts/:id/exercises
pub async fn exercises(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<WorkoutExerciseEntry>>, ApiError> {
    let Path(id) = path?;
    let entries = state.store.workout_exercises(id).await?;
    Ok(Json(entries))
}

/// PATCH /workouts/:id/notes - the only in-place update the API offers
pub async fn update_notes(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<NotesUpdate>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = path?;
    let Json(update) = payload?;

    let affected = state.store.update_notes(id, update.notes).await?;
    if affected == 0 {
        tracing::warn!("Notes update for missing workout {}", id);
        return Err(ApiError::not_found(format!("Workout {} not found", id)));
    }

    Ok("Notes updated")
}

/// DELETE /workouts/:id - removes its sets, its workout_exercises, then the workout
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = path?;
    let affected = state.store.delete_workout(id).await?;
    if affected == 0 {
        tracing::warn!("Delete requested for missing workout {}", id);
        return Err(ApiError::not_found(format!("Workout {} not found", id)));
    }

    tracing::info!("Deleted workout {}", id);
    Ok("Workout deleted")
}
