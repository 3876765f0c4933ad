use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::models::Exercise;
use crate::error::ApiError;

/// GET /exercises - the shared exercise catalog
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = state.store.list_exercises().await?;
    Ok(Json(exercises))
}
