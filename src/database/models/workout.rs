use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Body of `POST /workouts`; a missing or null date means "today"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
    pub name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Body of `PATCH /workouts/:id/notes`; null clears the notes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesUpdate {
    #[serde(default)]
    pub notes: Option<String>,
}

/// One row of `GET /workouts/:id`.
///
/// Exercises linked to the workout with no sets logged yet still produce a
/// row, with `reps` and `weight` set to null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutDetailRow {
    pub workout_exercise_id: i32,
    pub exercise_name: String,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
}
