use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One logged set under a workout/exercise pairing (`sets` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExerciseSet {
    pub id: i32,
    pub workout_exercises_id: i32,
    pub reps: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseSet {
    pub workout_exercises_id: i32,
    pub reps: i32,
    pub weight: f64,
}
