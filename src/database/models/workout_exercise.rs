use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutExercise {
    pub id: i32,
    pub workout_id: i32,
    pub exercise_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutExercise {
    pub workout_id: i32,
    pub exercise_id: i32,
}
