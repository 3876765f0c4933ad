use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_EQUIPMENT: &str = "Barbell";
pub const DEFAULT_MUSCLE_GROUP: &str = "Full Body";

/// Catalog entry for a movement; shared by all workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub equipment: String,
    pub muscle_group: String,
}

/// Exercise performed in a workout, tagged with the link row it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutExerciseEntry {
    pub workout_exercise_id: i32,
    pub id: i32,
    pub name: String,
    pub equipment: String,
    pub muscle_group: String,
}
