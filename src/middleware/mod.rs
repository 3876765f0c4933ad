pub mod body;
pub mod validate_set;
pub mod validate_workout_exercise;

pub use body::buffer_json_body;
pub use validate_set::{validate_set, validate_set_middleware};
pub use validate_workout_exercise::{validate_workout_exercise, validate_workout_exercise_middleware};
