pub mod exercise;
pub mod set;
pub mod workout;
pub mod workout_exercise;

pub use exercise::{Exercise, WorkoutExerciseEntry};
pub use set::{ExerciseSet, NewExerciseSet};
pub use workout::{NewWorkout, NotesUpdate, Workout, WorkoutDetailRow};
pub use workout_exercise::{NewWorkoutExercise, WorkoutExercise};
