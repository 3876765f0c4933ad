use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{
    Exercise, ExerciseSet, NewExerciseSet, NewWorkout, NewWorkoutExercise, Workout,
    WorkoutDetailRow, WorkoutExercise, WorkoutExerciseEntry,
};

/// Data-access operations behind the HTTP handlers.
///
/// Update and delete methods return the number of rows affected on the
/// targeted row so callers can tell "not found" apart from success.
/// Cascading deletes remove children before parents and are atomic.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn list_workouts(&self) -> Result<Vec<Workout>, DatabaseError>;

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, DatabaseError>;

    /// Exercises of a workout left-joined with their sets
    async fn workout_detail(&self, workout_id: i32) -> Result<Vec<WorkoutDetailRow>, DatabaseError>;

    async fn workout_exercises(
        &self,
        workout_id: i32,
    ) -> Result<Vec<WorkoutExerciseEntry>, DatabaseError>;

    async fn update_notes(
        &self,
        workout_id: i32,
        notes: Option<String>,
    ) -> Result<u64, DatabaseError>;

    async fn list_exercises(&self) -> Result<Vec<Exercise>, DatabaseError>;

    async fn add_workout_exercise(
        &self,
        link: NewWorkoutExercise,
    ) -> Result<WorkoutExercise, DatabaseError>;

    async fn add_set(&self, set: NewExerciseSet) -> Result<ExerciseSet, DatabaseError>;

    /// Sets, then workout_exercises, then the workout row
    async fn delete_workout(&self, workout_id: i32) -> Result<u64, DatabaseError>;

    /// Sets, then the workout_exercises row
    async fn delete_workout_exercise(&self, workout_exercise_id: i32) -> Result<u64, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// Release connections; called once during shutdown
    async fn close(&self);
}
