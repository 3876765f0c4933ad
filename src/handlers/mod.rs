// HTTP handlers, one module per resource.
//
// Every handler receives the shared `AppState` and talks to the store only
// through the `WorkoutStore` trait. Mutating routes for links and sets sit
// behind the validation middleware in `crate::middleware`.
pub mod exercises;
pub mod root;
pub mod sets;
pub mod shell;
pub mod workout_exercises;
pub mod workouts;
