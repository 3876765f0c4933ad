use async_trait::async_trait;
use chrono::Local;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::manager::DatabaseError;
use super::models::exercise::{DEFAULT_EQUIPMENT, DEFAULT_MUSCLE_GROUP};
use super::models::{
    Exercise, ExerciseSet, NewExerciseSet, NewWorkout, NewWorkoutExercise, Workout,
    WorkoutDetailRow, WorkoutExercise, WorkoutExerciseEntry,
};
use super::store::WorkoutStore;

/// Exercise catalog loaded into a fresh in-memory store: (name, equipment, muscle group)
pub const SEED_EXERCISES: &[(&str, &str, &str)] = &[
    ("Back Squat", "Barbell", "Legs"),
    ("Front Squat", "Barbell", "Legs"),
    ("Deadlift", "Barbell", "Full Body"),
    ("Romanian Deadlift", "Barbell", "Hamstrings"),
    ("Bench Press", "Barbell", "Chest"),
    ("Overhead Press", "Barbell", "Shoulders"),
    ("Barbell Row", "Barbell", "Back"),
    ("Power Clean", "Barbell", "Full Body"),
    ("Pull Up", "Bodyweight", "Back"),
    ("Dip", "Bodyweight", "Chest"),
    ("Dumbbell Curl", "Dumbbell", "Biceps"),
    ("Goblet Squat", "Kettlebell", "Legs"),
];

#[derive(Debug, Default)]
struct Tables {
    workouts: BTreeMap<i32, Workout>,
    exercises: BTreeMap<i32, Exercise>,
    workout_exercises: BTreeMap<i32, WorkoutExercise>,
    sets: BTreeMap<i32, ExerciseSet>,
    next_workout_id: i32,
    next_exercise_id: i32,
    next_workout_exercise_id: i32,
    next_set_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl Tables {
    fn insert_exercise(&mut self, name: &str, equipment: Option<&str>, muscle_group: Option<&str>) {
        let id = next_id(&mut self.next_exercise_id);
        self.exercises.insert(
            id,
            Exercise {
                id,
                name: name.to_string(),
                equipment: equipment.unwrap_or(DEFAULT_EQUIPMENT).to_string(),
                muscle_group: muscle_group.unwrap_or(DEFAULT_MUSCLE_GROUP).to_string(),
            },
        );
    }

    fn link_ids_for_workout(&self, workout_id: i32) -> Vec<i32> {
        self.workout_exercises
            .values()
            .filter(|link| link.workout_id == workout_id)
            .map(|link| link.id)
            .collect()
    }

    fn sets_for_link(&self, workout_exercise_id: i32) -> impl Iterator<Item = &ExerciseSet> {
        self.sets
            .values()
            .filter(move |set| set.workout_exercises_id == workout_exercise_id)
    }
}

/// `WorkoutStore` kept in process memory.
///
/// Enforces the same foreign keys and column defaults as the SQL schema.
/// Every operation holds the table lock for its whole duration, so cascades
/// are atomic.
#[derive(Debug)]
pub struct MemoryWorkoutStore {
    tables: RwLock<Tables>,
}

impl MemoryWorkoutStore {
    /// Store with an empty exercise catalog
    pub fn empty() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Store with the standard exercise catalog
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for (name, equipment, muscle_group) in SEED_EXERCISES {
            tables.insert_exercise(name, Some(*equipment), Some(*muscle_group));
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Add a catalog entry, applying the schema defaults for missing columns
    pub async fn add_exercise(&self, name: &str, equipment: Option<&str>, muscle_group: Option<&str>) {
        self.tables
            .write()
            .await
            .insert_exercise(name, equipment, muscle_group);
    }

    /// Number of rows in the `sets` table
    pub async fn set_count(&self) -> usize {
        self.tables.read().await.sets.len()
    }

    /// Number of rows in the `workout_exercises` table
    pub async fn workout_exercise_count(&self) -> usize {
        self.tables.read().await.workout_exercises.len()
    }
}

#[async_trait]
impl WorkoutStore for MemoryWorkoutStore {
    async fn list_workouts(&self) -> Result<Vec<Workout>, DatabaseError> {
        Ok(self.tables.read().await.workouts.values().cloned().collect())
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, DatabaseError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_workout_id);
        let row = Workout {
            id,
            name: workout.name,
            date: workout.date.unwrap_or_else(|| Local::now().date_naive()),
            notes: None,
        };
        tables.workouts.insert(id, row.clone());
        debug!("Inserted workout {} ({})", row.id, row.name);
        Ok(row)
    }

    async fn workout_detail(&self, workout_id: i32) -> Result<Vec<WorkoutDetailRow>, DatabaseError> {
        let tables = self.tables.read().await;
        let mut rows = Vec::new();

        for link in tables.workout_exercises.values().filter(|l| l.workout_id == workout_id) {
            let Some(exercise) = tables.exercises.get(&link.exercise_id) else {
                continue;
            };

            let mut sets = tables.sets_for_link(link.id).peekable();
            if sets.peek().is_none() {
                rows.push(WorkoutDetailRow {
                    workout_exercise_id: link.id,
                    exercise_name: exercise.name.clone(),
                    reps: None,
                    weight: None,
                });
                continue;
            }

            for set in sets {
                rows.push(WorkoutDetailRow {
                    workout_exercise_id: link.id,
                    exercise_name: exercise.name.clone(),
                    reps: Some(set.reps),
                    weight: Some(set.weight),
                });
            }
        }

        Ok(rows)
    }

    async fn workout_exercises(
        &self,
        workout_id: i32,
    ) -> Result<Vec<WorkoutExerciseEntry>, DatabaseError> {
        let tables = self.tables.read().await;
        let entries = tables
            .workout_exercises
            .values()
            .filter(|link| link.workout_id == workout_id)
            .filter_map(|link| {
                tables.exercises.get(&link.exercise_id).map(|e| WorkoutExerciseEntry {
                    workout_exercise_id: link.id,
                    id: e.id,
                    name: e.name.clone(),
                    equipment: e.equipment.clone(),
                    muscle_group: e.muscle_group.clone(),
                })
            })
            .collect();
        Ok(entries)
    }

    async fn update_notes(
        &self,
        workout_id: i32,
        notes: Option<String>,
    ) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;
        match tables.workouts.get_mut(&workout_id) {
            Some(workout) => {
                workout.notes = notes;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>, DatabaseError> {
        Ok(self.tables.read().await.exercises.values().cloned().collect())
    }

    async fn add_workout_exercise(
        &self,
        link: NewWorkoutExercise,
    ) -> Result<WorkoutExercise, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.workouts.contains_key(&link.workout_id) {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "workout_exercises.workout_id references missing workout {}",
                link.workout_id
            )));
        }
        if !tables.exercises.contains_key(&link.exercise_id) {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "workout_exercises.exercise_id references missing exercise {}",
                link.exercise_id
            )));
        }

        let id = next_id(&mut tables.next_workout_exercise_id);
        let row = WorkoutExercise {
            id,
            workout_id: link.workout_id,
            exercise_id: link.exercise_id,
        };
        tables.workout_exercises.insert(id, row.clone());
        Ok(row)
    }

    async fn add_set(&self, set: NewExerciseSet) -> Result<ExerciseSet, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.workout_exercises.contains_key(&set.workout_exercises_id) {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "sets.workout_exercises_id references missing workout_exercise {}",
                set.workout_exercises_id
            )));
        }

        let id = next_id(&mut tables.next_set_id);
        let row = ExerciseSet {
            id,
            workout_exercises_id: set.workout_exercises_id,
            reps: set.reps,
            weight: set.weight,
        };
        tables.sets.insert(id, row.clone());
        Ok(row)
    }

    async fn delete_workout(&self, workout_id: i32) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;

        let link_ids = tables.link_ids_for_workout(workout_id);
        tables
            .sets
            .retain(|_, set| !link_ids.contains(&set.workout_exercises_id));
        tables
            .workout_exercises
            .retain(|_, link| link.workout_id != workout_id);

        Ok(u64::from(tables.workouts.remove(&workout_id).is_some()))
    }

    async fn delete_workout_exercise(&self, workout_exercise_id: i32) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;

        tables
            .sets
            .retain(|_, set| set.workout_exercises_id != workout_exercise_id);

        Ok(u64::from(
            tables.workout_exercises.remove(&workout_exercise_id).is_some(),
        ))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_workout(name: &str) -> NewWorkout {
        NewWorkout {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9),
        }
    }

    #[tokio::test]
    async fn seeded_catalog_matches_migration() {
        let migration = include_str!("../../migrations/0002_seed_exercises.sql");
        let store = MemoryWorkoutStore::seeded();
        let exercises = store.list_exercises().await.unwrap();

        assert_eq!(exercises.len(), SEED_EXERCISES.len());
        for exercise in exercises {
            let row = format!(
                "('{}', '{}', '{}')",
                exercise.name, exercise.equipment, exercise.muscle_group
            );
            assert!(migration.contains(&row), "missing from migration: {}", row);
        }
    }

    #[tokio::test]
    async fn exercise_defaults_apply() {
        let store = MemoryWorkoutStore::empty();
        store.add_exercise("Thruster", None, None).await;

        let exercises = store.list_exercises().await.unwrap();
        assert_eq!(exercises[0].equipment, "Barbell");
        assert_eq!(exercises[0].muscle_group, "Full Body");
    }

    #[tokio::test]
    async fn workout_date_defaults_to_today() {
        let store = MemoryWorkoutStore::seeded();
        let row = store
            .create_workout(NewWorkout { name: "Legs".to_string(), date: None })
            .await
            .unwrap();
        assert_eq!(row.date, Local::now().date_naive());
        assert_eq!(row.notes, None);
    }

    #[tokio::test]
    async fn rejects_links_to_missing_parents() {
        let store = MemoryWorkoutStore::seeded();
        let result = store
            .add_workout_exercise(NewWorkoutExercise { workout_id: 42, exercise_id: 1 })
            .await;
        assert!(matches!(result, Err(DatabaseError::ForeignKeyViolation(_))));

        let workout = store.create_workout(new_workout("Push")).await.unwrap();
        let result = store
            .add_workout_exercise(NewWorkoutExercise { workout_id: workout.id, exercise_id: 999 })
            .await;
        assert!(matches!(result, Err(DatabaseError::ForeignKeyViolation(_))));

        let result = store
            .add_set(NewExerciseSet { workout_exercises_id: 5, reps: 5, weight: 100.0 })
            .await;
        assert!(matches!(result, Err(DatabaseError::ForeignKeyViolation(_))));
    }

    #[tokio::test]
    async fn detail_includes_exercises_without_sets() {
        let store = MemoryWorkoutStore::seeded();
        let workout = store.create_workout(new_workout("Pull")).await.unwrap();
        let rows_link = store
            .add_workout_exercise(NewWorkoutExercise { workout_id: workout.id, exercise_id: 3 })
            .await
            .unwrap();
        let bare_link = store
            .add_workout_exercise(NewWorkoutExercise { workout_id: workout.id, exercise_id: 9 })
            .await
            .unwrap();
        for reps in [5, 3] {
            store
                .add_set(NewExerciseSet { workout_exercises_id: rows_link.id, reps, weight: 140.0 })
                .await
                .unwrap();
        }

        let rows = store.workout_detail(workout.id).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].exercise_name, "Deadlift");
        assert_eq!(rows[0].reps, Some(5));
        assert_eq!(rows[1].reps, Some(3));
        assert_eq!(rows[2].workout_exercise_id, bare_link.id);
        assert_eq!(rows[2].exercise_name, "Pull Up");
        assert_eq!(rows[2].reps, None);
        assert_eq!(rows[2].weight, None);
    }

    #[tokio::test]
    async fn delete_workout_cascades_only_its_rows() {
        let store = MemoryWorkoutStore::seeded();
        let doomed = store.create_workout(new_workout("Doomed")).await.unwrap();
        let kept = store.create_workout(new_workout("Kept")).await.unwrap();

        for workout_id in [doomed.id, kept.id] {
            let link = store
                .add_workout_exercise(NewWorkoutExercise { workout_id, exercise_id: 1 })
                .await
                .unwrap();
            store
                .add_set(NewExerciseSet { workout_exercises_id: link.id, reps: 8, weight: 60.0 })
                .await
                .unwrap();
        }

        assert_eq!(store.delete_workout(doomed.id).await.unwrap(), 1);
        assert_eq!(store.set_count().await, 1);
        assert_eq!(store.workout_exercise_count().await, 1);
        assert_eq!(store.workout_detail(kept.id).await.unwrap().len(), 1);

        let remaining = store.list_workouts().await.unwrap();
        assert_eq!(remaining, vec![kept]);

        assert_eq!(store.delete_workout(doomed.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_workout_exercise_removes_its_sets() {
        let store = MemoryWorkoutStore::seeded();
        let workout = store.create_workout(new_workout("Arms")).await.unwrap();
        let link = store
            .add_workout_exercise(NewWorkoutExercise { workout_id: workout.id, exercise_id: 11 })
            .await
            .unwrap();
        store
            .add_set(NewExerciseSet { workout_exercises_id: link.id, reps: 12, weight: 15.0 })
            .await
            .unwrap();

        assert_eq!(store.delete_workout_exercise(link.id).await.unwrap(), 1);
        assert_eq!(store.set_count().await, 0);
        assert!(store.workout_exercises(workout.id).await.unwrap().is_empty());
        assert_eq!(store.delete_workout_exercise(link.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_notes_reports_missing_workout() {
        let store = MemoryWorkoutStore::seeded();
        assert_eq!(store.update_notes(1, Some("felt strong".to_string())).await.unwrap(), 0);

        let workout = store.create_workout(new_workout("Legs")).await.unwrap();
        assert_eq!(
            store.update_notes(workout.id, Some("felt strong".to_string())).await.unwrap(),
            1
        );
        let listed = store.list_workouts().await.unwrap();
        assert_eq!(listed[0].notes.as_deref(), Some("felt strong"));
    }
}
