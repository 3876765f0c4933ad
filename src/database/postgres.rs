use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use super::manager::{DatabaseError, DatabaseManager};
use super::models::{
    Exercise, ExerciseSet, NewExerciseSet, NewWorkout, NewWorkoutExercise, Workout,
    WorkoutDetailRow, WorkoutExercise, WorkoutExerciseEntry,
};
use super::store::WorkoutStore;
use crate::config::DatabaseConfig;

const SELECT_WORKOUTS: &str = "SELECT id, name, date, notes FROM workouts ORDER BY id";

const INSERT_WORKOUT: &str = r#"
    INSERT INTO workouts (name, date)
    VALUES ($1, COALESCE($2, CURRENT_DATE))
    RETURNING id, name, date, notes
"#;

const SELECT_WORKOUT_DETAIL: &str = r#"
    SELECT
        we.id AS workout_exercise_id,
        e.name AS exercise_name,
        s.reps,
        s.weight
    FROM workout_exercises we
    JOIN exercises e ON e.id = we.exercise_id
    LEFT JOIN sets s ON s.workout_exercises_id = we.id
    WHERE we.workout_id = $1
    ORDER BY we.id, s.id
"#;

const SELECT_WORKOUT_EXERCISES: &str = r#"
    SELECT
        we.id AS workout_exercise_id,
        e.id,
        e.name,
        e.equipment,
        e.muscle_group
    FROM workout_exercises we
    JOIN exercises e ON e.id = we.exercise_id
    WHERE we.workout_id = $1
    ORDER BY we.id
"#;

const UPDATE_WORKOUT_NOTES: &str = "UPDATE workouts SET notes = $1 WHERE id = $2";

const SELECT_EXERCISES: &str =
    "SELECT id, name, equipment, muscle_group FROM exercises ORDER BY id";

const INSERT_WORKOUT_EXERCISE: &str = r#"
    INSERT INTO workout_exercises (workout_id, exercise_id)
    VALUES ($1, $2)
    RETURNING id, workout_id, exercise_id
"#;

const INSERT_SET: &str = r#"
    INSERT INTO sets (workout_exercises_id, reps, weight)
    VALUES ($1, $2, $3)
    RETURNING id, workout_exercises_id, reps, weight
"#;

const DELETE_SETS_FOR_WORKOUT: &str = r#"
    DELETE FROM sets
    WHERE workout_exercises_id IN (
        SELECT id FROM workout_exercises WHERE workout_id = $1
    )
"#;

const DELETE_WORKOUT_EXERCISES_FOR_WORKOUT: &str =
    "DELETE FROM workout_exercises WHERE workout_id = $1";

const DELETE_WORKOUT: &str = "DELETE FROM workouts WHERE id = $1";

const DELETE_SETS_FOR_WORKOUT_EXERCISE: &str =
    "DELETE FROM sets WHERE workout_exercises_id = $1";

const DELETE_WORKOUT_EXERCISE: &str = "DELETE FROM workout_exercises WHERE id = $1";

/// `WorkoutStore` over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgWorkoutStore {
    pool: PgPool,
}

impl PgWorkoutStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool and, when configured, bring the schema up to date
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::connect(config).await?;
        if config.run_migrations {
            DatabaseManager::migrate(&pool).await?;
        }
        Ok(Self::new(pool))
    }
}

/// Surface foreign key violations as their own variant
fn map_insert_error(err: sqlx::Error) -> DatabaseError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return DatabaseError::ForeignKeyViolation(db_err.message().to_string());
        }
    }
    DatabaseError::Sqlx(err)
}

#[async_trait]
impl WorkoutStore for PgWorkoutStore {
    async fn list_workouts(&self) -> Result<Vec<Workout>, DatabaseError> {
        let rows = sqlx::query_as::<_, Workout>(SELECT_WORKOUTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, DatabaseError> {
        let row = sqlx::query_as::<_, Workout>(INSERT_WORKOUT)
            .bind(&workout.name)
            .bind(workout.date)
            .fetch_one(&self.pool)
            .await?;
        debug!("Inserted workout {} ({})", row.id, row.name);
        Ok(row)
    }

    async fn workout_detail(&self, workout_id: i32) -> Result<Vec<WorkoutDetailRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, WorkoutDetailRow>(SELECT_WORKOUT_DETAIL)
            .bind(workout_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn workout_exercises(
        &self,
        workout_id: i32,
    ) -> Result<Vec<WorkoutExerciseEntry>, DatabaseError> {
        let rows = sqlx::query_as::<_, WorkoutExerciseEntry>(SELECT_WORKOUT_EXERCISES)
            .bind(workout_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update_notes(
        &self,
        workout_id: i32,
        notes: Option<String>,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(UPDATE_WORKOUT_NOTES)
            .bind(notes)
            .bind(workout_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>, DatabaseError> {
        let rows = sqlx::query_as::<_, Exercise>(SELECT_EXERCISES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn add_workout_exercise(
        &self,
        link: NewWorkoutExercise,
    ) -> Result<WorkoutExercise, DatabaseError> {
        let row = sqlx::query_as::<_, WorkoutExercise>(INSERT_WORKOUT_EXERCISE)
            .bind(link.workout_id)
            .bind(link.exercise_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)?;
        debug!(
            "Linked exercise {} to workout {} as {}",
            row.exercise_id, row.workout_id, row.id
        );
        Ok(row)
    }

    async fn add_set(&self, set: NewExerciseSet) -> Result<ExerciseSet, DatabaseError> {
        let row = sqlx::query_as::<_, ExerciseSet>(INSERT_SET)
            .bind(set.workout_exercises_id)
            .bind(set.reps)
            .bind(set.weight)
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)?;
        debug!("Logged set {} under workout_exercise {}", row.id, row.workout_exercises_id);
        Ok(row)
    }

    async fn delete_workout(&self, workout_id: i32) -> Result<u64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let sets = sqlx::query(DELETE_SETS_FOR_WORKOUT)
            .bind(workout_id)
            .execute(&mut *tx)
            .await?;
        let links = sqlx::query(DELETE_WORKOUT_EXERCISES_FOR_WORKOUT)
            .bind(workout_id)
            .execute(&mut *tx)
            .await?;
        let workouts = sqlx::query(DELETE_WORKOUT)
            .bind(workout_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "Deleted workout {}: {} sets, {} workout_exercises, {} workouts",
            workout_id,
            sets.rows_affected(),
            links.rows_affected(),
            workouts.rows_affected()
        );
        Ok(workouts.rows_affected())
    }

    async fn delete_workout_exercise(&self, workout_exercise_id: i32) -> Result<u64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let sets = sqlx::query(DELETE_SETS_FOR_WORKOUT_EXERCISE)
            .bind(workout_exercise_id)
            .execute(&mut *tx)
            .await?;
        let links = sqlx::query(DELETE_WORKOUT_EXERCISE)
            .bind(workout_exercise_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "Deleted workout_exercise {}: {} sets, {} workout_exercises",
            workout_exercise_id,
            sets.rows_affected(),
            links.rows_affected()
        );
        Ok(links.rows_affected())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}
