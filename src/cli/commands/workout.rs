use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{or_dash, output_rows, output_success};
use crate::cli::OutputFormat;
use crate::database::models::{Workout, WorkoutDetailRow, WorkoutExerciseEntry};

#[derive(Subcommand)]
pub enum WorkoutCommands {
    #[command(about = "List all workouts")]
    List,

    #[command(about = "Create a workout")]
    Add {
        #[arg(help = "Workout name")]
        name: String,
        #[arg(long, help = "Workout date (YYYY-MM-DD); defaults to today")]
        date: Option<NaiveDate>,
    },

    #[command(about = "Show the exercises and sets of a workout")]
    Show {
        #[arg(help = "Workout ID")]
        id: i32,
    },

    #[command(about = "List the exercises performed in a workout")]
    Exercises {
        #[arg(help = "Workout ID")]
        id: i32,
    },

    #[command(about = "Replace a workout's notes (omit text to clear them)")]
    Notes {
        #[arg(help = "Workout ID")]
        id: i32,
        #[arg(help = "Notes text")]
        text: Option<String>,
    },

    #[command(about = "Delete a workout with all of its exercises and sets")]
    Delete {
        #[arg(help = "Workout ID")]
        id: i32,
    },
}

pub async fn handle(
    cmd: WorkoutCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        WorkoutCommands::List => {
            let workouts: Vec<Workout> = client.get("/workouts").await?;
            output_rows(output_format, &workouts, "No workouts logged", |w| {
                match &w.notes {
                    Some(notes) => format!("#{:<4} {}  {}  ({})", w.id, w.date, w.name, notes),
                    None => format!("#{:<4} {}  {}", w.id, w.date, w.name),
                }
            })
        }
        WorkoutCommands::Add { name, date } => {
            let message = client
                .post("/workouts", &json!({ "name": name, "date": date }))
                .await?;
            output_success(output_format, &message)
        }
        WorkoutCommands::Show { id } => {
            let rows: Vec<WorkoutDetailRow> = client.get(&format!("/workouts/{}", id)).await?;
            output_rows(output_format, &rows, "No exercises in this workout", |r| {
                format!(
                    "[{}] {:<20} reps: {:<4} weight: {}",
                    r.workout_exercise_id,
                    r.exercise_name,
                    or_dash(r.reps),
                    or_dash(r.weight)
                )
            })
        }
        WorkoutCommands::Exercises { id } => {
            let entries: Vec<WorkoutExerciseEntry> =
                client.get(&format!("/workouts/{}/exercises", id)).await?;
            output_rows(output_format, &entries, "No exercises in this workout", |e| {
                format!(
                    "[{}] {} ({}, {})",
                    e.workout_exercise_id, e.name, e.equipment, e.muscle_group
                )
            })
        }
        WorkoutCommands::Notes { id, text } => {
            let message = client
                .patch(&format!("/workouts/{}/notes", id), &json!({ "notes": text }))
                .await?;
            output_success(output_format, &message)
        }
        WorkoutCommands::Delete { id } => {
            let message = client.delete(&format!("/workouts/{}", id)).await?;
            output_success(output_format, &message)
        }
    }
}
