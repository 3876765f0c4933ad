use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum SetCommands {
    #[command(about = "Log a set against a workout exercise")]
    Add {
        #[arg(help = "Workout exercise ID")]
        workout_exercises_id: i32,
        #[arg(help = "Repetitions")]
        reps: i32,
        #[arg(help = "Weight")]
        weight: f64,
    },
}

pub async fn handle(
    cmd: SetCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        SetCommands::Add { workout_exercises_id, reps, weight } => {
            let message = client
                .post(
                    "/sets",
                    &json!({
                        "workout_exercises_id": workout_exercises_id,
                        "reps": reps,
                        "weight": weight
                    }),
                )
                .await?;
            output_success(output_format, &message)
        }
    }
}
