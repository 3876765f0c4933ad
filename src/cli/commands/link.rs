use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum LinkCommands {
    #[command(about = "Add an exercise to a workout")]
    Add {
        #[arg(help = "Workout ID")]
        workout_id: i32,
        #[arg(help = "Exercise ID")]
        exercise_id: i32,
    },

    #[command(about = "Remove an exercise (and its sets) from a workout")]
    Delete {
        #[arg(help = "Workout exercise ID")]
        id: i32,
    },
}

pub async fn handle(
    cmd: LinkCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let message = match cmd {
        LinkCommands::Add { workout_id, exercise_id } => {
            client
                .post(
                    "/workout_exercises",
                    &json!({ "workout_id": workout_id, "exercise_id": exercise_id }),
                )
                .await?
        }
        LinkCommands::Delete { id } => client.delete(&format!("/workout_exercises/{}", id)).await?,
    };
    output_success(output_format, &message)
}
