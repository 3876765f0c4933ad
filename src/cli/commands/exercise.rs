use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_rows;
use crate::cli::OutputFormat;
use crate::database::models::Exercise;

#[derive(Subcommand)]
pub enum ExerciseCommands {
    #[command(about = "List the exercise catalog")]
    List,
}

pub async fn handle(
    cmd: ExerciseCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        ExerciseCommands::List => {
            let exercises: Vec<Exercise> = client.get("/exercises").await?;
            output_rows(output_format, &exercises, "Exercise catalog is empty", |e| {
                format!("#{:<4} {:<20} {:<12} {}", e.id, e.name, e.equipment, e.muscle_group)
            })
        }
    }
}
