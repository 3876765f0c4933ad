pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Workout CLI - Command-line client for the Workout Tracker API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "WORKOUT_API_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the Workout Tracker API"
    )]
    pub url: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create, inspect and delete workouts")]
    Workout {
        #[command(subcommand)]
        cmd: commands::workout::WorkoutCommands,
    },

    #[command(about = "Browse the exercise catalog")]
    Exercise {
        #[command(subcommand)]
        cmd: commands::exercise::ExerciseCommands,
    },

    #[command(about = "Add exercises to workouts or remove them")]
    Link {
        #[command(subcommand)]
        cmd: commands::link::LinkCommands,
    },

    #[command(about = "Log sets")]
    Set {
        #[command(subcommand)]
        cmd: commands::set::SetCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url);

    match cli.command {
        Commands::Workout { cmd } => commands::workout::handle(cmd, &client, output_format).await,
        Commands::Exercise { cmd } => commands::exercise::handle(cmd, &client, output_format).await,
        Commands::Link { cmd } => commands::link::handle(cmd, &client, output_format).await,
        Commands::Set { cmd } => commands::set::handle(cmd, &client, output_format).await,
    }
}
