mod commands;
mod input;
mod naming;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{to_gbq::ToGbqArgs, to_json_schema::ToJsonSchemaArgs};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gbqschema", about = "Google BigQuery Table Schema Converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a BigQuery column list to JSON Schema
    ToJsonSchema(ToJsonSchemaArgs),
    /// Convert a JSON Schema document to a BigQuery column list
    ToGbq(ToGbqArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ToJsonSchema(args) => args.run(),
        Commands::ToGbq(args) => args.run(),
    }
}
