//! Lectern: lecture notes summarizer backed by a hosted language model.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_serve_command, handle_summarize_command};
use lectern_core::{AppConfig, init_tracing};
use lectern_error::LecternResult;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> LecternResult<ExitCode> {
    // A missing .env is the normal case in production.
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Serve { bind } => {
            handle_serve_command(&config, bind).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Summarize {
            style,
            max_tokens,
            temperature,
            file,
        } => {
            handle_summarize_command(&config, style.into(), max_tokens, temperature, file).await
        }
    }
}
