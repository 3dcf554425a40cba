pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ingest;
pub mod rating;
pub mod services;
pub mod snapshot;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, ProcessArgs};

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::processing::ProcessingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_process(args: &ProcessArgs) -> Result<()> {
    let config = AppConfig::with_paths(args.resolve_paths());
    let service = ProcessingService::new(config);
    service.run().map(|_| ())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
