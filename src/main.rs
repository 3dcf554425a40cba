use anyhow::Result;
use colored::Colorize;

use tennis_elo_ranking::cli::Command;
use tennis_elo_ranking::{handle_completions, handle_process, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Process(args) => handle_process(args),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
