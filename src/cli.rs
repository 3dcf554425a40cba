use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::DataPaths;

#[derive(Parser, Debug)]
#[command(author, version, about = "Weekly surface-aware Elo ratings for professional tennis")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Replay the match archive and write weekly rating snapshots
    Process(ProcessArgs),
    /// Print shell completions to stdout
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ProcessArgs {
    /// Player list CSV
    #[arg(long)]
    pub players: Option<PathBuf>,
    /// Match score CSV; repeat to read several files in order
    #[arg(long = "matches")]
    pub matches: Vec<PathBuf>,
    /// Tournament lookup CSV
    #[arg(long)]
    pub tournaments: Option<PathBuf>,
    /// Directory the weekly snapshot files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl ProcessArgs {
    /// Overlay the paths given on the command line onto the defaults
    pub fn resolve_paths(&self) -> DataPaths {
        let mut paths = DataPaths::default();

        if let Some(players) = &self.players {
            paths.players = players.clone();
        }
        if !self.matches.is_empty() {
            paths.matches = self.matches.clone();
        }
        if let Some(tournaments) = &self.tournaments {
            paths.tournaments = tournaments.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            paths.output_dir = output_dir.clone();
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::try_parse_from([
            "tennis_elo_ranking",
            "process",
            "--matches",
            "a.csv",
            "--matches",
            "b.csv",
            "-o",
            "out",
        ])
        .unwrap();

        let Command::Process(args) = cli.command else {
            panic!("expected process command");
        };
        let paths = args.resolve_paths();

        assert_eq!(paths.matches, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert_eq!(paths.output_dir, PathBuf::from("out"));
        assert_eq!(paths.players, DataPaths::default().players);
    }

    #[test]
    fn test_defaults_when_no_paths_given() {
        assert_eq!(ProcessArgs::default().resolve_paths(), DataPaths::default());
    }
}
