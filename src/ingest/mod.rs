//! Readers for the raw tennis archive: the player list, the tournament
//! lookup and the match score files. Columns are addressed by position, the
//! archive files do not carry stable header names.

pub mod matches;
pub mod players;
pub mod tournaments;

use anyhow::Result;
use csv::StringRecord;

pub use matches::{read_matches, read_matches_from_reader};
pub use players::{read_players, read_players_from_reader};
pub use tournaments::{TournamentInfo, TournamentLookup, read_tournaments, read_tournaments_from_reader};

pub const ARCHIVE_DATE_FORMAT: &str = "%Y.%m.%d";

fn field<'r>(record: &'r StringRecord, column: usize, name: &str) -> Result<&'r str> {
    record
        .get(column)
        .map(str::trim)
        .ok_or_else(|| anyhow::anyhow!("Missing column {} ({})", column, name))
}

fn reader_builder(has_headers: bool) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(has_headers).flexible(true);
    builder
}
