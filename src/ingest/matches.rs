use anyhow::{Context, Result};
use csv::StringRecord;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::tournaments::TournamentLookup;
use super::{field, reader_builder};
use crate::domain::MatchEvent;
use crate::errors::{row_context, with_file_context, with_parse_context};

const TOURNEY_KEY_COL: usize = 0;
const WINNER_ID_COL: usize = 8;
const LOSER_ID_COL: usize = 11;

/// Read every match score file in order and resolve each match's date and
/// surface through the tournament lookup.
pub fn read_matches(paths: &[PathBuf], lookup: &TournamentLookup) -> Result<Vec<MatchEvent>> {
    let mut all_matches = Vec::new();

    for path in paths {
        info!("Processing the {} file", path.display());

        let file = with_file_context(File::open(path), "open", path)?;
        let mut matches = read_matches_from_reader(file, lookup, &path.display().to_string())?;

        info!("  → Read {} matches", matches.len());
        all_matches.append(&mut matches);
    }

    Ok(all_matches)
}

pub fn read_matches_from_reader<R: Read>(
    rdr: R,
    lookup: &TournamentLookup,
    source: &str,
) -> Result<Vec<MatchEvent>> {
    let mut reader = reader_builder(true).from_reader(rdr);
    let mut matches = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = with_parse_context(result, source)?;
        let event = parse_match(&record, lookup).with_context(|| row_context(source, idx + 2))?;
        matches.push(event);
    }

    Ok(matches)
}

fn parse_match(record: &StringRecord, lookup: &TournamentLookup) -> Result<MatchEvent> {
    let key = field(record, TOURNEY_KEY_COL, "tourney_year_id")?;
    let (year, tourney_id) = split_tourney_key(key)?;
    let season: i32 = year
        .parse()
        .with_context(|| format!("Invalid tournament year '{}'", year))?;
    let tournament = lookup.resolve(year, tourney_id)?;

    Ok(MatchEvent {
        date: tournament.date,
        season,
        surface: tournament.surface,
        winner_id: field(record, WINNER_ID_COL, "winner_player_id")?.to_string(),
        loser_id: field(record, LOSER_ID_COL, "loser_player_id")?.to_string(),
    })
}

/// Split a `"<year>-<tourneyId>"` reference at the first dash
pub fn split_tourney_key(key: &str) -> Result<(&str, &str)> {
    key.split_once('-')
        .ok_or_else(|| anyhow::anyhow!("Malformed tournament reference '{}'", key))
}
