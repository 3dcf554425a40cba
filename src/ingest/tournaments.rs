use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{ARCHIVE_DATE_FORMAT, field, reader_builder};
use crate::domain::Surface;
use crate::errors::{row_context, with_file_context, with_parse_context};

const YEAR_COL: usize = 0;
const TOURNEY_ID_COL: usize = 3;
const DATE_COL: usize = 6;
const SURFACE_COL: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentInfo {
    pub date: NaiveDate,
    pub surface: Option<Surface>,
}

#[derive(Debug, Clone)]
struct RawTournament {
    date: String,
    surface: String,
}

/// Tournament date and surface keyed by (year, tourney id).
///
/// Values are validated when a match references them, so unused rows of the
/// (much larger) tournament file never abort a run.
#[derive(Debug, Clone, Default)]
pub struct TournamentLookup {
    entries: HashMap<(String, String), RawTournament>,
}

impl TournamentLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later rows replace earlier ones with the same key
    pub fn insert(&mut self, year: &str, tourney_id: &str, date: &str, surface: &str) {
        self.entries.insert(
            (year.to_string(), tourney_id.to_string()),
            RawTournament {
                date: date.to_string(),
                surface: surface.to_string(),
            },
        );
    }

    pub fn resolve(&self, year: &str, tourney_id: &str) -> Result<TournamentInfo> {
        let raw = self
            .entries
            .get(&(year.to_string(), tourney_id.to_string()))
            .ok_or_else(|| anyhow::anyhow!("Unknown tournament {}-{}", year, tourney_id))?;

        let date = NaiveDate::parse_from_str(raw.date.trim(), ARCHIVE_DATE_FORMAT)
            .with_context(|| format!("Invalid date '{}' for tournament {}-{}", raw.date, year, tourney_id))?;
        let surface = Surface::parse_optional(&raw.surface)
            .with_context(|| format!("Invalid surface for tournament {}-{}", year, tourney_id))?;

        Ok(TournamentInfo { date, surface })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn read_tournaments(path: &Path) -> Result<TournamentLookup> {
    let file = with_file_context(File::open(path), "open", path)?;
    let lookup = read_tournaments_from_reader(file, &path.display().to_string())?;

    info!("  → Loaded {} tournaments from {}", lookup.len(), path.display());
    Ok(lookup)
}

pub fn read_tournaments_from_reader<R: Read>(rdr: R, source: &str) -> Result<TournamentLookup> {
    let mut reader = reader_builder(true).from_reader(rdr);
    let mut lookup = TournamentLookup::new();

    for (idx, result) in reader.records().enumerate() {
        let record = with_parse_context(result, source)?;
        let row = idx + 2;

        let tourney_id = field(&record, TOURNEY_ID_COL, "tourney_id").with_context(|| row_context(source, row))?;
        if tourney_id.is_empty() {
            continue;
        }

        let year = field(&record, YEAR_COL, "tourney_year").with_context(|| row_context(source, row))?;
        let date = field(&record, DATE_COL, "tourney_dates").with_context(|| row_context(source, row))?;
        let surface =
            field(&record, SURFACE_COL, "tourney_surface").with_context(|| row_context(source, row))?;

        lookup.insert(year, tourney_id, date, surface);
    }

    Ok(lookup)
}
