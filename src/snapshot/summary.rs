use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::Track;
use crate::errors::file_context;

/// Counters collected over one full run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub first_week: Option<String>,
    pub last_week: Option<String>,
    pub weeks_processed: usize,
    pub matches_applied: usize,
    pub matches_skipped: usize,
    pub rows_written: BTreeMap<String, usize>,
}

impl RunSummary {
    pub fn record_rows(&mut self, track: Track, count: usize) {
        *self.rows_written.entry(track.to_string()).or_insert(0) += count;
    }

    pub fn rows_for(&self, track: Track) -> usize {
        self.rows_written.get(track.as_str()).copied().unwrap_or(0)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run summary")?;

        fs::write(path, json).with_context(|| file_context("write", path))?;

        info!("Saved run summary: {}", path.display());
        Ok(())
    }
}
