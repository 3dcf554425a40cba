use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::row::{HEADERS, SnapshotRow};
use crate::errors::file_context;

/// Append-only destination for the weekly snapshots of one track
pub trait SnapshotSink {
    fn write_rows(&mut self, rows: &[SnapshotRow]) -> Result<()>;

    /// Make everything written so far durable without publishing it
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Flush and publish everything written so far
    fn finish(&mut self) -> Result<()>;
}

/// Writes snapshots to `<path>.tmp` and renames it over `path` on finish.
/// A sink dropped before `finish` removes its temporary file.
pub struct CsvSnapshotSink {
    writer: Option<csv::Writer<File>>,
    temp_path: PathBuf,
    final_path: PathBuf,
    rows_written: usize,
}

impl CsvSnapshotSink {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let final_path = path.as_ref().to_path_buf();
        let temp_path = temp_path_for(&final_path);

        // File::create truncates leftovers from an interrupted run
        let file = File::create(&temp_path).with_context(|| file_context("create", &temp_path))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(HEADERS)
            .with_context(|| file_context("write header to", &temp_path))?;

        Ok(Self {
            writer: Some(writer),
            temp_path,
            final_path,
            rows_written: 0,
        })
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}

impl SnapshotSink for CsvSnapshotSink {
    fn write_rows(&mut self, rows: &[SnapshotRow]) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Snapshot sink already finished: {}", self.final_path.display()))?;

        for row in rows {
            writer
                .serialize(row)
                .with_context(|| file_context("write row to", &self.temp_path))?;
        }

        self.rows_written += rows.len();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush().with_context(|| file_context("flush", &self.temp_path))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // Left in place on a flush error so Drop still cleans up
        self.flush()?;
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        drop(writer);

        if let Err(e) = fs::rename(&self.temp_path, &self.final_path) {
            let _ = fs::remove_file(&self.temp_path);
            return Err(e).with_context(|| file_context("publish", &self.final_path));
        }

        info!(
            "  → Wrote {} rows to {}",
            self.rows_written,
            self.final_path.display()
        );
        Ok(())
    }
}

impl Drop for CsvSnapshotSink {
    fn drop(&mut self) {
        let Some(writer) = self.writer.take() else {
            return;
        };
        drop(writer);

        if let Err(e) = fs::remove_file(&self.temp_path) {
            warn!("Could not remove {}: {}", self.temp_path.display(), e);
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(player_id: &str) -> SnapshotRow {
        SnapshotRow {
            week_title: "2017.01.02".to_string(),
            player_id: player_id.to_string(),
            last_name: "Nadal".to_string(),
            first_name: "Rafael".to_string(),
            flag_code: "ESP".to_string(),
            current_elo: 1612.5,
            last_tourney_date: "2017.01.02".to_string(),
            matches_played: 3,
            peak_elo: 1620.25,
            peak_elo_date: "2016.12.26".to_string(),
            retirement_year: String::new(),
            turned_pro: 2001,
        }
    }

    #[test]
    fn test_csv_sink_replaces_previous_output() {
        let dir = std::env::temp_dir().join("tennis_elo_test_sink");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("WeeklyRating.csv");
        fs::write(&path, "stale data from an earlier run\n").unwrap();

        let mut sink = CsvSnapshotSink::create(&path).unwrap();
        sink.write_rows(&[sample_row("n409")]).unwrap();
        sink.write_rows(&[]).unwrap();
        sink.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADERS.join(","));
        assert!(lines[1].starts_with("2017.01.02,n409,Nadal,Rafael,ESP,1612.5,"));
        assert!(lines[1].ends_with(",3,1620.25,2016.12.26,,2001"));
        assert!(!temp_path_for(&path).exists());
        assert_eq!(sink.rows_written(), 1);

        // Cleanup
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_writing_after_finish_fails() {
        let dir = std::env::temp_dir().join("tennis_elo_test_sink_finished");
        fs::create_dir_all(&dir).unwrap();

        let mut sink = CsvSnapshotSink::create(dir.join("WeeklyRatingClay.csv")).unwrap();
        sink.finish().unwrap();

        assert!(sink.write_rows(&[sample_row("n409")]).is_err());
        assert!(sink.finish().is_ok());

        // Cleanup
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unfinished_sink_removes_temp_file() {
        let dir = std::env::temp_dir().join("tennis_elo_test_sink_abandoned");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("WeeklyRatingGrass.csv");
        fs::write(&path, "previous run\n").unwrap();

        {
            let mut sink = CsvSnapshotSink::create(&path).unwrap();
            sink.write_rows(&[sample_row("n409")]).unwrap();
            sink.flush().unwrap();
            assert!(temp_path_for(&path).exists());
        }

        assert!(!temp_path_for(&path).exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");

        // Cleanup
        fs::remove_dir_all(&dir).unwrap();
    }
}
