use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;

use crate::config::settings::AppConfig;
use crate::domain::{CareerSpans, MatchTimeline, PlayerProfile, Track, TrackRosters};
use crate::errors::file_context;
use crate::ingest;
use crate::rating::RatingEngine;
use crate::snapshot::{CsvSnapshotSink, RunSummary, SnapshotScheduler, SnapshotSink};

const SUMMARY_FILE: &str = "run_summary.json";

pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        info!("=== Starting Weekly Elo Processing ===\n");

        // Step 1: Load the archive
        let players = self.load_players()?;
        let timeline = self.load_timeline()?;
        info!("  → {} matches on the timeline\n", timeline.len());

        // Step 2: Derive career spans and build one roster per track
        let rosters = self.build_rosters(&players, &timeline);

        // Step 3: Replay the timeline week by week
        let mut sinks = self.create_sinks()?;
        let engine = RatingEngine::new(self.config.rating.clone());
        let mut scheduler = SnapshotScheduler::new(&timeline, engine, rosters);
        let summary = scheduler.run(&mut sinks)?;

        // Step 4: Publish outputs, only renaming once every track is flushed
        for sink in sinks.values_mut() {
            sink.flush()?;
        }
        for sink in sinks.values_mut() {
            sink.finish()?;
        }
        summary.save(self.config.paths.output_dir.join(SUMMARY_FILE))?;

        info!("=== Processing Complete ===");
        Ok(summary)
    }

    fn load_players(&self) -> Result<Vec<PlayerProfile>> {
        info!("Step 1: Loading players, tournaments and matches...");
        ingest::read_players(&self.config.paths.players)
    }

    fn load_timeline(&self) -> Result<MatchTimeline> {
        let paths = &self.config.paths;
        let lookup = ingest::read_tournaments(&paths.tournaments)?;
        let matches = ingest::read_matches(&paths.matches, &lookup)?;

        Ok(MatchTimeline::new(matches))
    }

    fn build_rosters(&self, players: &[PlayerProfile], timeline: &MatchTimeline) -> TrackRosters {
        info!("Step 2: Building rosters...");

        let careers = CareerSpans::derive(timeline.sorted_matches());
        let rosters = TrackRosters::from_profiles(players, &careers, self.config.rating.initial_rating);
        let general = rosters.get(Track::General);

        let unlisted = careers
            .player_ids()
            .filter(|id| !general.contains(id))
            .count();
        if unlisted > 0 {
            warn!("  {} players in the match archive are missing from the player list", unlisted);
        }

        info!("  → {} players with at least one rated match\n", general.len());
        rosters
    }

    fn create_sinks(&self) -> Result<BTreeMap<Track, CsvSnapshotSink>> {
        let output_dir = &self.config.paths.output_dir;
        fs::create_dir_all(output_dir).with_context(|| file_context("create directory", output_dir))?;

        Track::ALL
            .iter()
            .map(|&track| -> Result<(Track, CsvSnapshotSink)> {
                let sink = CsvSnapshotSink::create(output_dir.join(track.file_name()))?;
                Ok((track, sink))
            })
            .collect()
    }
}
