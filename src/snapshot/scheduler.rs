use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::BTreeMap;

use super::progress::WeekProgress;
use super::row::{SnapshotRow, format_date};
use super::sink::SnapshotSink;
use super::summary::RunSummary;
use crate::domain::{MatchEvent, MatchTimeline, Track, TrackRosters, WeeklyWindow, WeeklyWindows};
use crate::rating::{MatchOutcome, RatingEngine};

/// Walks the timeline one Monday at a time, replaying each week's matches on
/// every track and emitting a snapshot per track after the week is applied.
///
/// Each call to [`SnapshotScheduler::step`] advances one window; the
/// scheduler is exhausted once the last Monday has been emitted.
pub struct SnapshotScheduler<'a> {
    timeline: &'a MatchTimeline,
    engine: RatingEngine,
    rosters: TrackRosters,
    windows: WeeklyWindows,
    progress: WeekProgress,
    active_season: i32,
    summary: RunSummary,
}

impl<'a> SnapshotScheduler<'a> {
    pub fn new(timeline: &'a MatchTimeline, engine: RatingEngine, rosters: TrackRosters) -> Self {
        let windows = timeline.weekly_windows();

        Self {
            timeline,
            engine,
            rosters,
            progress: WeekProgress::new(windows.len()),
            windows,
            active_season: timeline.last_season().unwrap_or_default(),
            summary: RunSummary::default(),
        }
    }

    pub fn run<S: SnapshotSink>(&mut self, sinks: &mut BTreeMap<Track, S>) -> Result<RunSummary> {
        info!(
            "Replaying {} matches over {} weeks",
            self.timeline.len(),
            self.windows.len()
        );

        while self.step(sinks)?.is_some() {}

        info!(
            "  → Applied {} matches, skipped {}",
            self.summary.matches_applied, self.summary.matches_skipped
        );
        Ok(self.summary.clone())
    }

    /// Process the next weekly window. Returns `None` once every window has
    /// been emitted.
    pub fn step<S: SnapshotSink>(
        &mut self,
        sinks: &mut BTreeMap<Track, S>,
    ) -> Result<Option<WeeklyWindow>> {
        let Some(window) = self.windows.next() else {
            return Ok(None);
        };

        self.replay_window(&window);
        self.emit_snapshots(&window, sinks)?;
        self.record_week(&window);

        Ok(Some(window))
    }

    pub fn rosters(&self) -> &TrackRosters {
        &self.rosters
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    fn replay_window(&mut self, window: &WeeklyWindow) {
        let timeline = self.timeline;
        let matches = timeline.matches_in_window(window.monday, window.previous_monday);
        debug!("Week {}: {} matches", window.monday, matches.len());

        for event in matches {
            self.route_match(event);
        }
    }

    fn route_match(&mut self, event: &MatchEvent) {
        let general = self.rosters.get(Track::General);
        let missing = [&event.winner_id, &event.loser_id]
            .into_iter()
            .find(|id| !general.contains(id));

        if let Some(player_id) = missing {
            warn!("Player not found on dataset: {}", player_id);
            self.summary.matches_skipped += 1;
            return;
        }

        if let Some(surface) = event.surface {
            let roster = self.rosters.get_mut(Track::for_surface(surface));
            self.engine
                .apply_match(roster, event.date, &event.winner_id, &event.loser_id);
        }

        let general = self.rosters.get_mut(Track::General);
        match self
            .engine
            .apply_match(general, event.date, &event.winner_id, &event.loser_id)
        {
            MatchOutcome::Applied(_) => self.summary.matches_applied += 1,
            MatchOutcome::SamePlayer(player_id) => {
                warn!(
                    "Skipping match on {} with {} on both sides",
                    event.date, player_id
                );
                self.summary.matches_skipped += 1;
            }
            MatchOutcome::PlayerNotFound(player_id) => {
                warn!("Player not found on dataset: {}", player_id);
                self.summary.matches_skipped += 1;
            }
        }
    }

    fn emit_snapshots<S: SnapshotSink>(
        &mut self,
        window: &WeeklyWindow,
        sinks: &mut BTreeMap<Track, S>,
    ) -> Result<()> {
        let year = window.year();

        for track in Track::ALL {
            let sink = sinks
                .get_mut(&track)
                .ok_or_else(|| anyhow::anyhow!("No snapshot sink for track {}", track))?;

            let rows: Vec<SnapshotRow> = self
                .rosters
                .get(track)
                .eligible(year)
                .map(|record| SnapshotRow::from_record(record, window.monday, self.active_season))
                .collect();

            sink.write_rows(&rows).with_context(|| {
                format!(
                    "Failed to write {} snapshot for week {}",
                    track,
                    format_date(window.monday)
                )
            })?;
            self.summary.record_rows(track, rows.len());
        }

        Ok(())
    }

    fn record_week(&mut self, window: &WeeklyWindow) {
        let week = format_date(window.monday);
        if self.summary.first_week.is_none() {
            self.summary.first_week = Some(week.clone());
        }
        self.summary.last_week = Some(week);
        self.summary.weeks_processed += 1;
        self.progress.increment();
    }
}
