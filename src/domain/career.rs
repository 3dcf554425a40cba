use std::collections::HashMap;

use super::models::{MatchEvent, PlayerId};

/// First and last season a player appears in the archive.
///
/// Gaps of inactivity are not modelled: a player who returns after years away
/// is treated as active for the whole interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerSpan {
    pub start_year: i32,
    pub end_year: i32,
}

impl CareerSpan {
    pub fn single(year: i32) -> Self {
        Self {
            start_year: year,
            end_year: year,
        }
    }

    fn extend(&mut self, year: i32) {
        self.start_year = self.start_year.min(year);
        self.end_year = self.end_year.max(year);
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// Career spans for every player referenced by the match archive
#[derive(Debug, Clone, Default)]
pub struct CareerSpans {
    spans: HashMap<PlayerId, CareerSpan>,
}

impl CareerSpans {
    /// Single pass over all matches, run before any rating is computed
    pub fn derive(matches: &[MatchEvent]) -> Self {
        let mut spans: HashMap<PlayerId, CareerSpan> = HashMap::new();

        for event in matches {
            for player_id in [&event.winner_id, &event.loser_id] {
                spans
                    .entry(player_id.clone())
                    .and_modify(|span| span.extend(event.season))
                    .or_insert_with(|| CareerSpan::single(event.season));
            }
        }

        Self { spans }
    }

    pub fn get(&self, player_id: &str) -> Option<CareerSpan> {
        self.spans.get(player_id).copied()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.spans.keys()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
