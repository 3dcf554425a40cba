use chrono::NaiveDate;
use log::warn;
use std::collections::{BTreeMap, HashMap};

use super::career::{CareerSpan, CareerSpans};
use super::models::{PlayerId, PlayerProfile};
use super::track::Track;

/// Rating state of one player on one track
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub profile: PlayerProfile,
    pub current_rating: f64,
    pub peak_rating: f64,
    pub peak_rating_date: Option<NaiveDate>,
    pub matches_played: u32,
    pub last_match_date: Option<NaiveDate>,
    pub career: CareerSpan,
}

impl PlayerRecord {
    pub fn new(profile: PlayerProfile, career: CareerSpan, initial_rating: f64) -> Self {
        Self {
            profile,
            current_rating: initial_rating,
            peak_rating: initial_rating,
            peak_rating_date: None,
            matches_played: 0,
            last_match_date: None,
            career,
        }
    }

    pub fn id(&self) -> &str {
        &self.profile.player_id
    }

    pub fn is_active_in(&self, year: i32) -> bool {
        self.career.contains(year)
    }
}

/// Player records of a single track, kept in roster input order
#[derive(Debug, Clone, Default)]
pub struct PlayerRoster {
    records: Vec<PlayerRecord>,
    index: HashMap<PlayerId, usize>,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from the player list, keeping only players with a
    /// known career span. Duplicate ids keep their first occurrence.
    pub fn from_profiles(
        profiles: &[PlayerProfile],
        careers: &CareerSpans,
        initial_rating: f64,
    ) -> Self {
        let mut roster = Self::new();

        for profile in profiles {
            let Some(career) = careers.get(&profile.player_id) else {
                continue;
            };

            let record = PlayerRecord::new(profile.clone(), career, initial_rating);
            if !roster.insert(record) {
                warn!("Duplicate player in roster source: {}", profile.player_id);
            }
        }

        roster
    }

    /// Returns false if a record with the same id is already present
    pub fn insert(&mut self, record: PlayerRecord) -> bool {
        if self.index.contains_key(record.id()) {
            return false;
        }

        self.index.insert(record.id().to_string(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.index.contains_key(player_id)
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.index.get(player_id).map(|&idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, player_id: &str) -> Option<&mut PlayerRecord> {
        self.index.get(player_id).map(|&idx| &mut self.records[idx])
    }

    /// Mutable access to two distinct records at once
    pub fn get_pair_mut(
        &mut self,
        first_id: &str,
        second_id: &str,
    ) -> Option<(&mut PlayerRecord, &mut PlayerRecord)> {
        let first = *self.index.get(first_id)?;
        let second = *self.index.get(second_id)?;

        if first == second {
            return None;
        }

        if first < second {
            let (left, right) = self.records.split_at_mut(second);
            Some((&mut left[first], &mut right[0]))
        } else {
            let (left, right) = self.records.split_at_mut(first);
            Some((&mut right[0], &mut left[second]))
        }
    }

    /// Records whose career span covers `year`, in roster order
    pub fn eligible(&self, year: i32) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter().filter(move |r| r.is_active_in(year))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One roster per track, all initialized from the same player list
#[derive(Debug, Clone)]
pub struct TrackRosters {
    rosters: BTreeMap<Track, PlayerRoster>,
}

impl TrackRosters {
    pub fn new(template: PlayerRoster) -> Self {
        let rosters = Track::ALL
            .iter()
            .map(|&track| (track, template.clone()))
            .collect();

        Self { rosters }
    }

    pub fn from_profiles(
        profiles: &[PlayerProfile],
        careers: &CareerSpans,
        initial_rating: f64,
    ) -> Self {
        Self::new(PlayerRoster::from_profiles(profiles, careers, initial_rating))
    }

    // Every track in `Track::ALL` is populated on construction
    pub fn get(&self, track: Track) -> &PlayerRoster {
        &self.rosters[&track]
    }

    pub fn get_mut(&mut self, track: Track) -> &mut PlayerRoster {
        self.rosters
            .get_mut(&track)
            .unwrap_or_else(|| panic!("no roster for track {}", track))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Track, &PlayerRoster)> {
        self.rosters.iter().map(|(&track, roster)| (track, roster))
    }
}
