use chrono::NaiveDate;

use super::elo::{expected_score, k_factor, update_rating};
use crate::config::settings::RatingSettings;
use crate::domain::{PlayerId, PlayerRecord, PlayerRoster};

/// Ratings of both participants before and after a match
#[derive(Debug, Clone, PartialEq)]
pub struct RatingChange {
    pub winner_before: f64,
    pub winner_after: f64,
    pub loser_before: f64,
    pub loser_after: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Applied(RatingChange),
    /// The roster has no record for this player; nothing was changed
    PlayerNotFound(PlayerId),
    /// Winner and loser are the same player; nothing was changed
    SamePlayer(PlayerId),
}

impl MatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MatchOutcome::Applied(_))
    }
}

/// Applies match results to a roster using the dynamic K-factor Elo model
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    config: RatingSettings,
}

impl RatingEngine {
    pub fn new(config: RatingSettings) -> Self {
        Self { config }
    }

    pub fn apply_match(
        &self,
        roster: &mut PlayerRoster,
        date: NaiveDate,
        winner_id: &str,
        loser_id: &str,
    ) -> MatchOutcome {
        if let Some(missing) = find_missing(roster, winner_id, loser_id) {
            return MatchOutcome::PlayerNotFound(missing.to_string());
        }

        let Some((winner, loser)) = roster.get_pair_mut(winner_id, loser_id) else {
            return MatchOutcome::SamePlayer(winner_id.to_string());
        };

        let change = self.compute_change(winner, loser);
        record_result(winner, change.winner_after, date);
        record_result(loser, change.loser_after, date);
        raise_peak(winner, date);

        MatchOutcome::Applied(change)
    }

    fn compute_change(&self, winner: &PlayerRecord, loser: &PlayerRecord) -> RatingChange {
        let expected_winner = expected_score(winner.current_rating, loser.current_rating);
        let expected_loser = 1.0 - expected_winner;

        let k_winner = k_factor(winner.matches_played, &self.config);
        let k_loser = k_factor(loser.matches_played, &self.config);

        RatingChange {
            winner_before: winner.current_rating,
            winner_after: update_rating(winner.current_rating, k_winner, true, expected_winner),
            loser_before: loser.current_rating,
            loser_after: update_rating(loser.current_rating, k_loser, false, expected_loser),
        }
    }
}

fn find_missing<'a>(roster: &PlayerRoster, winner_id: &'a str, loser_id: &'a str) -> Option<&'a str> {
    [winner_id, loser_id]
        .into_iter()
        .find(|id| !roster.contains(id))
}

fn record_result(record: &mut PlayerRecord, new_rating: f64, date: NaiveDate) {
    record.current_rating = new_rating;
    record.last_match_date = Some(date);
    record.matches_played += 1;
}

// Peak is a high-water mark; it is never lowered
fn raise_peak(record: &mut PlayerRecord, date: NaiveDate) {
    if record.current_rating > record.peak_rating {
        record.peak_rating = record.current_rating;
        record.peak_rating_date = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CareerSpan, PlayerProfile};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster(ids: &[&str]) -> PlayerRoster {
        let mut roster = PlayerRoster::new();
        for id in ids {
            let profile = PlayerProfile {
                player_id: id.to_string(),
                last_name: id.to_uppercase(),
                first_name: id.to_string(),
                flag_code: "USA".to_string(),
            };
            roster.insert(PlayerRecord::new(profile, CareerSpan::single(2000), 1500.0));
        }
        roster
    }

    #[test]
    fn test_first_match_between_new_players() {
        let engine = RatingEngine::default();
        let mut roster = roster(&["a", "b"]);

        let outcome = engine.apply_match(&mut roster, date(2000, 1, 3), "a", "b");
        assert!(outcome.is_applied());

        let a = roster.get("a").unwrap();
        let b = roster.get("b").unwrap();
        assert!((a.current_rating - 1565.663_195_110_094).abs() < 1e-9);
        assert!((b.current_rating - 1434.336_804_889_906).abs() < 1e-9);
        assert_eq!(a.matches_played, 1);
        assert_eq!(b.matches_played, 1);
        assert_eq!(a.last_match_date, Some(date(2000, 1, 3)));
        assert_eq!(b.last_match_date, Some(date(2000, 1, 3)));
        assert_eq!(a.peak_rating, a.current_rating);
        assert_eq!(a.peak_rating_date, Some(date(2000, 1, 3)));
        assert_eq!(b.peak_rating, 1500.0);
        assert_eq!(b.peak_rating_date, None);
    }

    #[test]
    fn test_ratings_are_not_conserved_with_uneven_experience() {
        let engine = RatingEngine::default();
        let mut roster = roster(&["veteran", "rookie", "other"]);

        for _ in 0..20 {
            engine.apply_match(&mut roster, date(2000, 1, 3), "veteran", "other");
            engine.apply_match(&mut roster, date(2000, 1, 3), "other", "veteran");
        }
        let before: f64 = ["veteran", "rookie"]
            .iter()
            .map(|id| roster.get(id).unwrap().current_rating)
            .sum();

        let MatchOutcome::Applied(change) = engine.apply_match(&mut roster, date(2000, 1, 10), "rookie", "veteran") else {
            panic!("match should apply");
        };

        let gain = change.winner_after - change.winner_before;
        let loss = change.loser_before - change.loser_after;
        assert!(gain > loss);

        let after: f64 = ["veteran", "rookie"]
            .iter()
            .map(|id| roster.get(id).unwrap().current_rating)
            .sum();
        assert!((after - before).abs() > 1e-6);
    }

    #[test]
    fn test_peak_is_non_decreasing() {
        let engine = RatingEngine::default();
        let mut roster = roster(&["a", "b"]);
        let mut previous_peak = roster.get("a").unwrap().peak_rating;

        let results = [true, true, false, false, false, true, false, true, true];
        for (week, a_wins) in results.into_iter().enumerate() {
            let day = date(2000, 1, 3) + chrono::Duration::days(7 * week as i64);
            if a_wins {
                engine.apply_match(&mut roster, day, "a", "b");
            } else {
                engine.apply_match(&mut roster, day, "b", "a");
            }

            let a = roster.get("a").unwrap();
            assert!(a.peak_rating >= previous_peak);
            assert!(a.peak_rating >= a.current_rating || !a_wins);
            previous_peak = a.peak_rating;
        }
    }

    #[test]
    fn test_loser_peak_never_raised() {
        let engine = RatingEngine::default();
        let mut roster = roster(&["a", "b"]);
        engine.apply_match(&mut roster, date(2000, 1, 3), "a", "b");
        engine.apply_match(&mut roster, date(2000, 1, 10), "b", "a");

        let a = roster.get("a").unwrap();
        assert!(a.current_rating < a.peak_rating);
        assert_eq!(a.peak_rating_date, Some(date(2000, 1, 3)));
    }

    #[test]
    fn test_unknown_player_skips_match() {
        let engine = RatingEngine::default();
        let mut roster = roster(&["a"]);

        let outcome = engine.apply_match(&mut roster, date(2000, 1, 3), "a", "ghost");

        assert_eq!(outcome, MatchOutcome::PlayerNotFound("ghost".to_string()));
        let a = roster.get("a").unwrap();
        assert_eq!(a.matches_played, 0);
        assert_eq!(a.current_rating, 1500.0);
    }

    #[test]
    fn test_same_player_skips_match() {
        let engine = RatingEngine::default();
        let mut roster = roster(&["a"]);

        let outcome = engine.apply_match(&mut roster, date(2000, 1, 3), "a", "a");

        assert_eq!(outcome, MatchOutcome::SamePlayer("a".to_string()));
        assert_eq!(roster.get("a").unwrap().matches_played, 0);
    }
}
