use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::PlayerRecord;

pub const DATE_FORMAT: &str = "%Y.%m.%d";
const UNSET_DATE: &str = "N/A";

pub const HEADERS: [&str; 12] = [
    "week_title",
    "player_id",
    "last_name",
    "first_name",
    "flag_code",
    "current_elo",
    "last_tourney_date",
    "matches_played",
    "peak_elo",
    "peak_elo_date",
    "retirement_year",
    "turned_pro",
];

/// One line of a weekly snapshot file. Field order matches `HEADERS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub week_title: String,
    pub player_id: String,
    pub last_name: String,
    pub first_name: String,
    pub flag_code: String,
    pub current_elo: f64,
    pub last_tourney_date: String,
    pub matches_played: u32,
    pub peak_elo: f64,
    pub peak_elo_date: String,
    pub retirement_year: String,
    pub turned_pro: i32,
}

impl SnapshotRow {
    /// `active_season` is the last season of the archive; players whose
    /// career reaches it are still active and get a blank retirement year.
    pub fn from_record(record: &PlayerRecord, week: NaiveDate, active_season: i32) -> Self {
        let profile = &record.profile;

        Self {
            week_title: format_date(week),
            player_id: profile.player_id.clone(),
            last_name: profile.last_name.clone(),
            first_name: profile.first_name.clone(),
            flag_code: profile.flag_code.clone(),
            current_elo: record.current_rating,
            last_tourney_date: format_optional_date(record.last_match_date),
            matches_played: record.matches_played,
            peak_elo: record.peak_rating,
            peak_elo_date: format_optional_date(record.peak_rating_date),
            retirement_year: format_retirement_year(record.career.end_year, active_season),
            turned_pro: record.career.start_year,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| UNSET_DATE.to_string())
}

fn format_retirement_year(end_year: i32, active_season: i32) -> String {
    if end_year == active_season {
        String::new()
    } else {
        end_year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CareerSpan, PlayerProfile};

    fn record(career: CareerSpan) -> PlayerRecord {
        let profile = PlayerProfile {
            player_id: "f324".to_string(),
            last_name: "Federer".to_string(),
            first_name: "Roger".to_string(),
            flag_code: "SUI".to_string(),
        };
        PlayerRecord::new(profile, career, 1500.0)
    }

    #[test]
    fn test_row_for_untouched_player() {
        let week = NaiveDate::from_ymd_opt(1999, 3, 1).unwrap();
        let row = SnapshotRow::from_record(&record(CareerSpan { start_year: 1998, end_year: 2016 }), week, 2017);

        assert_eq!(row.week_title, "1999.03.01");
        assert_eq!(row.last_tourney_date, "N/A");
        assert_eq!(row.peak_elo_date, "N/A");
        assert_eq!(row.retirement_year, "2016");
        assert_eq!(row.turned_pro, 1998);
        assert_eq!(row.matches_played, 0);
    }

    #[test]
    fn test_active_player_has_blank_retirement_year() {
        let mut player = record(CareerSpan { start_year: 1998, end_year: 2017 });
        player.last_match_date = NaiveDate::from_ymd_opt(2017, 7, 3);
        let week = NaiveDate::from_ymd_opt(2017, 7, 3).unwrap();

        let row = SnapshotRow::from_record(&player, week, 2017);

        assert_eq!(row.retirement_year, "");
        assert_eq!(row.last_tourney_date, "2017.07.03");
    }
}
