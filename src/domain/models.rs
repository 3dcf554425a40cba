use anyhow::Result;
use chrono::NaiveDate;
use std::fmt;

pub type PlayerId = String;

/// Court surface a tournament is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Carpet,
}

impl Surface {
    /// Parse the archive's surface column. An empty value means the surface
    /// is unknown; anything else must be one of the four known surfaces.
    pub fn parse_optional(raw: &str) -> Result<Option<Surface>> {
        match raw.trim() {
            "" => Ok(None),
            "Hard" => Ok(Some(Surface::Hard)),
            "Clay" => Ok(Some(Surface::Clay)),
            "Grass" => Ok(Some(Surface::Grass)),
            "Carpet" => Ok(Some(Surface::Carpet)),
            other => anyhow::bail!("Unrecognized surface: {}", other),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
            Surface::Carpet => "Carpet",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player identity as listed in the roster source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    pub last_name: String,
    pub first_name: String,
    pub flag_code: String,
}

/// A single normalized match result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub date: NaiveDate,
    /// Tournament year from the archive's composite tournament key
    pub season: i32,
    pub surface: Option<Surface>,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}
