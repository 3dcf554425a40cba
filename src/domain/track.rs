use std::fmt;

use super::models::Surface;

/// Independent rating context: every match feeds `General`, surface
/// matches additionally feed their own track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Track {
    General,
    Hard,
    Clay,
    Grass,
    Carpet,
}

impl Track {
    pub const ALL: [Track; 5] = [
        Track::General,
        Track::Hard,
        Track::Clay,
        Track::Grass,
        Track::Carpet,
    ];

    pub fn for_surface(surface: Surface) -> Self {
        match surface {
            Surface::Hard => Track::Hard,
            Surface::Clay => Track::Clay,
            Surface::Grass => Track::Grass,
            Surface::Carpet => Track::Carpet,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Track::General => "General",
            Track::Hard => "Hard",
            Track::Clay => "Clay",
            Track::Grass => "Grass",
            Track::Carpet => "Carpet",
        }
    }

    /// Name of the weekly snapshot file this track is written to
    pub fn file_name(&self) -> String {
        match self {
            Track::General => "WeeklyRating.csv".to_string(),
            surface => format!("WeeklyRating{}.csv", surface.as_str()),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
