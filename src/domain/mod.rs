pub mod career;
pub mod models;
pub mod roster;
pub mod timeline;
mod track;

pub use career::{CareerSpan, CareerSpans};
pub use models::*;
pub use roster::{PlayerRecord, PlayerRoster, TrackRosters};
pub use timeline::{MatchTimeline, WeeklyWindow, WeeklyWindows};
pub use track::Track;
