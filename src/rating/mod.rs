pub mod elo;
pub mod engine;

pub use elo::{expected_score, k_factor, update_rating};
pub use engine::{MatchOutcome, RatingChange, RatingEngine};
