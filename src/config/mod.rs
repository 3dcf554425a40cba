pub mod settings;

pub use settings::{AppConfig, DataPaths, RatingSettings};
