use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    pub initial_rating: f64,
    /// Numerator of the K-factor curve
    pub k: f64,
    pub offset: f64,
    pub shape: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            k: 250.0,
            offset: 5.0,
            shape: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub players: PathBuf,
    /// Match archive files, read in order
    pub matches: Vec<PathBuf>,
    pub tournaments: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        let dataset = PathBuf::from("dataset");

        Self {
            players: dataset.join("player_overviews_unindexed_csv.csv"),
            matches: vec![
                dataset.join("match_scores_1968-1990_unindexed_csv.csv"),
                dataset.join("match_scores_1991-2016_unindexed_csv.csv"),
                dataset.join("match_scores_2017_unindexed_csv.csv"),
            ],
            tournaments: dataset.join("tournaments_1877-2017_unindexed_csv.csv"),
            output_dir: dataset,
        }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub paths: DataPaths,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            paths: DataPaths::default(),
        }
    }

    pub fn with_paths(paths: DataPaths) -> Self {
        Self {
            rating: RatingSettings::default(),
            paths,
        }
    }
}
