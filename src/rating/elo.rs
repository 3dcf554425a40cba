use crate::config::settings::RatingSettings;

/// Update magnitude for a player with `matches_played` prior matches.
/// Large for newcomers, tapering off with experience.
pub fn k_factor(matches_played: u32, config: &RatingSettings) -> f64 {
    config.k / (matches_played as f64 + config.offset).powf(config.shape)
}

/// Probability that a player rated `rating_a` beats one rated `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

pub fn update_rating(old_rating: f64, k: f64, won: bool, expected: f64) -> f64 {
    let actual = if won { 1.0 } else { 0.0 };
    old_rating + k * (actual - expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_factor_for_new_player() {
        let config = RatingSettings::default();
        let k = k_factor(0, &config);

        assert!((k - 131.326_390_220_188).abs() < 1e-9);
    }

    #[test]
    fn test_k_factor_strictly_decreasing_and_positive() {
        let config = RatingSettings::default();
        let values: Vec<f64> = (0..2000).map(|n| k_factor(n, &config)).collect();

        assert!(values.iter().all(|&k| k > 0.0));
        assert!(values.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn test_expected_scores_are_complementary() {
        let pairs = [(1500.0, 1500.0), (1800.0, 1400.0), (1234.5, 2100.25), (900.0, 2700.0)];

        for (a, b) in pairs {
            let sum = expected_score(a, b) + expected_score(b, a);
            assert!((sum - 1.0).abs() < 1e-9);
        }
        assert_eq!(expected_score(1500.0, 1500.0), 0.5);
        assert!(expected_score(1900.0, 1500.0) > 0.9);
    }

    #[test]
    fn test_update_rating() {
        assert_eq!(update_rating(1500.0, 100.0, true, 0.25), 1575.0);
        assert_eq!(update_rating(1500.0, 100.0, false, 0.25), 1475.0);
    }
}
