//! Simulated sensor readings for the feed and tests.
//!
//! Generates plausible environment sensor values without any hardware:
//! each sensor performs a random walk pulled back toward a per-sensor
//! baseline.

use rand::Rng;

use sensordash_common::Sample;

/// Value model for one sensor.
#[derive(Debug, Clone, Copy)]
pub struct SensorModel {
    /// Resting value the walk is pulled toward.
    pub baseline: f64,
    /// Maximum per-step random deviation.
    pub jitter: f64,
}

/// Reading model for a named sensor; unknown names get a generic model.
pub fn sensor_model(name: &str) -> SensorModel {
    match name {
        "temperature" => SensorModel {
            baseline: 21.5,
            jitter: 0.4,
        },
        "pressure" => SensorModel {
            baseline: 1013.2,
            jitter: 1.5,
        },
        "humidity" => SensorModel {
            baseline: 45.0,
            jitter: 2.0,
        },
        "light" => SensorModel {
            baseline: 250.0,
            jitter: 20.0,
        },
        _ => SensorModel {
            baseline: 50.0,
            jitter: 5.0,
        },
    }
}

/// One random-walk step pulled toward the model baseline.
pub fn step(current: f64, model: &SensorModel, rng: &mut impl Rng) -> f64 {
    let drift = (model.baseline - current) * 0.05;
    current + drift + rng.random_range(-model.jitter..model.jitter)
}

/// Generate `len` seconds of one-second history ending at `end_time`.
pub fn history(name: &str, end_time: f64, len: usize, rng: &mut impl Rng) -> Vec<Sample> {
    let model = sensor_model(name);
    let mut value = model.baseline;
    let start = end_time - len as f64;

    (1..=len)
        .map(|i| {
            value = step(value, &model, rng);
            Sample::new(start + i as f64, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_history_shape() {
        let mut rng = SmallRng::seed_from_u64(7);
        let samples = history("temperature", 10_000.0, 300, &mut rng);

        assert_eq!(samples.len(), 300);
        assert_eq!(samples[0].time, 9_701.0);
        assert_eq!(samples[samples.len() - 1].time, 10_000.0);

        // One-second spacing, strictly increasing
        for pair in samples.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, 1.0);
        }
    }

    #[test]
    fn test_history_values_are_finite() {
        let mut rng = SmallRng::seed_from_u64(7);
        let samples = history("light", 10_000.0, 1000, &mut rng);
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_walk_stays_near_baseline() {
        let mut rng = SmallRng::seed_from_u64(42);
        let model = sensor_model("humidity");

        let mut value = model.baseline;
        for _ in 0..10_000 {
            value = step(value, &model, &mut rng);
            assert!(value.is_finite());
            assert!((value - model.baseline).abs() < model.jitter * 100.0);
        }
    }
}
