//! Synthetic temperature series generator.
//!
//! Produces [`SERIES_LENGTH`] readings spaced [`SAMPLE_INTERVAL_MINUTES`]
//! apart, the last one stamped at the clock's "now". Each value is an
//! independent draw from Normal([`MEAN_TEMPERATURE`], [`TEMPERATURE_STD_DEV`])
//! rounded to two decimals.

use chrono::Duration;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::rounding::round_dp2;
use crate::series::SampleSeries;

/// Number of readings in a generated series.
pub const SERIES_LENGTH: usize = 50;
/// Minutes between consecutive readings.
pub const SAMPLE_INTERVAL_MINUTES: i64 = 10;
/// Mean of the simulated temperature, in °C.
pub const MEAN_TEMPERATURE: f64 = 27.0;
/// Standard deviation of the simulated temperature, in °C.
pub const TEMPERATURE_STD_DEV: f64 = 3.0;

pub fn sample_interval() -> Duration {
    Duration::minutes(SAMPLE_INTERVAL_MINUTES)
}

/// How the generator seeds its random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Fresh OS entropy on every generation
    #[default]
    Entropy,
    /// The same seed on every generation, so every series is identical
    Fixed(u64),
}

impl From<Option<u64>> for SeedPolicy {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed)
    }
}

impl SeedPolicy {
    fn rng(self) -> StdRng {
        match self {
            SeedPolicy::Entropy => StdRng::from_entropy(),
            SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Draws synthetic temperature series anchored on a clock.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    clock: Arc<dyn Clock>,
    seed: SeedPolicy,
    length: usize,
    interval: Duration,
    mean: f64,
    std_dev: f64,
}

impl SeriesGenerator {
    /// Creates a generator with the plant-monitoring constants.
    pub fn new(clock: Arc<dyn Clock>, seed: SeedPolicy) -> Self {
        Self {
            clock,
            seed,
            length: SERIES_LENGTH,
            interval: sample_interval(),
            mean: MEAN_TEMPERATURE,
            std_dev: TEMPERATURE_STD_DEV,
        }
    }

    pub fn seed(&self) -> SeedPolicy {
        self.seed
    }

    /// Generates a new series ending at the clock's current instant.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn generate(&self) -> Result<SampleSeries> {
        let normal = Normal::new(self.mean, self.std_dev)?;
        let mut rng = self.seed.rng();

        let values: Vec<f64> = (0..self.length)
            .map(|_| round_dp2(normal.sample(&mut rng)))
            .collect();

        let now = self.clock.now();
        let series = SampleSeries::ending_at(now, self.interval, values);
        debug!(len = series.len(), %now, "Generated temperature series");

        Ok(series)
    }
}

/// Returns the generator used by the server and the CLI.
///
/// Reads the system clock. Without a seed every generation draws from fresh
/// entropy, which is what a live demo wants; pass a seed for reproducible
/// output.
pub fn default_generator(seed: Option<u64>) -> SeriesGenerator {
    SeriesGenerator::new(Arc::new(SystemClock), SeedPolicy::from(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::has_at_most_two_decimals;
    use crate::testing::{fixed_generator, reference_instant};

    #[test]
    fn generates_fifty_samples_ending_now() {
        let series = fixed_generator(7).generate().unwrap();

        assert_eq!(series.len(), SERIES_LENGTH);
        assert_eq!(series.last().unwrap().timestamp, reference_instant());
        assert_eq!(series.interval(), Duration::minutes(10));
    }

    #[test]
    fn samples_are_ten_minutes_apart() {
        let series = fixed_generator(7).generate().unwrap();

        for pair in series.samples().windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(10));
        }
        assert_eq!(
            series.last().unwrap().timestamp - series.first().unwrap().timestamp,
            Duration::minutes(10 * 49)
        );
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let series = fixed_generator(11).generate().unwrap();
        assert!(series.values().all(has_at_most_two_decimals));
    }

    #[test]
    fn values_are_plausible_temperatures() {
        // 50 draws from N(27, 3) stay well inside ±10 sigma
        let series = fixed_generator(3).generate().unwrap();
        assert!(series.values().all(|v| (-3.0..=57.0).contains(&v)));

        let mean = series.values().sum::<f64>() / series.len() as f64;
        assert!((mean - MEAN_TEMPERATURE).abs() < 3.0, "mean was {mean}");
    }

    #[test]
    fn fixed_seed_reproduces_the_series() {
        let generator = fixed_generator(42);
        assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
        assert_eq!(
            generator.generate().unwrap(),
            fixed_generator(42).generate().unwrap()
        );
    }

    #[test]
    fn different_seeds_give_different_values() {
        let a = fixed_generator(1).generate().unwrap();
        let b = fixed_generator(2).generate().unwrap();
        assert_ne!(a.values().collect::<Vec<_>>(), b.values().collect::<Vec<_>>());
    }

    #[test]
    fn seed_policy_from_option() {
        assert_eq!(SeedPolicy::from(None), SeedPolicy::Entropy);
        assert_eq!(SeedPolicy::from(Some(5)), SeedPolicy::Fixed(5));
    }

    #[test]
    fn default_generator_uses_the_system_clock() {
        let before = chrono::Utc::now();
        let series = default_generator(Some(9)).generate().unwrap();
        let after = chrono::Utc::now();

        let last = series.last().unwrap().timestamp;
        assert!(last >= before && last <= after);
        assert_eq!(series.len(), SERIES_LENGTH);
    }
}
