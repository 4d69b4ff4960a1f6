//! Fixtures shared by the compute unit tests.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::clock::FixedClock;
use crate::generator::{SeedPolicy, SeriesGenerator, sample_interval};
use crate::series::SampleSeries;

/// The instant every fixture series ends at.
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
}

/// A seeded generator on a frozen clock.
pub fn fixed_generator(seed: u64) -> SeriesGenerator {
    SeriesGenerator::new(
        Arc::new(FixedClock(reference_instant())),
        SeedPolicy::Fixed(seed),
    )
}

/// A hand-built series with the production spacing, ending at the reference instant.
pub fn series_from_values(values: &[f64]) -> SampleSeries {
    SampleSeries::ending_at(reference_instant(), sample_interval(), values.to_vec())
}

/// Routes compute logs to stderr at WARN, or at the level named in `RUST_LOG`.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
