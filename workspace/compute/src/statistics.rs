//! Summary statistics over a whole temperature series.

use tracing::instrument;

use crate::error::{InvalidSeriesError, Result};
use crate::series::SampleSeries;

/// Maximum, minimum and mean of every value in a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStatistics {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
}

impl SeriesStatistics {
    /// Reduces the full series; an empty or non-finite series is rejected.
    #[instrument(skip(series), fields(len = series.len()))]
    pub fn compute(series: &SampleSeries) -> Result<Self> {
        series.validate(1)?;

        let (max, min, sum) = series.values().fold(
            (f64::NEG_INFINITY, f64::INFINITY, 0.0),
            |(max, min, sum), value| (max.max(value), min.min(value), sum + value),
        );

        let mean = InvalidSeriesError::ensure_finite("mean", sum / series.len() as f64)?;

        Ok(Self { max, min, mean })
    }
}
