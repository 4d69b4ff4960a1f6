//! Ordinary least-squares line over a series' index/value pairs.

use tracing::{instrument, trace};

use crate::error::{InvalidSeriesError, Result};
use crate::series::SampleSeries;

/// Minimum number of samples needed to fit a line.
pub const MIN_FIT_SAMPLES: usize = 2;

/// A first-degree polynomial `value = intercept + slope * index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the line at a sample index.
    pub fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}

/// Fits a line to the series, treating sample `i` as the point `(i, value)`.
///
/// The indices `0..n` are always distinct, so any series of two or more
/// finite values has a unique solution.
#[instrument(skip(series), fields(len = series.len()))]
pub fn fit(series: &SampleSeries) -> Result<LinearModel> {
    series.validate(MIN_FIT_SAMPLES)?;

    let n = series.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = InvalidSeriesError::ensure_finite("mean", series.values().sum::<f64>() / n)?;

    let (covariance, variance) = series.values().enumerate().fold(
        (0.0, 0.0),
        |(covariance, variance), (i, y)| {
            let dx = i as f64 - mean_x;
            (covariance + dx * (y - mean_y), variance + dx * dx)
        },
    );

    let slope = InvalidSeriesError::ensure_finite("slope", covariance / variance)?;
    let intercept = InvalidSeriesError::ensure_finite("intercept", mean_y - slope * mean_x)?;
    trace!(slope, intercept, "Fitted linear model");

    Ok(LinearModel { slope, intercept })
}
