//! Time-ascending temperature series.

use chrono::{DateTime, Duration, Utc};

use crate::error::InvalidSeriesError;

/// One temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ordered, evenly spaced sequence of samples, earliest first.
///
/// The spacing is stored alongside the samples so that a forecast can extend
/// the series without re-deriving it from the timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
    interval: Duration,
}

impl SampleSeries {
    /// Builds a series ending at `end`, one sample per value, `interval` apart.
    pub fn ending_at(end: DateTime<Utc>, interval: Duration, values: Vec<f64>) -> Self {
        let len = values.len() as i32;
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let steps_back = len - 1 - i as i32;
                Sample::new(end - interval * steps_back, value)
            })
            .collect();

        Self { samples, interval }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|sample| sample.value)
    }

    /// The last `n` samples, or the whole series when it is shorter.
    pub fn tail(&self, n: usize) -> &[Sample] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }

    /// Checks that the series has at least `required` samples, all finite.
    pub fn validate(&self, required: usize) -> Result<(), InvalidSeriesError> {
        if self.samples.len() < required {
            return Err(InvalidSeriesError::TooShort {
                required,
                actual: self.samples.len(),
            });
        }

        if let Some((index, sample)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, sample)| !sample.value.is_finite())
        {
            return Err(InvalidSeriesError::NonFinite {
                index,
                value: sample.value,
            });
        }

        Ok(())
    }
}
