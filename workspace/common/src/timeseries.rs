use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One historical temperature reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TemperaturePoint {
    /// Instant the reading was taken (UTC)
    pub timestamp: DateTime<Utc>,
    /// Temperature in °C, two decimals
    pub value: f64,
}

impl TemperaturePoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ordered run of readings, earliest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TemperatureSeries {
    /// Readings in chronological order
    pub points: Vec<TemperaturePoint>,
    /// Minutes between consecutive readings
    pub interval_minutes: i64,
    /// Number of readings
    pub len: usize,
}

impl TemperatureSeries {
    pub fn new(points: Vec<TemperaturePoint>, interval_minutes: i64) -> Self {
        let len = points.len();
        Self {
            points,
            interval_minutes,
            len,
        }
    }

    /// Earliest and latest timestamp, if the series has any readings.
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}
