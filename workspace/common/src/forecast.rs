use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One predicted reading after the end of the series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPoint {
    /// Instant the prediction applies to (UTC)
    pub timestamp: DateTime<Utc>,
    /// Predicted temperature in °C, two decimals
    pub predicted_value: f64,
}

impl ForecastPoint {
    pub fn new(timestamp: DateTime<Utc>, predicted_value: f64) -> Self {
        Self {
            timestamp,
            predicted_value,
        }
    }
}

/// The fitted trend line and its extrapolation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TemperatureForecast {
    /// Change in °C per interval
    pub slope: f64,
    /// Fitted value at the first reading (°C)
    pub intercept: f64,
    /// Number of intervals forecast
    pub horizon: usize,
    /// Predictions in chronological order
    pub points: Vec<ForecastPoint>,
}
