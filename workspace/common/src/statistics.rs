use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary of every reading in the series, two decimals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TemperatureStatistics {
    /// Highest reading (°C)
    pub max: f64,
    /// Lowest reading (°C)
    pub min: f64,
    /// Mean reading (°C)
    pub mean: f64,
}
