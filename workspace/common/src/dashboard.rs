use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forecast::TemperatureForecast;
use crate::statistics::TemperatureStatistics;
use crate::timeseries::TemperatureSeries;

/// Everything one dashboard page shows, from a single render.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardSnapshot {
    /// Most recent readings, for the table
    pub recent: TemperatureSeries,
    /// Full series, for the trend chart
    pub series: TemperatureSeries,
    /// Statistics over the full series
    pub statistics: TemperatureStatistics,
    /// Linear forecast
    pub forecast: TemperatureForecast,
}
