//! Common transport-layer types shared between the backend and its clients.
//! These structs are the JSON shapes the dashboard API serves, so a client can
//! deserialize responses without duplicating them.

mod dashboard;
mod forecast;
mod statistics;
mod timeseries;

pub use dashboard::DashboardSnapshot;
pub use forecast::{ForecastPoint, TemperatureForecast};
pub use statistics::TemperatureStatistics;
pub use timeseries::{TemperaturePoint, TemperatureSeries};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a successful response.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_serializes_envelope() {
        let response = ApiResponse::ok(vec![1, 2], "Readings retrieved");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Readings retrieved");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }
}
