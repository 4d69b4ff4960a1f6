use common::{
    DashboardSnapshot, ForecastPoint, TemperatureForecast, TemperaturePoint, TemperatureSeries,
    TemperatureStatistics,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::session::SessionRegistry;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Per-session series caches
    pub sessions: SessionRegistry,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of live dashboard sessions
    pub active_sessions: u64,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::series::get_series,
        crate::handlers::series::get_recent_series,
        crate::handlers::statistics::get_statistics,
        crate::handlers::forecast::get_forecast,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::session::end_session,
    ),
    components(
        schemas(
            ApiResponse<TemperatureSeries>,
            ApiResponse<TemperatureStatistics>,
            ApiResponse<TemperatureForecast>,
            ApiResponse<DashboardSnapshot>,
            ErrorResponse,
            HealthResponse,
            TemperaturePoint,
            TemperatureSeries,
            TemperatureStatistics,
            ForecastPoint,
            TemperatureForecast,
            DashboardSnapshot,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "series", description = "Simulated temperature readings"),
        (name = "statistics", description = "Summary statistics over the readings"),
        (name = "forecast", description = "Linear temperature forecast"),
        (name = "dashboard", description = "Whole-page dashboard snapshot"),
        (name = "session", description = "Dashboard session lifecycle"),
    ),
    info(
        title = "Plantmon API",
        description = "Plant monitoring dashboard - simulated industrial temperature readings, statistics and a short-horizon forecast",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
