use crate::handlers::{
    dashboard::get_dashboard,
    forecast::get_forecast,
    health::health_check,
    series::{get_recent_series, get_series},
    session::end_session,
    statistics::get_statistics,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard data
        .route("/api/v1/series", get(get_series))
        .route("/api/v1/series/recent", get(get_recent_series))
        .route("/api/v1/statistics", get(get_statistics))
        .route("/api/v1/forecast", get(get_forecast))
        .route("/api/v1/dashboard", get(get_dashboard))
        // Session lifecycle
        .route("/api/v1/session", delete(end_session))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
