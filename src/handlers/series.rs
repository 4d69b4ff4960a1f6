use axum::{extract::State, http::HeaderMap, response::Json};
use common::TemperatureSeries;
use compute::dashboard::RECENT_READINGS;
use tracing::{debug, instrument};
use crate::helpers::converters::{recent_to_dto, series_to_dto};
use crate::helpers::render::{ApiError, session_series};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Get the full simulated temperature series
#[utoipa::path(
    get,
    path = "/api/v1/series",
    tag = "series",
    params(
        ("x-session-id" = Option<String>, Header, description = "Dashboard session; defaults to a shared session"),
    ),
    responses(
        (status = 200, description = "Temperature series retrieved successfully", body = ApiResponse<TemperatureSeries>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, headers))]
pub async fn get_series(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TemperatureSeries>>, ApiError> {
    let series = session_series(&state, &headers).await?;
    debug!(len = series.len(), "Serving full series");

    Ok(Json(ApiResponse::ok(
        series_to_dto(&series),
        "Temperature series retrieved successfully",
    )))
}

/// Get the most recent temperature readings
#[utoipa::path(
    get,
    path = "/api/v1/series/recent",
    tag = "series",
    params(
        ("x-session-id" = Option<String>, Header, description = "Dashboard session; defaults to a shared session"),
    ),
    responses(
        (status = 200, description = "Recent readings retrieved successfully", body = ApiResponse<TemperatureSeries>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, headers))]
pub async fn get_recent_series(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TemperatureSeries>>, ApiError> {
    let series = session_series(&state, &headers).await?;

    Ok(Json(ApiResponse::ok(
        recent_to_dto(&series, RECENT_READINGS),
        "Recent readings retrieved successfully",
    )))
}
