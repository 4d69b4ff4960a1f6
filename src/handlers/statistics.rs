use axum::{extract::State, http::HeaderMap, response::Json};
use common::TemperatureStatistics;
use tracing::instrument;
use crate::helpers::converters::statistics_to_dto;
use crate::helpers::render::{ApiError, render_dashboard};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Get maximum, minimum and mean over the full series
#[utoipa::path(
    get,
    path = "/api/v1/statistics",
    tag = "statistics",
    params(
        ("x-session-id" = Option<String>, Header, description = "Dashboard session; defaults to a shared session"),
    ),
    responses(
        (status = 200, description = "Statistics retrieved successfully", body = ApiResponse<TemperatureStatistics>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, headers))]
pub async fn get_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TemperatureStatistics>>, ApiError> {
    let dashboard = render_dashboard(&state, &headers).await?;

    Ok(Json(ApiResponse::ok(
        statistics_to_dto(&dashboard.statistics),
        "Statistics retrieved successfully",
    )))
}
