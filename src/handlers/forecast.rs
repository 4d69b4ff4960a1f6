use axum::{extract::State, http::HeaderMap, response::Json};
use common::TemperatureForecast;
use tracing::instrument;
use crate::helpers::converters::forecast_to_dto;
use crate::helpers::render::{ApiError, render_dashboard};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Get the linear forecast for the next five intervals
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(
        ("x-session-id" = Option<String>, Header, description = "Dashboard session; defaults to a shared session"),
    ),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<TemperatureForecast>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, headers))]
pub async fn get_forecast(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TemperatureForecast>>, ApiError> {
    let dashboard = render_dashboard(&state, &headers).await?;

    Ok(Json(ApiResponse::ok(
        forecast_to_dto(&dashboard.model, &dashboard.forecast),
        "Forecast computed successfully",
    )))
}
