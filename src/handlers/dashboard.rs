use axum::{extract::State, http::HeaderMap, response::Json};
use common::DashboardSnapshot;
use tracing::instrument;
use crate::helpers::converters::dashboard_to_snapshot;
use crate::helpers::render::{ApiError, render_dashboard};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Render the whole dashboard page in one call
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    params(
        ("x-session-id" = Option<String>, Header, description = "Dashboard session; defaults to a shared session"),
    ),
    responses(
        (status = 200, description = "Dashboard rendered successfully", body = ApiResponse<DashboardSnapshot>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, headers))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<DashboardSnapshot>>, ApiError> {
    let dashboard = render_dashboard(&state, &headers).await?;

    Ok(Json(ApiResponse::ok(
        dashboard_to_snapshot(&dashboard),
        "Dashboard rendered successfully",
    )))
}
