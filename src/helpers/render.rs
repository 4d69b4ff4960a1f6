use axum::{Json, http::HeaderMap, http::StatusCode};
use compute::cache::SeriesCache;
use compute::dashboard::{self, Dashboard};
use compute::error::ComputeError;
use compute::series::SampleSeries;
use std::sync::Arc;
use tracing::{error, trace};

use crate::schemas::{AppState, ErrorResponse};
use crate::session::session_id;

/// Error half of every data handler's result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps a compute failure to a 500 without exposing its details.
pub fn compute_error(err: ComputeError) -> ApiError {
    error!(error = %err, "Dashboard computation failed");

    let code = match err {
        ComputeError::InvalidSeries(_) => "INVALID_SERIES",
        ComputeError::Distribution(_) => "GENERATOR_ERROR",
        ComputeError::Cache(_) => "CACHE_ERROR",
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to compute dashboard data".to_string(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// The series cache of the session the request belongs to.
pub async fn session_cache(state: &AppState, headers: &HeaderMap) -> Arc<SeriesCache> {
    let session = session_id(headers);
    trace!(session = %session, "Resolving session cache");
    state.sessions.get_or_create(&session).await
}

/// The session's memoized series.
pub async fn session_series(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Arc<SampleSeries>, ApiError> {
    session_cache(state, headers)
        .await
        .get_or_generate()
        .map_err(compute_error)
}

/// One full dashboard render for the session.
pub async fn render_dashboard(state: &AppState, headers: &HeaderMap) -> Result<Dashboard, ApiError> {
    let cache = session_cache(state, headers).await;
    dashboard::render(&cache).map_err(compute_error)
}
