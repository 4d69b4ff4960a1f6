use axum::{extract::State, http::HeaderMap, http::StatusCode};
use tracing::{info, instrument};
use crate::schemas::AppState;
use crate::session::session_id;

/// End the caller's session; its series is regenerated on the next request
#[utoipa::path(
    delete,
    path = "/api/v1/session",
    tag = "session",
    params(
        ("x-session-id" = Option<String>, Header, description = "Dashboard session; defaults to a shared session"),
    ),
    responses(
        (status = 204, description = "Session ended"),
    )
)]
#[instrument(skip(state, headers))]
pub async fn end_session(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    let session = session_id(&headers);
    let existed = state.sessions.end(&session).await;
    info!(session = %session, existed, "Session teardown requested");

    StatusCode::NO_CONTENT
}
