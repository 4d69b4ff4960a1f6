use axum::http::HeaderMap;
use cached::UnboundCache;
use compute::cache::{SeriesCache, SeriesKey};
use compute::generator::SeriesGenerator;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::SessionSettings;

/// Header that identifies a dashboard viewer.
pub const SESSION_HEADER: &str = "x-session-id";
/// Session used by requests that do not send [`SESSION_HEADER`].
pub const DEFAULT_SESSION: &str = "default";

/// Reads the session id from the request headers, falling back to [`DEFAULT_SESSION`].
pub fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_SESSION)
        .to_string()
}

/// One memoized series per session.
///
/// A session's [`SeriesCache`] is created on its first request and lives until
/// the session is ended or has been idle for the configured TTL.
#[derive(Clone, Debug)]
pub struct SessionRegistry {
    sessions: Cache<String, Arc<SeriesCache>>,
    generator: SeriesGenerator,
}

impl SessionRegistry {
    pub fn new(generator: SeriesGenerator, settings: &SessionSettings) -> Self {
        let sessions = Cache::builder()
            .max_capacity(settings.max_sessions)
            .time_to_idle(Duration::from_secs(settings.ttl_secs))
            .build();

        Self {
            sessions,
            generator,
        }
    }

    /// Returns the session's series cache, creating it on first use.
    ///
    /// Concurrent first requests for the same session share one cache.
    pub async fn get_or_create(&self, session_id: &str) -> Arc<SeriesCache> {
        self.sessions
            .get_with(session_id.to_string(), async {
                info!(session_id, "Session started");
                Arc::new(SeriesCache::new_with_store(
                    self.generator.clone(),
                    SeriesKey::new(session_id),
                    UnboundCache::with_capacity(1),
                ))
            })
            .await
    }

    /// Ends a session, dropping its series. Returns whether it existed.
    ///
    /// The series is cleared as well, so requests still holding the old
    /// cache regenerate instead of serving the ended session's readings.
    pub async fn end(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).await;
        if let Some(cache) = &removed {
            if let Err(err) = cache.clear() {
                warn!(session_id, %err, "Could not clear ended session's series");
            }
        }

        let existed = removed.is_some();
        debug!(session_id, existed, "Session ended");
        existed
    }

    /// Number of live sessions.
    pub async fn active_sessions(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }
}
