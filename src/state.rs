use sqlx::PgPool;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    /// Deadline for each activity-source fetch during feed fan-out. A
    /// source that misses it degrades the page instead of failing it.
    pub feed_source_timeout: Duration,
}
