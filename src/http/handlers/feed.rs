use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    feed::engine::get_activity_feed,
    models::activity::{ActivityType, FeedPage, FeedQuery},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<ActivityType>,
    pub before: Option<DateTime<Utc>>,
}

pub async fn activity_feed_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedPage>, (StatusCode, String)> {
    let viewer_id = claims.viewer_id().map_err(|e| e.to_response())?;

    let query = FeedQuery::new(params.page, params.limit, params.kind, params.before)
        .map_err(|e| e.to_response())?;

    let feed = get_activity_feed(
        viewer_id,
        query,
        state.postgres.clone(),
        state.feed_source_timeout,
    )
    .await
    .map_err(|e| {
        tracing::error!("Error building activity feed for {}: {}", viewer_id, e);
        e.to_response()
    })?;

    Ok(Json(feed))
}
