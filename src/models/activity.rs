use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

pub const DEFAULT_FEED_LIMIT: u32 = 20;
pub const MAX_FEED_LIMIT: u32 = 50;
pub const DEFAULT_SUGGESTION_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Review,
    Follow,
}

/// Feed-only representation of a review or follow event, synthesized per
/// request from the underlying rows. The `id` embeds the activity type and
/// the source row identity (`review_<id>`, `follow_<follower>_<followee>`)
/// so the same row never appears twice in a merged page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub actor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub payload: ActivityPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityPayload {
    #[serde(rename_all = "camelCase")]
    Review {
        review_id: Uuid,
        author_username: String,
        game_id: Uuid,
        game_name: String,
        rating: f64,
        is_spoiler: bool,
    },
    #[serde(rename_all = "camelCase")]
    Follow {
        follower_username: String,
        following_id: Uuid,
        following_username: String,
    },
}

impl ActivityItem {
    pub fn review_id(review_id: Uuid) -> String {
        format!("review_{review_id}")
    }

    pub fn follow_id(follower_id: Uuid, following_id: Uuid) -> String {
        format!("follow_{follower_id}_{following_id}")
    }
}

/// Validated feed request, after limit capping and page defaulting.
#[derive(Debug, Clone, Copy)]
pub struct FeedQuery {
    pub page: u32,
    pub limit: u32,
    pub kind: Option<ActivityType>,
    pub before: Option<DateTime<Utc>>,
}

impl FeedQuery {
    pub fn new(
        page: Option<u32>,
        limit: Option<u32>,
        kind: Option<ActivityType>,
        before: Option<DateTime<Utc>>,
    ) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::BadRequest("Page must be at least 1".into()));
        }

        let limit = limit.unwrap_or(DEFAULT_FEED_LIMIT);
        if limit == 0 || limit > MAX_FEED_LIMIT {
            return Err(AppError::BadRequest(format!(
                "Limit must be between 1 and {}",
                MAX_FEED_LIMIT
            )));
        }

        Ok(Self {
            page,
            limit,
            kind,
            before,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<ActivityItem>,
    pub meta: FeedMeta,
}
