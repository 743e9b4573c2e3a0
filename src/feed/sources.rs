use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::activity::{ActivityItem, ActivityPayload, ActivityType},
};

/// One page-sized pull from a single activity source. `exhausted` means the
/// source returned fewer rows than asked for, i.e. there is nothing older
/// left behind the current fetch window.
#[derive(Debug)]
pub struct SourceBatch {
    pub items: Vec<ActivityItem>,
    pub exhausted: bool,
}

/// Read-only adapter over one kind of activity row. Implementations are
/// independently paginated: every fetch is bounded by `limit` and an
/// optional exclusive `created_at < before` cursor.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    fn name(&self) -> &'static str;
    fn kind(&self) -> ActivityType;
    async fn fetch(
        &self,
        author_ids: &[Uuid],
        limit: u32,
        before: Option<DateTime<Utc>>,
    ) -> Result<SourceBatch, AppError>;
}

pub struct ReviewActivitySource {
    pub postgres: PgPool,
}

#[derive(FromRow)]
struct ReviewActivityRow {
    id: Uuid,
    author_id: Uuid,
    game_id: Uuid,
    rating: f64,
    is_spoiler: bool,
    created_at: DateTime<Utc>,
    author_username: String,
    game_name: String,
}

#[async_trait]
impl ActivitySource for ReviewActivitySource {
    fn name(&self) -> &'static str {
        "reviews"
    }

    fn kind(&self) -> ActivityType {
        ActivityType::Review
    }

    async fn fetch(
        &self,
        author_ids: &[Uuid],
        limit: u32,
        before: Option<DateTime<Utc>>,
    ) -> Result<SourceBatch, AppError> {
        let rows = sqlx::query_as::<_, ReviewActivityRow>(
            "SELECT r.id, r.author_id, r.game_id, r.rating, r.is_spoiler, r.created_at,
                u.username AS author_username, g.name AS game_name
            FROM reviews r
            JOIN users u ON u.id = r.author_id
            JOIN games g ON g.id = r.game_id
            WHERE r.is_published = TRUE
                AND r.author_id = ANY($1)
                AND ($2::timestamptz IS NULL OR r.created_at < $2)
            ORDER BY r.created_at DESC
            LIMIT $3",
        )
        .bind(author_ids)
        .bind(before)
        .bind(limit as i64)
        .fetch_all(&self.postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review activity: {}", e)))?;

        let exhausted = rows.len() < limit as usize;
        let items = rows
            .into_iter()
            .map(|row| ActivityItem {
                id: ActivityItem::review_id(row.id),
                kind: ActivityType::Review,
                actor_id: row.author_id,
                created_at: row.created_at,
                payload: ActivityPayload::Review {
                    review_id: row.id,
                    author_username: row.author_username,
                    game_id: row.game_id,
                    game_name: row.game_name,
                    rating: row.rating,
                    is_spoiler: row.is_spoiler,
                },
            })
            .collect();

        Ok(SourceBatch { items, exhausted })
    }
}

pub struct FollowActivitySource {
    pub postgres: PgPool,
}

#[derive(FromRow)]
struct FollowActivityRow {
    follower_id: Uuid,
    following_id: Uuid,
    created_at: DateTime<Utc>,
    follower_username: String,
    following_username: String,
}

#[async_trait]
impl ActivitySource for FollowActivitySource {
    fn name(&self) -> &'static str {
        "follows"
    }

    fn kind(&self) -> ActivityType {
        ActivityType::Follow
    }

    async fn fetch(
        &self,
        author_ids: &[Uuid],
        limit: u32,
        before: Option<DateTime<Utc>>,
    ) -> Result<SourceBatch, AppError> {
        let rows = sqlx::query_as::<_, FollowActivityRow>(
            "SELECT f.follower_id, f.following_id, f.created_at,
                fu.username AS follower_username, tu.username AS following_username
            FROM follows f
            JOIN users fu ON fu.id = f.follower_id
            JOIN users tu ON tu.id = f.following_id
            WHERE f.follower_id = ANY($1)
                AND ($2::timestamptz IS NULL OR f.created_at < $2)
            ORDER BY f.created_at DESC
            LIMIT $3",
        )
        .bind(author_ids)
        .bind(before)
        .bind(limit as i64)
        .fetch_all(&self.postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch follow activity: {}", e)))?;

        let exhausted = rows.len() < limit as usize;
        let items = rows
            .into_iter()
            .map(|row| ActivityItem {
                id: ActivityItem::follow_id(row.follower_id, row.following_id),
                kind: ActivityType::Follow,
                actor_id: row.follower_id,
                created_at: row.created_at,
                payload: ActivityPayload::Follow {
                    follower_username: row.follower_username,
                    following_id: row.following_id,
                    following_username: row.following_username,
                },
            })
            .collect();

        Ok(SourceBatch { items, exhausted })
    }
}
