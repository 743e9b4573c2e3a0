use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{User, follow::FollowEdge},
};

pub async fn is_following(
    follower_id: Uuid,
    following_id: Uuid,
    postgres: PgPool,
) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2)",
    )
    .bind(follower_id)
    .bind(following_id)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to check follow edge: {}", e)))
}

pub async fn list_following(user_id: Uuid, postgres: PgPool) -> Result<HashSet<Uuid>, AppError> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        "SELECT following_id FROM follows WHERE follower_id = $1",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to list following: {}", e)))?;

    Ok(ids.into_iter().collect())
}

pub async fn list_followers(user_id: Uuid, postgres: PgPool) -> Result<HashSet<Uuid>, AppError> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        "SELECT follower_id FROM follows WHERE following_id = $1",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to list followers: {}", e)))?;

    Ok(ids.into_iter().collect())
}

/// Users followed by both `a` and `b`. Symmetric in its arguments.
pub async fn mutual_follows(
    a: Uuid,
    b: Uuid,
    postgres: PgPool,
) -> Result<HashSet<Uuid>, AppError> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        "SELECT following_id FROM follows WHERE follower_id = $1
        INTERSECT
        SELECT following_id FROM follows WHERE follower_id = $2",
    )
    .bind(a)
    .bind(b)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to compute mutual follows: {}", e)))?;

    Ok(ids.into_iter().collect())
}

/// Profiles of every user followed by anyone in `follower_ids`. Feeds the
/// suggestion ranker's candidate set; exclusion of the viewer and of users
/// they already follow happens in the ranker.
pub async fn list_reachable_profiles(
    follower_ids: &[Uuid],
    postgres: PgPool,
) -> Result<Vec<User>, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT DISTINCT u.id, u.username, u.display_name, u.created_at
        FROM follows f
        JOIN users u ON u.id = f.following_id
        WHERE f.follower_id = ANY($1)",
    )
    .bind(follower_ids)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reachable profiles: {}", e)))
}

/// All outgoing edges of the given users, as one adjacency fetch.
pub async fn list_following_many(
    follower_ids: &[Uuid],
    postgres: PgPool,
) -> Result<Vec<FollowEdge>, AppError> {
    sqlx::query_as::<_, FollowEdge>(
        "SELECT follower_id, following_id, created_at
        FROM follows WHERE follower_id = ANY($1)",
    )
    .bind(follower_ids)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch follow edges: {}", e)))
}
