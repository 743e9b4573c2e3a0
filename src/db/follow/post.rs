use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::user::get::user_exists,
    errors::AppError,
    models::follow::FollowEdge,
};

pub async fn follow_user(
    follower_id: Uuid,
    following_id: Uuid,
    postgres: PgPool,
) -> Result<FollowEdge, AppError> {
    if follower_id == following_id {
        return Err(AppError::BadRequest("You cannot follow yourself".into()));
    }

    if !user_exists(following_id, postgres.clone()).await? {
        return Err(AppError::NotFound(format!(
            "User with ID {} not found",
            following_id
        )));
    }

    // Single-statement insert: the pair's primary key serializes concurrent
    // follows, and a duplicate surfaces as a conflict, never an upsert.
    let edge = sqlx::query_as::<_, FollowEdge>(
        "INSERT INTO follows (follower_id, following_id, created_at)
        VALUES ($1, $2, $3)
        RETURNING follower_id, following_id, created_at",
    )
    .bind(follower_id)
    .bind(following_id)
    .bind(Utc::now())
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::from_sqlx(e, "Already following this user"))?;

    tracing::info!("User {} followed user {}", follower_id, following_id);

    Ok(edge)
}
