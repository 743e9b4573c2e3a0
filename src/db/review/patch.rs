use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::game::rating::recompute_game_rating,
    errors::AppError,
    models::review::{Review, normalize_rating, recompute_required},
};

pub async fn update_review(
    review_id: Uuid,
    author_id: Uuid,
    rating: Option<f64>,
    content: Option<String>,
    is_published: Option<bool>,
    is_spoiler: Option<bool>,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let existing = sqlx::query_as::<_, Review>(
        "SELECT id, author_id, game_id, rating, content, is_published, is_spoiler, created_at, updated_at
        FROM reviews WHERE id = $1 FOR UPDATE",
    )
    .bind(review_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))?;

    if existing.author_id != author_id {
        return Err(AppError::Unauthorized(
            "You can only modify your own review".into(),
        ));
    }

    let new_rating = match rating {
        Some(r) => normalize_rating(r)?,
        None => existing.rating,
    };
    let now_published = is_published.unwrap_or(existing.is_published);
    let rating_changed = new_rating != existing.rating;

    let review = sqlx::query_as::<_, Review>(
        "UPDATE reviews
        SET rating = $1, content = $2, is_published = $3, is_spoiler = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, author_id, game_id, rating, content, is_published, is_spoiler, created_at, updated_at",
    )
    .bind(new_rating)
    .bind(content.unwrap_or(existing.content))
    .bind(now_published)
    .bind(is_spoiler.unwrap_or(existing.is_spoiler))
    .bind(Utc::now())
    .bind(review_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update review: {}", e)))?;

    if recompute_required(existing.is_published, now_published, rating_changed) {
        recompute_game_rating(&mut tx, review.game_id).await?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit review update: {}", e)))?;

    tracing::info!("User {} updated review {}", author_id, review_id);

    Ok(review)
}
