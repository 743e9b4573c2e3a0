use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::game::rating::recompute_game_rating,
    errors::AppError,
    models::review::Review,
};

pub async fn delete_review(
    review_id: Uuid,
    author_id: Uuid,
    postgres: PgPool,
) -> Result<(), AppError> {
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
            "You can only delete your own review".into(),
        ));
    }

    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(review_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete review: {}", e)))?;

    // A deleted draft never contributed to the aggregate.
    if existing.is_published {
        recompute_game_rating(&mut tx, existing.game_id).await?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit review delete: {}", e)))?;

    tracing::info!("User {} deleted review {}", author_id, review_id);

    Ok(())
}
