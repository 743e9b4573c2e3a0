use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::review::Review};

pub async fn get_reviews_for_game(game_id: Uuid, postgres: PgPool) -> Result<Vec<Review>, AppError> {
    sqlx::query_as::<_, Review>(
        "SELECT id, author_id, game_id, rating, content, is_published, is_spoiler, created_at, updated_at
        FROM reviews
        WHERE game_id = $1 AND is_published = TRUE
        ORDER BY created_at DESC",
    )
    .bind(game_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))
}
