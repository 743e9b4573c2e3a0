use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::game::Game};

pub async fn add_game(
    name: String,
    description: String,
    cover_url: Option<String>,
    postgres: PgPool,
) -> Result<Game, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Game name must not be empty".into()));
    }

    // New games start with an empty aggregate; the first published review
    // recompute overwrites both fields.
    let game = sqlx::query_as::<_, Game>(
        "INSERT INTO games (id, name, description, cover_url, average_rating, review_count, created_at)
        VALUES ($1, $2, $3, $4, 0, 0, $5)
        RETURNING id, name, description, cover_url, average_rating, review_count, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(&description)
    .bind(&cover_url)
    .bind(Utc::now())
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create game: {}", e)))?;

    tracing::info!("Created game {} (ID: {})", game.name, game.id);

    Ok(game)
}
