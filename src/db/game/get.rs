use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::game::Game};

pub async fn get_game(game_id: Uuid, postgres: PgPool) -> Result<Game, AppError> {
    let game = sqlx::query_as::<_, Game>(
        "SELECT id, name, description, cover_url, average_rating, review_count, created_at
        FROM games WHERE id = $1",
    )
    .bind(game_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch game: {}", e)))?;

    game.ok_or_else(|| AppError::NotFound(format!("Game with ID {} not found", game_id)))
}

pub async fn get_all_games(postgres: PgPool) -> Result<Vec<Game>, AppError> {
    sqlx::query_as::<_, Game>(
        "SELECT id, name, description, cover_url, average_rating, review_count, created_at
        FROM games ORDER BY name ASC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch games: {}", e)))
}

pub async fn game_exists(game_id: Uuid, postgres: PgPool) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM games WHERE id = $1)")
        .bind(game_id)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to check game existence: {}", e)))
}
