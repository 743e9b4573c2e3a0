use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{errors::AppError, models::game::published_aggregate};

/// Rewrites a game's denormalized `average_rating` and `review_count` from
/// its currently published reviews. Must run inside the transaction of the
/// review mutation that triggered it; any failure here aborts that whole
/// transaction. The `FOR UPDATE` lock on the game row serializes concurrent
/// recomputes for the same game, so two interleaved review mutations cannot
/// leave the aggregate reflecting only one of them.
pub async fn recompute_game_rating(
    tx: &mut Transaction<'_, Postgres>,
    game_id: Uuid,
) -> Result<(), AppError> {
    let locked = sqlx::query_scalar::<_, Uuid>("SELECT id FROM games WHERE id = $1 FOR UPDATE")
        .bind(game_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::Consistency(format!("Failed to lock game row: {}", e)))?;

    if locked.is_none() {
        return Err(AppError::NotFound(format!(
            "Game with ID {} not found",
            game_id
        )));
    }

    let ratings = sqlx::query_scalar::<_, f64>(
        "SELECT rating FROM reviews WHERE game_id = $1 AND is_published = TRUE",
    )
    .bind(game_id)
    .fetch_all(&mut **tx)
    .await
    .map_err(|e| AppError::Consistency(format!("Failed to read published ratings: {}", e)))?;

    let (average_rating, review_count) = published_aggregate(&ratings);

    sqlx::query("UPDATE games SET average_rating = $1, review_count = $2 WHERE id = $3")
        .bind(average_rating)
        .bind(review_count)
        .bind(game_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::Consistency(format!("Failed to write game aggregate: {}", e)))?;

    tracing::debug!(
        "Recomputed rating for game {}: average={}, count={}",
        game_id,
        average_rating,
        review_count
    );

    Ok(())
}
