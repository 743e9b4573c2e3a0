use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::game::{get::game_exists, rating::recompute_game_rating},
    errors::AppError,
    models::review::{Review, normalize_rating},
};

pub async fn create_review(
    author_id: Uuid,
    game_id: Uuid,
    rating: f64,
    content: String,
    is_published: bool,
    is_spoiler: bool,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let rating = normalize_rating(rating)?;

    if !game_exists(game_id, postgres.clone()).await? {
        return Err(AppError::NotFound(format!(
            "Game with ID {} not found",
            game_id
        )));
    }

    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let now = Utc::now();
    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (id, author_id, game_id, rating, content, is_published, is_spoiler, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING id, author_id, game_id, rating, content, is_published, is_spoiler, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(author_id)
    .bind(game_id)
    .bind(rating)
    .bind(&content)
    .bind(is_published)
    .bind(is_spoiler)
    .bind(now)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::from_sqlx(e, "You have already reviewed this game"))?;

    // Draft reviews do not touch the aggregate until they are published.
    if review.is_published {
        recompute_game_rating(&mut tx, game_id).await?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit review create: {}", e)))?;

    tracing::info!(
        "User {} reviewed game {} (review {})",
        author_id,
        game_id,
        review.id
    );

    Ok(review)
}
