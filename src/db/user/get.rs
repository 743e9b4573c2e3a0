use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_id(user_id: Uuid, postgres: PgPool) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, display_name, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

    user.ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", user_id)))
}

pub async fn user_exists(user_id: Uuid, postgres: PgPool) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to check user existence: {}", e)))
}
