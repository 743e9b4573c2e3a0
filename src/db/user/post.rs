use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{auth::generate_jwt, errors::AppError, models::User};

pub async fn create_user(
    username: String,
    display_name: Option<String>,
    postgres: PgPool,
) -> Result<String, AppError> {
    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".into()));
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, username, display_name, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, display_name, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&username)
    .bind(&display_name)
    .bind(Utc::now())
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::from_sqlx(e, "Username already taken"))?;

    tracing::info!("Created user {} (ID: {})", user.username, user.id);

    let token = generate_jwt(&user)?;
    Ok(token)
}
