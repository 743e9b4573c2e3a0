use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::errors::AppError;

/// Builds the single Postgres pool handed to `AppState`. All store access
/// goes through this handle; nothing holds a connection globally.
pub async fn connect_postgres(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to Postgres: {}", e)))?;

    tracing::info!("Postgres connection pool established");

    Ok(pool)
}

pub async fn close_postgres(pool: PgPool) {
    pool.close().await;
    tracing::info!("Postgres connection pool closed");
}
