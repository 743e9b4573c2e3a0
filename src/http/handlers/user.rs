use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::user::{get::get_user_by_id, post::create_user},
    models::User,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    pub username: String,
    pub display_name: Option<String>,
}

pub async fn register_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<Json<String>, (StatusCode, String)> {
    match create_user(
        payload.username.clone(),
        payload.display_name,
        state.postgres.clone(),
    )
    .await
    {
        Ok(token) => {
            tracing::info!("User registered: {}", payload.username);
            Ok(Json(token))
        }
        Err(err) => {
            tracing::error!("Error registering user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = get_user_by_id(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving user: {}", e);
            e.to_response()
        })?;

    Ok(Json(user))
}
