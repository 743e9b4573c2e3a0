use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::game::{add_game, get_all_games, get_game},
    models::game::Game,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGamePayload {
    pub name: String,
    pub description: String,
    pub cover_url: Option<String>,
}

pub async fn add_game_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddGamePayload>,
) -> Result<Json<Game>, (StatusCode, String)> {
    let game = add_game(
        payload.name,
        payload.description,
        payload.cover_url,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error adding new game: {}", e);
        e.to_response()
    })?;

    Ok(Json(game))
}

pub async fn get_game_handler(
    Path(game_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Game>, (StatusCode, String)> {
    let game = get_game(game_id, state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error retrieving game {}: {}", game_id, e);
        e.to_response()
    })?;

    Ok(Json(game))
}

pub async fn get_all_games_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Game>>, (StatusCode, String)> {
    let games = get_all_games(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error retrieving games: {}", e);
        e.to_response()
    })?;

    Ok(Json(games))
}
