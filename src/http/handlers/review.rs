use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::review::{create_review, delete_review, get_reviews_for_game, update_review},
    models::review::Review,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    pub game_id: Uuid,
    pub rating: f64,
    pub content: String,
    pub is_published: Option<bool>,
    pub is_spoiler: Option<bool>,
}

pub async fn create_review_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let author_id = claims.viewer_id().map_err(|e| e.to_response())?;

    let review = create_review(
        author_id,
        payload.game_id,
        payload.rating,
        payload.content,
        payload.is_published.unwrap_or(true),
        payload.is_spoiler.unwrap_or(false),
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating review: {}", e);
        e.to_response()
    })?;

    Ok(Json(review))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewPayload {
    pub rating: Option<f64>,
    pub content: Option<String>,
    pub is_published: Option<bool>,
    pub is_spoiler: Option<bool>,
}

pub async fn update_review_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<UpdateReviewPayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let author_id = claims.viewer_id().map_err(|e| e.to_response())?;

    let review = update_review(
        review_id,
        author_id,
        payload.rating,
        payload.content,
        payload.is_published,
        payload.is_spoiler,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating review {}: {}", review_id, e);
        e.to_response()
    })?;

    Ok(Json(review))
}

pub async fn delete_review_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let author_id = claims.viewer_id().map_err(|e| e.to_response())?;

    delete_review(review_id, author_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting review {}: {}", review_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_game_reviews_handler(
    Path(game_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
    let reviews = get_reviews_for_game(game_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving reviews for game {}: {}", game_id, e);
            e.to_response()
        })?;

    Ok(Json(reviews))
}
