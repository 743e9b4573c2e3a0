use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::follow::{
        follow_user, is_following, list_followers, list_following, mutual_follows, unfollow_user,
    },
    feed::suggest::suggest_follows,
    models::{
        activity::DEFAULT_SUGGESTION_LIMIT,
        follow::{FollowEdge, FollowSuggestion},
    },
    state::AppState,
};

pub async fn follow_user_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(target_id): Path<Uuid>,
) -> Result<Json<FollowEdge>, (StatusCode, String)> {
    let viewer_id = claims.viewer_id().map_err(|e| e.to_response())?;

    let edge = follow_user(viewer_id, target_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error following user {}: {}", target_id, e);
            e.to_response()
        })?;

    Ok(Json(edge))
}

pub async fn unfollow_user_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(target_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let viewer_id = claims.viewer_id().map_err(|e| e.to_response())?;

    unfollow_user(viewer_id, target_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error unfollowing user {}: {}", target_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn follow_status_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(target_id): Path<Uuid>,
) -> Result<Json<bool>, (StatusCode, String)> {
    let viewer_id = claims.viewer_id().map_err(|e| e.to_response())?;

    let following = is_following(viewer_id, target_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error checking follow status: {}", e);
            e.to_response()
        })?;

    Ok(Json(following))
}

pub async fn mutual_follows_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Path(target_id): Path<Uuid>,
) -> Result<Json<Vec<Uuid>>, (StatusCode, String)> {
    let viewer_id = claims.viewer_id().map_err(|e| e.to_response())?;

    let mutuals = mutual_follows(viewer_id, target_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error computing mutual follows: {}", e);
            e.to_response()
        })?;

    Ok(Json(mutuals.into_iter().collect()))
}

pub async fn list_following_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Uuid>>, (StatusCode, String)> {
    let following = list_following(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error listing following for {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(following.into_iter().collect()))
}

pub async fn list_followers_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Uuid>>, (StatusCode, String)> {
    let followers = list_followers(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error listing followers for {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(followers.into_iter().collect()))
}

#[derive(Deserialize)]
pub struct SuggestionParams {
    pub limit: Option<u32>,
}

pub async fn follow_suggestions_handler(
    claims: AuthClaims,
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<FollowSuggestion>>, (StatusCode, String)> {
    let viewer_id = claims.viewer_id().map_err(|e| e.to_response())?;
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);

    let suggestions = suggest_follows(viewer_id, limit, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error building follow suggestions: {}", e);
            e.to_response()
        })?;

    Ok(Json(suggestions))
}
