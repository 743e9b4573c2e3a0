use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub author_id: Uuid,
    pub game_id: Uuid,
    pub rating: f64,
    pub content: String,
    pub is_published: bool,
    pub is_spoiler: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ratings are kept on a 0.0..=10.0 scale with one decimal of precision.
pub fn normalize_rating(rating: f64) -> Result<f64, AppError> {
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 0.0 and 10.0".into(),
        ));
    }
    Ok((rating * 10.0).round() / 10.0)
}

/// Whether a review mutation changed anything the game aggregate depends
/// on. Content-only edits must return false here: recompute is O(reviews
/// of the game) and must not run for mutations that cannot change the
/// aggregate.
pub fn recompute_required(was_published: bool, now_published: bool, rating_changed: bool) -> bool {
    was_published != now_published || (now_published && rating_changed)
}
