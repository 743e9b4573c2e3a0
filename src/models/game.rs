use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// `average_rating` and `review_count` are denormalized from the published
/// reviews of the game and are only ever written by the rating recompute,
/// inside the same transaction as the review mutation that triggered it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cover_url: Option<String>,
    pub average_rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Mean and count over a set of published ratings. An empty set yields
/// `(0.0, 0)`, never NULL. The mean is rounded to the one-decimal storage
/// precision of ratings.
pub fn published_aggregate(ratings: &[f64]) -> (f64, i64) {
    if ratings.is_empty() {
        return (0.0, 0);
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    ((mean * 10.0).round() / 10.0, ratings.len() as i64)
}
