use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::follow::get::{list_following, list_following_many, list_reachable_profiles},
    errors::AppError,
    models::{User, follow::FollowSuggestion},
};

/// Pure ranking step over an in-memory adjacency view. Candidates are the
/// users reachable through the viewer's followees; the viewer and everyone
/// they already follow are excluded. Ordering: mutual-connection count
/// descending, then candidate account creation recency descending.
pub fn rank_candidates(
    viewer_id: Uuid,
    following: &HashSet<Uuid>,
    candidates: Vec<User>,
    candidate_following: &HashMap<Uuid, HashSet<Uuid>>,
    limit: usize,
) -> Vec<FollowSuggestion> {
    let mut ranked: Vec<(FollowSuggestion, DateTime<Utc>)> = candidates
        .into_iter()
        .filter(|candidate| candidate.id != viewer_id && !following.contains(&candidate.id))
        .map(|candidate| {
            let mutual_follows_count = candidate_following
                .get(&candidate.id)
                .map(|theirs| theirs.intersection(following).count())
                .unwrap_or(0);
            let created_at = candidate.created_at;
            (
                FollowSuggestion {
                    user_id: candidate.id,
                    username: candidate.username,
                    display_name: candidate.display_name,
                    mutual_follows_count,
                },
                created_at,
            )
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.0.mutual_follows_count
            .cmp(&a.0.mutual_follows_count)
            .then_with(|| b.1.cmp(&a.1))
    });
    ranked.truncate(limit);

    ranked.into_iter().map(|(suggestion, _)| suggestion).collect()
}

pub async fn suggest_follows(
    viewer_id: Uuid,
    limit: u32,
    postgres: PgPool,
) -> Result<Vec<FollowSuggestion>, AppError> {
    let following = list_following(viewer_id, postgres.clone()).await?;

    // A viewer following nobody has an empty candidate set, not an error.
    if following.is_empty() {
        return Ok(Vec::new());
    }

    let followee_ids: Vec<Uuid> = following.iter().copied().collect();
    let candidates = list_reachable_profiles(&followee_ids, postgres.clone()).await?;

    let candidate_ids: Vec<Uuid> = candidates.iter().map(|c| c.id).collect();
    let edges = list_following_many(&candidate_ids, postgres).await?;

    let mut candidate_following: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    for edge in edges {
        candidate_following
            .entry(edge.follower_id)
            .or_default()
            .insert(edge.following_id);
    }

    Ok(rank_candidates(
        viewer_id,
        &following,
        candidates,
        &candidate_following,
        limit as usize,
    ))
}
