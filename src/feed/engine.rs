use std::collections::HashSet;
use std::time::Duration;

use futures::future::join_all;
use sqlx::PgPool;
use tokio::time::timeout;
use uuid::Uuid;

use crate::{
    db::follow::get::list_following,
    errors::AppError,
    models::activity::{ActivityItem, FeedMeta, FeedPage, FeedQuery},
};

use super::sources::{ActivitySource, FollowActivitySource, ReviewActivitySource};

/// Pure merge step: dedup by item identity, order by `created_at`
/// descending with `(type, source_row_id)` ascending as the deterministic
/// tie-break, then cut the page. Returns the page plus whether the merged
/// set overflowed `limit` before truncation.
pub fn merge_activities(candidates: Vec<ActivityItem>, limit: usize) -> (Vec<ActivityItem>, bool) {
    let mut seen = HashSet::new();
    let mut merged: Vec<ActivityItem> = candidates
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect();

    merged.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| (a.kind, a.id.as_str()).cmp(&(b.kind, b.id.as_str())))
    });

    let overflowed = merged.len() > limit;
    merged.truncate(limit);

    (merged, overflowed)
}

/// Builds one feed page for a viewer.
///
/// Every enabled source is queried concurrently with the full interest set
/// and the full page limit, so the merged page holds at least
/// `min(limit, total available)` items in a single round regardless of how
/// timestamps are distributed across sources. A source that errors or
/// misses the deadline degrades the page instead of failing the request.
pub async fn get_activity_feed(
    viewer_id: Uuid,
    query: FeedQuery,
    postgres: PgPool,
    source_timeout: Duration,
) -> Result<FeedPage, AppError> {
    // Interest set: the viewer always sees their own activity.
    let mut interest_set = list_following(viewer_id, postgres.clone()).await?;
    interest_set.insert(viewer_id);
    let author_ids: Vec<Uuid> = interest_set.into_iter().collect();

    let sources: Vec<Box<dyn ActivitySource>> = vec![
        Box::new(ReviewActivitySource {
            postgres: postgres.clone(),
        }),
        Box::new(FollowActivitySource { postgres }),
    ];
    let enabled: Vec<&dyn ActivitySource> = sources
        .iter()
        .filter(|source| query.kind.is_none_or(|kind| source.kind() == kind))
        .map(|source| source.as_ref())
        .collect();

    let fetches = enabled.iter().map(|source| {
        let author_ids = &author_ids;
        async move {
            timeout(
                source_timeout,
                source.fetch(author_ids, query.limit, query.before),
            )
            .await
        }
    });
    let outcomes = join_all(fetches).await;

    let mut candidates = Vec::new();
    let mut any_unexhausted = false;
    let mut degraded = false;
    let mut completed = 0usize;

    for (source, outcome) in enabled.iter().zip(outcomes) {
        match outcome {
            Ok(Ok(batch)) => {
                any_unexhausted |= !batch.exhausted;
                candidates.extend(batch.items);
                completed += 1;
            }
            Ok(Err(e)) => {
                tracing::warn!("Activity source '{}' failed: {}", source.name(), e);
                degraded = true;
            }
            Err(_) => {
                tracing::warn!(
                    "Activity source '{}' timed out after {:?}",
                    source.name(),
                    source_timeout
                );
                degraded = true;
            }
        }
    }

    if completed == 0 {
        return Err(AppError::PartialData(
            "No activity source completed in time".into(),
        ));
    }

    let limit = query.limit as usize;
    let (items, overflowed) = merge_activities(candidates, limit);
    let has_next = overflowed || any_unexhausted;

    // `total` counts the merged window, not the viewer's whole history.
    let total = items.len() as u64;
    let meta = FeedMeta {
        page: query.page,
        limit: query.limit,
        total,
        total_pages: total.div_ceil(query.limit as u64) as u32,
        has_next,
        has_prev: query.page > 1 || query.before.is_some(),
        degraded,
    };

    Ok(FeedPage { items, meta })
}
