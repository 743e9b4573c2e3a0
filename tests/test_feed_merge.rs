use chrono::{DateTime, TimeZone, Utc};
use quest_log_be::feed::engine::merge_activities;
use quest_log_be::models::activity::{
    ActivityItem, ActivityPayload, ActivityType, FeedQuery,
};
use uuid::Uuid;

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_750_000_000 + seconds, 0).unwrap()
}

fn review_item(review_id: Uuid, author_id: Uuid, created_at: DateTime<Utc>) -> ActivityItem {
    ActivityItem {
        id: ActivityItem::review_id(review_id),
        kind: ActivityType::Review,
        actor_id: author_id,
        created_at,
        payload: ActivityPayload::Review {
            review_id,
            author_username: "author".into(),
            game_id: Uuid::new_v4(),
            game_name: "Some Game".into(),
            rating: 8.0,
            is_spoiler: false,
        },
    }
}

fn follow_item(
    follower_id: Uuid,
    following_id: Uuid,
    created_at: DateTime<Utc>,
) -> ActivityItem {
    ActivityItem {
        id: ActivityItem::follow_id(follower_id, following_id),
        kind: ActivityType::Follow,
        actor_id: follower_id,
        created_at,
        payload: ActivityPayload::Follow {
            follower_username: "follower".into(),
            following_id,
            following_username: "followee".into(),
        },
    }
}

#[test]
fn test_merge_completeness() {
    // 3 reviews and 2 follows, all with distinct timestamps, fit in one page
    let mut candidates = Vec::new();
    for i in 0..3 {
        candidates.push(review_item(Uuid::new_v4(), Uuid::new_v4(), at(i * 2)));
    }
    for i in 0..2 {
        candidates.push(follow_item(Uuid::new_v4(), Uuid::new_v4(), at(i * 2 + 1)));
    }

    let (items, overflowed) = merge_activities(candidates, 10);

    assert_eq!(items.len(), 5);
    assert!(!overflowed);

    // Strictly descending by timestamp
    for pair in items.windows(2) {
        assert!(pair[0].created_at > pair[1].created_at);
    }
}

#[test]
fn test_merge_dedup_by_identity() {
    // The same review fetched by two overlapping source pulls appears once
    let review_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();
    let candidates = vec![
        review_item(review_id, author_id, at(5)),
        review_item(review_id, author_id, at(5)),
        follow_item(author_id, Uuid::new_v4(), at(3)),
    ];

    let (items, _) = merge_activities(candidates, 10);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, format!("review_{review_id}"));
}

#[test]
fn test_follow_after_review_orders_first() {
    // Viewer follows X and Y; X reviews at t1, Y follows Z at t2 > t1
    let x = Uuid::new_v4();
    let y = Uuid::new_v4();
    let z = Uuid::new_v4();
    let review_id = Uuid::new_v4();

    let candidates = vec![
        review_item(review_id, x, at(1)),
        follow_item(y, z, at(2)),
    ];

    let (items, _) = merge_activities(candidates, 10);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, ActivityType::Follow);
    assert_eq!(items[0].actor_id, y);
    assert_eq!(items[1].kind, ActivityType::Review);
    assert_eq!(items[1].actor_id, x);
}

#[test]
fn test_merge_tie_break_is_deterministic() {
    // Identical timestamps: reviews order before follows, then by id
    let ts = at(7);
    let follower = Uuid::new_v4();
    let review_a = Uuid::nil();
    let review_b = Uuid::new_v4();

    let forward = vec![
        follow_item(follower, Uuid::new_v4(), ts),
        review_item(review_b, Uuid::new_v4(), ts),
        review_item(review_a, Uuid::new_v4(), ts),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let (items_a, _) = merge_activities(forward, 10);
    let (items_b, _) = merge_activities(reversed, 10);

    let ids_a: Vec<&str> = items_a.iter().map(|i| i.id.as_str()).collect();
    let ids_b: Vec<&str> = items_b.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);

    assert_eq!(items_a[0].kind, ActivityType::Review);
    assert_eq!(items_a[1].kind, ActivityType::Review);
    assert_eq!(items_a[2].kind, ActivityType::Follow);
    // Among equal-type, equal-timestamp items the id decides
    assert!(items_a[0].id < items_a[1].id);
}

#[test]
fn test_merge_truncates_and_reports_overflow() {
    let candidates: Vec<ActivityItem> = (0..8)
        .map(|i| review_item(Uuid::new_v4(), Uuid::new_v4(), at(i)))
        .collect();

    let (items, overflowed) = merge_activities(candidates, 5);

    assert_eq!(items.len(), 5);
    assert!(overflowed);
    // The page keeps the newest items
    assert_eq!(items[0].created_at, at(7));
    assert_eq!(items[4].created_at, at(3));
}

#[test]
fn test_cursor_tie_at_page_boundary_skips_equal_timestamp() {
    // Two activities share the exact timestamp at a page boundary. The
    // cursor is the created_at of the last returned item and continuation
    // filters strictly older rows, so the equal-timestamp sibling is
    // skipped. This is the accepted tolerance of timestamp cursors.
    let ts = at(10);
    let first = review_item(Uuid::new_v4(), Uuid::new_v4(), ts);
    let sibling = follow_item(Uuid::new_v4(), Uuid::new_v4(), ts);
    let older = review_item(Uuid::new_v4(), Uuid::new_v4(), at(4));

    let all = vec![first.clone(), sibling.clone(), older.clone()];

    let (page_one, _) = merge_activities(all.clone(), 1);
    assert_eq!(page_one.len(), 1);
    let cursor = page_one[0].created_at;

    // Sources re-queried with before = cursor return strictly older rows
    let continuation: Vec<ActivityItem> = all
        .into_iter()
        .filter(|item| item.created_at < cursor)
        .collect();
    let (page_two, _) = merge_activities(continuation, 1);

    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].id, older.id);
}

#[test]
fn test_activity_item_wire_shape() {
    let review_id = Uuid::new_v4();
    let item = review_item(review_id, Uuid::new_v4(), at(0));
    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(value["type"], "REVIEW");
    assert_eq!(value["id"], format!("review_{review_id}"));
    assert!(value["actorId"].is_string());
    assert!(value["createdAt"].is_string());
    assert_eq!(value["payload"]["gameName"], "Some Game");
    assert_eq!(value["payload"]["isSpoiler"], false);
}

#[test]
fn test_feed_query_validation() {
    let query = FeedQuery::new(None, None, None, None).unwrap();
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, 20);

    assert!(FeedQuery::new(Some(0), None, None, None).is_err());
    assert!(FeedQuery::new(None, Some(0), None, None).is_err());
    assert!(FeedQuery::new(None, Some(51), None, None).is_err());
    assert!(FeedQuery::new(None, Some(50), None, None).is_ok());
}
