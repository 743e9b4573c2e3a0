use std::collections::{HashMap, HashSet};

use chrono::{DateTime, TimeZone, Utc};
use quest_log_be::feed::suggest::rank_candidates;
use quest_log_be::models::User;
use uuid::Uuid;

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_750_000_000 + seconds, 0).unwrap()
}

fn user(name: &str, created_at: DateTime<Utc>) -> User {
    User {
        id: Uuid::new_v4(),
        username: name.to_string(),
        display_name: None,
        created_at,
    }
}

#[test]
fn test_ranks_by_mutual_follow_count() {
    let viewer = Uuid::new_v4();
    let followee_a = Uuid::new_v4();
    let followee_b = Uuid::new_v4();
    let following: HashSet<Uuid> = [followee_a, followee_b].into_iter().collect();

    let strong = user("strong", at(0));
    let weak = user("weak", at(0));

    // `strong` follows both of the viewer's followees, `weak` follows one
    let mut adjacency: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    adjacency.insert(strong.id, [followee_a, followee_b].into_iter().collect());
    adjacency.insert(weak.id, [followee_a].into_iter().collect());

    let suggestions = rank_candidates(
        viewer,
        &following,
        vec![weak.clone(), strong.clone()],
        &adjacency,
        10,
    );

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].user_id, strong.id);
    assert_eq!(suggestions[0].mutual_follows_count, 2);
    assert_eq!(suggestions[1].user_id, weak.id);
    assert_eq!(suggestions[1].mutual_follows_count, 1);
}

#[test]
fn test_tie_broken_by_account_recency() {
    let viewer = Uuid::new_v4();
    let followee = Uuid::new_v4();
    let following: HashSet<Uuid> = [followee].into_iter().collect();

    let older = user("older", at(100));
    let newer = user("newer", at(200));

    let mut adjacency: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    adjacency.insert(older.id, [followee].into_iter().collect());
    adjacency.insert(newer.id, [followee].into_iter().collect());

    let suggestions = rank_candidates(
        viewer,
        &following,
        vec![older.clone(), newer.clone()],
        &adjacency,
        10,
    );

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].user_id, newer.id);
    assert_eq!(suggestions[1].user_id, older.id);
}

#[test]
fn test_excludes_viewer_and_already_followed() {
    let viewer = Uuid::new_v4();
    let followee = Uuid::new_v4();
    let following: HashSet<Uuid> = [followee].into_iter().collect();

    let viewer_profile = User {
        id: viewer,
        username: "viewer".to_string(),
        display_name: None,
        created_at: at(0),
    };
    let followee_profile = User {
        id: followee,
        username: "followee".to_string(),
        display_name: None,
        created_at: at(0),
    };
    let fresh = user("fresh", at(0));

    let suggestions = rank_candidates(
        viewer,
        &following,
        vec![viewer_profile, followee_profile, fresh.clone()],
        &HashMap::new(),
        10,
    );

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].user_id, fresh.id);
    assert_eq!(suggestions[0].mutual_follows_count, 0);
}

#[test]
fn test_truncates_to_limit() {
    let viewer = Uuid::new_v4();
    let followee = Uuid::new_v4();
    let following: HashSet<Uuid> = [followee].into_iter().collect();

    let candidates: Vec<User> = (0..5).map(|i| user(&format!("u{i}"), at(i))).collect();

    let suggestions = rank_candidates(viewer, &following, candidates, &HashMap::new(), 3);

    assert_eq!(suggestions.len(), 3);
}

#[test]
fn test_no_candidates_yields_empty_list() {
    let viewer = Uuid::new_v4();
    let suggestions = rank_candidates(viewer, &HashSet::new(), Vec::new(), &HashMap::new(), 10);
    assert!(suggestions.is_empty());
}
