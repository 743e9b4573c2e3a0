use quest_log_be::models::game::published_aggregate;
use quest_log_be::models::review::{normalize_rating, recompute_required};

#[test]
fn test_aggregate_mean_and_count() {
    let (average, count) = published_aggregate(&[8.0, 6.0]);
    assert!((average - 7.0).abs() < 1e-9);
    assert_eq!(count, 2);
}

#[test]
fn test_aggregate_after_unpublish() {
    // {8.0, 6.0} published, then the 6.0 review is unpublished
    let (average, count) = published_aggregate(&[8.0]);
    assert!((average - 8.0).abs() < 1e-9);
    assert_eq!(count, 1);
}

#[test]
fn test_aggregate_empty_set_is_zero() {
    let (average, count) = published_aggregate(&[]);
    assert_eq!(average, 0.0);
    assert_eq!(count, 0);
}

#[test]
fn test_aggregate_rounds_to_storage_precision() {
    // mean of 7.5, 8.0, 9.0 is 8.1666…, stored as 8.2
    let (average, count) = published_aggregate(&[7.5, 8.0, 9.0]);
    assert!((average - 8.2).abs() < 1e-9);
    assert_eq!(count, 3);
}

#[test]
fn test_normalize_rating_bounds() {
    assert!(normalize_rating(-0.1).is_err());
    assert!(normalize_rating(10.1).is_err());
    assert!(normalize_rating(f64::NAN).is_err());
    assert_eq!(normalize_rating(0.0).unwrap(), 0.0);
    assert_eq!(normalize_rating(10.0).unwrap(), 10.0);
}

#[test]
fn test_normalize_rating_keeps_one_decimal() {
    assert_eq!(normalize_rating(7.25).unwrap(), 7.3);
    assert_eq!(normalize_rating(7.24).unwrap(), 7.2);
    assert_eq!(normalize_rating(9.0).unwrap(), 9.0);
}

#[test]
fn test_recompute_triggers() {
    // publish toggles recompute in both directions
    assert!(recompute_required(true, false, false));
    assert!(recompute_required(false, true, false));

    // rating change on a published review recomputes
    assert!(recompute_required(true, true, true));

    // content-only edit of a published review does not
    assert!(!recompute_required(true, true, false));

    // draft edits never touch the aggregate
    assert!(!recompute_required(false, false, true));
    assert!(!recompute_required(false, false, false));
}
