// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Behaviour every [`FeedModel`] must show.
//!
//! Each check builds a fresh feed and panics on the first mismatch, so
//! implementations run them from a plain `#[test]`.

use crate::feed_model::FeedModel;

/// Run every check below.
pub fn check_all<F: FeedModel>() {
    own_posts_newest_first::<F>();
    followee_posts_are_merged::<F>();
    unfollow_hides_later_posts::<F>();
    window_keeps_newest::<F>();
    self_follow_is_ignored::<F>();
    follow_is_idempotent::<F>();
    unknown_user_is_empty::<F>();
}

pub fn own_posts_newest_first<F: FeedModel>() {
    let mut feed = F::new();
    feed.post(1, 5);
    feed.post(1, 3);
    assert_eq!(feed.feed(1), vec![3, 5], "{}", feed.name());
}

pub fn followee_posts_are_merged<F: FeedModel>() {
    let mut feed = F::new();
    feed.post(1, 101);
    feed.follow(2, 1);
    feed.post(2, 201);
    assert_eq!(feed.feed(2), vec![201, 101], "{}", feed.name());
}

pub fn unfollow_hides_later_posts<F: FeedModel>() {
    let mut feed = F::new();
    feed.follow(1, 2);
    feed.unfollow(1, 2);
    feed.post(2, 99);
    assert_eq!(feed.feed(1), Vec::<i64>::new(), "{}", feed.name());
}

pub fn window_keeps_newest<F: FeedModel>() {
    let mut feed = F::new();
    for item in 0..15 {
        feed.post(1, item);
    }
    let expected: Vec<i64> = (5..15).rev().collect();
    assert_eq!(feed.feed(1), expected, "{}", feed.name());
}

pub fn self_follow_is_ignored<F: FeedModel>() {
    let mut feed = F::new();
    feed.follow(1, 1);
    feed.post(1, 7);
    // Following yourself must not duplicate your own items.
    assert_eq!(feed.feed(1), vec![7], "{}", feed.name());
}

pub fn follow_is_idempotent<F: FeedModel>() {
    let mut feed = F::new();
    feed.post(2, 1);
    feed.follow(1, 2);
    feed.follow(1, 2);
    assert_eq!(feed.feed(1), vec![1], "{}", feed.name());
    feed.unfollow(1, 2);
    feed.unfollow(1, 2);
    assert_eq!(feed.feed(1), Vec::<i64>::new(), "{}", feed.name());
}

pub fn unknown_user_is_empty<F: FeedModel>() {
    let feed = F::new();
    assert_eq!(feed.feed(42), Vec::<i64>::new(), "{}", feed.name());
}
