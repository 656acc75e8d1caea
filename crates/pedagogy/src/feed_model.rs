// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! The FeedModel trait: the interface every reference feed implements.
//!
//! Keeping the naive feeds behind one trait lets the same conformance checks
//! run against each of them, and lets benchmarks swap them freely.

/// Number of items a feed returns unless configured otherwise.
pub const DEFAULT_FEED_LEN: usize = 10;

/// A social feed over plain integer ids.
///
/// Implementors must provide:
/// - A single logical clock shared by every user
/// - Irreflexive, idempotent follow edges
/// - Feeds holding the newest `feed_len` items from the requester and the
///   users they follow, newest first
pub trait FeedModel {
    /// Create an empty feed returning at most `feed_len` items per request.
    fn with_feed_len(feed_len: usize) -> Self
    where
        Self: Sized;

    /// Create an empty feed returning the default 10 items per request.
    fn new() -> Self
    where
        Self: Sized,
    {
        return Self::with_feed_len(DEFAULT_FEED_LEN);
    }

    /// Post `item` as `user` at the next logical time.
    fn post(&mut self, user: i64, item: i64);

    /// Add `follower -> followee`. Self-follow does nothing.
    fn follow(&mut self, follower: i64, followee: i64);

    /// Remove `follower -> followee` if present.
    fn unfollow(&mut self, follower: i64, followee: i64);

    /// The newest items visible to `user`, newest first.
    fn feed(&self, user: i64) -> Vec<i64>;

    /// Human-readable name for benchmark and test output.
    fn name(&self) -> &'static str;
}
