// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! One global log, scanned backwards.
//!
//! Every post goes into a single chronological vector. A feed request walks
//! it from the newest end and keeps items whose author is visible to the
//! requester, stopping once the feed is full. Cheap when the requester's
//! circle posts often, a full scan when it is quiet.
//!
//! Complexity, for P posts in the whole system:
//! - post, follow, unfollow: O(1)
//! - feed: O(P) worst case

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::feed_model::FeedModel;

#[derive(Clone, Debug)]
pub struct ScanFeed {
    feed_len: usize,
    /// (author, item), oldest first. Position is the logical time.
    log: Vec<(i64, i64)>,
    followees: FxHashMap<i64, FxHashSet<i64>>,
}

impl ScanFeed {
    fn visible(&self, user: i64, author: i64) -> bool {
        return author == user
            || self.followees.get(&user).is_some_and(|set| set.contains(&author));
    }
}

impl FeedModel for ScanFeed {
    fn with_feed_len(feed_len: usize) -> ScanFeed {
        return ScanFeed {
            feed_len,
            log: Vec::new(),
            followees: FxHashMap::default(),
        };
    }

    fn post(&mut self, user: i64, item: i64) {
        self.log.push((user, item));
    }

    fn follow(&mut self, follower: i64, followee: i64) {
        if follower != followee {
            self.followees.entry(follower).or_default().insert(followee);
        }
    }

    fn unfollow(&mut self, follower: i64, followee: i64) {
        if let Some(set) = self.followees.get_mut(&follower) {
            set.remove(&followee);
        }
    }

    fn feed(&self, user: i64) -> Vec<i64> {
        return self
            .log
            .iter()
            .rev()
            .filter(|(author, _)| self.visible(user, *author))
            .take(self.feed_len)
            .map(|(_, item)| *item)
            .collect();
    }

    fn name(&self) -> &'static str {
        return "scan";
    }
}
