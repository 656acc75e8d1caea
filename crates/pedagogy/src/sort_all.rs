// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! The obvious feed: gather everything, sort it, keep the top.
//!
//! Per-user timelines and follow sets, as in the real feed, but a request
//! copies every visible item into one vector and sorts it by time.
//!
//! Complexity, for T visible items:
//! - post, follow, unfollow: O(1)
//! - feed: O(T log T)

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::feed_model::FeedModel;

#[derive(Clone, Debug)]
pub struct SortAllFeed {
    time: u64,
    feed_len: usize,
    /// user -> (time, item), oldest first
    timelines: FxHashMap<i64, Vec<(u64, i64)>>,
    followees: FxHashMap<i64, FxHashSet<i64>>,
}

impl FeedModel for SortAllFeed {
    fn with_feed_len(feed_len: usize) -> SortAllFeed {
        return SortAllFeed {
            time: 0,
            feed_len,
            timelines: FxHashMap::default(),
            followees: FxHashMap::default(),
        };
    }

    fn post(&mut self, user: i64, item: i64) {
        self.timelines.entry(user).or_default().push((self.time, item));
        self.time += 1;
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
        let mut visible: Vec<(u64, i64)> = Vec::new();
        let sources = std::iter::once(&user).chain(self.followees.get(&user).into_iter().flatten());
        for source in sources {
            if let Some(timeline) = self.timelines.get(source) {
                visible.extend_from_slice(timeline);
            }
        }

        visible.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        visible.truncate(self.feed_len);
        return visible.into_iter().map(|(_, item)| item).collect();
    }

    fn name(&self) -> &'static str {
        return "sort-all";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance;

    #[test]
    fn conformance() {
        conformance::check_all::<SortAllFeed>();
    }
}
