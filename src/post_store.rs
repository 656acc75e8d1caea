// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Per-user append-only timelines.
//!
//! Each user's items live in one `Vec`, in the order they were posted. Since
//! times come from a single monotonic clock, insertion order is time order and
//! every timeline is sorted ascending without any extra work.
//!
//! Timelines are created on first post. Reading an unknown user yields an
//! empty slice and does not touch the map.

use rustc_hash::FxHashMap;

use crate::clock::LogicalTime;
use crate::id::ItemId;
use crate::id::UserId;

/// A posted item. Never changes after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub time: LogicalTime,
    pub id: ItemId,
}

impl Item {
    pub fn new(time: LogicalTime, id: ItemId) -> Item {
        return Item { time, id };
    }
}

/// Storage for every user's timeline.
#[derive(Clone, Debug, Default)]
pub struct PostStore {
    timelines: FxHashMap<UserId, Vec<Item>>,
    /// Total number of items across all timelines.
    len: usize,
}

impl PostStore {
    pub fn new() -> PostStore {
        return PostStore {
            timelines: FxHashMap::default(),
            len: 0,
        };
    }

    /// Append an item to `user`'s timeline.
    ///
    /// `time` must be later than anything already stored; the feed passes
    /// fresh clock ticks so this always holds.
    pub fn post(&mut self, user: UserId, id: ItemId, time: LogicalTime) {
        let timeline = self.timelines.entry(user).or_default();
        debug_assert!(timeline.last().is_none_or(|last| last.time < time));
        timeline.push(Item::new(time, id));
        self.len += 1;
    }

    /// The items `user` has posted, oldest first.
    #[inline]
    pub fn timeline_of(&self, user: UserId) -> &[Item] {
        return match self.timelines.get(&user) {
            Some(timeline) => timeline.as_slice(),
            None => &[],
        };
    }

    /// Number of items `user` has posted.
    #[inline]
    pub fn post_count(&self, user: UserId) -> usize {
        return self.timeline_of(user).len();
    }

    /// Number of items across all users.
    #[inline]
    pub fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Users with at least one post, in no particular order.
    pub fn authors(&self) -> impl Iterator<Item = UserId> + '_ {
        return self.timelines.keys().copied();
    }
}
