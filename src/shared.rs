// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! A feed that can be shared between threads.
//!
//! [`Feed`] itself relies on `&mut self` for exclusion. `SharedFeed` puts one
//! behind a reader-writer lock: every mutation holds the write lock, so the
//! clock tick and the append happen together, and a feed request holds the
//! read lock for the whole merge, so it sees every timeline at a single
//! length.
//!
//! A panic while a lock is held cannot leave the feed half-updated: the only
//! panicking operation, [`Feed::post`], fails before it touches any state. So
//! a poisoned lock is recovered rather than propagated.

use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::clock::LogicalTime;
use crate::config::FeedConfig;
use crate::error::ConfigError;
use crate::error::FeedError;
use crate::feed::Feed;
use crate::id::ItemId;
use crate::id::UserId;
use crate::post_store::Item;

/// A cloneable handle to a feed behind a lock. Clones share the same feed.
#[derive(Clone, Debug, Default)]
pub struct SharedFeed {
    inner: Arc<RwLock<Feed>>,
}

impl SharedFeed {
    pub fn new() -> SharedFeed {
        return SharedFeed::from(Feed::new());
    }

    pub fn with_config(config: FeedConfig) -> Result<SharedFeed, ConfigError> {
        return Ok(SharedFeed::from(Feed::with_config(config)?));
    }

    pub fn try_post(&self, user: UserId, item: ItemId) -> Result<LogicalTime, FeedError> {
        return self.write().try_post(user, item);
    }

    /// # Panics
    ///
    /// If the clock is exhausted; see [`Feed::post`].
    pub fn post(&self, user: UserId, item: ItemId) -> LogicalTime {
        return self.write().post(user, item);
    }

    pub fn follow(&self, follower: UserId, followee: UserId) -> bool {
        return self.write().follow(follower, followee);
    }

    pub fn unfollow(&self, follower: UserId, followee: UserId) -> bool {
        return self.write().unfollow(follower, followee);
    }

    pub fn feed(&self, user: UserId) -> Vec<ItemId> {
        return self.read().feed(user);
    }

    pub fn feed_items(&self, user: UserId) -> Vec<Item> {
        return self.read().feed_items(user);
    }

    /// Hold the read lock for several queries against one consistent state.
    ///
    /// Writers block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, Feed> {
        return self.inner.read().unwrap_or_else(PoisonError::into_inner);
    }

    fn write(&self) -> RwLockWriteGuard<'_, Feed> {
        return self.inner.write().unwrap_or_else(PoisonError::into_inner);
    }
}

impl From<Feed> for SharedFeed {
    fn from(feed: Feed) -> SharedFeed {
        return SharedFeed {
            inner: Arc::new(RwLock::new(feed)),
        };
    }
}
