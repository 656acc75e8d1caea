// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! The feed service: posting, following, and reading merged feeds.
//!
//! [`Feed`] owns the clock, the post store and the follow graph. `post` is the
//! only place the clock advances, so every item in the store carries a
//! distinct time and each timeline stays sorted.
//!
//! A feed request merges the requester's own timeline with the timeline of
//! each user they follow, using the bounded merge in [`crate::merge`]. Reads
//! take `&self` and never create entries for unknown users.

use smallvec::SmallVec;
use tracing::debug;
use tracing::trace;

use crate::clock::Clock;
use crate::clock::LogicalTime;
use crate::config::FeedConfig;
use crate::error::ConfigError;
use crate::error::FeedError;
use crate::follow_graph::FollowGraph;
use crate::id::ItemId;
use crate::id::UserId;
use crate::merge::NewestFirst;
use crate::post_store::Item;
use crate::post_store::PostStore;

#[derive(Clone, Debug)]
pub struct Feed {
    clock: Clock,
    posts: PostStore,
    graph: FollowGraph,
    config: FeedConfig,
}

impl Default for Feed {
    fn default() -> Self {
        return Self::new();
    }
}

impl Feed {
    /// Create an empty feed returning the default 10 items per request.
    pub fn new() -> Feed {
        return Feed {
            clock: Clock::new(),
            posts: PostStore::new(),
            graph: FollowGraph::new(),
            config: FeedConfig::default(),
        };
    }

    /// Create an empty feed with a validated configuration.
    pub fn with_config(config: FeedConfig) -> Result<Feed, ConfigError> {
        config.validate()?;
        return Ok(Feed {
            config,
            ..Feed::new()
        });
    }

    /// Create an empty feed whose first post is stamped `clock`'s next time.
    pub fn with_clock(clock: Clock) -> Feed {
        return Feed {
            clock,
            ..Feed::new()
        };
    }

    #[inline]
    pub fn config(&self) -> &FeedConfig {
        return &self.config;
    }

    /// Maximum number of items a feed request returns.
    #[inline]
    pub fn feed_len(&self) -> usize {
        return self.config.feed_len;
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        return &self.clock;
    }

    #[inline]
    pub fn posts(&self) -> &PostStore {
        return &self.posts;
    }

    #[inline]
    pub fn graph(&self) -> &FollowGraph {
        return &self.graph;
    }

    /// Post `item` as `user`, stamping it with the next logical time.
    ///
    /// Fails only once the clock has no times left.
    pub fn try_post(&mut self, user: UserId, item: ItemId) -> Result<LogicalTime, FeedError> {
        let time = self.clock.try_tick().ok_or(FeedError::ClockExhausted)?;
        self.posts.post(user, item, time);
        trace!(user = user.0, item = item.0, time = time.0, "post");
        return Ok(time);
    }

    /// Post `item` as `user`, stamping it with the next logical time.
    ///
    /// # Panics
    ///
    /// If the clock is exhausted, which takes 2^64 posts from a fresh feed.
    /// Use [`Feed::try_post`] to handle that case.
    pub fn post(&mut self, user: UserId, item: ItemId) -> LogicalTime {
        return match self.try_post(user, item) {
            Ok(time) => time,
            Err(err) => panic!("{err}"),
        };
    }

    /// Make `follower` see `followee`'s posts.
    ///
    /// Following yourself, or someone you already follow, does nothing.
    /// Returns whether the graph changed.
    pub fn follow(&mut self, follower: UserId, followee: UserId) -> bool {
        let changed = self.graph.follow(follower, followee);
        trace!(follower = follower.0, followee = followee.0, changed, "follow");
        return changed;
    }

    /// Stop `follower` seeing `followee`'s posts. A missing edge is a no-op.
    /// Returns whether the graph changed.
    pub fn unfollow(&mut self, follower: UserId, followee: UserId) -> bool {
        let changed = self.graph.unfollow(follower, followee);
        trace!(follower = follower.0, followee = followee.0, changed, "unfollow");
        return changed;
    }

    /// The ids of the newest items from `user` and everyone they follow,
    /// newest first, at most [`Feed::feed_len`] of them.
    pub fn feed(&self, user: UserId) -> Vec<ItemId> {
        return self.feed_items(user).into_iter().map(|item| item.id).collect();
    }

    /// Like [`Feed::feed`], keeping each item's time.
    pub fn feed_items(&self, user: UserId) -> Vec<Item> {
        let merge = self.newest_first(user);
        let sources = merge.live_sources();
        let items: Vec<Item> = merge.take(self.config.feed_len).copied().collect();
        debug!(user = user.0, sources, len = items.len(), "feed");
        return items;
    }

    /// Unbounded merge of every item visible to `user`, newest first.
    ///
    /// Sources are `user`'s own timeline followed by each followee's in
    /// ascending id order, which fixes the (otherwise impossible) tie order.
    pub fn newest_first(&self, user: UserId) -> NewestFirst<'_> {
        let mut followees: SmallVec<[UserId; 16]> = self.graph.followees_of(user).collect();
        followees.sort_unstable();

        let own = self.posts.timeline_of(user);
        let theirs = followees.into_iter().map(|followee| self.posts.timeline_of(followee));
        return NewestFirst::new(std::iter::once(own).chain(theirs));
    }

    /// Items `user` has posted, oldest first.
    #[inline]
    pub fn timeline_of(&self, user: UserId) -> &[Item] {
        return self.posts.timeline_of(user);
    }

    /// Users `user` follows, in no particular order.
    pub fn followees_of(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        return self.graph.followees_of(user);
    }

    /// Users following `user`, in no particular order.
    pub fn followers_of(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        return self.graph.followers_of(user);
    }

    #[inline]
    pub fn follows(&self, follower: UserId, followee: UserId) -> bool {
        return self.graph.follows(follower, followee);
    }
}
