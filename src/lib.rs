// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Chirp - a minimal social feed built around a bounded k-way merge.
//!
//! Users post items, follow each other, and read a feed: the newest items
//! from themselves and everyone they follow, newest first. Every timeline is
//! append-only and already sorted, so a feed is the top N of a k-way merge,
//! computed with one heap entry per timeline instead of sorting everything.
//!
//! # Quick Start
//!
//! ```
//! use chirp::Feed;
//! use chirp::ItemId;
//! use chirp::UserId;
//!
//! let mut feed = Feed::new();
//! let (alice, bob) = (UserId(1), UserId(2));
//!
//! feed.post(alice, ItemId(101));
//! feed.follow(bob, alice);
//! feed.post(bob, ItemId(201));
//!
//! assert_eq!(feed.feed(bob), vec![ItemId(201), ItemId(101)]);
//! assert_eq!(feed.feed(alice), vec![ItemId(101)]);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod follow_graph;
pub mod id;
pub mod logging;
pub mod merge;
pub mod post_store;
pub mod script;
pub mod shared;

pub use clock::Clock;
pub use clock::LogicalTime;
pub use config::FeedConfig;
pub use error::ConfigError;
pub use error::FeedError;
pub use error::ScriptError;
pub use feed::Feed;
pub use id::ItemId;
pub use id::UserId;
pub use post_store::Item;
pub use shared::SharedFeed;
