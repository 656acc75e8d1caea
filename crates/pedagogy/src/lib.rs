// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Naive reference feeds.
//!
//! These implementations favour obviousness over speed. They exist to be
//! compared against: as test oracles for the real merge, and as benchmark
//! baselines showing what the bounded merge saves.
//!
//! # Implementations
//!
//! | Implementation | Strategy | Feed cost |
//! |----------------|----------|-----------|
//! | `SortAllFeed` | concatenate visible timelines, sort | O(T log T) |
//! | `ScanFeed` | walk one global log backwards, filter | O(P) |
//!
//! # Example
//!
//! ```
//! use pedagogy::FeedModel;
//! use pedagogy::SortAllFeed;
//!
//! let mut feed = SortAllFeed::new();
//! feed.post(1, 101);
//! feed.follow(2, 1);
//! feed.post(2, 201);
//! assert_eq!(feed.feed(2), vec![201, 101]);
//! ```

pub mod conformance;
pub mod feed_model;
pub mod scan;
pub mod sort_all;

pub use feed_model::FeedModel;
pub use scan::ScanFeed;
pub use sort_all::SortAllFeed;
