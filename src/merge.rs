// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Bounded k-way merge of time-ascending timelines, newest first.
//!
//! A feed draws from k timelines that are each already sorted by time. We
//! never need the full union sorted, only its top N, so instead of
//! concatenating and sorting we keep one cursor per timeline, parked on that
//! timeline's newest unread item, in a max-heap keyed by the item's time.
//!
//! Each step pops the newest cursor, emits its item, steps it one item back
//! in time and pushes it again unless its timeline is used up. The heap never
//! holds more than one entry per timeline.
//!
//! A cursor is just the unread prefix of its timeline: the current item is
//! the prefix's last element and the cursor is exhausted when the prefix is
//! empty.
//!
//! Complexity, for k non-empty timelines and T items in total:
//! - setup: O(k) (heapify)
//! - each emitted item: O(log k)
//! - top N: O(k + N log k), against O(T log T) for sort-everything
//!
//! # Ties
//!
//! Times from one clock are unique, so two heads never compare equal in a
//! feed. For arbitrary input the merge is still deterministic: on equal
//! times, the timeline given earlier wins.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::binary_heap::PeekMut;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::clock::LogicalTime;
use crate::id::ItemId;
use crate::post_store::Item;

/// Most feeds draw from a handful of timelines; avoid a heap allocation for
/// the cursor table in that case.
const INLINE_SOURCES: usize = 8;

/// A heap entry: the time of a cursor's current item and which cursor it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Head {
    time: LogicalTime,
    source: usize,
}

impl PartialOrd for Head {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for Head {
    fn cmp(&self, other: &Self) -> Ordering {
        // Newer first; on a tie the lower source index is "greater" so it
        // pops first.
        return self
            .time
            .cmp(&other.time)
            .then_with(|| other.source.cmp(&self.source));
    }
}

/// Lazy iterator over the union of several timelines, newest item first.
///
/// Bound it with [`Iterator::take`]; items past the bound are never visited.
#[derive(Clone, Debug)]
pub struct NewestFirst<'a> {
    /// Unread prefix of each non-empty source timeline, indexed by `Head::source`.
    cursors: SmallVec<[&'a [Item]; INLINE_SOURCES]>,
    heap: BinaryHeap<Head>,
    /// Items left across all cursors.
    remaining: usize,
}

impl<'a> NewestFirst<'a> {
    /// Start a merge over `sources`, each sorted by ascending time.
    ///
    /// Empty sources are skipped. Source order only matters for ties.
    pub fn new<I>(sources: I) -> NewestFirst<'a>
    where
        I: IntoIterator<Item = &'a [Item]>,
    {
        let mut cursors: SmallVec<[&'a [Item]; INLINE_SOURCES]> = SmallVec::new();
        let mut heads = Vec::new();
        let mut remaining = 0;

        for timeline in sources {
            let Some(last) = timeline.last() else {
                continue;
            };
            heads.push(Head {
                time: last.time,
                source: cursors.len(),
            });
            cursors.push(timeline);
            remaining += timeline.len();
        }

        return NewestFirst {
            cursors,
            heap: BinaryHeap::from(heads),
            remaining,
        };
    }

    /// Number of timelines still contributing items.
    #[inline]
    pub fn live_sources(&self) -> usize {
        return self.heap.len();
    }
}

impl<'a> Iterator for NewestFirst<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<&'a Item> {
        let mut top = self.heap.peek_mut()?;
        let source = top.source;

        // Every cursor in the heap is non-empty, so this always splits.
        let timeline: &'a [Item] = self.cursors[source];
        let (item, rest) = timeline.split_last()?;
        self.cursors[source] = rest;
        self.remaining -= 1;

        // Step back in time. Updating the top in place sifts it down once when
        // `top` drops, instead of a pop followed by a push.
        match rest.last() {
            Some(previous) => top.time = previous.time,
            None => {
                PeekMut::pop(top);
            }
        }

        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl ExactSizeIterator for NewestFirst<'_> {}

impl FusedIterator for NewestFirst<'_> {}

/// The ids of the `limit` newest items across `sources`, newest first.
pub fn newest<'a, I>(sources: I, limit: usize) -> Vec<ItemId>
where
    I: IntoIterator<Item = &'a [Item]>,
{
    let merge = NewestFirst::new(sources);
    let mut ids = Vec::with_capacity(limit.min(merge.len()));
    ids.extend(merge.take(limit).map(|item| item.id));
    return ids;
}
