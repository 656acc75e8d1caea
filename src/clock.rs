// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Logical clock that orders every post in the system.
//!
//! There is exactly one clock per [`Feed`](crate::Feed), and it is shared by
//! every user. That is what makes the cross-user merge well defined: no two
//! items anywhere carry the same time, so "newer" is a total order.
//!
//! Complexity:
//! - tick: O(1)
//! - compare: O(1)

use std::fmt;

/// A point in logical time.
///
/// Only meaningful relative to other times from the same clock. It is never
/// wall-clock time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalTime(pub u64);

impl LogicalTime {
    /// The earliest time a clock hands out.
    pub const ZERO: LogicalTime = LogicalTime(0);

    #[inline]
    pub fn get(self) -> u64 {
        return self.0;
    }
}

impl fmt::Display for LogicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "t{}", self.0);
    }
}

/// A monotonic counter.
///
/// `try_tick` returns the current value and then advances, so the first item
/// posted is stamped with time 0. Once every `u64` has been handed out the
/// clock is exhausted and stays that way; it never wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    /// The next time to hand out, or `None` once exhausted.
    next: Option<u64>,
}

impl Default for Clock {
    fn default() -> Self {
        return Self::new();
    }
}

impl Clock {
    /// Create a new clock starting at 0.
    pub fn new() -> Clock {
        return Clock { next: Some(0) };
    }

    /// Create a clock whose next tick returns `time`.
    ///
    /// Only sound on an empty feed: times handed out earlier by another clock
    /// are not known to this one.
    pub fn starting_at(time: u64) -> Clock {
        return Clock { next: Some(time) };
    }

    /// The time the next tick would return, if any remain.
    #[inline]
    pub fn peek(&self) -> Option<LogicalTime> {
        return self.next.map(LogicalTime);
    }

    /// Whether every time has been handed out.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        return self.next.is_none();
    }

    /// Hand out the next time, or `None` if the clock is exhausted.
    #[inline]
    pub fn try_tick(&mut self) -> Option<LogicalTime> {
        let time = self.next?;
        self.next = time.checked_add(1);
        return Some(LogicalTime(time));
    }
}
