// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Identifier types for users and posted items.
//!
//! Both are caller-supplied opaque integers. Nothing checks that a user
//! "exists" or that an item id is unique: any `i64` is accepted everywhere.

use std::fmt;
use std::str::FromStr;

/// A user identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

/// An item identifier, chosen by the author when posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> UserId {
        return UserId(id);
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> ItemId {
        return ItemId(id);
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<UserId, Self::Err> {
        return s.parse().map(UserId);
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<ItemId, Self::Err> {
        return s.parse().map(ItemId);
    }
}
