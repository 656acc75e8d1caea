// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Directed "follows" edges between users.
//!
//! The graph is irreflexive: `follow(a, a)` is accepted and ignored. Both
//! `follow` and `unfollow` are idempotent and report whether anything changed.

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::id::UserId;

/// Map from follower to the set of users they follow.
#[derive(Clone, Debug, Default)]
pub struct FollowGraph {
    followees: FxHashMap<UserId, FxHashSet<UserId>>,
}

impl FollowGraph {
    pub fn new() -> FollowGraph {
        return FollowGraph {
            followees: FxHashMap::default(),
        };
    }

    /// Add the edge `follower -> followee`.
    ///
    /// Returns false if the edge already existed or the ids are equal.
    pub fn follow(&mut self, follower: UserId, followee: UserId) -> bool {
        if follower == followee {
            return false;
        }
        return self.followees.entry(follower).or_default().insert(followee);
    }

    /// Remove the edge `follower -> followee`. Returns false if it was absent.
    pub fn unfollow(&mut self, follower: UserId, followee: UserId) -> bool {
        return match self.followees.get_mut(&follower) {
            Some(set) => set.remove(&followee),
            None => false,
        };
    }

    #[inline]
    pub fn follows(&self, follower: UserId, followee: UserId) -> bool {
        return self
            .followees
            .get(&follower)
            .is_some_and(|set| set.contains(&followee));
    }

    /// Users `user` follows, in no particular order.
    pub fn followees_of(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        return self.followees.get(&user).into_iter().flatten().copied();
    }

    #[inline]
    pub fn followee_count(&self, user: UserId) -> usize {
        return self.followees.get(&user).map_or(0, |set| set.len());
    }

    /// Users following `user`, in no particular order.
    ///
    /// The graph only indexes the forward direction, so this is a full scan.
    pub fn followers_of(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        return self
            .followees
            .iter()
            .filter(move |(_, set)| set.contains(&user))
            .map(|(&follower, _)| follower);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(iter: impl Iterator<Item = UserId>) -> Vec<UserId> {
        let mut users: Vec<UserId> = iter.collect();
        users.sort();
        return users;
    }

    #[test]
    fn follow_and_query() {
        let mut graph = FollowGraph::new();
        assert!(graph.follow(UserId(1), UserId(2)));
        assert!(graph.follow(UserId(1), UserId(3)));

        assert!(graph.follows(UserId(1), UserId(2)));
        assert!(!graph.follows(UserId(2), UserId(1)));
        assert_eq!(sorted(graph.followees_of(UserId(1))), vec![UserId(2), UserId(3)]);
        assert_eq!(graph.followee_count(UserId(1)), 2);
    }

    #[test]
    fn follow_is_idempotent() {
        let mut graph = FollowGraph::new();
        assert!(graph.follow(UserId(1), UserId(2)));
        assert!(!graph.follow(UserId(1), UserId(2)));
        assert_eq!(graph.followee_count(UserId(1)), 1);
    }

    #[test]
    fn self_follow_is_ignored() {
        let mut graph = FollowGraph::new();
        assert!(!graph.follow(UserId(4), UserId(4)));
        assert!(!graph.follows(UserId(4), UserId(4)));
        assert_eq!(graph.followees_of(UserId(4)).count(), 0);
        // No empty set gets created for the follower either.
        assert!(graph.followees.is_empty());
    }

    #[test]
    fn unfollow_is_idempotent() {
        let mut graph = FollowGraph::new();
        graph.follow(UserId(1), UserId(2));
        assert!(graph.unfollow(UserId(1), UserId(2)));
        assert!(!graph.unfollow(UserId(1), UserId(2)));
        assert!(!graph.follows(UserId(1), UserId(2)));
    }

    #[test]
    fn unfollow_unknown_user_is_noop() {
        let mut graph = FollowGraph::new();
        assert!(!graph.unfollow(UserId(9), UserId(10)));
        assert!(graph.followees.is_empty());
    }

    #[test]
    fn reads_do_not_insert() {
        let graph = FollowGraph::new();
        assert_eq!(graph.followees_of(UserId(1)).count(), 0);
        assert_eq!(graph.followee_count(UserId(1)), 0);
        assert!(!graph.follows(UserId(1), UserId(2)));
        assert!(graph.followees.is_empty());
    }

    #[test]
    fn followers_reverse_lookup() {
        let mut graph = FollowGraph::new();
        graph.follow(UserId(1), UserId(3));
        graph.follow(UserId(2), UserId(3));
        graph.follow(UserId(2), UserId(1));

        assert_eq!(sorted(graph.followers_of(UserId(3))), vec![UserId(1), UserId(2)]);
        assert_eq!(sorted(graph.followers_of(UserId(1))), vec![UserId(2)]);
        assert_eq!(graph.followers_of(UserId(2)).count(), 0);
    }
}
