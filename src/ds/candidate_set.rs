//! Ordered set of eviction candidates.
//!
//! Holds the keys of entries that currently qualify for eviction, ordered by
//! backward k-distance with a deterministic tie-break. The set stores plain
//! `(rank, key)` values — never references into entry storage — so removing
//! or evicting an entry can never leave a dangling member behind.
//!
//! ## Ordering
//!
//! ```text
//!   Candidate order (first = weakest = next eviction choice):
//!
//!   ┌──────────────────────┬──────────────────────────────────────────────┐
//!   │ Primary              │ ascending VictimRank::Distance(timestamp):   │
//!   │                      │ the k-th most recent access furthest in the  │
//!   │                      │ past sorts first                             │
//!   ├──────────────────────┼──────────────────────────────────────────────┤
//!   │ Tie-break            │ ascending key                                │
//!   ├──────────────────────┼──────────────────────────────────────────────┤
//!   │ VictimRank::Cold     │ sorts after every Distance(_): an entry      │
//!   │                      │ without a full history is never preferred    │
//!   │                      │ over one that has matured                    │
//!   └──────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! Because the rank is part of the stored value, a member's sort key can
//! never change in place. Callers remove a member under its old rank before
//! mutating the backing history and reinsert it under the new rank after,
//! which keeps the ordered structure consistent without relying on it to
//! tolerate in-place key mutation.
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::collections::BTreeSet;

/// Sort key of one eviction candidate.
///
/// Smaller ranks are weaker: they are chosen for eviction first.
///
/// # Example
///
/// ```
/// use lrukit::ds::VictimRank;
///
/// // The older k-th access loses
/// assert!(VictimRank::Distance(10) < VictimRank::Distance(20));
/// // A cold entry outranks (survives) every mature one
/// assert!(VictimRank::Distance(u64::MAX) < VictimRank::Cold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VictimRank {
    /// Timestamp of the k-th most recent access of a full-history entry.
    /// An earlier timestamp means a larger backward k-distance and a
    /// weaker candidate.
    Distance(u64),
    /// Fewer than K recorded accesses; sorts after all `Distance` ranks.
    Cold,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate<K> {
    rank: VictimRank,
    key: K,
}

/// Ordered set of `(rank, key)` eviction candidates.
///
/// # Example
///
/// ```
/// use lrukit::ds::{CandidateSet, VictimRank};
///
/// let mut candidates: CandidateSet<u64> = CandidateSet::new();
/// candidates.insert(VictimRank::Distance(30), 1);
/// candidates.insert(VictimRank::Distance(10), 2);
/// candidates.insert(VictimRank::Distance(20), 3);
///
/// // Key 2 has the oldest k-th access, so it is the weakest
/// assert_eq!(candidates.weakest(), Some(&2));
/// assert_eq!(candidates.pop_weakest(), Some(2));
/// assert_eq!(candidates.weakest(), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSet<K> {
    set: BTreeSet<Candidate<K>>,
}

impl<K> CandidateSet<K>
where
    K: Ord + Clone,
{
    /// Creates an empty candidate set.
    pub fn new() -> Self {
        Self {
            set: BTreeSet::new(),
        }
    }

    /// Returns the number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns `true` if there are no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Inserts a candidate under `rank`; returns `false` if the exact
    /// `(rank, key)` pair was already present.
    pub fn insert(&mut self, rank: VictimRank, key: K) -> bool {
        self.set.insert(Candidate { rank, key })
    }

    /// Removes the candidate stored under exactly `(rank, key)`; returns
    /// whether it was present.
    ///
    /// The rank must be the one the candidate was inserted with. Callers
    /// compute it from the entry's history *before* mutating that history.
    pub fn remove(&mut self, rank: VictimRank, key: &K) -> bool {
        self.set.remove(&Candidate {
            rank,
            key: key.clone(),
        })
    }

    /// Returns `true` if the exact `(rank, key)` pair is a member.
    pub fn contains(&self, rank: VictimRank, key: &K) -> bool {
        self.set.contains(&Candidate {
            rank,
            key: key.clone(),
        })
    }

    /// Returns the weakest candidate's key without removing it.
    #[inline]
    pub fn weakest(&self) -> Option<&K> {
        self.set.first().map(|candidate| &candidate.key)
    }

    /// Removes and returns the weakest candidate's key.
    #[inline]
    pub fn pop_weakest(&mut self) -> Option<K> {
        self.set.pop_first().map(|candidate| candidate.key)
    }

    /// Iterates candidates from weakest to strongest.
    pub fn iter(&self) -> impl Iterator<Item = (&VictimRank, &K)> {
        self.set
            .iter()
            .map(|candidate| (&candidate.rank, &candidate.key))
    }

    /// Removes all candidates.
    pub fn clear(&mut self) {
        self.set.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self)
    where
        K: std::fmt::Debug,
    {
        let mut previous: Option<&Candidate<K>> = None;
        for candidate in &self.set {
            if let Some(prev) = previous {
                assert!(prev < candidate);
            }
            previous = Some(candidate);
        }
        if let Some(first) = self.set.first() {
            assert_eq!(self.weakest(), Some(&first.key));
        }
    }
}
