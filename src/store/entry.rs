//! Cached entry: value plus access metadata.
//!
//! One [`CacheEntry`] is the unit of ownership in the store: the value, the
//! bounded access history, and the evictable flag travel together. The key
//! is not duplicated here; it lives once as the index map key, and the
//! candidate set refers to entries by key only.

use crate::ds::{AccessHistory, VictimRank};

/// One cached key-value pair's value and access metadata.
///
/// # Example
///
/// ```
/// use lrukit::ds::VictimRank;
/// use lrukit::store::CacheEntry;
///
/// let mut entry = CacheEntry::new("payload", 2);
/// entry.record(1);
/// assert_eq!(entry.rank(), VictimRank::Cold);
///
/// entry.record(2);
/// assert!(entry.is_mature());
/// assert_eq!(entry.rank(), VictimRank::Distance(1));
/// ```
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    value: V,
    history: AccessHistory,
    evictable: bool,
}

impl<V> CacheEntry<V> {
    /// Creates an entry with an empty history bounded to `k` timestamps.
    pub fn new(value: V, k: usize) -> Self {
        Self {
            value,
            history: AccessHistory::new(k),
            evictable: false,
        }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning the value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Replaces the value in place, returning the previous one.
    #[inline]
    pub fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Returns the entry's access history.
    #[inline]
    pub fn history(&self) -> &AccessHistory {
        &self.history
    }

    /// Records one access timestamp, discarding the oldest past `k`.
    #[inline]
    pub fn record(&mut self, timestamp: u64) {
        self.history.record(timestamp);
    }

    /// Returns `true` once the history holds `k` timestamps.
    ///
    /// A mature entry never becomes immature again: the history only ever
    /// replaces its oldest timestamp.
    #[inline]
    pub fn is_mature(&self) -> bool {
        self.history.is_full()
    }

    /// Marks the entry as having qualified for eviction.
    ///
    /// Set when the history first reaches `k` accesses; never cleared while
    /// the entry exists.
    #[inline]
    pub fn mark_evictable(&mut self) {
        self.evictable = true;
    }

    /// Returns whether the entry has ever reached a full history.
    #[inline]
    pub fn is_evictable(&self) -> bool {
        self.evictable
    }

    /// Returns the entry's current eviction rank.
    ///
    /// Mature entries rank by their backward k-distance marker; entries
    /// still short of `k` accesses rank [`VictimRank::Cold`] and lose every
    /// comparison against a mature entry.
    #[inline]
    pub fn rank(&self) -> VictimRank {
        match self.history.k_distance() {
            Some(timestamp) => VictimRank::Distance(timestamp),
            None => VictimRank::Cold,
        }
    }
}
