//! # LRU-K Cache Implementation
//!
//! Bounded key-value cache that selects eviction victims by *backward
//! k-distance*: the timestamp of an entry's K-th most recent access. Ranking
//! by the K-th access instead of the most recent one resists cache pollution
//! from correlated references and one-shot scans.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        LrukCache<K, V>                           │
//!   │                                                                  │
//!   │   EntryIndex: FxHashMap<K, CacheEntry<V>>   (owns all entries)   │
//!   │   ┌─────────┬────────────────────────────────────────────┐      │
//!   │   │   Key   │  value + AccessHistory + evictable          │      │
//!   │   ├─────────┼────────────────────────────────────────────┤      │
//!   │   │ page_1  │  "…", [t₁, t₅], mature                      │      │
//!   │   │ page_2  │  "…", [t₃], cold                            │      │
//!   │   └─────────┴────────────────────────────────────────────┘      │
//!   │                                                                  │
//!   │   CandidateSet: BTreeSet<(VictimRank, K)>  (mature keys only)    │
//!   │   ┌──────────────────────────────────────────────────────┐      │
//!   │   │ (Distance(t₁), page_1)   ← weakest, next victim       │      │
//!   │   │ (Distance(t₂), page_7)                                │      │
//!   │   └──────────────────────────────────────────────────────┘      │
//!   │                                                                  │
//!   │   LogicalClock: one tick per recorded access                     │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Eviction Policy
//!
//! ```text
//!   An entry is an eviction candidate iff its history holds exactly K
//!   timestamps ("mature"). Among candidates:
//!
//!     • oldest k-th-most-recent access is evicted first
//!     • equal k-distances break ties by ascending key
//!
//!   Cold entries (fewer than K accesses) are never victims. If the cache
//!   is at capacity and no entry has matured, a new key is admitted anyway
//!   and len() exceeds capacity() until the population matures
//!   (PutOutcome::EvictionUnavailable).
//! ```
//!
//! ## Membership Discipline
//!
//! The candidate set orders members by a rank derived from each entry's live
//! history, so membership is maintained transactionally around every access:
//! remove under the old rank, mutate the history, reinsert under the new
//! rank. The ordered structure never observes a member whose sort key
//! changed in place.
//!
//! ## Core Operations
//!
//! | Method          | Complexity | Description                             |
//! |-----------------|------------|-----------------------------------------|
//! | `new(cap, k)`   | O(1)       | Fallible constructor (`ConfigError`)    |
//! | `put(key, val)` | O(log n)   | Insert/update, may evict one entry      |
//! | `get(&key)`     | O(log n)   | Fetch value, records one access         |
//! | `remove(&key)`  | O(log n)   | Remove entry by key                     |
//! | `contains(&key)`| O(1)       | Existence check, no access recorded     |
//! | `len()`         | O(1)       | Current number of entries               |
//! | `pop_victim()`  | O(log n)   | Remove and return the weakest entry     |
//! | `peek_victim()` | O(log n)   | Inspect the weakest entry               |
//!
//! ## Thread Safety
//!
//! `LrukCache` is **not** thread-safe and has no internal suspension points;
//! every operation runs to completion synchronously. Callers needing
//! concurrent access serialize operations with their own lock, or shard
//! keys across independent cache instances.
//!
//! ## Academic Reference
//!
//! O'Neil, E. J., O'Neil, P. E., & Weikum, G. (1993).
//! "The LRU-K page replacement algorithm for database disk buffering."
//! ACM SIGMOD Record, 22(2), 297-306.

use std::hash::Hash;

use crate::ds::{CandidateSet, LogicalClock};
use crate::error::{ConfigError, OverflowError};
use crate::store::{CacheEntry, EntryIndex};
use crate::traits::{CoreCache, LrukCacheTrait, MutableCache, PutOutcome};

/// LRU-K cache: bounded key-value store evicting by backward k-distance.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Eq + Hash + Ord + Clone` (`Ord` drives the
///   deterministic eviction tie-break, `Clone` lets the candidate set hold
///   keys by value)
/// - `V`: Value type, owned exclusively by the cache
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
/// use lrukit::traits::{CoreCache, PutOutcome};
///
/// let mut cache: LrukCache<u64, String> = LrukCache::new(100, 2).unwrap();
///
/// cache.put(1, "page_data".to_string()).unwrap();
/// assert_eq!(cache.get(&1).unwrap(), Some(&"page_data".to_string()));
/// assert_eq!(cache.get(&2).unwrap(), None);
/// ```
///
/// # Cold-Entry Protection
///
/// Entries below K accesses are never eviction candidates: a one-shot
/// burst's keys cannot be chosen as victims, and eviction always falls on
/// the mature entry whose k-th most recent access is oldest:
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
/// use lrukit::traits::{CoreCache, PutOutcome};
///
/// let mut cache: LrukCache<u64, &str> = LrukCache::new(2, 2).unwrap();
///
/// cache.put(1, "hot").unwrap();
/// cache.get(&1).unwrap(); // key 1 matures (2 accesses)
/// cache.put(2, "scanned-once").unwrap();
///
/// // At capacity: the mature entry is the only candidate.
/// let outcome = cache.put(3, "scan").unwrap();
/// assert_eq!(outcome, PutOutcome::Evicted { key: 1, value: "hot" });
/// ```
pub struct LrukCache<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    k: usize,
    capacity: usize,
    index: EntryIndex<K, V>,
    candidates: CandidateSet<K>,
    clock: LogicalClock,
}

impl<K, V> LrukCache<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    /// Creates a cache holding at most `capacity` entries, tracking the last
    /// `k` accesses per entry.
    ///
    /// # Choosing K
    ///
    /// - **K=1**: degenerates to recency-only ranking
    /// - **K=2**: the usual choice for database buffer pools
    /// - **K>=3**: stronger scan resistance, slower to mature
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError`] if `capacity` or `k` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru_k::LrukCache;
    /// use lrukit::traits::LrukCacheTrait;
    ///
    /// let cache: LrukCache<u64, String> = LrukCache::new(100, 3).unwrap();
    /// assert_eq!(cache.k_value(), 3);
    ///
    /// assert!(LrukCache::<u64, String>::new(0, 2).is_err());
    /// assert!(LrukCache::<u64, String>::new(100, 0).is_err());
    /// ```
    pub fn new(capacity: usize, k: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be at least 1"));
        }
        if k == 0 {
            return Err(ConfigError::new("k must be at least 1"));
        }
        Ok(Self {
            k,
            capacity,
            index: EntryIndex::with_capacity(capacity),
            candidates: CandidateSet::new(),
            clock: LogicalClock::new(),
        })
    }

    /// Records `timestamp` against a resident entry and returns it.
    ///
    /// Candidate-set membership is updated transactionally around the
    /// history mutation: a mature entry leaves the set under its old rank
    /// before the history changes and rejoins under the new rank after.
    /// Returns `None` without side effects if the key is absent.
    fn record_access(&mut self, key: &K, timestamp: u64) -> Option<&mut CacheEntry<V>> {
        let entry = self.index.lookup_mut(key)?;
        if entry.is_mature() {
            self.candidates.remove(entry.rank(), key);
        }
        entry.record(timestamp);
        if entry.is_mature() {
            entry.mark_evictable();
            self.candidates.insert(entry.rank(), key.clone());
        }
        self.index.lookup_mut(key)
    }

    /// Validates cross-structure invariants; debug/test builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self)
    where
        K: std::fmt::Debug,
    {
        let mut mature = 0;
        for (key, entry) in self.index.iter() {
            assert_eq!(entry.is_evictable(), entry.is_mature());
            assert!(entry.history().len() <= self.k);
            if entry.is_mature() {
                mature += 1;
                assert!(self.candidates.contains(entry.rank(), key));
            }
        }
        // Membership iff the history is full; nothing else may be tracked.
        assert_eq!(self.candidates.len(), mature);
        for (_, key) in self.candidates.iter() {
            assert!(self.index.contains(key));
        }
        self.candidates.debug_validate_invariants();
    }
}

impl<K, V> CoreCache<K, V> for LrukCache<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    /// Inserts or updates `key`, recording one access.
    ///
    /// The access timestamp is obtained before any other mutation, so a
    /// saturated clock fails the whole operation with the cache unchanged:
    /// nothing is partially inserted or evicted.
    fn put(&mut self, key: K, value: V) -> Result<PutOutcome<K, V>, OverflowError> {
        let timestamp = self.clock.next()?;

        if let Some(entry) = self.record_access(&key, timestamp) {
            return Ok(PutOutcome::Updated(entry.replace_value(value)));
        }

        // New key: run the eviction check before admission.
        let outcome = if self.index.len() >= self.capacity {
            match self.candidates.pop_weakest() {
                Some(victim) => match self.index.remove(&victim) {
                    Some(evicted) => PutOutcome::Evicted {
                        key: victim,
                        value: evicted.into_value(),
                    },
                    None => PutOutcome::EvictionUnavailable,
                },
                // No entry has matured; admit and let len() run over.
                None => PutOutcome::EvictionUnavailable,
            }
        } else {
            PutOutcome::Inserted
        };

        let mut entry = CacheEntry::new(value, self.k);
        entry.record(timestamp);
        // K == 1 matures an entry on its very first access.
        if entry.is_mature() {
            entry.mark_evictable();
            self.candidates.insert(entry.rank(), key.clone());
        }
        self.index.insert(key, entry);

        Ok(outcome)
    }

    /// Fetches a value, recording one access on a hit.
    ///
    /// A miss consumes no clock tick and changes no state.
    fn get(&mut self, key: &K) -> Result<Option<&V>, OverflowError> {
        if !self.index.contains(key) {
            return Ok(None);
        }
        let timestamp = self.clock.next()?;
        self.record_access(key, timestamp);
        Ok(self.index.lookup(key).map(CacheEntry::value))
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.index.clear();
        self.candidates.clear();
        self.clock.reset();
    }
}

impl<K, V> MutableCache<K, V> for LrukCache<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    /// Removes `key`, returning its value if present.
    ///
    /// A tracked entry leaves the candidate set before the entry is
    /// destroyed, so the set never outlives the entries it refers to.
    fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.index.lookup(key)?;
        if entry.is_mature() {
            self.candidates.remove(entry.rank(), key);
        }
        self.index.remove(key).map(CacheEntry::into_value)
    }
}

impl<K, V> LrukCacheTrait<K, V> for LrukCache<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    fn pop_victim(&mut self) -> Option<(K, V)> {
        let key = self.candidates.pop_weakest()?;
        let entry = self.index.remove(&key)?;
        Some((key, entry.into_value()))
    }

    fn peek_victim(&self) -> Option<(&K, &V)> {
        let key = self.candidates.weakest()?;
        let entry = self.index.lookup(key)?;
        Some((key, entry.value()))
    }

    #[inline]
    fn k_value(&self) -> usize {
        self.k
    }

    fn access_history(&self, key: &K) -> Option<Vec<u64>> {
        self.index.lookup(key).map(|entry| entry.history().to_vec_mru())
    }

    #[inline]
    fn access_count(&self, key: &K) -> Option<usize> {
        self.index.lookup(key).map(|entry| entry.history().len())
    }

    #[inline]
    fn k_distance(&self, key: &K) -> Option<u64> {
        self.index.lookup(key).and_then(|entry| entry.history().k_distance())
    }

    fn touch(&mut self, key: &K) -> Result<bool, OverflowError> {
        if !self.index.contains(key) {
            return Ok(false);
        }
        let timestamp = self.clock.next()?;
        self.record_access(key, timestamp);
        Ok(true)
    }
}

impl<K, V> std::fmt::Debug for LrukCache<K, V>
where
    K: Eq + Hash + Ord + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LrukCache")
            .field("k", &self.k)
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field("tracked", &self.candidates.len())
            .finish_non_exhaustive()
    }
}
