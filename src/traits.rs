//! # Cache Trait Hierarchy
//!
//! Defines the trait seam between cache implementations and their consumers.
//! Operations that record an access are fallible: the per-cache access
//! counter can overflow, and that condition surfaces to the caller instead
//! of silently wrapping.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │             CoreCache<K, V>                  │
//!   │                                              │
//!   │  put(&mut, K, V)  → Result<PutOutcome, _>    │
//!   │  get(&mut, &K)    → Result<Option<&V>, _>    │
//!   │  contains(&, &K)  → bool                     │
//!   │  len / is_empty / capacity / clear           │
//!   └──────────────────────┬───────────────────────┘
//!                          │
//!                          ▼
//!   ┌──────────────────────────────────────────────┐
//!   │           MutableCache<K, V>                 │
//!   │                                              │
//!   │  remove(&K) → Option<V>                      │
//!   │  remove_batch(&[K])                          │
//!   └──────────────────────┬───────────────────────┘
//!                          │
//!                          ▼
//!   ┌──────────────────────────────────────────────┐
//!   │           LrukCacheTrait<K, V>               │
//!   │                                              │
//!   │  pop_victim() / peek_victim()                │
//!   │  k_value() / k_distance(&K)                  │
//!   │  access_history(&K) / access_count(&K)       │
//!   │  touch(&K) → Result<bool, _>                 │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait            | Extends        | Purpose                             |
//! |------------------|----------------|-------------------------------------|
//! | `CoreCache`      | -              | Universal cache operations          |
//! | `MutableCache`   | `CoreCache`    | Adds arbitrary key removal          |
//! | `LrukCacheTrait` | `MutableCache` | LRU-K introspection and eviction    |

use crate::error::OverflowError;

/// Result of a [`CoreCache::put`] that completed successfully.
///
/// Distinguishes the in-place update path from the three admission paths,
/// including the cold-start edge where the cache is at capacity but no entry
/// has matured enough to be evicted.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
/// use lrukit::traits::{CoreCache, PutOutcome};
///
/// let mut cache: LrukCache<u64, &str> = LrukCache::new(2, 2).unwrap();
/// assert_eq!(cache.put(1, "a").unwrap(), PutOutcome::Inserted);
/// assert_eq!(cache.put(1, "b").unwrap(), PutOutcome::Updated("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K, V> {
    /// The key was already present; its value was replaced in place and the
    /// previous value is returned. One access was recorded.
    Updated(V),
    /// A new key was admitted with spare capacity; nothing was displaced.
    Inserted,
    /// A new key was admitted after evicting the weakest mature entry.
    Evicted {
        /// Key of the evicted entry.
        key: K,
        /// Value of the evicted entry.
        value: V,
    },
    /// The cache was at capacity but held no mature entry to evict; the new
    /// key was admitted anyway and `len()` temporarily exceeds `capacity()`
    /// until enough entries mature.
    EvictionUnavailable,
}

/// Core cache operations that all caches support.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
/// use lrukit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone()).expect("clock exhausted");
///     }
/// }
///
/// let mut cache = LrukCache::new(100, 2).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts or updates a key-value pair, recording one access.
    ///
    /// If the key is new and the cache is at capacity, the weakest mature
    /// entry is evicted first; see [`PutOutcome`] for the possible results.
    /// Fails with [`OverflowError`] when the access counter is exhausted, in
    /// which case the cache is left unchanged.
    fn put(&mut self, key: K, value: V) -> Result<PutOutcome<K, V>, OverflowError>;

    /// Gets a reference to a value by key, recording one access on a hit.
    ///
    /// A miss records nothing and returns `Ok(None)`. Use
    /// [`contains`](Self::contains) to check existence without affecting
    /// eviction order.
    fn get(&mut self, key: &K) -> Result<Option<&V>, OverflowError>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    ///
    /// `len()` can exceed this bound only during the cold-start window
    /// described by [`PutOutcome::EvictionUnavailable`].
    fn capacity(&self) -> usize;

    /// Removes all entries and resets the access clock.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
/// use lrukit::traits::{CoreCache, MutableCache};
///
/// let mut cache = LrukCache::new(100, 2).unwrap();
/// cache.put(1, "one").unwrap();
///
/// assert_eq!(cache.remove(&1), Some("one"));
/// assert_eq!(cache.remove(&1), None); // already removed
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it
    /// didn't; removing an absent key leaves the cache unchanged.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning results in input order.
    ///
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LRU-K specific operations: victim selection and history introspection.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
/// use lrukit::traits::{CoreCache, LrukCacheTrait};
///
/// let mut cache: LrukCache<u64, &str> = LrukCache::new(10, 2).unwrap();
///
/// cache.put(1, "one").unwrap();
/// cache.get(&1).unwrap(); // 2 accesses: key 1 is now mature
/// cache.put(2, "two").unwrap(); // 1 access: still cold
///
/// assert_eq!(cache.access_count(&1), Some(2));
/// assert!(cache.k_distance(&1).is_some());
/// assert_eq!(cache.k_distance(&2), None);
///
/// // Only mature entries can be victims; key 2 is protected while cold.
/// assert_eq!(cache.peek_victim(), Some((&1, &"one")));
/// assert_eq!(cache.pop_victim(), Some((1, "one")));
/// ```
pub trait LrukCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the current eviction victim: the mature entry
    /// whose k-th most recent access is furthest in the past.
    ///
    /// Returns `None` when no entry has matured, even if the cache holds
    /// cold entries.
    fn pop_victim(&mut self) -> Option<(K, V)>;

    /// Peeks at the eviction victim without removing it.
    fn peek_victim(&self) -> Option<(&K, &V)>;

    /// Returns the K value used by this cache.
    fn k_value(&self) -> usize;

    /// Returns the access history for a key (most recent first), capped at
    /// K entries. Timestamps are monotonic logical ticks, not wall-clock
    /// time.
    fn access_history(&self, key: &K) -> Option<Vec<u64>>;

    /// Returns the number of accesses recorded for a key, capped at K.
    fn access_count(&self, key: &K) -> Option<usize>;

    /// Returns the backward k-distance marker for a key: the timestamp of
    /// its k-th most recent access. `Some` only for mature entries.
    fn k_distance(&self, key: &K) -> Option<u64>;

    /// Records one access against a key without retrieving its value.
    ///
    /// Returns `Ok(false)` for an absent key (no access recorded) and fails
    /// with [`OverflowError`] when the access counter is exhausted.
    fn touch(&mut self, key: &K) -> Result<bool, OverflowError>;
}
