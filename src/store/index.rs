//! HashMap-backed entry index.
//!
//! ## Architecture
//! - Entries are stored in an `FxHashMap<K, CacheEntry<V>>` for O(1) lookup.
//! - The index is the exclusive owner of entry storage: evicting or removing
//!   a key drops the entry, and nothing else in the crate holds a reference
//!   to it.
//! - No ordering or eviction logic lives here; those decisions belong to the
//!   candidate set and the policy facade.
//!
//! ## Core Operations
//! - `lookup` / `lookup_mut`: fetch an entry by key.
//! - `insert`: store a new entry (callers check presence first).
//! - `remove`: delete by key, yielding the owned entry.
//!
//! ## Type Constraints
//! - `K: Eq + Hash` for key lookup.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::entry::CacheEntry;

/// Exclusive owner of all cached entries, keyed by `K`.
///
/// # Example
///
/// ```
/// use lrukit::store::{CacheEntry, EntryIndex};
///
/// let mut index: EntryIndex<u64, String> = EntryIndex::with_capacity(8);
/// index.insert(1, CacheEntry::new("a".to_string(), 2));
/// assert!(index.contains(&1));
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Debug)]
pub struct EntryIndex<K, V> {
    map: FxHashMap<K, CacheEntry<V>>,
}

impl<K, V> EntryIndex<K, V>
where
    K: Eq + Hash,
{
    /// Creates an index pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Fetches an entry by key.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.map.get(key)
    }

    /// Fetches an entry by key for mutation.
    #[inline]
    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut CacheEntry<V>> {
        self.map.get_mut(key)
    }

    /// Stores an entry under `key`.
    ///
    /// Callers check presence first; a duplicate insert displaces and
    /// returns the previous entry.
    #[inline]
    pub fn insert(&mut self, key: K, entry: CacheEntry<V>) -> Option<CacheEntry<V>> {
        self.map.insert(key, entry)
    }

    /// Removes an entry by key, returning ownership of it.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<CacheEntry<V>> {
        self.map.remove(key)
    }

    /// Checks whether a key exists.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the index holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &CacheEntry<V>)> {
        self.map.iter()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
