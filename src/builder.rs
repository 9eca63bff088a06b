//! Cache builder with validated configuration.
//!
//! Provides a small API to configure and construct an [`LrukCache`] without
//! threading every parameter through a constructor call. Validation happens
//! once, in [`try_build`](CacheBuilder::try_build).
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//! use lrukit::traits::CoreCache;
//!
//! let mut cache = CacheBuilder::new(100).k(3).try_build::<u64, String>().unwrap();
//! cache.put(1, "hello".to_string()).unwrap();
//! assert_eq!(cache.get(&1).unwrap(), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lru_k::LrukCache;

/// Number of accesses tracked per entry when none is configured (LRU-2).
pub const DEFAULT_K: usize = 2;

/// Builder for [`LrukCache`] instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
    k: usize,
}

impl CacheBuilder {
    /// Creates a builder for a cache of at most `capacity` entries,
    /// tracking [`DEFAULT_K`] accesses per entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            k: DEFAULT_K,
        }
    }

    /// Sets the number of accesses tracked per entry.
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Builds the cache, validating the configured bounds.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError`] if the capacity or K is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lrukit::builder::CacheBuilder;
    ///
    /// assert!(CacheBuilder::new(100).try_build::<u64, String>().is_ok());
    /// assert!(CacheBuilder::new(0).try_build::<u64, String>().is_err());
    /// assert!(CacheBuilder::new(100).k(0).try_build::<u64, String>().is_err());
    /// ```
    pub fn try_build<K, V>(self) -> Result<LrukCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Ord + Clone,
    {
        LrukCache::new(self.capacity, self.k)
    }
}
