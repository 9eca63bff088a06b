//! Convenience re-exports for consumers.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache: LrukCache<u64, &str> = CacheBuilder::new(8).k(2).try_build().unwrap();
//! assert_eq!(cache.put(1, "one").unwrap(), PutOutcome::Inserted);
//! assert_eq!(cache.get(&1).unwrap(), Some(&"one"));
//! ```

pub use crate::builder::CacheBuilder;
pub use crate::ds::{AccessHistory, CandidateSet, LogicalClock, VictimRank};
pub use crate::error::{ConfigError, OverflowError};
pub use crate::policy::lru_k::LrukCache;
pub use crate::store::{CacheEntry, EntryIndex};
pub use crate::traits::{CoreCache, LrukCacheTrait, MutableCache, PutOutcome};
