//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (zero capacity or zero K).
//! - [`OverflowError`]: Returned when a cache's logical access counter has
//!   exhausted its range; the instance must be recreated.
//!
//! A lookup miss is never an error: `get` on an absent key returns `Ok(None)`
//! and `remove` on an absent key returns `None`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::policy::lru_k::LrukCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<LrukCache<u64, String>, ConfigError> = LrukCache::new(100, 2);
//! assert!(cache.is_ok());
//!
//! // Invalid bounds are caught without panicking
//! let bad = LrukCache::<u64, String>::new(0, 2);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LrukCache::new`](crate::policy::lru_k::LrukCache::new) and the builder's
/// [`try_build`](crate::builder::CacheBuilder::try_build). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_k::LrukCache;
///
/// let err = LrukCache::<u64, u64>::new(100, 0).unwrap_err();
/// assert!(err.to_string().contains("k"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// OverflowError
// ---------------------------------------------------------------------------

/// Error returned when a cache's logical access counter is exhausted.
///
/// Every recorded access consumes one counter value; once the counter reaches
/// `u64::MAX` no further access can be ordered and the operation fails rather
/// than wrapping, since wraparound would corrupt the backward k-distance
/// ordering. The condition is fatal for the instance: recreate the cache.
///
/// The failing operation leaves the cache unchanged; no entry is partially
/// inserted or evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError;

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("access counter overflow: cache instance must be recreated")
    }
}

impl std::error::Error for OverflowError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
