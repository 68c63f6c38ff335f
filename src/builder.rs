//! Cache builder with fallible construction.
//!
//! Thin configuration layer over the LRU constructors: capacity validation
//! happens in `try_build`, so misconfiguration surfaces as a
//! [`ConfigError`](crate::error::ConfigError) instead of a panic.
//!
//! ## Example
//!
//! ```
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100).try_build::<u64, String>().unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCache;

/// Builder for creating cache instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Creates a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds a single-threaded cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when the configured capacity
    /// is zero.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::new(self.capacity)
    }

    /// Builds a thread-safe cache handle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when the configured capacity
    /// is zero.
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone + Send + Sync,
        V: Send + Sync,
    {
        ConcurrentLruCache::new(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_working_cache() {
        let mut cache = CacheBuilder::new(10).try_build::<u64, String>().unwrap();

        assert_eq!(cache.put(1, "one".to_string()), None);
        assert_eq!(cache.get(&1), Some(&"one".to_string()));
        assert_eq!(cache.capacity(), 10);
    }

    #[test]
    fn zero_capacity_fails_to_build() {
        let result = CacheBuilder::new(0).try_build::<u64, String>();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidCapacity(0));
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn builds_concurrent_cache() {
        let cache = CacheBuilder::new(2)
            .try_build_concurrent::<u64, String>()
            .unwrap();

        cache.put(1, "one".to_string());
        cache.put(2, "two".to_string());
        cache.put(3, "three".to_string());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
    }
}
