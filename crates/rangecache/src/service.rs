//! Range query service: caches range aggregates and drops them on overlapping writes

use tracing::{debug, trace};

use crate::aggregate::{Aggregate, Sum};
use crate::error::{check_index, check_range, Error, Result};
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Inclusive index range `[left, right]` used as a cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeKey {
    /// Left bound (inclusive)
    pub left: usize,
    /// Right bound (inclusive)
    pub right: usize,
}

impl RangeKey {
    /// Create a key for `[left, right]`
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Check if `index` falls inside the range
    pub fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }
}

impl From<(usize, usize)> for RangeKey {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

/// Caches range aggregates over a mutable array
///
/// Reads go through an [`LruCache`] keyed by [`RangeKey`]. Point updates remove
/// every cached range containing the written index; nothing is recomputed until
/// the range is queried again.
pub struct RangeQueryService<A = Sum> {
    cache: LruCache<RangeKey, i64>,
    aggregate: A,
    stats: CacheStats,
}

impl RangeQueryService<Sum> {
    /// Create a range-sum service holding at most `capacity` results
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_aggregate(capacity, Sum)
    }
}

impl<A: Aggregate> RangeQueryService<A> {
    /// Create a service computing misses with `aggregate`
    pub fn with_aggregate(capacity: usize, aggregate: A) -> Result<Self> {
        Ok(Self {
            cache: LruCache::new(capacity)?,
            aggregate,
            stats: CacheStats::new(),
        })
    }

    /// Answer the aggregate over `array[left..=right]`
    ///
    /// A cached answer is returned as is. On a miss the aggregate is computed
    /// from `array` and stored, possibly evicting the least recently used range.
    ///
    /// # Errors
    /// * `Error::InvalidRange` if `left > right`
    /// * `Error::RangeOutOfBounds` if `right` is past the end of `array`
    /// * `Error::Overflow` if the aggregate has no `i64` result; nothing is cached
    pub fn query(&mut self, array: &[i64], left: usize, right: usize) -> Result<i64> {
        check_range(left, right, array.len())?;
        let key = RangeKey::new(left, right);

        if let Some(&value) = self.cache.get(&key) {
            self.stats.record_hit();
            return Ok(value);
        }

        self.stats.record_miss();
        let value = self
            .aggregate
            .aggregate(&array[left..=right])
            .ok_or(Error::Overflow { left, right })?;

        if let Some((evicted, _)) = self.cache.put(key, value) {
            self.stats.record_eviction();
            trace!(left = evicted.left, right = evicted.right, "Evicted least recently used range");
        }
        self.stats.record_insert();

        Ok(value)
    }

    /// Write `value` at `array[index]` and drop every cached range containing it
    ///
    /// Returns the number of invalidated ranges.
    ///
    /// # Errors
    /// * `Error::IndexOutOfBounds` if `index` is past the end of `array`
    pub fn update(&mut self, array: &mut [i64], index: usize, value: i64) -> Result<usize> {
        check_index(index, array.len())?;
        array[index] = value;
        Ok(self.invalidate(index))
    }

    /// Drop every cached range containing `index` without touching any array
    ///
    /// This is a linear scan over the cached keys.
    pub fn invalidate(&mut self, index: usize) -> usize {
        let removed = self.cache.remove_where(|key| key.contains(index));
        self.stats.record_invalidations(removed as u64);

        if removed > 0 {
            debug!(index, removed, remaining = self.cache.len(), "Invalidated cached ranges");
        }
        removed
    }

    /// Borrow the underlying cache
    pub fn cache(&self) -> &LruCache<RangeKey, i64> {
        &self.cache
    }

    /// Mutably borrow the underlying cache
    pub fn cache_mut(&mut self) -> &mut LruCache<RangeKey, i64> {
        &mut self.cache
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Clear the cache and reset statistics
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }
}
