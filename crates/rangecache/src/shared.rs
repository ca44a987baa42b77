//! Lock-guarded service for callers that share one cache across threads

use parking_lot::Mutex;

use crate::aggregate::{Aggregate, Sum};
use crate::error::Result;
use crate::service::RangeQueryService;

/// [`RangeQueryService`] behind a single mutex
///
/// The cache index and recency list are always updated together under one lock,
/// so no thread can observe one without the other.
pub struct SharedRangeService<A = Sum> {
    inner: Mutex<RangeQueryService<A>>,
}

impl SharedRangeService<Sum> {
    /// Create a shared range-sum service
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_service(RangeQueryService::new(capacity)?))
    }
}

impl<A: Aggregate> SharedRangeService<A> {
    /// Wrap an existing service
    pub fn from_service(service: RangeQueryService<A>) -> Self {
        Self {
            inner: Mutex::new(service),
        }
    }

    /// See [`RangeQueryService::query`]
    pub fn query(&self, array: &[i64], left: usize, right: usize) -> Result<i64> {
        self.inner.lock().query(array, left, right)
    }

    /// See [`RangeQueryService::update`]
    pub fn update(&self, array: &mut [i64], index: usize, value: i64) -> Result<usize> {
        self.inner.lock().update(array, index, value)
    }

    /// See [`RangeQueryService::invalidate`]
    pub fn invalidate(&self, index: usize) -> usize {
        self.inner.lock().invalidate(index)
    }

    /// Run `f` with exclusive access to the service
    pub fn with<R>(&self, f: impl FnOnce(&mut RangeQueryService<A>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.inner.lock().cache_len()
    }

    /// Unwrap the inner service
    pub fn into_inner(self) -> RangeQueryService<A> {
        self.inner.into_inner()
    }
}
