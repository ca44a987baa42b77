//! # rangecache
//!
//! LRU cache for range-aggregate queries over a mutable array.
//!
//! ## Architecture
//! - **Recency list**: arena-backed doubly-linked list, MRU at the head (O(1))
//! - **Index**: AHash map from key to list handle (O(1))
//! - **Range service**: caches `[left, right]` aggregates and invalidates every
//!   cached range containing an updated index (linear scan over cached keys)

#![warn(missing_docs)]

mod aggregate;
mod baseline;
mod error;
mod list;
mod lru;
mod service;
mod shared;
mod stats;

pub use aggregate::{Aggregate, Sum};
pub use baseline::{range_sum_no_cache, update_no_cache};
pub use error::{Error, Result};
pub use list::{Iter, NodeId, RecencyList};
pub use lru::LruCache;
pub use service::{RangeKey, RangeQueryService};
pub use shared::SharedRangeService;
pub use stats::CacheStats;
