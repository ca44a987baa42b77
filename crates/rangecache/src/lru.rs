//! LRU (Least Recently Used) cache implementation
//!
//! An AHash index maps each key to a [`NodeId`] in a [`RecencyList`], giving O(1)
//! lookup, promotion and eviction.

use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;

use crate::error::{Error, Result};
use crate::list::{Iter, NodeId, RecencyList};

/// LRU cache with fixed capacity
pub struct LruCache<K, V> {
    map: HashMap<K, NodeId, RandomState>,
    order: RecencyList<K, V>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            order: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Get a value from the cache, marking it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.map.get(key)?;
        self.order.move_to_front(id);
        self.order.get(id)
    }

    /// Get a value without touching recency order
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.map.get(key)?;
        self.order.get(id)
    }

    /// Check if a key is cached
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Insert a key-value pair into the cache
    ///
    /// An existing key has its value replaced and is promoted. A new key on a
    /// full cache evicts the least recently used entry, which is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&id) = self.map.get(&key) {
            if let Some(slot) = self.order.get_mut(id) {
                *slot = value;
            }
            self.order.move_to_front(id);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        let id = self.order.push_front(key.clone(), value);
        self.map.insert(key, id);
        evicted
    }

    /// Remove a key from the cache regardless of its recency
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.map.remove(key)?;
        self.order.remove(id).map(|(_, value)| value)
    }

    /// Remove every entry whose key matches `pred`
    ///
    /// Matching keys are collected first and removed afterwards, so the predicate
    /// always sees the key set as it was when the call started. Returns the
    /// number of removed entries.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let doomed: Vec<K> = self.map.keys().filter(|&key| pred(key)).cloned().collect();
        for key in &doomed {
            self.remove(key);
        }
        doomed.len()
    }

    /// Iterate over cached keys in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.keys()
    }

    /// Iterate over entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.order.iter()
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the fixed capacity of the cache
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.pop_back()?;
        self.map.remove(&key);
        Some((key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn recency<V>(cache: &LruCache<u32, V>) -> Vec<u32> {
        cache.iter().map(|(k, _)| *k).collect()
    }

    fn assert_consistent<V>(cache: &LruCache<u32, V>) {
        assert_eq!(cache.map.len(), cache.order.len());
        assert!(cache.len() <= cache.capacity());
        for (key, _) in cache.iter() {
            let id = cache.map[key];
            assert_eq!(cache.order.key(id), Some(key));
        }
    }

    #[test]
    fn test_lru_zero_capacity() {
        assert!(matches!(
            LruCache::<u32, i64>::new(0),
            Err(Error::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_lru_basic() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_miss() {
        let mut cache: LruCache<u32, i64> = LruCache::new(4).unwrap();
        assert_eq!(cache.get(&7), None);
    }

    #[test]
    fn test_lru_minus_one_is_a_hit() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put(1, -1i64);
        assert_eq!(cache.get(&1), Some(&-1));
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");
        let evicted = cache.put(3, "c"); // Should evict 1

        assert_eq!(evicted, Some((1, "a")));
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.get(&3), Some(&"c"));
    }

    #[test]
    fn test_lru_update() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");
        cache.get(&1); // Move 1 to front
        cache.put(3, "c"); // Should evict 2

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some(&"c"));
    }

    #[test]
    fn test_lru_recency_at_capacity() {
        let mut cache = LruCache::new(4).unwrap();
        for k in 1..=4 {
            cache.put(k, k * 10);
        }
        cache.get(&1);

        assert_eq!(cache.put(5, 50), Some((2, 20)));
        assert!(cache.contains(&1));
        assert_eq!(recency(&cache), vec![5, 1, 4, 3]);
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");

        assert_eq!(cache.remove(&2), Some("b"));
        assert_eq!(cache.remove(&2), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&2), None);
        assert_eq!(recency(&cache), vec![3, 1]);
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.iter().count(), 0);
    }

    #[test]
    fn test_lru_overwrite() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, "a");
        cache.put(2, "x");
        assert_eq!(cache.put(1, "b"), None); // Overwrite

        assert_eq!(cache.len(), 2);
        assert_eq!(recency(&cache), vec![1, 2]);
        assert_eq!(cache.get(&1), Some(&"b"));
    }

    #[test]
    fn test_lru_peek_does_not_promote() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.peek(&1), Some(&"a"));
        cache.put(3, "c");

        assert!(!cache.contains(&1));
    }

    #[test]
    fn test_lru_keys_restartable() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put(1, "a");
        cache.put(2, "b");

        let mut first: Vec<_> = cache.keys().copied().collect();
        let mut second: Vec<_> = cache.keys().copied().collect();
        first.sort();
        second.sort();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lru_remove_where() {
        let mut cache = LruCache::new(5).unwrap();
        for k in 1..=5 {
            cache.put(k, k);
        }

        let removed = cache.remove_where(|k| k % 2 == 0);

        assert_eq!(removed, 2);
        assert_eq!(recency(&cache), vec![5, 3, 1]);
        assert_consistent(&cache);

        // Freed slots are reused without disturbing order
        cache.put(6, 6);
        cache.put(7, 7);
        assert_eq!(recency(&cache), vec![7, 6, 5, 3, 1]);
        assert_consistent(&cache);
    }

    proptest! {
        #[test]
        fn prop_size_never_exceeds_capacity(
            capacity in 1usize..16,
            ops in prop::collection::vec((0u32..32, any::<i64>(), any::<bool>()), 0..200)
        ) {
            let mut cache = LruCache::new(capacity).unwrap();
            for (key, value, read) in ops {
                if read {
                    cache.get(&key);
                } else {
                    cache.put(key, value);
                }
                prop_assert!(cache.len() <= capacity);
                assert_consistent(&cache);
            }
        }

        #[test]
        fn prop_put_then_get_returns_value(
            capacity in 1usize..16,
            key in any::<u32>(),
            value in any::<i64>()
        ) {
            let mut cache = LruCache::new(capacity).unwrap();
            cache.put(key, value);
            prop_assert_eq!(cache.get(&key), Some(&value));
        }
    }
}
