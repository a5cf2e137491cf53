//! Least-recently-used cache.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

struct Slot<V> {
    value: V,
    stamp: u64,
}

/// A bounded map that evicts the least recently used entry when full.
///
/// Both [`LruCache::get`] and [`LruCache::put`] mark the key as most
/// recently used. Lookups and updates are `O(log n)`.
///
/// # Examples
///
/// ```rust
/// use railway::cache::LruCache;
/// use std::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// cache.put("c", 3);
/// assert!(!cache.contains(&"b"));
/// assert!(cache.contains(&"a"));
/// ```
pub struct LruCache<K, V> {
    capacity: NonZeroUsize,
    entries: HashMap<K, Slot<V>>,
    recency: BTreeMap<u64, K>,
    clock: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.get()),
            recency: BTreeMap::new(),
            clock: 0,
        }
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let stamp = self.tick();
        let slot = self.entries.get_mut(key)?;
        if let Some(owner) = self.recency.remove(&slot.stamp) {
            self.recency.insert(stamp, owner);
        }
        slot.stamp = stamp;
        Some(&slot.value)
    }

    /// Inserts or replaces `key`, evicting the least recently used entry if
    /// the cache is full. Returns the previous value for `key`, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let stamp = self.tick();
        if let Some(slot) = self.entries.get_mut(&key) {
            self.recency.remove(&slot.stamp);
            self.recency.insert(stamp, key);
            slot.stamp = stamp;
            return Some(std::mem::replace(&mut slot.value, value));
        }

        if self.entries.len() >= self.capacity.get() {
            self.evict_oldest();
        }
        self.recency.insert(stamp, key.clone());
        self.entries.insert(key, Slot { value, stamp });
        None
    }

    /// Whether `key` is cached. Does not affect recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.entries.remove(key)?;
        self.recency.remove(&slot.stamp);
        Some(slot.value)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    const fn tick(&mut self) -> u64 {
        self.clock = self.clock.wrapping_add(1);
        self.clock
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
            tracing::trace!(remaining = self.entries.len(), "evicted least recently used entry");
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn cache(capacity: usize) -> LruCache<u32, String> {
        LruCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[rstest]
    fn test_put_existing_key_does_not_evict() {
        let mut lru = cache(2);
        lru.put(1, "one".to_string());
        lru.put(2, "two".to_string());
        assert_eq!(lru.put(1, "uno".to_string()), Some("one".to_string()));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.get(&1), Some(&"uno".to_string()));
        assert_eq!(lru.get(&2), Some(&"two".to_string()));
    }

    #[rstest]
    fn test_update_refreshes_recency() {
        let mut lru = cache(2);
        lru.put(1, "one".to_string());
        lru.put(2, "two".to_string());
        lru.put(1, "uno".to_string());
        lru.put(3, "three".to_string());
        assert!(lru.contains(&1));
        assert!(!lru.contains(&2));
    }

    #[rstest]
    fn test_remove_and_clear() {
        let mut lru = cache(3);
        lru.put(1, "one".to_string());
        lru.put(2, "two".to_string());
        assert_eq!(lru.remove(&1), Some("one".to_string()));
        assert_eq!(lru.remove(&1), None);
        lru.clear();
        assert!(lru.is_empty());
    }

    #[rstest]
    fn test_capacity_one() {
        let mut lru = cache(1);
        lru.put(1, "one".to_string());
        lru.put(2, "two".to_string());
        assert_eq!(lru.len(), 1);
        assert!(lru.contains(&2));
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(capacity in 1usize..8, keys in proptest::collection::vec(0u32..16, 0..64)) {
            let mut lru = cache(capacity);
            for key in keys {
                lru.put(key, key.to_string());
                prop_assert!(lru.len() <= capacity);
                prop_assert!(lru.contains(&key));
            }
        }
    }
}
