//! Memoization with a time-to-live.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Memoizes `function` per key, recomputing once an entry is older than the
/// time-to-live.
///
/// # Examples
///
/// ```rust
/// use railway::cache::ExpiringMemo;
/// use std::time::Duration;
///
/// let mut computed = 0;
/// let mut square = ExpiringMemo::new(
///     |n: &u64| {
///         computed += 1;
///         n * n
///     },
///     Duration::from_secs(60),
/// );
///
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.len(), 1);
/// drop(square);
/// assert_eq!(computed, 1);
/// ```
pub struct ExpiringMemo<K, V, F> {
    function: F,
    ttl: Duration,
    entries: HashMap<K, (V, Instant)>,
}

impl<K, V, F> ExpiringMemo<K, V, F>
where
    K: Hash + Eq,
    V: Clone,
    F: FnMut(&K) -> V,
{
    /// Wraps `function`; entries live for `ttl`.
    pub fn new(function: F, ttl: Duration) -> Self {
        Self {
            function,
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value for `key`, computing it if absent or expired.
    pub fn call(&mut self, key: K) -> V {
        let now = Instant::now();
        if let Some((value, stored_at)) = self.entries.get(&key)
            && now.duration_since(*stored_at) < self.ttl
        {
            return value.clone();
        }

        let value = (self.function)(&key);
        self.entries.insert(key, (value.clone(), now));
        value
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops the expired entries and returns how many were removed.
    pub fn clear_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, (_, stored_at)| stored_at.elapsed() < ttl);
        before - self.entries.len()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, F> fmt::Debug for ExpiringMemo<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ExpiringMemo")
            .field("ttl", &self.ttl)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_zero_ttl_always_recomputes() {
        let calls = Cell::new(0);
        let mut memo = ExpiringMemo::new(
            |key: &&str| {
                calls.set(calls.get() + 1);
                key.len()
            },
            Duration::ZERO,
        );

        assert_eq!(memo.call("abc"), 3);
        assert_eq!(memo.call("abc"), 3);
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.len(), 1);
    }

    #[rstest]
    fn test_distinct_keys_cached_separately() {
        let calls = Cell::new(0);
        let mut memo = ExpiringMemo::new(
            |key: &u8| {
                calls.set(calls.get() + 1);
                u32::from(*key) * 10
            },
            Duration::from_secs(3600),
        );

        assert_eq!(memo.call(1), 10);
        assert_eq!(memo.call(2), 20);
        assert_eq!(memo.call(1), 10);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_clear_expired() {
        let mut expired = ExpiringMemo::new(|key: &u8| *key, Duration::ZERO);
        expired.call(1);
        expired.call(2);
        assert_eq!(expired.clear_expired(), 2);
        assert!(expired.is_empty());

        let mut fresh = ExpiringMemo::new(|key: &u8| *key, Duration::from_secs(3600));
        fresh.call(1);
        assert_eq!(fresh.clear_expired(), 0);
        fresh.clear();
        assert!(fresh.is_empty());
    }
}
