#![cfg(feature = "cache")]
//! Caches owned by the component that uses them.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use railway::cache::{ExpiringMemo, LruCache};
use rstest::rstest;

/// A lookup service owning its cache; two instances never share entries.
struct ProfileService {
    cache: LruCache<u32, String>,
    backend_calls: usize,
}

impl ProfileService {
    fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap()),
            backend_calls: 0,
        }
    }

    fn profile(&mut self, id: u32) -> String {
        if let Some(hit) = self.cache.get(&id) {
            return hit.clone();
        }
        self.backend_calls += 1;
        let loaded = format!("profile-{id}");
        self.cache.put(id, loaded.clone());
        loaded
    }
}

#[rstest]
fn test_instances_do_not_share_entries() {
    let mut first = ProfileService::new(4);
    let mut second = ProfileService::new(4);

    first.profile(1);
    first.profile(1);
    second.profile(1);

    assert_eq!(first.backend_calls, 1);
    assert_eq!(second.backend_calls, 1);
}

#[rstest]
fn test_least_recently_used_is_reloaded() {
    let mut service = ProfileService::new(2);
    for id in [1, 2, 1, 3, 2] {
        service.profile(id);
    }
    // 3 evicts 2 (1 was read more recently), then 2 evicts 1
    assert_eq!(service.backend_calls, 4);
    assert!(service.cache.contains(&2));
    assert!(service.cache.contains(&3));
    assert!(!service.cache.contains(&1));
}

#[rstest]
fn test_cache_shared_across_threads_behind_mutex() {
    let cache = Arc::new(Mutex::new(LruCache::new(NonZeroUsize::new(8).unwrap())));

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for key in 0..4u32 {
                    cache.lock().unwrap().put((worker, key), worker * key);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.lock().unwrap().len(), 8);
}

#[rstest]
fn test_memo_serves_hits_until_cleared() {
    let mut lengths = ExpiringMemo::new(|text: &String| text.chars().count(), Duration::from_secs(300));

    assert_eq!(lengths.call("héllo".to_string()), 5);
    assert_eq!(lengths.call("héllo".to_string()), 5);
    assert_eq!(lengths.len(), 1);

    lengths.clear();
    assert!(lengths.is_empty());
}
