//! Explicitly owned caches.
//!
//! This module requires the `cache` feature flag.
//!
//! - [`LruCache`]: bounded map with least-recently-used eviction
//! - [`ExpiringMemo`]: per-key memoization with a time-to-live
//!
//! Neither type keeps process-wide state; callers construct, own and share
//! them explicitly (for example behind a `Mutex`).

mod lru;
mod memo;

pub use lru::LruCache;
pub use memo::ExpiringMemo;
