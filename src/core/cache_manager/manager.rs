//! TTL cache implementation

use super::types::{AtomicCacheStats, CacheEntry, CacheStats};
use dashmap::DashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default entry lifetime
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Concurrent key/value cache with a fixed time-to-live per entry
///
/// Reads and writes on the same key are atomic with respect to each other;
/// operations on different keys proceed independently. There is no capacity
/// bound: entries only leave the map when an expired key is read again, when
/// [`purge_expired`](Self::purge_expired) runs, or on [`clear`](Self::clear).
/// A TTL too large for the clock keeps entries until one of those happens.
pub struct TtlCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
    stats: AtomicCacheStats,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            stats: AtomicCacheStats::default(),
        }
    }

    /// Get a live value
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_at(key, Instant::now())
    }

    /// Get a value as of `now`, evicting it if it has expired
    pub fn get_at<Q>(&self, key: &Q, now: Instant) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired_at(now) {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
        }

        // A concurrent set may have refreshed the entry since the read above.
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired_at(now))
            .is_some()
        {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
            debug!("Evicted expired cache entry");
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a value, replacing any previous entry for the key
    pub fn set(&self, key: K, value: V) {
        self.set_at(key, value, Instant::now());
    }

    /// Store a value written at `now`
    pub fn set_at(&self, key: K, value: V, now: Instant) {
        self.entries
            .insert(key, CacheEntry::new_at(value, self.ttl, now));
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    /// Remove every entry expired as of `now`
    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            self.stats
                .evictions
                .fetch_add(removed as u64, Ordering::Relaxed);
            debug!("Purged {} expired cache entries", removed);
        }
        removed
    }

    /// Number of stored entries, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured entry lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get cache statistics (lock-free snapshot)
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Drop all entries and reset statistics
    pub fn clear(&self) {
        self.entries.clear();
        self.stats.reset();
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
