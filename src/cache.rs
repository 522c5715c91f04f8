use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A thread-safe, string-keyed cache with TTL (time-to-live) support.
///
/// Entries expire lazily: an expired entry is removed the next time it is
/// read. The only proactive eviction path is [`TtlCache::prune`], which the
/// caller must invoke; no background timer runs here.
pub struct TtlCache<V> {
    data: DashMap<String, CacheEntry<V>>,
    default_ttl: Duration,
}

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Snapshot of cache contents for diagnostics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

impl<V> TtlCache<V>
where
    V: Clone,
{
    /// Create a cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            data: DashMap::new(),
            default_ttl,
        }
    }

    /// Get a value from the cache if it exists and hasn't expired.
    /// An expired entry is deleted and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.data.get(key)?;
        if entry.expires_at > Instant::now() {
            Some(entry.value.clone())
        } else {
            drop(entry);
            self.data.remove(key);
            None
        }
    }

    /// Insert a value, expiring after `ttl` (or the default TTL if `None`).
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl.unwrap_or(self.default_ttl),
        };
        self.data.insert(key.into(), entry);
    }

    /// Remove a specific key. Returns `true` if an entry was present.
    pub fn remove(&self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.data.clear();
    }

    /// Sweep the cache, deleting expired entries. Returns the number removed.
    pub fn prune(&self) -> usize {
        let now = Instant::now();
        let before = self.data.len();
        self.data.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.data.len())
    }

    /// Current size and key set, for diagnostics. Includes entries that have
    /// expired but not yet been swept.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.data.len(),
            keys: self.data.iter().map(|e| e.key().clone()).collect(),
        }
    }

    /// Number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
