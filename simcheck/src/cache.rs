//! Memoization of pairwise text comparisons.
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;

use crate::config::validate_ngram_size;
use crate::errors::{Result, SimcheckError};
use crate::jaccard::text_similarity;

/// Default maximum number of cached comparisons.
pub const DEFAULT_CAPACITY: usize = 1000;

type ComparisonKey = (String, String, usize);

/// Snapshot of the cache statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups that computed a new score.
    pub misses: u64,
    /// Number of occupied entries.
    pub size: usize,
    /// Maximum number of entries.
    pub capacity: usize,
}

impl CacheStats {
    /// Gets `hits / (hits + misses)`, or 0 if there has been no lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

struct Inner {
    entries: LruCache<ComparisonKey, f64>,
    hits: u64,
    misses: u64,
    // Bumped by every clear so that scores computed before it are not inserted after it.
    generation: u64,
}

/// Bounded LRU cache in front of [`text_similarity`].
///
/// The entries and the statistics live behind one lock, so every call observes
/// them in a consistent state. The comparison itself runs outside the lock.
/// The cache is `Sync` and is meant to be shared by reference across workers.
///
/// # Examples
///
/// ```
/// use simcheck::ComparisonCache;
///
/// let cache = ComparisonCache::new(100).unwrap();
/// assert_eq!(cache.compare("hello world", "hello world", 2).unwrap(), 1.0);
/// assert_eq!(cache.compare("hello world", "hello world", 2).unwrap(), 1.0);
/// assert_eq!(cache.stats().hits, 1);
/// assert_eq!(cache.stats().misses, 1);
/// ```
pub struct ComparisonCache {
    inner: Mutex<Inner>,
}

impl ComparisonCache {
    /// Creates a cache holding at most `capacity` comparisons.
    ///
    /// # Errors
    ///
    /// [`SimcheckError::Config`] is returned if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| SimcheckError::config("cache capacity must not be 0"))?;
        Ok(Self::with_capacity(capacity))
    }

    fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
                generation: 0,
            }),
        }
    }

    /// Gets the word `n`-gram Jaccard similarity of two texts, computing it only
    /// if the pair has not been seen yet.
    ///
    /// The pair is unordered: `compare(a, b, n)` and `compare(b, a, n)` share one entry.
    ///
    /// # Errors
    ///
    /// [`SimcheckError::Config`] is returned if `n` is not in `1..=10`.
    pub fn compare(&self, text1: &str, text2: &str, n: usize) -> Result<f64> {
        validate_ngram_size(n)?;
        let key = if text1 <= text2 {
            (text1.to_string(), text2.to_string(), n)
        } else {
            (text2.to_string(), text1.to_string(), n)
        };

        let generation = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            if let Some(&score) = inner.entries.get(&key) {
                inner.hits += 1;
                return Ok(score);
            }
            inner.misses += 1;
            inner.generation
        };

        tracing::trace!(n, "comparison cache miss");
        let score = text_similarity(&key.0, &key.1, n)?;

        let mut inner = self.inner.lock();
        if inner.generation == generation {
            inner.entries.put(key, score);
        }
        Ok(score)
    }

    /// Gets a snapshot of the statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            size: inner.entries.len(),
            capacity: inner.entries.cap().get(),
        }
    }

    /// Removes all entries and resets the statistics.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        tracing::debug!(
            size = inner.entries.len(),
            hits = inner.hits,
            misses = inner.misses,
            "clearing comparison cache"
        );
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
        inner.generation += 1;
    }

    /// Gets the number of cached comparisons.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Checks if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the maximum number of cached comparisons.
    pub fn capacity(&self) -> usize {
        self.inner.lock().entries.cap().get()
    }
}

impl Default for ComparisonCache {
    fn default() -> Self {
        // DEFAULT_CAPACITY is a non-zero constant.
        Self::with_capacity(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparency() {
        let cache = ComparisonCache::new(10).unwrap();
        let first = cache.compare("the cat sat on the mat", "the cat sat on a mat", 2).unwrap();
        let stats = cache.stats();
        let second = cache.compare("the cat sat on the mat", "the cat sat on a mat", 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.stats().hits, stats.hits + 1);
        assert_eq!(cache.stats().misses, stats.misses);
        assert_eq!(
            first,
            text_similarity("the cat sat on the mat", "the cat sat on a mat", 2).unwrap()
        );
    }

    #[test]
    fn test_key_order() {
        let cache = ComparisonCache::new(10).unwrap();
        let ab = cache.compare("a b c", "b c d", 1).unwrap();
        let ba = cache.compare("b c d", "a b c", 1).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits, 1);

        cache.compare("a b c", "b c d", 2).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_eviction() {
        let cache = ComparisonCache::new(2).unwrap();
        cache.compare("a", "b", 1).unwrap();
        cache.compare("a", "c", 1).unwrap();
        // Refreshes (a, b), so (a, c) becomes the oldest unused entry.
        cache.compare("a", "b", 1).unwrap();
        cache.compare("a", "d", 1).unwrap();
        assert_eq!(cache.len(), 2);

        let before = cache.stats();
        cache.compare("a", "b", 1).unwrap();
        assert_eq!(cache.stats().hits, before.hits + 1);
        cache.compare("a", "c", 1).unwrap();
        assert_eq!(cache.stats().misses, before.misses + 1);
    }

    #[test]
    fn test_stats_and_clear() {
        let cache = ComparisonCache::default();
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
        assert_eq!(cache.stats().hit_rate(), 0.);

        cache.compare("x y", "x z", 1).unwrap();
        cache.compare("x y", "x z", 1).unwrap();
        cache.compare("x y", "x z", 1).unwrap();
        cache.compare("x y", "y z", 1).unwrap();
        let stats = cache.stats();
        assert_eq!(
            stats,
            CacheStats {
                hits: 2,
                misses: 2,
                size: 2,
                capacity: DEFAULT_CAPACITY
            }
        );
        assert_eq!(stats.hit_rate(), 0.5);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats { capacity: DEFAULT_CAPACITY, ..Default::default() });
    }

    #[test]
    fn test_invalid_args() {
        assert!(ComparisonCache::new(0).is_err());
        let cache = ComparisonCache::new(1).unwrap();
        assert!(cache.compare("a", "b", 0).is_err());
        assert!(cache.compare("a", "b", 11).is_err());
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_concurrent_compare() {
        let cache = ComparisonCache::new(8).unwrap();
        let texts = ["one two three", "two three four", "three four five", "one two four"];
        std::thread::scope(|s| {
            for t in 0..4 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..200 {
                        let a = texts[(i + t) % texts.len()];
                        let b = texts[(i * 3 + 1) % texts.len()];
                        let score = cache.compare(a, b, 2).unwrap();
                        assert_eq!(score, text_similarity(a, b, 2).unwrap());
                        if i % 50 == 0 {
                            cache.clear();
                        }
                    }
                });
            }
        });
        assert!(cache.len() <= 8);
        // Scores computed before a clear are never inserted after it.
        let stats = cache.stats();
        assert!(stats.size as u64 <= stats.misses, "{stats:?}");
    }
}
