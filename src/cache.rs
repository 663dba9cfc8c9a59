//! Generation cache (§4.8): content-addressed memoization of
//! `(sorted class set, options) -> GenerationResult`, bounded by entry
//! count with LRU eviction.

use std::hash::{Hash, Hasher};

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use twox_hash::XxHash64;

use crate::config::EngineOptions;
use crate::model::GenerationResult;

const CACHE_SEED: u64 = 0;

/// Derive the stable cache key for a set of input classes and the
/// generation options in effect (§4.8, §9: "sort-then-hash the class
/// set; hash the options tuple alongside").
pub fn cache_key(classes: &[String], options: &EngineOptions) -> u64 {
    let mut sorted: Vec<&str> = classes.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut hasher = XxHash64::with_seed(CACHE_SEED);
    for class in &sorted {
        class.hash(&mut hasher);
        hasher.write_u8(0); // separator, prevents "ab","c" colliding with "a","bc"
    }
    options.minify.hash(&mut hasher);
    options.group_selectors.hash(&mut hasher);
    options.include_comments.hash(&mut hasher);
    hasher.finish()
}

/// Bounded memoization table guarding the only mutable state an `Engine`
/// needs to share across threads (§5: catalog and constants are
/// immutable once built; only the cache needs a lock).
pub struct GenerationCache {
    inner: Mutex<LruCache<u64, GenerationResult>>,
}

impl GenerationCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up `key`, cloning the stored result and marking `from_cache`.
    pub fn get(&self, key: u64) -> Option<GenerationResult> {
        let mut guard = self.inner.lock();
        guard.get(&key).map(|result| {
            let mut hit = result.clone();
            hit.stats.from_cache = true;
            hit
        })
    }

    pub fn insert(&self, key: u64, result: GenerationResult) {
        self.inner.lock().put(key, result);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
        log::debug!("generation cache cleared");
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
