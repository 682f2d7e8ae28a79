//! Evaluation cache for [`TruthTable::check`][crate::table::TruthTable::check].
//!
//! Results are keyed by the canonical string of the assignment: one character
//! per variable, `T` for true and `F` for false. The cache must be cleared
//! whenever the formula changes; the table takes care of that.

use std::collections::HashMap;

use log::trace;

/// Upper bound on the preallocation exponent of [`EvalCache::new`].
pub const MAX_CACHE_BITS: usize = 20;

/// Canonical cache key of an assignment, e.g. `[true, false]` -> `"TF"`.
pub fn cache_key(assignment: &[bool]) -> String {
    assignment.iter().map(|&b| if b { 'T' } else { 'F' }).collect()
}

/// Snapshot of cache statistics.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// A cache backed by [HashMap], counting hits and misses.
#[derive(Debug, Clone)]
pub struct EvalCache {
    map: HashMap<String, bool>,
    hits: usize,
    misses: usize,
}

impl Default for EvalCache {
    fn default() -> Self {
        Self::new(10)
    }
}

impl EvalCache {
    /// Creates a new cache with room for `2^bits` entries before reallocating.
    ///
    /// `bits` is clamped to `MAX_CACHE_BITS`.
    pub fn new(bits: usize) -> Self {
        Self {
            map: HashMap::with_capacity(1 << bits.min(MAX_CACHE_BITS)),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.map.len(),
        }
    }

    /// Drops all entries. Statistics are kept.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Looks up a key in the cache.
    #[inline]
    pub fn get(&mut self, key: &str) -> Option<bool> {
        match self.map.get(key) {
            Some(&v) => {
                trace!("cache hit: {} -> {}", key, v);
                self.hits += 1;
                Some(v)
            }
            None => {
                trace!("cache miss: {}", key);
                self.misses += 1;
                None
            }
        }
    }

    /// Inserts a result into the cache.
    #[inline]
    pub fn insert(&mut self, key: String, value: bool) {
        self.map.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key(&[true, true]), "TT");
        assert_eq!(cache_key(&[true, false]), "TF");
        assert_eq!(cache_key(&[false, false]), "FF");
        assert_eq!(cache_key(&[false, true]), "FT");
    }

    #[test]
    fn test_eval_cache_basic() {
        let mut cache = EvalCache::new(4);

        cache.insert("TF".to_string(), true);
        cache.insert("FF".to_string(), false);

        assert_eq!(cache.get("TF"), Some(true));
        assert_eq!(cache.get("FF"), Some(false));
        assert_eq!(cache.get("TT"), None);

        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 2,
                misses: 1,
                entries: 2
            }
        );
    }

    #[test]
    fn test_eval_cache_clear() {
        let mut cache = EvalCache::default();

        cache.insert("TT".to_string(), true);
        assert_eq!(cache.get("TT"), Some(true));

        cache.clear();
        assert_eq!(cache.get("TT"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_eval_cache_oversized_bits() {
        let mut cache = EvalCache::new(usize::MAX);
        cache.insert("T".to_string(), true);
        assert_eq!(cache.get("T"), Some(true));
        assert_eq!(cache.len(), 1);
    }
}
