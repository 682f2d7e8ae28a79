//! Fixed-capacity bit set over input combination indices.
//!
//! A table of `N` terms has `2^N <= 1024` combinations, so the set fits in at
//! most 16 words and never grows after construction.

/// Bit `i` is set when combination `i` is already taken by an accepted row.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
    count: usize,
    capacity: usize,
}

impl BitSet {
    /// Creates an empty set able to hold indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            count: 0,
            capacity,
        }
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Indices beyond the capacity are never set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Sets bit `index`. Returns true if it was clear before.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(
            index < self.capacity,
            "Index {} out of range for bit set of capacity {}",
            index,
            self.capacity
        );

        if self.contains(index) {
            return false;
        }
        self.words[index / 64] |= 1u64 << (index % 64);
        self.count += 1;
        true
    }
}
