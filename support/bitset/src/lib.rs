//! A fixed-capacity bitset with a cached hash.
//!
//! The capacity is picked at construction and never changes. Bits are packed
//! into `u64` words, all cleared initially. Addressing a bit at or past the
//! capacity panics.
//!
//! ```
//! use cherry_bitset::Bitset;
//!
//! let mut set = Bitset::with_indexes(100, [3, 64, 99]);
//! assert!(set.contains([3, 99]));
//! assert!(!set.get_bit(4));
//!
//! let before = set.hash();
//! set.set_bit(4, true);
//! assert_ne!(set.hash(), before);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

const WORD_BITS: usize = u64::BITS as usize;
const HASH_MULTIPLIER: u64 = 133;

#[derive(Debug, Clone)]
pub struct Bitset {
    words: Vec<u64>,
    bits: usize,
    // Invalidated on every write.
    hash: Option<u64>,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(Bitset, [usize; 6]);

impl Bitset {
    /// Creates a bitset of `bits` cleared bits.
    pub fn new(bits: usize) -> Self {
        Bitset {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            bits,
            hash: None,
        }
    }

    /// Creates a bitset of `bits` bits with the listed positions set.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= bits`.
    pub fn with_indexes(bits: usize, indexes: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Bitset::new(bits);
        for index in indexes {
            set.set_bit(index, true);
        }
        set
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.bits,
            "bit {index} is out of bounds for a bitset of {} bits",
            self.bits
        );
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    pub fn set_bit(&mut self, index: usize, bit: bool) {
        let (word, mask) = self.locate(index);
        if bit {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
        self.hash = None;
    }

    #[inline]
    pub fn get_bit(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Whether every listed bit is set. An empty list is trivially contained.
    pub fn contains(&self, indexes: impl IntoIterator<Item = usize>) -> bool {
        indexes.into_iter().all(|index| self.get_bit(index))
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Hash of the bit pattern, recomputed only after a write.
    ///
    /// Words are folded as `h = h * 133 + word` with wrapping arithmetic.
    pub fn hash(&mut self) -> u64 {
        *self.hash.get_or_insert_with(|| {
            self.words
                .iter()
                .fold(0u64, |h, &w| h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(w))
        })
    }

    /// Clears every bit. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.hash = None;
    }
}

impl PartialEq for Bitset {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.words == other.words
    }
}

impl Eq for Bitset {}
