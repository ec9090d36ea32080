//! Fixed-capacity bit set implementation for allocation-free environments.
//!
//! This module provides [`FixedBitSet`], a word-packed bitmap over the dense universe
//! `[0, WORDS * 64)` with set algebra and prefix filling.

use core::ops::{BitAnd, BitOr};

use baz_sys::fault::{ensure, FaultKind};
use bytemuck::{Pod, Zeroable};

/// Width of one storage word in bits.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of words needed for a universe of `bits` indices.
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// A fixed-capacity bit set over the indices `[0, WORDS * 64)`.
///
/// Bit `i` lives in word `i / 64` at position `i % 64`. Indices outside the universe
/// are a [`Fault`](baz_sys::Fault).
///
/// # Type Parameters
///
/// * `WORDS` - Number of 64-bit storage words (compile-time constant). Use
///   [`words_for`] to size a set for a given universe.
///
/// # Examples
///
/// ```rust
/// use baz_collections::generic::fixed_bitset::{words_for, FixedBitSet};
///
/// let mut bitset: FixedBitSet<{ words_for(100) }> = FixedBitSet::new();
///
/// bitset.insert(3);
/// bitset.insert(7);
/// bitset.insert(99);
///
/// assert!(bitset.contains(3));
/// assert!(!bitset.contains(4));
/// assert_eq!(bitset.count(), 3);
///
/// let bits: Vec<_> = bitset.iter().collect();
/// assert_eq!(bits, vec![3, 7, 99]);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedBitSet<const WORDS: usize> {
    words: [u64; WORDS],
}

// SAFETY: a transparent wrapper around `[u64; WORDS]`; every bit pattern is a valid set.
unsafe impl<const WORDS: usize> Zeroable for FixedBitSet<WORDS> {}
unsafe impl<const WORDS: usize> Pod for FixedBitSet<WORDS> {}

impl<const WORDS: usize> Default for FixedBitSet<WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WORDS: usize> FixedBitSet<WORDS> {
    /// Number of indices in the universe.
    pub const CAPACITY: usize = WORDS * WORD_BITS;

    /// Creates a new, empty bit set.
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    #[track_caller]
    fn locate(index: usize, context: &'static str) -> (usize, u64) {
        ensure(
            index < Self::CAPACITY,
            FaultKind::OutOfBounds {
                index,
                len: Self::CAPACITY,
            },
            context,
        );
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    /// Sets the bit at `index`. Returns `true` if it was not already set.
    #[track_caller]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, mask) = Self::locate(index, "insert");
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Clears the bit at `index`. Returns `true` if it was set.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> bool {
        let (word, mask) = Self::locate(index, "remove");
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    /// Returns `true` if the bit at `index` is set.
    #[track_caller]
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = Self::locate(index, "contains");
        self.words[word] & mask != 0
    }

    /// Sets every bit strictly below `index`, leaving `index` and above untouched.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_bitset::FixedBitSet;
    ///
    /// let mut below: FixedBitSet<2> = FixedBitSet::new();
    /// below.set_many(70);
    /// assert_eq!(below.count(), 70);
    /// assert!(below.contains(69));
    /// assert!(!below.contains(70));
    /// ```
    #[track_caller]
    pub fn set_many(&mut self, index: usize) {
        let (word, mask) = Self::locate(index, "set_many");
        for full in &mut self.words[..word] {
            *full = u64::MAX;
        }
        self.words[word] |= mask - 1;
    }

    /// Number of set bits strictly below `index`.
    #[track_caller]
    pub fn rank(&self, index: usize) -> usize {
        let mut below = Self::new();
        below.set_many(index);
        self.intersection(&below).count()
    }

    /// Word-wise union.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        for (word, &rhs) in out.words.iter_mut().zip(&other.words) {
            *word |= rhs;
        }
        out
    }

    /// Word-wise intersection.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = *self;
        for (word, &rhs) in out.words.iter_mut().zip(&other.words) {
            *word &= rhs;
        }
        out
    }

    /// Returns `true` if every bit of `self` is also set in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        *self == self.intersection(other)
    }

    /// Population count across all words.
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns `true` if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Unsets all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns an iterator over all set indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(index, &word)| {
            let base = index * WORD_BITS;
            let mut rest = word;
            core::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(base + bit)
            })
        })
    }
}

impl<const WORDS: usize> BitOr for FixedBitSet<WORDS> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl<const WORDS: usize> BitAnd for FixedBitSet<WORDS> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baz_sys::Fault;
    use proptest::prelude::*;

    const WORDS: usize = 3;
    type Set = FixedBitSet<WORDS>;

    fn set_of(indices: &[usize]) -> Set {
        let mut set = Set::new();
        for &index in indices {
            set.insert(index);
        }
        set
    }

    #[test]
    fn test_new_and_default_are_empty() {
        let set = Set::new();
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());

        let default_set: Set = Default::default();
        assert_eq!(default_set, set);
        assert_eq!(Set::CAPACITY, 192);
        assert_eq!(words_for(192), 3);
        assert_eq!(words_for(193), 4);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = Set::new();
        assert!(!set.contains(3));
        assert!(set.insert(3));
        assert!(set.contains(3));
        assert_eq!(set.count(), 1);

        // Duplicate insert
        assert!(!set.insert(3));
        assert_eq!(set.count(), 1);

        assert!(set.insert(191));
        assert!(set.contains(191));
    }

    #[test]
    fn test_out_of_universe_faults() {
        let payload = std::panic::catch_unwind(|| {
            let mut set = Set::new();
            set.insert(Set::CAPACITY);
        })
        .unwrap_err();
        let fault = payload.downcast_ref::<Fault>().unwrap();
        assert_eq!(
            fault.kind,
            FaultKind::OutOfBounds {
                index: 192,
                len: 192
            }
        );
        assert_eq!(fault.context, "insert");
    }

    #[test]
    #[should_panic]
    fn test_contains_out_of_universe_faults() {
        Set::new().contains(500);
    }

    #[test]
    fn test_remove() {
        let mut set = set_of(&[2, 64, 65]);
        assert!(set.remove(64));
        assert!(!set.contains(64));
        assert!(set.contains(65));
        assert_eq!(set.count(), 2);

        // Removing non-included index
        assert!(!set.remove(64));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_set_many_word_boundaries() {
        let mut set = Set::new();
        set.set_many(0);
        assert!(set.is_empty());

        set.set_many(64);
        assert_eq!(set.count(), 64);
        assert!(set.contains(63));
        assert!(!set.contains(64));

        let mut set = set_of(&[150]);
        set.set_many(130);
        assert_eq!(set.count(), 131);
        assert!(set.contains(129));
        assert!(!set.contains(130));
        assert!(set.contains(150));
    }

    #[test]
    fn test_rank() {
        let set = set_of(&[1, 5, 64, 100, 130]);
        assert_eq!(set.rank(0), 0);
        assert_eq!(set.rank(5), 1);
        assert_eq!(set.rank(6), 2);
        assert_eq!(set.rank(101), 4);
    }

    #[test]
    fn test_union_and_intersection() {
        let a = set_of(&[1, 70, 130]);
        let b = set_of(&[1, 2, 130]);
        assert_eq!(a | b, set_of(&[1, 2, 70, 130]));
        assert_eq!(a & b, set_of(&[1, 130]));
        assert!((a & b).is_subset(&a));
        assert!(!a.is_subset(&b));
    }

    #[test]
    fn test_iter() {
        let indices = [0, 2, 63, 64, 128, 191];
        let set = set_of(&indices);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, indices);
    }

    #[test]
    fn test_clear() {
        let mut set = set_of(&[0, 1, 100]);
        assert_eq!(set.count(), 3);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_pod_layout() {
        let set = set_of(&[0, 65]);
        let words: &[u64] = bytemuck::cast_slice(core::slice::from_ref(&set));
        assert_eq!(words, &[1, 2, 0]);
    }

    fn arb_set() -> impl Strategy<Value = Set> {
        proptest::collection::vec(0..Set::CAPACITY, 0..64).prop_map(|indices| set_of(&indices))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128, ..ProptestConfig::default()
        })]
        #[test]
        fn test_algebra_is_commutative(a in arb_set(), b in arb_set()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn test_algebra_is_associative(a in arb_set(), b in arb_set(), c in arb_set()) {
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
            prop_assert_eq!(a.intersection(&b).intersection(&c), a.intersection(&b.intersection(&c)));
        }

        #[test]
        fn test_subset_of_union(a in arb_set(), b in arb_set()) {
            prop_assert!(a.is_subset(&a.union(&b)));
            prop_assert!(a.intersection(&b).is_subset(&b));
        }

        #[test]
        fn test_inclusion_exclusion(a in arb_set(), b in arb_set()) {
            prop_assert_eq!(
                a.union(&b).count() + a.intersection(&b).count(),
                a.count() + b.count()
            );
        }

        #[test]
        fn test_set_many_only_touches_prefix(a in arb_set(), x in 0..Set::CAPACITY) {
            let mut filled = a;
            filled.set_many(x);
            for i in 0..Set::CAPACITY {
                if i < x {
                    prop_assert!(filled.contains(i));
                } else {
                    prop_assert_eq!(filled.contains(i), a.contains(i));
                }
            }
        }
    }
}
