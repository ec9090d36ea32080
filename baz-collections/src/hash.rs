//! Fx-style word hashing.
//!
//! A fast, deterministic, non-cryptographic hash: every word is folded in with a
//! rotate, an xor and a multiplication by an odd constant. It is the default hasher
//! of [`FixedMap`](crate::generic::fixed_map::FixedMap) and the content hash of
//! byte spans.

use core::hash::{BuildHasher, Hasher};

use bytemuck::Zeroable;

#[cfg(target_pointer_width = "64")]
const SEED: usize = 0x517c_c1b7_2722_0a95;
#[cfg(target_pointer_width = "32")]
const SEED: usize = 0x9e37_79b9;
const ROTATE: u32 = 5;
const WORD: usize = core::mem::size_of::<usize>();

/// One machine word of accumulator state.
///
/// # Examples
///
/// ```rust
/// use baz_collections::hash::FxHasher;
///
/// let mut a = FxHasher::default();
/// a.add(1);
/// a.add(2);
///
/// let mut b = FxHasher::default();
/// b.add(2);
/// b.add(1);
///
/// assert_ne!(a.hash(), b.hash());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FxHasher {
    state: usize,
}

impl FxHasher {
    /// Folds one word into the state.
    #[inline]
    pub fn add(&mut self, word: usize) {
        self.state = (self.state.rotate_left(ROTATE) ^ word).wrapping_mul(SEED);
    }

    /// The current hash value.
    #[inline]
    pub fn hash(&self) -> usize {
        self.state
    }
}

/// Hash of a single word from the zero state.
#[inline]
pub fn fx_hash_word(word: usize) -> usize {
    let mut hasher = FxHasher::default();
    hasher.add(word);
    hasher.hash()
}

impl Hasher for FxHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(WORD);
        for chunk in &mut chunks {
            let mut word = [0u8; WORD];
            word.copy_from_slice(chunk);
            self.add(usize::from_le_bytes(word));
        }
        for &byte in chunks.remainder() {
            self.add(byte as usize);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add(i as usize);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.add(i as usize);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add(i as usize);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.add(i as usize);
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.write_u64(i as u64);
        self.write_u64((i >> 64) as u64);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.add(i);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state as u64
    }
}

/// Builds [`FxHasher`]s from the zero state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FxBuildHasher;

// SAFETY: zero-sized.
unsafe impl Zeroable for FxBuildHasher {}

impl BuildHasher for FxBuildHasher {
    type Hasher = FxHasher;

    #[inline]
    fn build_hasher(&self) -> FxHasher {
        FxHasher::default()
    }
}
