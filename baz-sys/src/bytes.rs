//! Copy, compare and scan primitives over raw byte ranges.

use core::cmp::Ordering;

use crate::fault::{ensure, FaultKind};

/// Copies `src` into `dst`. Both ranges must have the same length.
#[inline]
#[track_caller]
pub fn copy(dst: &mut [u8], src: &[u8]) {
    ensure(
        dst.len() == src.len(),
        FaultKind::BufferTooSmall {
            needed: src.len(),
            available: dst.len(),
        },
        "copy",
    );
    dst.copy_from_slice(src);
}

/// Lexicographic byte-wise comparison; a strict prefix orders first.
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Index of the first occurrence of `byte` in `haystack`.
#[inline]
pub fn find(haystack: &[u8], byte: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == byte)
}

/// Exchanges the contents of two equal-length ranges.
#[inline]
#[track_caller]
pub fn swap(a: &mut [u8], b: &mut [u8]) {
    ensure(
        a.len() == b.len(),
        FaultKind::BufferTooSmall {
            needed: a.len(),
            available: b.len(),
        },
        "swap",
    );
    a.swap_with_slice(b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_copy() {
        let mut dst = [0u8; 3];
        copy(&mut dst, b"abc");
        assert_eq!(&dst, b"abc");
    }

    #[test]
    #[should_panic]
    fn test_copy_length_mismatch() {
        let mut dst = [0u8; 2];
        copy(&mut dst, b"abc");
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(b"abc", b"abc"), Ordering::Equal);
        assert_eq!(compare(b"abb", b"abc"), Ordering::Less);
        assert_eq!(compare(b"abd", b"abc"), Ordering::Greater);
        assert_eq!(compare(b"ab", b"abc"), Ordering::Less);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(b"a,b", b','), Some(1));
        assert_eq!(find(b"ab", b','), None);
        assert_eq!(find(b"", b','), None);
    }

    #[test]
    fn test_swap() {
        let mut a = *b"xy";
        let mut b = *b"12";
        swap(&mut a, &mut b);
        assert_eq!(&a, b"12");
        assert_eq!(&b, b"xy");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256, ..ProptestConfig::default()
        })]
        #[test]
        fn test_find_locates_first_occurrence(haystack in proptest::collection::vec(0u8..4, 0..32), byte in 0u8..4) {
            match find(&haystack, byte) {
                Some(at) => {
                    prop_assert_eq!(haystack[at], byte);
                    prop_assert!(!haystack[..at].contains(&byte));
                }
                None => prop_assert!(!haystack.contains(&byte)),
            }
        }

        #[test]
        fn test_swap_exchanges_and_copy_restores(pair in proptest::collection::vec(any::<(u8, u8)>(), 0..32)) {
            let (mut a, mut b): (Vec<u8>, Vec<u8>) = pair.iter().copied().unzip();
            let (before_a, before_b) = (a.clone(), b.clone());

            swap(&mut a, &mut b);
            prop_assert_eq!(&a, &before_b);
            prop_assert_eq!(&b, &before_a);

            copy(&mut a, &before_a);
            prop_assert_eq!(compare(&a, &before_a), core::cmp::Ordering::Equal);
        }
    }
}
