//! Fixed-capacity binary max-heap.
//!
//! [`FixedHeap`] stores a complete binary tree breadth-first in an array: the children
//! of slot `i` are `2i + 1` and `2i + 2`. The order is entirely defined by a
//! [`Comparator`]; callers wanting a min-heap reverse their comparator.

use core::cmp::Ordering;

use baz_sys::fault::{fault, FaultKind};
use thiserror::Error;

/// Three-way comparison used to order heap elements.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Error type for [`FixedHeap::try_insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FixedHeapError {
    /// The heap has reached its maximum capacity.
    #[error("heap is full")]
    Full,
}

/// A fixed-capacity binary max-heap.
///
/// For every non-root slot `i` with parent `p`, `compare(items[p], items[i])` is not
/// `Less`. Inserting into a full heap is a [`Fault`](baz_sys::Fault).
///
/// # Examples
///
/// ```rust
/// use baz_collections::generic::fixed_heap::FixedHeap;
///
/// let mut heap: FixedHeap<u32, 8> = FixedHeap::new();
/// for x in [5, 1, 8, 3] {
///     heap.insert(x);
/// }
/// assert_eq!(heap.extract(), Some(8));
/// assert_eq!(heap.extract(), Some(5));
///
/// // Min-heap by reversing the comparator.
/// let mut min = FixedHeap::<u32, 8, _>::with_comparator(|a: &u32, b: &u32| b.cmp(a));
/// min.insert(5);
/// min.insert(1);
/// assert_eq!(min.extract(), Some(1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedHeap<T, const SIZE: usize, C = NaturalOrder> {
    items: [T; SIZE],
    len: usize,
    cmp: C,
}

impl<T: Default + Copy, const SIZE: usize, C: Comparator<T> + Default> Default
    for FixedHeap<T, SIZE, C>
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Default + Copy + Ord, const SIZE: usize> FixedHeap<T, SIZE> {
    /// Creates an empty heap ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Default + Copy, const SIZE: usize, C: Comparator<T>> FixedHeap<T, SIZE, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            items: [T::default(); SIZE],
            len: 0,
            cmp,
        }
    }
}

impl<T: Copy, const SIZE: usize, C: Comparator<T>> FixedHeap<T, SIZE, C> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// The maximum element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The elements in breadth-first tree order.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    fn compare_at(&self, a: usize, b: usize) -> Ordering {
        self.cmp.compare(&self.items[a], &self.items[b])
    }

    /// Adds `item` and sifts it up towards the root.
    ///
    /// Faults with [`FaultKind::CapacityExceeded`] if the heap is full.
    #[track_caller]
    pub fn insert(&mut self, item: T) {
        if self.try_insert(item).is_err() {
            fault(FaultKind::CapacityExceeded { capacity: SIZE }, "heap insert");
        }
    }

    /// Adds `item`, or reports that the heap is full.
    pub fn try_insert(&mut self, item: T) -> Result<(), FixedHeapError> {
        if self.len >= SIZE {
            return Err(FixedHeapError::Full);
        }

        let mut index = self.len;
        self.items[index] = item;
        self.len += 1;

        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare_at(parent, index) != Ordering::Less {
                break;
            }
            self.items.swap(parent, index);
            index = parent;
        }

        Ok(())
    }

    /// Removes and returns the maximum element, or `None` if the heap is empty.
    ///
    /// The former last element moves to the root and sifts down. When both children
    /// outrank it, it swaps with the right child only if the left compares `Less`
    /// than the right; ties go left.
    pub fn extract(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let top = self.items[0];
        self.len -= 1;
        if self.len == 0 {
            return Some(top);
        }

        self.items[0] = self.items[self.len];

        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            if left >= self.len {
                break;
            }

            let cmp_left = self.compare_at(index, left);

            if right >= self.len {
                if cmp_left == Ordering::Less {
                    self.items.swap(index, left);
                }
                break;
            }

            let cmp_right = self.compare_at(index, right);
            if cmp_left != Ordering::Less && cmp_right != Ordering::Less {
                break;
            }

            let child = if self.compare_at(left, right) == Ordering::Less {
                right
            } else {
                left
            };
            self.items.swap(index, child);
            index = child;
        }

        Some(top)
    }
}
