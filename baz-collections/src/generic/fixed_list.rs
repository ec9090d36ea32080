//! Fixed-capacity list implementation for allocation-free environments.
//!
//! This module provides [`FixedList`], a contiguous array-backed sequence with stack-like
//! `push`/`pop` semantics, positional `insert`/`remove`, and sorted-order search.

use core::cmp::Ordering;
use core::ops::{Index, IndexMut};

use baz_sys::fault::{ensure, fault, FaultKind};
use bytemuck::Zeroable;
use thiserror::Error;

/// Error type for the fallible [`FixedList`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FixedListError {
    /// The list has reached its maximum capacity.
    #[error("list is full")]
    Full,
}

/// A fixed-capacity list backed by a contiguous array.
///
/// Elements `[0, len)` are valid; the rest of the backing array holds stale or
/// default values. Growing past `SIZE` is a [`Fault`](baz_sys::Fault); use
/// [`try_push`](Self::try_push) where running out of room is expected.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Copy`, and `Default` for [`new`](Self::new).
/// * `SIZE` - The maximum number of elements the list can hold (compile-time constant).
///
/// # Examples
///
/// ```rust
/// use baz_collections::generic::fixed_list::FixedList;
///
/// let mut list: FixedList<u32, 4> = FixedList::new();
///
/// list.push(10);
/// list.push(20);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.as_slice(), &[10, 20]);
///
/// assert_eq!(list.pop(), Some(20));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedList<T, const SIZE: usize> {
    items: [T; SIZE],
    len: usize,
}

// SAFETY: both fields are zeroable when `T` is, and an all-zero list is empty.
unsafe impl<T: Zeroable, const SIZE: usize> Zeroable for FixedList<T, SIZE> {}

impl<T: Default + Copy, const SIZE: usize> Default for FixedList<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Copy, const SIZE: usize> FixedList<T, SIZE> {
    /// Creates a new, empty `FixedList`.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let list: FixedList<u32, 10> = FixedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self {
            items: [T::default(); SIZE],
            len: 0,
        }
    }

    /// Creates a `FixedList` holding a copy of `slice`.
    ///
    /// Faults if the slice is longer than the capacity.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let list: FixedList<i32, 5> = FixedList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut list = Self::new();
        list.copy_from_slice(slice);
        list
    }
}

impl<T: Copy, const SIZE: usize> FixedList<T, SIZE> {
    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum number of elements the list can hold.
    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Returns `true` if another push would fault.
    pub fn is_full(&self) -> bool {
        self.len == SIZE
    }

    /// Returns an iterator over the elements in the list.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items[..self.len].iter()
    }

    /// Returns a mutable iterator over the elements in the list.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.items[..self.len].iter_mut()
    }

    /// Appends an element to the back of the list.
    ///
    /// Faults with [`FaultKind::CapacityExceeded`] if the list is full.
    ///
    /// ```rust,should_panic
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let mut list: FixedList<u32, 1> = FixedList::new();
    /// list.push(1);
    /// list.push(2); // faults
    /// ```
    #[track_caller]
    pub fn push(&mut self, item: T) -> &mut T {
        if self.len >= SIZE {
            fault(FaultKind::CapacityExceeded { capacity: SIZE }, "push");
        }

        let slot = &mut self.items[self.len];
        *slot = item;
        self.len += 1;
        slot
    }

    /// Appends an element to the back of the list, or reports that it is full.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::Full`] if the list is at capacity.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let mut list: FixedList<u32, 2> = FixedList::new();
    /// assert!(list.try_push(1).is_ok());
    /// assert!(list.try_push(2).is_ok());
    /// assert!(list.try_push(3).is_err()); // List is full
    /// ```
    pub fn try_push(&mut self, item: T) -> Result<(), FixedListError> {
        if self.len >= SIZE {
            return Err(FixedListError::Full);
        }

        self.items[self.len] = item;
        self.len += 1;

        Ok(())
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one place to the right.
    ///
    /// Faults if the list is full or `index > len`.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let mut list: FixedList<u8, 8> = FixedList::from_slice(&[3, 4, 7]);
    /// list.insert(2, 5);
    /// assert_eq!(list.as_slice(), &[3, 4, 5, 7]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, item: T) -> &mut T {
        ensure(
            self.len < SIZE,
            FaultKind::CapacityExceeded { capacity: SIZE },
            "insert",
        );
        ensure(
            index <= self.len,
            FaultKind::OutOfBounds {
                index,
                len: self.len,
            },
            "insert",
        );

        self.items.copy_within(index..self.len, index + 1);
        self.items[index] = item;
        self.len += 1;
        &mut self.items[index]
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` one place
    /// to the left.
    ///
    /// Faults if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        ensure(
            index < self.len,
            FaultKind::OutOfBounds {
                index,
                len: self.len,
            },
            "remove",
        );

        let removed = self.items[index];
        self.items.copy_within(index + 1..self.len, index);
        self.len -= 1;
        removed
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let mut list: FixedList<u32, 5> = FixedList::new();
    /// assert_eq!(list.pop(), None);
    ///
    /// list.push(42);
    /// assert_eq!(list.pop(), Some(42));
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len > 0 {
            self.len -= 1;
            Some(self.items[self.len])
        } else {
            None
        }
    }

    /// Returns the last element without removing it, or `None` if the list is empty.
    pub fn peek(&self) -> Option<T> {
        self.len.checked_sub(1).map(|last| self.items[last])
    }

    /// Returns the element at `index` if it is within `[0, len)`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Binary search for `entry` in a list sorted ascending by `cmp`.
    ///
    /// `cmp` is called as `cmp(entry, element)`. Returns the index of an element
    /// comparing equal (which one is unspecified among duplicates), or the index at
    /// which `entry` would have to be inserted to keep the list sorted.
    ///
    /// ```rust
    /// use baz_collections::generic::fixed_list::FixedList;
    ///
    /// let list: FixedList<u8, 16> = FixedList::from_slice(&[3, 4, 7, 42, 51, 127]);
    /// assert_eq!(list.bsearch_by(&5, |a, b| a.cmp(b)), 2);
    /// assert_eq!(list.bsearch_by(&51, |a, b| a.cmp(b)), 4);
    /// ```
    pub fn bsearch_by<F>(&self, entry: &T, mut cmp: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut low = 0;
        let mut high = self.len;

        while low < high {
            let mid = low + (high - low) / 2;
            match cmp(entry, &self.items[mid]) {
                Ordering::Equal => return mid,
                Ordering::Greater => low = mid + 1,
                Ordering::Less => high = mid,
            }
        }

        low
    }

    /// [`bsearch_by`](Self::bsearch_by) using the natural order of `T`.
    pub fn bsearch(&self, entry: &T) -> usize
    where
        T: Ord,
    {
        self.bsearch_by(entry, T::cmp)
    }

    /// Inserts `item` at its sorted position in a list sorted ascending.
    #[track_caller]
    pub fn insert_sorted(&mut self, item: T) -> &mut T
    where
        T: Ord,
    {
        let index = self.bsearch(&item);
        self.insert(index, item)
    }

    /// Index of the first element for which `eq(element, entry)` holds.
    pub fn linear_lookup<F>(&self, entry: &T, mut eq: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.iter().position(|item| eq(item, entry))
    }

    /// Index of the first element equal to `entry`.
    pub fn linear_find(&self, entry: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.linear_lookup(entry, T::eq)
    }

    /// Returns a slice containing all elements in the list.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    /// Returns a mutable slice containing all elements in the list.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.len]
    }

    /// Copies elements from a slice into the list, replacing existing contents.
    ///
    /// Faults if the slice is longer than the capacity.
    #[track_caller]
    pub fn copy_from_slice(&mut self, slice: &[T]) {
        ensure(
            slice.len() <= SIZE,
            FaultKind::CapacityExceeded { capacity: SIZE },
            "copy_from_slice",
        );
        self.len = slice.len();
        self.items[..self.len].copy_from_slice(slice);
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the list to `len` elements. Does nothing if it is already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }
}

impl<T: Copy, const SIZE: usize> Index<usize> for FixedList<T, SIZE> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(item) => item,
            None => fault(
                FaultKind::OutOfBounds {
                    index,
                    len: self.len,
                },
                "index",
            ),
        }
    }
}

impl<T: Copy, const SIZE: usize> IndexMut<usize> for FixedList<T, SIZE> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(item) => item,
            None => fault(FaultKind::OutOfBounds { index, len }, "index"),
        }
    }
}

impl<T: Copy + PartialEq, const SIZE: usize> PartialEq for FixedList<T, SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const SIZE: usize> Eq for FixedList<T, SIZE> {}

impl<'a, T: Copy, const SIZE: usize> IntoIterator for &'a FixedList<T, SIZE> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
