//! # baz Collections
//!
//! Generic, fixed-capacity data structures for short-lived numeric puzzle solvers.
//!
//! Every container pre-allocates its backing array from a compile-time capacity and
//! never grows. Running out of room or indexing out of range is a
//! [`Fault`](baz_sys::Fault), while absence (an empty pop, a lookup miss) is an
//! `Option`.
//!
//! ## Collections
//!
//! - **[`FixedList<T, SIZE>`]** – bounded array with `push`/`pop`, positional `insert`/`remove` and binary search
//! - **[`FixedBitSet<WORDS>`]** – word-packed bitmap with set algebra, popcount and prefix filling
//! - **[`FixedHeap<T, SIZE, C>`]** – binary max-heap ordered by a caller-supplied [`Comparator`]
//! - **[`FixedMap<K, V, SIZE, S>`]** – open-addressing hash map with backward-shift deletion
//! - **[`FxHasher`]** – the Fx-style word hash used by `FixedMap` by default
//!
//! ## Quick Examples
//!
//! ### Using FixedList
//!
//! ```rust
//! use baz_collections::generic::fixed_list::FixedList;
//!
//! let mut list: FixedList<u32, 8> = FixedList::from_slice(&[3, 7, 42]);
//! let at = list.bsearch(&5);
//! list.insert(at, 5);
//! assert_eq!(list.as_slice(), &[3, 5, 7, 42]);
//! ```
//!
//! ### Using FixedBitSet
//!
//! ```rust
//! use baz_collections::generic::fixed_bitset::FixedBitSet;
//!
//! let mut seen: FixedBitSet<2> = FixedBitSet::new();
//! seen.insert(3);
//! seen.insert(100);
//! assert_eq!(seen.rank(50), 1);
//! ```
//!
//! ### Using FixedMap
//!
//! ```rust
//! use baz_collections::generic::fixed_map::FixedMap;
//!
//! let mut counts: FixedMap<u8, u32, 64> = FixedMap::new();
//! for byte in b"abracadabra" {
//!     *counts.insert_modify(*byte, 0) += 1;
//! }
//! assert_eq!(counts.lookup(&b'a'), Some(&5));
//! ```
//!
//! [`FixedList<T, SIZE>`]: generic::fixed_list::FixedList
//! [`FixedBitSet<WORDS>`]: generic::fixed_bitset::FixedBitSet
//! [`FixedHeap<T, SIZE, C>`]: generic::fixed_heap::FixedHeap
//! [`Comparator`]: generic::fixed_heap::Comparator
//! [`FixedMap<K, V, SIZE, S>`]: generic::fixed_map::FixedMap
//! [`FxHasher`]: hash::FxHasher

pub mod generic;
pub mod hash;

pub use generic::fixed_bitset::FixedBitSet;
pub use generic::fixed_heap::{Comparator, FixedHeap, NaturalOrder};
pub use generic::fixed_list::FixedList;
pub use generic::fixed_map::FixedMap;
pub use hash::{FxBuildHasher, FxHasher};
