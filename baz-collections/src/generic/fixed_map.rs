//! Fixed-capacity open-addressing hash map.
//!
//! [`FixedMap`] stores every entry directly in its slot arrays and resolves collisions
//! with linear probing. Removal uses backward-shift deletion, so there are no
//! tombstones: after every operation each occupied slot is reachable from its home
//! bucket through a run of occupied slots.

use core::hash::{BuildHasher, Hash};

use baz_sys::fault::{fault, FaultKind};
use bytemuck::Zeroable;
use thiserror::Error;

use crate::hash::FxBuildHasher;

/// Error type for the fallible [`FixedMap`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FixedMapError {
    /// Probing wrapped around the whole table without finding the key or a free slot.
    #[error("map is full")]
    Full,
}

/// A fixed-capacity hash map with `SIZE` slots.
///
/// Inserting a new key into a saturated table is a [`Fault`](baz_sys::Fault); use
/// [`try_insert`](Self::try_insert) where that is expected. Lookups and removals of
/// an absent key on a saturated table simply report the key as absent.
///
/// # Type Parameters
///
/// * `K`, `V` - Key and value types, both `Copy`.
/// * `SIZE` - Number of slots (compile-time constant, non-zero).
/// * `S` - Hasher builder; [`FxBuildHasher`] by default.
///
/// # Examples
///
/// ```rust
/// use baz_collections::generic::fixed_map::FixedMap;
///
/// let mut map: FixedMap<u64, u32, 16> = FixedMap::new();
/// assert!(!map.insert(7, 1));
/// *map.insert_modify(7, 0) += 1;
/// *map.insert_modify(8, 0) += 1;
///
/// assert_eq!(map.lookup(&7), Some(&2));
/// assert_eq!(map.remove(&8), Some((8, 1)));
/// assert_eq!(map.len(), 1);
/// ```
///
/// Large tables can be placed in zeroed memory instead of on the stack:
///
/// ```rust
/// use baz_collections::generic::fixed_map::FixedMap;
///
/// let map: &'static mut FixedMap<u64, u64, { 1 << 16 }> = baz_sys::alloc::zeroed();
/// map.insert(1, 2);
/// assert_eq!(map.lookup(&1), Some(&2));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedMap<K, V, const SIZE: usize, S = FxBuildHasher> {
    count: usize,
    occupied: [bool; SIZE],
    keys: [K; SIZE],
    values: [V; SIZE],
    hash_builder: S,
}

// SAFETY: every field is zeroable, and an all-zero map has no occupied slots.
unsafe impl<K: Zeroable, V: Zeroable, const SIZE: usize, S: Zeroable> Zeroable
    for FixedMap<K, V, SIZE, S>
{
}

impl<K, V, const SIZE: usize, S> Default for FixedMap<K, V, SIZE, S>
where
    K: Copy + Default + Hash + Eq,
    V: Copy + Default,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, const SIZE: usize> FixedMap<K, V, SIZE>
where
    K: Copy + Default + Hash + Eq,
    V: Copy + Default,
{
    /// Creates an empty map hashed with [`FxBuildHasher`].
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }
}

impl<K, V, const SIZE: usize, S> FixedMap<K, V, SIZE, S>
where
    K: Copy + Default + Hash + Eq,
    V: Copy + Default,
    S: BuildHasher,
{
    /// Creates an empty map hashed with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        const { assert!(SIZE > 0, "a FixedMap needs at least one slot") };

        Self {
            count: 0,
            occupied: [false; SIZE],
            keys: [K::default(); SIZE],
            values: [V::default(); SIZE],
            hash_builder,
        }
    }
}

impl<K, V, const SIZE: usize, S> FixedMap<K, V, SIZE, S>
where
    K: Copy + Hash + Eq,
    V: Copy,
    S: BuildHasher,
{
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        SIZE
    }

    #[inline]
    fn home(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) as usize) % SIZE
    }

    /// Slot holding `key`, or the first free slot on its probe sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FixedMapError::Full`] if the probe wraps around the whole table.
    pub fn try_entry_index(&self, key: &K) -> Result<usize, FixedMapError> {
        let start = self.home(key);
        let mut index = start;

        while self.occupied[index] && self.keys[index] != *key {
            index = (index + 1) % SIZE;
            if index == start {
                return Err(FixedMapError::Full);
            }
        }

        Ok(index)
    }

    /// [`try_entry_index`](Self::try_entry_index) that faults on a saturated table.
    #[track_caller]
    pub fn entry_index(&self, key: &K) -> usize {
        match self.try_entry_index(key) {
            Ok(index) => index,
            Err(FixedMapError::Full) => fault(FaultKind::TableFull { capacity: SIZE }, "entry_index"),
        }
    }

    /// Slot currently holding `key`, if any.
    fn find(&self, key: &K) -> Option<usize> {
        self.try_entry_index(key)
            .ok()
            .filter(|&index| self.occupied[index])
    }

    /// Inserts or overwrites `key`. Returns `true` if an existing entry was overwritten.
    ///
    /// Faults with [`FaultKind::TableFull`] if `key` is new and no slot is free.
    #[track_caller]
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.try_insert(key, value) {
            Ok(overwritten) => overwritten,
            Err(FixedMapError::Full) => fault(FaultKind::TableFull { capacity: SIZE }, "insert"),
        }
    }

    /// Inserts or overwrites `key`, or reports that the table is full.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<bool, FixedMapError> {
        let index = self.try_entry_index(&key)?;
        let overwritten = self.occupied[index];

        self.occupied[index] = true;
        self.keys[index] = key;
        self.values[index] = value;

        if !overwritten {
            self.count += 1;
        }

        Ok(overwritten)
    }

    /// Get-or-insert: the value for `key`, initialised to `default` if `key` is new.
    ///
    /// Faults with [`FaultKind::TableFull`] if `key` is new and no slot is free.
    #[track_caller]
    pub fn insert_modify(&mut self, key: K, default: V) -> &mut V {
        let index = match self.try_entry_index(&key) {
            Ok(index) => index,
            Err(FixedMapError::Full) => fault(FaultKind::TableFull { capacity: SIZE }, "insert_modify"),
        };

        if !self.occupied[index] {
            self.occupied[index] = true;
            self.keys[index] = key;
            self.values[index] = default;
            self.count += 1;
        }

        &mut self.values[index]
    }

    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.find(key).map(|index| &self.values[index])
    }

    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find(key).map(|index| &mut self.values[index])
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its entry.
    ///
    /// The gap is closed by walking the cluster after it: an entry at `j` whose home
    /// bucket does not lie cyclically in `(i, j]` would become unreachable, so it
    /// moves back into the gap at `i` and the gap moves to `j`.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let mut gap = self.find(key)?;
        let removed = (self.keys[gap], self.values[gap]);

        self.occupied[gap] = false;
        self.count -= 1;

        let mut next = gap;
        loop {
            next = (next + 1) % SIZE;
            if !self.occupied[next] {
                break;
            }

            let home = self.home(&self.keys[next]);
            let reachable = if gap <= next {
                gap < home && home <= next
            } else {
                gap < home || home <= next
            };
            if reachable {
                continue;
            }

            self.keys[gap] = self.keys[next];
            self.values[gap] = self.values[next];
            self.occupied[gap] = true;
            self.occupied[next] = false;
            gap = next;
        }

        Some(removed)
    }

    /// Iterates over the entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.occupied
            .iter()
            .zip(self.keys.iter().zip(&self.values))
            .filter_map(|(&occupied, entry)| occupied.then_some(entry))
    }

    pub fn clear(&mut self) {
        self.occupied.fill(false);
        self.count = 0;
    }
}
