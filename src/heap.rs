//! A binary min-heap that knows where each of its entries is stored.

use crate::Cost;
use hashbrown::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An element of an [`IndexedMinHeap`].
///
/// Entries are identified by their `key`: the heap never stores two entries with the same
/// key, which is what makes [`decrease-key`](IndexedMinHeap::insert_or_decrease) possible.
pub trait HeapEntry {
    /// The identity of an entry
    type Key: Copy + Eq + Hash + Debug;
    /// Returns the identity of this entry
    fn key(&self) -> Self::Key;
    /// Returns the value the heap is ordered by. Smaller values are extracted first.
    fn priority(&self) -> Cost;
}

/// What [`insert_or_decrease`](IndexedMinHeap::insert_or_decrease) did with an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapUpdate {
    /// the key was not present and the entry was added
    Inserted,
    /// the key was present with a higher priority and was replaced
    Decreased,
    /// the key was present with a lower or equal priority and the entry was discarded
    Unchanged,
}

/// A priority queue supporting insert, decrease-key and extract-min in `O(log n)`
/// and membership tests in `O(1)`.
///
/// ## Examples
/// ```
/// # use stepwise_pathfinding::heap::{HeapEntry, HeapUpdate, IndexedMinHeap};
/// #[derive(Debug)]
/// struct Entry(char, f64);
/// impl HeapEntry for Entry {
///     type Key = char;
///     fn key(&self) -> char { self.0 }
///     fn priority(&self) -> f64 { self.1 }
/// }
///
/// let mut heap = IndexedMinHeap::new();
/// heap.insert_or_decrease(Entry('a', 5.0));
/// heap.insert_or_decrease(Entry('b', 3.0));
/// assert_eq!(heap.insert_or_decrease(Entry('a', 1.0)), HeapUpdate::Decreased);
/// assert_eq!(heap.insert_or_decrease(Entry('b', 4.0)), HeapUpdate::Unchanged);
///
/// assert_eq!(heap.extract_min().map(|e| e.0), Some('a'));
/// assert_eq!(heap.extract_min().map(|e| e.0), Some('b'));
/// assert!(heap.extract_min().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<T: HeapEntry> {
    items: Vec<T>,
    positions: HashMap<T::Key, usize>,
}

impl<T: HeapEntry> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        IndexedMinHeap::new()
    }
}

impl<T: HeapEntry> IndexedMinHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with space for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of entries in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` if an entry with `key` is in the heap
    pub fn contains(&self, key: &T::Key) -> bool {
        self.positions.contains_key(key)
    }

    /// The stored entry for `key`, if any
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.positions.get(key).map(|&i| &self.items[i])
    }

    /// The entry that [`extract_min`](IndexedMinHeap::extract_min) would return next
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterates over all entries in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    /// Adds `entry`, or replaces the stored entry with the same key if `entry` has a strictly
    /// lower priority.
    ///
    /// The priority of a key can only ever decrease. Submitting an entry with a higher or equal
    /// priority than the stored one leaves the heap untouched.
    pub fn insert_or_decrease(&mut self, entry: T) -> HeapUpdate {
        match self.positions.get(&entry.key()) {
            Some(&index) => {
                if entry.priority() < self.items[index].priority() {
                    self.items[index] = entry;
                    self.sift_up(index);
                    HeapUpdate::Decreased
                } else {
                    HeapUpdate::Unchanged
                }
            }
            None => {
                let index = self.items.len();
                self.positions.insert(entry.key(), index);
                self.items.push(entry);
                self.sift_up(index);
                HeapUpdate::Inserted
            }
        }
    }

    /// Removes and returns the entry with the lowest priority
    pub fn extract_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        self.positions.remove(&min.key());

        if let Some(root) = self.items.first() {
            self.positions.insert(root.key(), 0);
            self.sift_down(0);
        }
        Some(min)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.positions.insert(self.items[a].key(), a);
        self.positions.insert(self.items[b].key(), b);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].priority() < self.items[parent].priority() {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && self.items[right].priority() < self.items[left].priority()
            {
                right
            } else {
                left
            };

            if self.items[child].priority() < self.items[index].priority() {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        let ordered = (1..self.items.len())
            .all(|i| self.items[(i - 1) / 2].priority() <= self.items[i].priority());
        let indexed = self.positions.len() == self.items.len()
            && self
                .items
                .iter()
                .enumerate()
                .all(|(i, item)| self.positions.get(&item.key()) == Some(&i));
        ordered && indexed
    }
}
