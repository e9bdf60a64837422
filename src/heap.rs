//! The indexed min-priority Queue driving the search.

use crate::Cost;
use hashbrown::HashMap;
use std::hash::Hash;

/// A binary min-heap of `(value, priority)` pairs with an auxiliary index
/// for O(1) membership lookup.
///
/// The index map always mirrors the heap array: it holds every contained
/// value's current slot and is updated on every swap. This is what makes
/// [`decrease_key`](IndexedMinHeap::decrease_key) possible in O(log n)
/// without scanning the heap, so an entry's priority can be lowered in
/// place instead of pushing a duplicate.
///
/// Values act as unique keys: pushing a value that is already contained is
/// a contract violation and panics, as do `peek_min`/`pop_min` on an empty
/// queue and `decrease_key` on an absent value.
///
/// ## Examples
/// ```
/// use maze_pathfinding::IndexedMinHeap;
///
/// let mut queue = IndexedMinHeap::new();
/// queue.push("a", 4);
/// queue.push("b", 2);
/// queue.push("c", 3);
///
/// queue.decrease_key("c", 1);
///
/// assert_eq!(queue.pop_min(), ("c", 1));
/// assert_eq!(queue.pop_min(), ("b", 2));
/// assert_eq!(queue.pop_min(), ("a", 4));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<T> {
    heap: Vec<(T, Cost)>,
    index: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> IndexedMinHeap<T> {
    /// Creates an empty queue.
    pub fn new() -> IndexedMinHeap<T> {
        IndexedMinHeap {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty queue with space for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> IndexedMinHeap<T> {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// The number of entries currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `true` if `value` is currently in the queue.
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// The current priority of `value`, if it is in the queue.
    pub fn priority(&self, value: &T) -> Option<Cost> {
        self.index.get(value).map(|&slot| self.heap[slot].1)
    }

    /// Inserts `value` with the given priority.
    ///
    /// ## Panics
    /// Panics if `value` is already in the queue. Use
    /// [`decrease_key`](IndexedMinHeap::decrease_key) to lower the priority
    /// of a contained value.
    #[track_caller]
    pub fn push(&mut self, value: T, priority: Cost) {
        if self.index.contains_key(&value) {
            panic!("pushed a value that is already in the queue");
        }
        let slot = self.heap.len();
        self.heap.push((value, priority));
        self.index.insert(value, slot);
        self.sift_up(slot);
    }

    /// The value with the smallest priority, without removing it.
    ///
    /// ## Panics
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn peek_min(&self) -> &T {
        match self.heap.first() {
            Some((value, _)) => value,
            None => panic!("peek_min on an empty queue"),
        }
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// ## Panics
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn pop_min(&mut self) -> (T, Cost) {
        if self.heap.is_empty() {
            panic!("pop_min on an empty queue");
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let (value, priority) = self.heap.pop().expect("queue is non-empty");
        self.index.remove(&value);
        if let Some(&(moved, _)) = self.heap.first() {
            self.index.insert(moved, 0);
            self.sift_down(0);
        }
        (value, priority)
    }

    /// Lowers the priority of `value` to `new_priority`.
    ///
    /// Does nothing unless `new_priority` is strictly smaller than the
    /// current priority; priorities never increase.
    ///
    /// ## Panics
    /// Panics if `value` is not in the queue.
    #[track_caller]
    pub fn decrease_key(&mut self, value: T, new_priority: Cost) {
        let slot = match self.index.get(&value) {
            Some(&slot) => slot,
            None => panic!("decrease_key on a value that is not in the queue"),
        };
        if new_priority >= self.heap[slot].1 {
            return;
        }
        self.heap[slot].1 = new_priority;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].1 <= self.heap[slot].1 {
                break;
            }
            self.swap_entries(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_entries(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].0, a);
        self.index.insert(self.heap[b].0, b);
    }
}

impl<T: Copy + Eq + Hash> Default for IndexedMinHeap<T> {
    fn default() -> IndexedMinHeap<T> {
        IndexedMinHeap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oorandom::Rand32;

    fn assert_valid(queue: &IndexedMinHeap<u32>) {
        for slot in 1..queue.heap.len() {
            let parent = (slot - 1) / 2;
            assert!(
                queue.heap[parent].1 <= queue.heap[slot].1,
                "heap property violated between slots {} and {}",
                parent,
                slot
            );
        }
        assert_eq!(queue.index.len(), queue.heap.len());
        for (slot, &(value, _)) in queue.heap.iter().enumerate() {
            assert_eq!(queue.index[&value], slot);
        }
    }

    #[test]
    fn pops_in_priority_order() {
        let mut queue = IndexedMinHeap::new();
        for (value, priority) in [(0, 5), (1, 3), (2, 8), (3, 1), (4, 4)] {
            queue.push(value, priority);
            assert_valid(&queue);
        }
        assert_eq!(*queue.peek_min(), 3);

        let mut drained = Vec::new();
        while !queue.is_empty() {
            drained.push(queue.pop_min());
            assert_valid(&queue);
        }
        assert_eq!(drained, vec![(3, 1), (1, 3), (4, 4), (0, 5), (2, 8)]);
    }

    #[test]
    fn decrease_key_reorders() {
        let mut queue = IndexedMinHeap::new();
        queue.push(0, 10);
        queue.push(1, 20);
        queue.push(2, 30);

        queue.decrease_key(2, 5);
        assert_valid(&queue);
        assert_eq!(queue.priority(&2), Some(5));
        assert_eq!(queue.pop_min(), (2, 5));
    }

    #[test]
    fn decrease_key_never_increases() {
        let mut queue = IndexedMinHeap::new();
        queue.push(0, 10);

        queue.decrease_key(0, 10);
        assert_eq!(queue.priority(&0), Some(10));
        queue.decrease_key(0, 15);
        assert_eq!(queue.priority(&0), Some(10));
    }

    #[test]
    #[should_panic(expected = "empty queue")]
    fn pop_min_on_empty_panics() {
        IndexedMinHeap::<u32>::new().pop_min();
    }

    #[test]
    #[should_panic(expected = "empty queue")]
    fn peek_min_on_empty_panics() {
        let queue = IndexedMinHeap::<u32>::new();
        queue.peek_min();
    }

    #[test]
    #[should_panic(expected = "not in the queue")]
    fn decrease_key_on_absent_panics() {
        let mut queue = IndexedMinHeap::new();
        queue.push(0, 10);
        queue.decrease_key(1, 5);
    }

    #[test]
    #[should_panic(expected = "already in the queue")]
    fn push_of_contained_value_panics() {
        let mut queue = IndexedMinHeap::new();
        queue.push(0, 10);
        queue.push(0, 5);
    }

    #[test]
    fn random_operations_keep_the_invariant() {
        let mut rng = Rand32::new(4);
        let mut queue = IndexedMinHeap::new();

        for value in 0..200u32 {
            queue.push(value, rng.rand_range(0..1000) as Cost);
            assert_valid(&queue);
        }
        for _ in 0..300 {
            let value = rng.rand_range(0..200);
            let new_priority = rng.rand_range(0..1000) as Cost;
            if queue.contains(&value) {
                queue.decrease_key(value, new_priority);
                assert_valid(&queue);
            }
        }

        let mut last = 0;
        while !queue.is_empty() {
            let (_, priority) = queue.pop_min();
            assert_valid(&queue);
            assert!(priority >= last);
            last = priority;
        }
    }
}
