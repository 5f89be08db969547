//! Bounded max-heap
//!
//! Keeps the `capacity` largest elements offered to it. Internally a
//! min-heap (`BinaryHeap<Reverse<T>>`) so the smallest kept element is the
//! one compared against, and evicted by, each new offer.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Fixed-capacity collector of the largest elements
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap<T: Ord> {
    capacity: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> BoundedMaxHeap<T> {
    /// Create a heap keeping at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // capacity can be a caller-chosen "give me everything" value
            heap: BinaryHeap::with_capacity(capacity.min(1024)),
        }
    }

    /// Offer an element.
    ///
    /// Below capacity it is always kept. At capacity it replaces the current
    /// minimum only if strictly greater. Returns whether it was kept.
    pub fn add(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return true;
        }

        match self.heap.peek() {
            Some(Reverse(min)) if item > *min => {
                self.heap.pop();
                self.heap.push(Reverse(item));
                true
            }
            _ => false,
        }
    }

    /// Offer every element of an iterator
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        for item in items {
            self.add(item);
        }
        self
    }

    /// Smallest element currently kept
    pub fn min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drain into a vector ordered largest first
    pub fn into_sorted_vec(self) -> Vec<T> {
        // ascending in Reverse<T> is descending in T
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}
