//! The insertion-sorted queue itself.
use crate::Item;
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};
use tracing::trace;

/// A priority queue that is kept sorted at all times.
///
/// Items are ordered by [`Item::less`], smallest first. Every [`Queue::push`] places the new item
/// at its sorted position with a single pass of insertion sort, walking backwards from the end of
/// the queue. This makes the queue a good fit for small collections, or for items that mostly
/// arrive in order; it is not a heap, and pushing a new minimum costs `O(n)`.
///
/// Among items that compare equal, insertion order is preserved: the queue is stable.
///
/// ## Usage
///
/// ```rust
/// # use insertion_queue::Queue;
/// let mut q = Queue::new();
/// q.push(1);
/// q.push(2);
/// q.push(3);
///
/// assert_eq!(q[0], 1);
/// assert_eq!(q.pop_front(), Some(1));
/// assert_eq!(q.pop_back(), Some(3));
/// assert_eq!(q.len(), 1);
/// ```
///
/// ## Mutating items in place
///
/// Items can be modified through [`IndexMut`] or [`Queue::get_mut`]. The queue cannot observe
/// such changes, so it may no longer be sorted afterwards. Call [`Queue::fix`] before relying on
/// the order again:
///
/// ```rust
/// # use insertion_queue::Queue;
/// let mut q = Queue::new();
/// q.push(1);
/// q.push(2);
/// q.push(3);
///
/// q[0] = 4;
/// q.fix();
///
/// assert_eq!(q[0], 2);
/// assert_eq!(q.into_vec(), vec![2, 3, 4]);
/// ```
///
/// ## Max-priority queues
///
/// The queue always removes the smallest item from the front. For a max-priority queue, invert
/// the ordering, e.g. by pushing [`std::cmp::Reverse`] items or with `#[item(reverse)]` when
/// deriving [`Item`].
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Items in sorted order, smallest first.
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    ///
    /// Use `queue[index]` when an out-of-range index is a bug.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable access to the item at `index`, if any.
    ///
    /// Changing the item may break the queue's order; see [`Queue::fix`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// The smallest item, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// The largest item, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Remove and return the smallest item.
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Remove and return the largest item.
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// Consume the queue, returning its items in order.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T: Item> Queue<T> {
    /// Add an item, keeping the queue sorted.
    ///
    /// The item is appended and then swapped towards the front for as long as it is strictly
    /// less than its predecessor. The walk stops at the first predecessor that is not greater,
    /// so an item lands right after any items it compares equal to.
    ///
    /// Takes `O(1)` time when the item belongs at the end, and `O(n)` when it is a new minimum.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);

        let last = self.items.len() - 1;
        let position = Self::settle(&mut self.items, last);

        trace!(position, swaps = last - position, "pushed item");
    }

    /// Restore the sorted order after items were changed in place.
    ///
    /// Performs a full insertion sort using the same tie-break as [`Queue::push`], so items that
    /// compare equal keep their current relative order. Takes `O(n)` time on a queue that is
    /// already sorted or off by a single item, and `O(n^2)` in the worst case.
    ///
    /// Calling this on a sorted queue leaves it unchanged.
    pub fn fix(&mut self) {
        let mut swaps = 0;
        for i in 1..self.items.len() {
            swaps += i - Self::settle(&mut self.items, i);
        }

        trace!(len = self.items.len(), swaps, "fixed queue");
    }

    /// Move the item at `index` towards the front until its predecessor is not greater than it,
    /// assuming everything before `index` is already sorted.
    ///
    /// Returns the item's final position.
    fn settle(items: &mut VecDeque<T>, mut index: usize) -> usize {
        while index > 0 && items[index].less(&items[index - 1]) {
            items.swap(index, index - 1);
            index -= 1;
        }
        index
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Queue<T> {
    type Output = T;

    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Queue<T> {
    /// Panics if `index` is out of bounds.
    ///
    /// The queue may need a [`Queue::fix`] after the item is changed.
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
