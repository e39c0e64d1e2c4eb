//! Growable Circular Queue
//!
//! A vector-backed ring with explicit head/tail indices. Capacity doubles
//! when the buffer fills and halves once utilization drops to a quarter,
//! never going below [`MIN_CAPACITY`].
//!
//! Features:
//! - Amortized O(1) enqueue at the tail and dequeue at the head
//! - Order-preserving compaction on every resize (head moves to slot 0)
//! - Strict slot-wise equality plus a live-elements-only [`RingBuffer::logical_eq`]

use std::fmt;

use tracing::debug;

use crate::errors::{CircqError, Result};

/// Default initial capacity, and the floor below which shrinking never goes.
pub const MIN_CAPACITY: usize = 4;

/// Circular queue that grows and shrinks with its contents.
///
/// Equality is strict: two buffers are equal only when capacity, size,
/// head, tail and every raw slot match, so the same logical contents at a
/// different head offset compare unequal. Use [`RingBuffer::logical_eq`] to
/// compare live elements only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer<T> {
    capacity: usize,
    size: usize,
    storage: Vec<Option<T>>,
    head: usize, // oldest element
    tail: usize, // next free slot
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer with [`MIN_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            size: 0,
            storage: empty_slots(MIN_CAPACITY),
            head: 0,
            tail: 0,
        }
    }

    /// Create an empty buffer with `capacity` slots.
    ///
    /// Fails with [`CircqError::InvalidArgument`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CircqError::InvalidArgument(
                "ring buffer capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            size: 0,
            storage: empty_slots(capacity),
            head: 0,
            tail: 0,
        })
    }

    /// Build a buffer from explicit raw state.
    ///
    /// The capacity is `slots.len()`. Live slots (`head..head + size`, wrapping)
    /// must all be `Some`, and `tail` must sit right after the last live slot.
    /// Slots outside the live range may hold stale values; they take part in
    /// strict equality but are never returned by the queue operations.
    pub fn from_raw_parts(
        slots: Vec<Option<T>>,
        head: usize,
        tail: usize,
        size: usize,
    ) -> Result<Self> {
        let capacity = slots.len();
        if capacity == 0 {
            return Err(CircqError::InvalidArgument(
                "ring buffer needs at least one slot".to_string(),
            ));
        }
        if head >= capacity || tail >= capacity {
            return Err(CircqError::InvalidArgument(format!(
                "head {} / tail {} out of range for capacity {}",
                head, tail, capacity
            )));
        }
        if size > capacity {
            return Err(CircqError::InvalidArgument(format!(
                "size {} exceeds capacity {}",
                size, capacity
            )));
        }
        if (head + size) % capacity != tail {
            return Err(CircqError::InvalidArgument(format!(
                "tail {} does not follow {} live elements from head {}",
                tail, size, head
            )));
        }
        if let Some(offset) = (0..size).find(|i| slots[(head + i) % capacity].is_none()) {
            return Err(CircqError::InvalidArgument(format!(
                "live slot {} is empty",
                (head + offset) % capacity
            )));
        }

        Ok(Self {
            capacity,
            size,
            storage: slots,
            head,
            tail,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot index of the oldest element.
    pub fn head_index(&self) -> usize {
        self.head
    }

    /// Slot index the next enqueue writes to.
    pub fn tail_index(&self) -> usize {
        self.tail
    }

    /// Raw slot contents, including logically empty slots.
    pub fn slots(&self) -> &[Option<T>] {
        &self.storage
    }

    /// Oldest element, or `None` when empty.
    pub fn head_element(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.head].as_ref()
    }

    /// Most recently enqueued element, or `None` when empty.
    pub fn tail_element(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let last = (self.tail + self.capacity - 1) % self.capacity;
        self.storage[last].as_ref()
    }

    /// Append `value` at the tail.
    ///
    /// Growth is checked both before and after the write, so a buffer never
    /// stays full once an enqueue returns.
    pub fn enqueue(&mut self, value: T) {
        self.grow();
        self.storage[self.tail] = Some(value);
        self.size += 1;
        self.tail = (self.tail + 1) % self.capacity;
        self.grow();
        self.check_invariants();
    }

    /// Remove and return the oldest element, then shrink if utilization
    /// dropped to a quarter or less.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.storage[self.head].take();
        self.head = (self.head + 1) % self.capacity;
        self.size -= 1;
        self.shrink();
        self.check_invariants();
        value
    }

    /// Double the capacity if the buffer is full; no-op otherwise.
    pub fn grow(&mut self) {
        if self.size != self.capacity {
            return;
        }
        let new_capacity = self.capacity * 2;
        debug!(
            from = self.capacity,
            to = new_capacity,
            size = self.size,
            "ring buffer grow"
        );
        self.relocate(new_capacity);
    }

    /// Halve the capacity when the result stays at or above
    /// [`MIN_CAPACITY`] and at most a quarter of the slots are live.
    pub fn shrink(&mut self) {
        let new_capacity = self.capacity / 2;
        if new_capacity < MIN_CAPACITY || self.size * 4 > self.capacity {
            return;
        }
        debug!(
            from = self.capacity,
            to = new_capacity,
            size = self.size,
            "ring buffer shrink"
        );
        self.relocate(new_capacity);
    }

    /// Move live elements into a fresh `new_capacity` slot array, oldest at 0.
    fn relocate(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity;
        let mut old = std::mem::replace(&mut self.storage, empty_slots(new_capacity));
        for i in 0..self.size {
            self.storage[i] = old[(self.head + i) % old_capacity].take();
        }
        self.capacity = new_capacity;
        self.head = 0;
        self.tail = self.size;
    }

    fn check_invariants(&self) {
        debug_assert!(self.size <= self.capacity, "size exceeds capacity");
        debug_assert_eq!(self.storage.len(), self.capacity);
        debug_assert!(self.head < self.capacity && self.tail < self.capacity);
    }

    /// Live elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: self,
            pos: self.head,
            remaining: self.size,
        }
    }

    /// Compare live elements only, ignoring capacity, offsets and stale slots.
    pub fn logical_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty queue");
        }
        write!(f, "Queue: ")?;
        write_joined(f, self.iter())
    }
}

/// Write items separated by `", "`.
pub(crate) fn write_joined<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

pub struct Iter<'a, T> {
    buf: &'a RingBuffer<T>,
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.buf.storage[self.pos].as_ref();
        self.pos = (self.pos + 1) % self.buf.capacity;
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
