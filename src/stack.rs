//! Stack built from queue operations
//!
//! [`QueueStack`] stores its elements in a [`RingBuffer`] and only ever calls
//! `enqueue`/`dequeue` on it. After each push the buffer is rotated so the
//! newest element sits at the head, which makes push O(n) and pop/top O(1).

use std::fmt;

use crate::ring_buffer::{write_joined, RingBuffer};

/// LIFO stack whose top is always the head of its backing queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStack<T> {
    backing: RingBuffer<T>,
    count: usize,
}

impl<T> QueueStack<T> {
    pub fn new() -> Self {
        Self {
            backing: RingBuffer::new(),
            count: 0,
        }
    }

    /// Push `value` and rotate the older elements behind it.
    pub fn push(&mut self, value: T) {
        self.backing.enqueue(value);
        self.count += 1;
        for _ in 1..self.count {
            if let Some(front) = self.backing.dequeue() {
                self.backing.enqueue(front);
            }
        }
        debug_assert_eq!(self.count, self.backing.len());
    }

    /// Remove and return the most recently pushed element.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.backing.dequeue();
        self.count -= 1;
        value
    }

    /// Most recently pushed element without removing it.
    pub fn top(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.backing.head_element()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The queue holding the elements, top first.
    pub fn backing(&self) -> &RingBuffer<T> {
        &self.backing
    }
}

impl<T> Default for QueueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for QueueStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "Empty stack");
        }
        write!(f, "Stack: ")?;
        write_joined(f, self.backing.iter().take(self.count))
    }
}
