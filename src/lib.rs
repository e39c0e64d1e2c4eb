//! circq - growable circular queue and the structures built on it
//!
//! - **RingBuffer**: wraparound storage that doubles when full and halves at
//!   quarter utilization
//! - **QueueStack**: LIFO stack using only enqueue/dequeue on a ring buffer
//! - **Window**: longest run made uniform with a bounded number of replacements
//!
//! # Quick Start
//!
//! ```
//! use circq::{digit_swap, QueueStack, RingBuffer};
//!
//! let mut queue = RingBuffer::new();
//! queue.enqueue(10);
//! queue.enqueue(20);
//! assert_eq!(queue.dequeue(), Some(10));
//!
//! let mut stack = QueueStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//!
//! assert_eq!(digit_swap("5656", 2), 4);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod ring_buffer;
pub mod stack;
pub mod window;

pub use errors::{CircqError, Result};
pub use ring_buffer::{RingBuffer, MIN_CAPACITY};
pub use stack::QueueStack;
pub use window::{digit_swap, longest_replaceable_window, FrequencyTable};
