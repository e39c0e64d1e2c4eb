//! Bounded replacement window
//!
//! Finds the longest contiguous run of a sequence that can be made uniform
//! by replacing at most `replacements` symbols. The current window lives in a
//! [`RingBuffer`] and symbol counts in a [`FrequencyTable`]; the window grows
//! by one symbol per step and, when it exceeds the budget, drops exactly one
//! symbol from the front, so its length never decreases.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::ring_buffer::RingBuffer;

/// Symbol counts where unseen symbols read as zero.
///
/// Entries that fall back to zero are kept rather than pruned; a zero count
/// can never exceed a live one, so [`FrequencyTable::max_count`] is unaffected.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, usize>,
}

impl<K: Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Count for `key`, zero if it was never seen.
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Decrement `key`, saturating at zero.
    pub fn decrement(&mut self, key: &K) {
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_sub(1);
        }
    }

    /// Largest count in the table, zero when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct symbols ever recorded, including zeroed ones.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the longest window that becomes uniform with at most
/// `replacements` substitutions.
pub fn longest_replaceable_window<I>(symbols: I, replacements: usize) -> usize
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut window = RingBuffer::new();
    let mut frequencies = FrequencyTable::new();
    let mut longest = 0;

    for symbol in symbols {
        frequencies.increment(symbol.clone());
        window.enqueue(symbol);

        let length = window.len();
        let dominant = frequencies.max_count();
        if length - dominant > replacements {
            if let Some(dropped) = window.dequeue() {
                frequencies.decrement(&dropped);
            }
            trace!(length, dominant, "window slid");
        }
        longest = longest.max(window.len());
    }

    longest
}

/// [`longest_replaceable_window`] over the characters of `digits`.
pub fn digit_swap(digits: &str, replacements: usize) -> usize {
    longest_replaceable_window(digits.chars(), replacements)
}
