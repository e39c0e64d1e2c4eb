//! Unit tests for the ring buffer
//!
//! Tests cover:
//! - Raw slot layout after enqueue
//! - Growth and shrink trigger points
//! - FIFO order across resizes and wraparound
//! - Strict versus logical equality

use circq::{RingBuffer, MIN_CAPACITY};

fn drain(buf: &mut RingBuffer<i32>) -> Vec<i32> {
    std::iter::from_fn(|| buf.dequeue()).collect()
}

// ============================================================================
// Layout
// ============================================================================

mod layout_tests {
    use super::*;

    #[test]
    fn test_three_enqueues_fill_front_slots() {
        let mut buf = RingBuffer::with_capacity(4).unwrap();
        buf.enqueue(10);
        buf.enqueue(20);
        buf.enqueue(30);

        assert_eq!(buf.slots(), &[Some(10), Some(20), Some(30), None]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.head_index(), 0);
        assert_eq!(buf.tail_index(), 3);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_wraparound_reuses_front_slots() {
        let mut buf = RingBuffer::new();
        buf.extend([1, 2, 3]);
        assert_eq!(buf.dequeue(), Some(1));
        assert_eq!(buf.dequeue(), Some(2));
        buf.enqueue(4);
        // tail wrapped to slot 0
        assert_eq!(buf.tail_index(), 0);
        buf.enqueue(5);
        assert_eq!(buf.slots(), &[Some(5), None, Some(3), Some(4)]);
        assert_eq!(buf.head_element(), Some(&3));
        assert_eq!(buf.tail_element(), Some(&5));
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_growth_after_wraparound_keeps_order() {
        let mut buf = RingBuffer::new();
        buf.extend([1, 2, 3]);
        buf.dequeue();
        buf.enqueue(4);
        assert_eq!(buf.capacity(), 4);
        // 2, 3, 4 live with head at 1; the next enqueue fills and grows
        buf.enqueue(5);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.head_index(), 0);
        assert_eq!(buf.tail_index(), 4);
        assert_eq!(
            buf.slots(),
            &[Some(2), Some(3), Some(4), Some(5), None, None, None, None]
        );
    }
}

// ============================================================================
// Resize policy
// ============================================================================

mod resize_tests {
    use super::*;

    #[test]
    fn test_seeded_sparse_buffer_shrinks_to_four() {
        let mut slots = vec![Some(0), Some(1)];
        slots.extend(std::iter::repeat_n(None, 6));
        let mut buf = RingBuffer::from_raw_parts(slots, 0, 2, 2).unwrap();
        assert_eq!(buf.capacity(), 8);

        buf.shrink();

        assert_eq!(buf.slots(), &[Some(0), Some(1), None, None]);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.head_index(), 0);
        assert_eq!(buf.tail_index(), 2);
    }

    #[test]
    fn test_dequeue_runs_shrink_check() {
        let mut slots = vec![Some(0), Some(1), Some(2)];
        slots.extend(std::iter::repeat_n(None, 5));
        let mut buf = RingBuffer::from_raw_parts(slots, 0, 3, 3).unwrap();

        assert_eq!(buf.dequeue(), Some(0));

        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.slots(), &[Some(1), Some(2), None, None]);
        assert_eq!(buf.head_index(), 0);
        assert_eq!(buf.tail_index(), 2);
    }

    #[test]
    fn test_capacity_doubles_each_time_full() {
        let mut buf = RingBuffer::new();
        let mut seen = vec![buf.capacity()];
        for i in 0..64 {
            buf.enqueue(i);
            if *seen.last().unwrap() != buf.capacity() {
                seen.push(buf.capacity());
            }
        }
        assert_eq!(seen, vec![4, 8, 16, 32, 64, 128]);
    }

    #[test]
    fn test_capacity_never_below_minimum() {
        let mut buf = RingBuffer::new();
        buf.extend(0..100);
        drain(&mut buf);
        assert_eq!(buf.capacity(), MIN_CAPACITY);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_alternating_ops_do_not_thrash() {
        let mut buf = RingBuffer::new();
        buf.extend(0..8);
        let capacity = buf.capacity();
        for i in 0..50 {
            buf.enqueue(100 + i);
            buf.dequeue();
            assert_eq!(buf.capacity(), capacity);
        }
    }

    #[test]
    fn test_small_initial_capacity_grows() {
        let mut buf = RingBuffer::with_capacity(1).unwrap();
        buf.enqueue(1);
        assert_eq!(buf.capacity(), 2);
        buf.enqueue(2);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(drain(&mut buf), vec![1, 2]);
    }
}

// ============================================================================
// Ordering
// ============================================================================

mod order_tests {
    use super::*;

    #[test]
    fn test_fifo_across_many_grows() {
        let mut buf = RingBuffer::new();
        buf.extend(0..1000);
        assert_eq!(buf.len(), 1000);
        assert_eq!(drain(&mut buf), (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_matches_dequeue_order() {
        let mut buf: RingBuffer<i32> = (0..13).collect();
        buf.dequeue();
        buf.dequeue();
        let listed: Vec<i32> = buf.iter().copied().collect();
        assert_eq!(listed, drain(&mut buf));
    }

    #[test]
    fn test_empty_dequeue_is_idempotent() {
        let mut buf: RingBuffer<i32> = RingBuffer::new();
        buf.enqueue(1);
        buf.dequeue();
        let snapshot = buf.clone();
        for _ in 0..3 {
            assert_eq!(buf.dequeue(), None);
        }
        assert_eq!(buf, snapshot);
    }
}

// ============================================================================
// Equality and display
// ============================================================================

mod equality_tests {
    use super::*;

    #[test]
    fn test_same_history_is_equal() {
        let mut a = RingBuffer::new();
        let mut b = RingBuffer::new();
        for buf in [&mut a, &mut b] {
            buf.extend([1, 2, 3]);
            buf.dequeue();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_head_offset_is_not_equal() {
        let mut a = RingBuffer::new();
        a.extend([0, 1, 2]);
        a.dequeue();
        let b: RingBuffer<i32> = [1, 2].into_iter().collect();
        assert_ne!(a, b);
        assert!(a.logical_eq(&b));
    }

    #[test]
    fn test_different_capacity_is_not_equal() {
        let a: RingBuffer<i32> = RingBuffer::with_capacity(4).unwrap();
        let b: RingBuffer<i32> = RingBuffer::with_capacity(8).unwrap();
        assert_ne!(a, b);
        assert!(a.logical_eq(&b));
    }

    #[test]
    fn test_display_lists_head_to_tail() {
        let mut buf = RingBuffer::new();
        buf.extend(["a", "b", "c"]);
        buf.dequeue();
        buf.enqueue("d");
        assert_eq!(buf.to_string(), "Queue: b, c, d");
    }
}
