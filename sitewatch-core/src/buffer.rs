//! Fixed-Capacity Ring Buffer for Sample Windows
//!
//! ## Overview
//!
//! The ETA estimator keeps only the most recent `window` speed samples. This
//! module provides the ring buffer behind that window: storage is allocated
//! once at construction and never grows, and a push into a full buffer
//! overwrites the oldest sample.
//!
//! ## Design Rationale
//!
//! ### Why not `VecDeque`?
//!
//! A `VecDeque` would need an explicit `pop_front` on every push once full,
//! and nothing stops a later change from letting it grow. Here the capacity
//! is part of the type's invariants:
//! - O(1) insertion (overwrites oldest when full)
//! - O(1) access to most recent sample
//! - O(n) iteration, oldest to newest
//! - One allocation, at construction
//!
//! ### Why not const generics?
//!
//! The window size is a runtime configuration value (it comes from the
//! host's config file), so the slots live in a boxed slice.
//!
//! ### Memory Layout
//!
//! ```text
//! RingBuffer with capacity 5 after 7 pushes (values 1..=7):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  6  │  7  │  3  │  4  │  5  │  ← slots
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑
//!                └── write_pos = 2 (also the oldest sample when full)
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use sitewatch_core::buffer::RingBuffer;
//!
//! let mut window = RingBuffer::with_capacity(2);
//! window.push(1.0);
//! window.push(2.0);
//! window.push(3.0);
//!
//! let kept: Vec<f32> = window.iter().copied().collect();
//! assert_eq!(kept, vec![2.0, 3.0]);
//! ```

use alloc::boxed::Box;
use alloc::vec;

/// Ring buffer of `f32` samples with a capacity fixed at construction
///
/// ## Internal Invariants
///
/// - `write_pos < capacity` (next write position is always valid)
/// - `len <= capacity`
/// - Iteration yields samples in insertion order
///
/// ## Thread Safety
///
/// Not synchronized. Wrap it in a mutex if shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct RingBuffer {
    /// Pre-allocated slots; only the first `len` logical entries are valid
    data: Box<[f32]>,

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid samples
    len: usize,
}

impl RingBuffer {
    /// Creates an empty buffer holding at most `capacity` samples
    ///
    /// A zero capacity is bumped to one; estimator configs reject zero
    /// before they get here.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity.max(1)].into_boxed_slice(),
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a sample, overwriting the oldest one when full
    pub fn push(&mut self, value: f32) {
        let capacity = self.capacity();
        self.data[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % capacity;

        if self.len < capacity {
            self.len += 1;
        }
    }

    /// Maximum number of samples retained
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Most recent sample
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.capacity();
        let idx = if self.write_pos == 0 { capacity - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> RingBufferIter<'_> {
        RingBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Drop all samples, keeping the allocation
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Gets a sample by its logical index (0 = oldest, len-1 = newest)
    ///
    /// ```text
    /// Physical slots:  [D, E, A, B, C]  (write_pos = 2, full)
    /// Logical view:    [A, B, C, D, E]
    /// logical[i] = physical[(write_pos + i) % capacity]
    /// ```
    pub fn get(&self, index: usize) -> Option<&f32> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.is_full() {
            (self.write_pos + index) % self.capacity()
        } else {
            index
        };

        self.data.get(actual_index)
    }
}

/// Iterator over ring buffer contents, oldest first
pub struct RingBufferIter<'a> {
    buffer: &'a RingBuffer,
    index: usize,
}

impl<'a> Iterator for RingBufferIter<'a> {
    type Item = &'a f32;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingBufferIter<'_> {}

impl<'a> IntoIterator for &'a RingBuffer {
    type Item = &'a f32;
    type IntoIter = RingBufferIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn empty_buffer() {
        let buffer = RingBuffer::with_capacity(5);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.last().is_none());
        assert_eq!(buffer.iter().count(), 0);
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = RingBuffer::with_capacity(5);

        buffer.push(25.0);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.last(), Some(25.0));
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = RingBuffer::with_capacity(3);

        for i in 0..5 {
            buffer.push(i as f32);
        }

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        // 0 and 1 were overwritten
        let values: Vec<f32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(buffer.last(), Some(4.0));
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut buffer = RingBuffer::with_capacity(0);
        buffer.push(1.0);
        buffer.push(2.0);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = RingBuffer::with_capacity(4);
        for i in 0..6 {
            buffer.push(i as f32);
        }
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 4);

        buffer.push(9.0);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![9.0]);
    }

    #[test]
    fn exact_size_iteration() {
        let mut buffer = RingBuffer::with_capacity(4);
        for i in 0..7 {
            buffer.push(i as f32);
        }
        let iter = buffer.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!((&buffer).into_iter().sum::<f32>(), 3.0 + 4.0 + 5.0 + 6.0);
    }
}
