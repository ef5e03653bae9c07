//! Bounded position history for trajectory rendering.
//!
//! A ring buffer whose capacity follows the global trail-length setting.
//! The capacity is handed in on every push, so a changed setting converges
//! on the next push: shrinking evicts the oldest entries, growing lets the
//! buffer fill up further without inventing history.

use crate::vector::Vector2;

/// Most-recent-N history of a body's positions
#[derive(Debug, Clone, Default)]
pub struct Trail {
    /// Storage; grows by `push` until it holds `capacity` entries, then wraps
    slots: Vec<Vector2>,
    /// Index of the oldest entry once the buffer has wrapped (0 before that)
    head: usize,
    capacity: usize,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `position`, evicting from the front until `len <= capacity`
    pub fn push(&mut self, position: Vector2, capacity: usize) {
        if capacity != self.capacity {
            self.set_capacity(capacity);
        }
        if self.capacity == 0 {
            return;
        }

        if self.slots.len() < self.capacity {
            // Not wrapped yet: head is always 0 here
            self.slots.push(position);
        } else {
            self.slots[self.head] = position;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Resize immediately, keeping the newest `min(len, capacity)` entries
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity == self.capacity {
            return;
        }
        let keep = self.slots.len().min(capacity);
        let skip = self.slots.len() - keep;

        // Storage only grows with actual pushes, never to the capacity up front
        self.slots = self.iter().skip(skip).collect();
        self.head = 0;
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }

    /// Newest entry, if any
    pub fn last(&self) -> Option<Vector2> {
        if self.slots.is_empty() {
            return None;
        }
        let idx = if self.head == 0 {
            self.slots.len() - 1
        } else {
            self.head - 1
        };
        Some(self.slots[idx])
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.slots[self.head..]
            .iter()
            .chain(self.slots[..self.head].iter())
            .copied()
    }

    pub fn to_vec(&self) -> Vec<Vector2> {
        self.iter().collect()
    }
}
