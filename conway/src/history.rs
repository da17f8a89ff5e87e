// history.rs - Recent board fingerprints for cycle detection

use std::collections::VecDeque;

/// Number of fingerprints kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded FIFO of board hashes.
#[derive(Clone, Debug)]
pub struct BoundedHistory {
    hashes: VecDeque<u32>,
    capacity: usize,
}

impl Default for BoundedHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl BoundedHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hashes: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, hash: u32) {
        self.hashes.push_back(hash);
        if self.hashes.len() > self.capacity {
            self.hashes.pop_front();
        }
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.hashes.contains(&hash)
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
