//! Bounded concurrent height cache with insertion-order (FIFO) eviction.
//!
//! Entries are evicted oldest-inserted-first, not least-recently-used: a hit
//! does not refresh an entry's position in the eviction queue. Lookups go
//! through a sharded map so concurrent chunk workers do not serialize on a
//! single lock; the insertion queue mutex is held only for O(1) deque
//! operations.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use dashmap::DashMap;
use glam::IVec2;

/// Bounded `(x, z)` → height map shared by all chunk-generation threads.
pub struct HeightCache {
    map: DashMap<IVec2, i32>,
    order: Mutex<VecDeque<IVec2>>,
    capacity: usize,
}

impl HeightCache {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: DashMap::new(),
            order: Mutex::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    /// Returns the cached height for `position`, if resident.
    pub fn get(&self, position: IVec2) -> Option<i32> {
        self.map.get(&position).map(|entry| *entry)
    }

    /// Inserts `height` for `position`, evicting the earliest-inserted
    /// entries if the capacity is exceeded.
    ///
    /// If two threads race to insert the same position, the first insert
    /// wins the queue slot; both compute the same deterministic height, so
    /// the resident value is identical either way.
    pub fn insert(&self, position: IVec2, height: i32) {
        if self.map.insert(position, height).is_some() {
            // Already queued by an earlier insert; keep its original age.
            return;
        }

        let mut order = self
            .order
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        order.push_back(position);
        while order.len() > self.capacity {
            if let Some(oldest) = order.pop_front() {
                self.map.remove(&oldest);
            }
        }
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
