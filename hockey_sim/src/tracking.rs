use std::sync::Arc;

use parking_lot::Mutex;

/// Single-slot, last-write-wins hand-off between a tracker thread and the game loop
#[derive(Debug)]
pub struct LatestCell<T> {
    pub(crate) slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for LatestCell<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for LatestCell<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> LatestCell<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was there
    pub fn publish(&self, value: T) {
        *self.slot.lock() = Some(value);
    }

    /// Remove and return the current value
    pub fn take(&self) -> Option<T> {
        self.slot.lock().take()
    }
}

impl<T: Clone> LatestCell<T> {
    /// Most recent value without blocking; `None` if empty or the writer holds the lock
    pub fn latest(&self) -> Option<T> {
        self.slot.try_lock().and_then(|guard| (*guard).clone())
    }
}
