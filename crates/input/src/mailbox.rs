//! Single-slot mailbox.
//!
//! Holds at most one pending value. Publishing overwrites whatever is pending;
//! taking never blocks. The producer and consumer each keep a clone.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
pub struct Mailbox<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Store `value`, returning the unread value it replaced.
    pub fn publish(&self, value: T) -> Option<T> {
        self.lock().replace(value)
    }

    /// Remove and return the pending value, if any.
    pub fn try_take(&self) -> Option<T> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        // A panicking peer cannot leave an Option half-written.
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Clone for Mailbox<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
