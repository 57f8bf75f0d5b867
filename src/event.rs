//! One-shot events.
//!
//! A one-shot event is a value that should trigger an action once, such as
//! showing a message or navigating away. Observers read it with
//! [`OneShot::take`], which also acknowledges it, so observing the same
//! state again (after a view is rebuilt, say) finds nothing pending.

/// A pending-at-most-once event slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot<T> {
    pending: Option<T>,
    emitted: u64,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        return OneShot::new();
    }
}

impl<T> OneShot<T> {
    pub fn new() -> OneShot<T> {
        return OneShot {
            pending: None,
            emitted: 0,
        };
    }

    /// Raise the event. Replaces a value that was never acknowledged.
    pub fn emit(&mut self, value: T) {
        self.pending = Some(value);
        self.emitted += 1;
    }

    /// Look at the pending value without acknowledging it.
    pub fn peek(&self) -> Option<&T> {
        return self.pending.as_ref();
    }

    /// Observe and acknowledge the pending value.
    pub fn take(&mut self) -> Option<T> {
        return self.pending.take();
    }

    /// Clear the pending value, if any.
    pub fn acknowledge(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        return self.pending.is_some();
    }

    /// Total number of emissions so far, acknowledged or not.
    pub fn emitted(&self) -> u64 {
        return self.emitted;
    }
}
