//! Single-slot event mailbox

use qp_core::QEvent;

/// Holding area for the next event a machine will process.
///
/// Capacity is exactly one event. Posting while an event is still pending
/// replaces it (last write wins) and hands the displaced event back to the
/// caller. Callers must drain the machine at least once between posts; the
/// cooperative loop guarantees this by processing every machine each
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QMailbox<E> {
    slot: Option<E>,
}

impl<E: QEvent> QMailbox<E> {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Store `event`, returning any unconsumed event it displaced
    pub fn post(&mut self, event: E) -> Option<E> {
        let displaced = self.slot.replace(event);
        if let Some(lost) = displaced {
            log::warn!("mailbox overwrite: {:?} discarded by {:?}", lost, event);
        }
        displaced
    }

    /// Remove and return the pending event
    pub fn take(&mut self) -> Option<E> {
        self.slot.take()
    }

    /// Peek at the pending event without consuming it
    pub fn peek(&self) -> Option<&E> {
        self.slot.as_ref()
    }

    /// Check if an event is waiting
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Drop any pending event
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl<E: QEvent> Default for QMailbox<E> {
    fn default() -> Self {
        Self::new()
    }
}
