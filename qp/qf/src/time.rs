//! Time event services
//!
//! Software timers that post an event into a target machine's mailbox after a
//! delay. Deadlines are absolute ticks compared with wrapping arithmetic, so a
//! timer armed just before the 32-bit counter wraps still fires once, at the
//! right moment, after it wraps.

use core::fmt;

use qp_core::{QDuration, QError, QEvent, QResult, QTick};

/// One armed time event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QTimeEvt<T, E> {
    /// Machine the event is delivered to
    pub target: T,
    /// Event posted on expiry
    pub event: E,
    /// Absolute tick at which the event becomes due
    pub deadline: QTick,
}

impl<T, E> QTimeEvt<T, E> {
    /// Check if this time event is due at `now`
    pub fn is_due(&self, now: QTick) -> bool {
        now.has_reached(self.deadline)
    }
}

/// Fixed-capacity pool of one-shot time events.
///
/// `T` identifies the target machine (usually a small `Copy` enum owned by
/// the application) and `E` is the event delivered to it. A slot holds
/// `Some` while armed; firing or disarming frees it for reuse.
pub struct QTimeEvtQueue<T, E, const N: usize> {
    slots: [Option<QTimeEvt<T, E>>; N],
}

impl<T, E, const N: usize> QTimeEvtQueue<T, E, N>
where
    T: Copy + PartialEq + fmt::Debug,
    E: QEvent + PartialEq,
{
    /// Create a queue with every slot free
    pub const fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Arm `event` for `target`, due `delay` ticks after `now`.
    ///
    /// If the same `(target, event)` pair is already armed it is re-armed in
    /// place with the new deadline; it is never duplicated. Otherwise the first
    /// free slot is used. Fails with [`QError::TimerPoolExhausted`] when every
    /// slot is armed, and with [`QError::InvalidParameter`] when `delay` is
    /// longer than [`QDuration::MAX_DELAY`].
    pub fn schedule(&mut self, target: T, event: E, delay: QDuration, now: QTick) -> QResult<()> {
        if delay > QDuration::MAX_DELAY {
            log::error!("{:?} for {:?}: delay {} out of range", event, target, delay);
            return Err(QError::InvalidParameter);
        }

        let armed = QTimeEvt {
            target,
            event,
            deadline: now.wrapping_add(delay),
        };

        let slot = match self.position(target, event) {
            Some(index) => {
                log::debug!("re-arm {:?} for {:?} in {}", event, target, delay);
                &mut self.slots[index]
            }
            None => {
                let free = self.slots.iter_mut().find(|slot| slot.is_none());
                match free {
                    Some(slot) => {
                        log::debug!("arm {:?} for {:?} in {}", event, target, delay);
                        slot
                    }
                    None => {
                        log::error!("no free time event for {:?} -> {:?}", event, target);
                        return Err(QError::TimerPoolExhausted);
                    }
                }
            }
        };

        *slot = Some(armed);
        Ok(())
    }

    /// Cancel the pending `(target, event)`; returns whether one was armed
    pub fn disarm(&mut self, target: T, event: E) -> bool {
        match self.position(target, event) {
            Some(index) => {
                self.slots[index] = None;
                log::debug!("disarm {:?} for {:?}", event, target);
                true
            }
            None => false,
        }
    }

    /// Check if `(target, event)` is currently armed
    pub fn is_armed(&self, target: T, event: E) -> bool {
        self.position(target, event).is_some()
    }

    /// Deliver every time event that is due at `now`.
    ///
    /// Each due slot is freed before `post` is called with its target and
    /// event, so a handler may immediately re-arm it. Returns the number of
    /// events fired.
    pub fn tick<F>(&mut self, now: QTick, mut post: F) -> usize
    where
        F: FnMut(T, E),
    {
        let mut fired = 0;
        for slot in self.slots.iter_mut() {
            let due = match slot {
                Some(evt) if evt.is_due(now) => *evt,
                _ => continue,
            };
            *slot = None;
            log::debug!("fire {:?} -> {:?} at {}", due.event, due.target, now);
            post(due.target, due.event);
            fired += 1;
        }
        fired
    }

    /// Number of armed time events
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over armed time events
    pub fn iter(&self) -> impl Iterator<Item = &QTimeEvt<T, E>> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    fn position(&self, target: T, event: E) -> Option<usize> {
        self.slots.iter().position(|slot| {
            matches!(slot, Some(evt) if evt.target == target && evt.event == event)
        })
    }
}

impl<T, E, const N: usize> Default for QTimeEvtQueue<T, E, N>
where
    T: Copy + PartialEq + fmt::Debug,
    E: QEvent + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "defmt")]
impl<T: defmt::Format, E: defmt::Format> defmt::Format for QTimeEvt<T, E> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "QTimeEvt{{target: {}, event: {}, deadline: {}}}",
            self.target,
            self.event,
            self.deadline
        );
    }
}
