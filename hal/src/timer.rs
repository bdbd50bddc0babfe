//! Millisecond system tick

use core::cell::Cell;

use critical_section::Mutex;
use qp_core::{QTick, QTickSource};

/// Free-running 32-bit millisecond counter.
///
/// The board's 1 kHz timer interrupt calls [`on_tick`](Self::on_tick); the
/// main loop reads [`now`](Self::now). Both go through a critical section so
/// the increment is atomic even on cores without 32-bit atomic add. The
/// counter wraps after ~49.7 days.
pub struct MillisCounter {
    ticks: Mutex<Cell<u32>>,
}

impl MillisCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter starting at an arbitrary tick
    pub const fn starting_at(ticks: u32) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(ticks)),
        }
    }

    /// Advance by one millisecond. Call from the tick ISR only.
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }

    /// Current tick
    pub fn now(&self) -> QTick {
        critical_section::with(|cs| QTick::new(self.ticks.borrow(cs).get()))
    }
}

impl Default for MillisCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl QTickSource for MillisCounter {
    fn now(&self) -> QTick {
        MillisCounter::now(self)
    }
}
