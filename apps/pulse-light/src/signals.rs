//! Events and machine identities shared by the application

use qp_core::define_events;
use qp_qf::{QTimeEvtQueue, DEFAULT_TIME_EVENTS};

define_events! {
    /// Every event exchanged between the button, the pulse counter and the
    /// light. Each machine handles a subset and ignores the rest.
    pub enum Signal {
        /// Force a machine back to its power-on configuration
        Reset = 0,
        /// Clean button press (from the debouncer) or first tap (from the counter)
        ButtonPressed = 1,
        /// Light on-time elapsed
        Timeout = 2,
        /// Three taps detected
        TripleTap = 3,
        /// Tap counting window elapsed
        TapWindowElapsed = 4,
    }
}

/// Targets of delayed dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineId {
    Pulses,
    Light,
}

/// Time event slots: one per machine that uses timeouts
pub const TIMER_CAPACITY: usize = DEFAULT_TIME_EVENTS;

/// The application's delayed dispatcher
pub type AppTimers = QTimeEvtQueue<MachineId, Signal, TIMER_CAPACITY>;

#[cfg(feature = "defmt")]
impl defmt::Format for Signal {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Signal::Reset => defmt::write!(fmt, "Reset"),
            Signal::ButtonPressed => defmt::write!(fmt, "ButtonPressed"),
            Signal::Timeout => defmt::write!(fmt, "Timeout"),
            Signal::TripleTap => defmt::write!(fmt, "TripleTap"),
            Signal::TapWindowElapsed => defmt::write!(fmt, "TapWindowElapsed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MachineId {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MachineId::Pulses => defmt::write!(fmt, "Pulses"),
            MachineId::Light => defmt::write!(fmt, "Light"),
        }
    }
}
