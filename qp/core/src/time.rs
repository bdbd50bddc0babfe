//! Time management types and utilities
//!
//! The system time source is a free-running 32-bit millisecond counter that
//! wraps after ~49.7 days. All comparisons go through wrapping subtraction so
//! intervals shorter than 2^31 ms are ordered correctly across the wrap.

use core::fmt;

/// System tick counter (one tick per millisecond)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QTick(u32);

impl QTick {
    /// Zero tick
    pub const ZERO: Self = Self(0);

    /// Last tick before the counter wraps
    pub const MAX: Self = Self(u32::MAX);

    /// Create a new tick count
    pub const fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Get the raw tick value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Increment the tick counter, wrapping at `u32::MAX`
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Tick `duration` after this one, wrapping
    pub const fn wrapping_add(self, duration: QDuration) -> Self {
        Self(self.0.wrapping_add(duration.ticks()))
    }

    /// Calculate elapsed ticks since a previous tick
    pub const fn elapsed_since(self, previous: QTick) -> u32 {
        self.0.wrapping_sub(previous.0)
    }

    /// Check whether `deadline` has been reached (wraparound-safe)
    pub const fn has_reached(self, deadline: QTick) -> bool {
        (self.0.wrapping_sub(deadline.0) as i32) >= 0
    }
}

impl fmt::Display for QTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick:{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QTick {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "tick:{}", self.0);
    }
}

/// Duration in framework ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QDuration {
    ticks: u32,
}

impl QDuration {
    /// Zero duration
    pub const ZERO: Self = Self { ticks: 0 };

    /// Longest delay a wrapping deadline comparison can order (~24.8 days)
    pub const MAX_DELAY: Self = Self {
        ticks: i32::MAX as u32,
    };

    /// Create duration from ticks
    pub const fn from_ticks(ticks: u32) -> Self {
        Self { ticks }
    }

    /// Create duration from milliseconds (1ms tick period)
    pub const fn from_millis(millis: u32) -> Self {
        Self { ticks: millis }
    }

    /// Create duration from seconds (1ms tick period)
    pub const fn from_secs(secs: u32) -> Self {
        Self {
            ticks: secs.saturating_mul(1000),
        }
    }

    /// Get tick count
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Convert to milliseconds
    pub const fn as_millis(&self) -> u32 {
        self.ticks
    }

    /// Check if duration is zero
    pub const fn is_zero(&self) -> bool {
        self.ticks == 0
    }
}

impl fmt::Display for QDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.ticks)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QDuration {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}ms", self.ticks);
    }
}

/// Anything that can report the current system tick
pub trait QTickSource {
    fn now(&self) -> QTick;
}

/// Macro to create compile-time durations
#[macro_export]
macro_rules! duration {
    ($value:literal ms) => {
        $crate::QDuration::from_millis($value)
    };
    ($value:literal s) => {
        $crate::QDuration::from_secs($value)
    };
    ($value:literal ticks) => {
        $crate::QDuration::from_ticks($value)
    };
}
