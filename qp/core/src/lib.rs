#![no_std]
#![forbid(unsafe_code)]

//! # QP Core
//!
//! Core types, traits, and abstractions shared by the event processor, the
//! time services and the cooperative kernel. Everything here is `Copy`,
//! allocation-free and usable from a bare-metal main loop.

use core::fmt;

pub mod events;
pub mod states;
pub mod time;

pub use events::*;
pub use states::*;
pub use time::*;

/// QP framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the QP framework
pub type QResult<T> = Result<T, QError>;

/// Error types for QP framework operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QError {
    /// Every time event slot is armed
    TimerPoolExhausted,
    /// Configuration value out of range
    InvalidParameter,
}

impl fmt::Display for QError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QError::TimerPoolExhausted => write!(f, "No free time event slot"),
            QError::InvalidParameter => write!(f, "Invalid parameter"),
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for QError {}

#[cfg(feature = "defmt")]
impl defmt::Format for QError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            QError::TimerPoolExhausted => defmt::write!(fmt, "TimerPoolExhausted"),
            QError::InvalidParameter => defmt::write!(fmt, "InvalidParameter"),
        }
    }
}
