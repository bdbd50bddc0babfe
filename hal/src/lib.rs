//! Hardware Abstraction Layer (HAL) for the push-button light
//!
//! The state machines only need three things from a board: configurable
//! digital pins, a way to read and write their level, and a free-running
//! millisecond counter advanced by a timer interrupt. Board ports implement
//! [`gpio::GpioPin`] and call [`timer::MillisCounter::on_tick`] from their
//! tick ISR.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gpio;
pub mod timer;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{HalError, HalResult};
pub use gpio::{GpioPin, Level, PinMode};
pub use timer::MillisCounter;
