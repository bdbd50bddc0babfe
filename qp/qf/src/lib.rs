#![no_std]
#![forbid(unsafe_code)]

//! # QP Framework (QF)
//!
//! Time services for cooperative state machines. A [`QTimeEvtQueue`] holds a
//! fixed number of armed time events; each one delivers a single event to a
//! target machine once the millisecond tick passes its deadline.

pub mod time;

pub use qp_core::*;
pub use time::*;

#[cfg(test)]
mod tests;

/// Default number of time event slots: one per machine that uses timeouts
pub const DEFAULT_TIME_EVENTS: usize = 2;
