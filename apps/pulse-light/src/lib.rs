#![no_std]
#![forbid(unsafe_code)]

//! # Pulse Light
//!
//! A push-button light for a cooperative, single-threaded target:
//! - a single press turns the light on for a fixed time
//! - three presses while it is on enter "relocation" mode, where the light
//!   holds until three more presses turn it off
//!
//! Built from three components run round-robin by the QV kernel: a
//! counter-based [`Debouncer`], the [`PulseCounter`] state machine and the
//! [`LightController`] state machine. Delayed events go through one
//! [`AppTimers`] pool.

pub mod app;
pub mod button;
pub mod config;
pub mod light;
pub mod pulses;
pub mod signals;

pub use app::App;
pub use button::Debouncer;
pub use config::*;
pub use light::{LightContext, LightController, LightState};
pub use pulses::{PulseContext, PulseCounter, PulseState, TAPS_PER_GESTURE};
pub use signals::*;
