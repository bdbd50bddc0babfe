//! Counter-based push-button debouncer.
//!
//! Polled once per main-loop iteration. Every sample at the active level
//! moves a counter toward the threshold `H`; any inactive sample drops it
//! back to zero. The target event is posted on the single poll where the
//! counter reaches `H`, and not again until the button has been released.
//!
//! `H` is counted in loop iterations, so the shortest detectable press is
//! `H` times the loop period.

use hal::{GpioPin, Level, PinMode};
use qp_core::QEvent;
use qp_qep::QPost;

pub struct Debouncer<P, E> {
    pin: P,
    event: E,
    active: Level,
    threshold: u32,
    stable_count: u32,
    reported: bool,
}

impl<P: GpioPin, E: QEvent> Debouncer<P, E> {
    /// `threshold` below 1 is treated as 1
    pub fn new(pin: P, event: E, active: Level, threshold: u32) -> Self {
        Self {
            pin,
            event,
            active,
            threshold: threshold.max(1),
            stable_count: 0,
            reported: false,
        }
    }

    /// Configure the pin as an input biased to the released level and clear
    /// the filter.
    pub fn init(&mut self) {
        let mode = match self.active {
            Level::Low => PinMode::InputPullUp,
            Level::High => PinMode::InputPullDown,
        };
        if let Err(err) = self.pin.set_mode(mode) {
            log::warn!("button pin {}: set_mode failed: {}", self.pin.pin_number(), err);
        }
        self.stable_count = 0;
        self.reported = false;
    }

    /// Sample the pin once. Returns `true` if the event was posted.
    pub fn poll<T: QPost<E> + ?Sized>(&mut self, target: &mut T) -> bool {
        let active = match self.pin.read() {
            Ok(level) => level == self.active,
            Err(err) => {
                log::warn!("button pin {}: read failed: {}", self.pin.pin_number(), err);
                false
            }
        };

        if !active {
            self.stable_count = 0;
            self.reported = false;
            return false;
        }

        if self.stable_count < self.threshold {
            self.stable_count += 1;
        }
        if self.stable_count < self.threshold || self.reported {
            return false;
        }

        self.reported = true;
        log::debug!("button pin {}: press", self.pin.pin_number());
        target.post(self.event);
        true
    }

    /// Whether a press has been reported and the button is still held
    pub fn is_pressed(&self) -> bool {
        self.reported
    }

    pub fn stable_count(&self) -> u32 {
        self.stable_count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
