//! Light controller
//!
//! | State      | Event         | Action                                   | Next       |
//! |------------|---------------|------------------------------------------|------------|
//! | Off        | Reset         | reconfigure pin, drive it to "off"       | Off        |
//! | Off        | ButtonPressed | light on, arm Timeout after on-duration  | On         |
//! | On         | Timeout       | light off                                | Off        |
//! | On         | TripleTap     |                                          | Relocation |
//! | Relocation | TripleTap     | light off                                | Off        |
//!
//! Anything else is ignored. The electrical level that means "on" is part of
//! the configuration; the controller never writes a literal level.

use hal::{GpioPin, Level, PinMode};
use qp_core::{QDuration, QStateReturn, QTick};
use qp_qep::{QHsm, QStateMachine};

use crate::signals::{AppTimers, MachineId, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Off,
    On,
    Relocation,
}

/// Collaborators for one light controller dispatch
pub struct LightContext<'a> {
    pub timers: &'a mut AppTimers,
    pub now: QTick,
}

pub struct LightController<P> {
    hsm: QHsm<LightState, Signal>,
    pin: P,
    on_level: Level,
    on_duration: QDuration,
}

impl<P: GpioPin> LightController<P> {
    /// Starts in `Off` without touching the pin; post `Reset` to drive it
    pub fn new(pin: P, on_level: Level, on_duration: QDuration) -> Self {
        Self {
            hsm: QHsm::new(LightState::Off),
            pin,
            on_level,
            on_duration,
        }
    }

    /// Level written to the pin while the light is on
    pub fn on_level(&self) -> Level {
        self.on_level
    }

    /// On-time armed by each press from `Off`
    pub fn on_duration(&self) -> QDuration {
        self.on_duration
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// The pin may come out of reset in any state; cycle it through input
    /// before making it an output at the off level.
    fn reset_pin(&mut self) {
        for mode in [PinMode::Input, PinMode::Output] {
            if let Err(err) = self.pin.set_mode(mode) {
                log::warn!("light pin {}: set_mode failed: {}", self.pin.pin_number(), err);
            }
        }
        self.drive(false);
    }

    fn drive(&mut self, on: bool) {
        let level = if on { self.on_level } else { self.on_level.inverted() };
        if let Err(err) = self.pin.write(level) {
            log::warn!("light pin {}: write failed: {}", self.pin.pin_number(), err);
        }
    }
}

impl<P: GpioPin> QStateMachine for LightController<P> {
    type State = LightState;
    type Event = Signal;
    type Context<'a> = LightContext<'a>;

    fn hsm(&self) -> &QHsm<LightState, Signal> {
        &self.hsm
    }

    fn hsm_mut(&mut self) -> &mut QHsm<LightState, Signal> {
        &mut self.hsm
    }

    fn handle(
        &mut self,
        state: LightState,
        event: Signal,
        ctx: &mut LightContext<'_>,
    ) -> QStateReturn<LightState> {
        match (state, event) {
            (LightState::Off, Signal::Reset) => {
                self.reset_pin();
                QStateReturn::Handled
            }
            (LightState::Off, Signal::ButtonPressed) => {
                // No timer, no light: it would never switch off
                match ctx
                    .timers
                    .schedule(MachineId::Light, Signal::Timeout, self.on_duration, ctx.now)
                {
                    Ok(()) => {
                        self.drive(true);
                        QStateReturn::Transition(LightState::On)
                    }
                    Err(err) => {
                        log::error!("light stays off: {}", err);
                        QStateReturn::Handled
                    }
                }
            }
            (LightState::On, Signal::Timeout) => {
                self.drive(false);
                QStateReturn::Transition(LightState::Off)
            }
            (LightState::On, Signal::TripleTap) => QStateReturn::Transition(LightState::Relocation),
            (LightState::Relocation, Signal::TripleTap) => {
                self.drive(false);
                QStateReturn::Transition(LightState::Off)
            }
            _ => QStateReturn::Ignored,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LightState::Off => defmt::write!(fmt, "Off"),
            LightState::On => defmt::write!(fmt, "On"),
            LightState::Relocation => defmt::write!(fmt, "Relocation"),
        }
    }
}
