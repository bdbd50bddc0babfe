//! Tap counter sitting between the button and the light.
//!
//! ```text
//! [*]      --> Waiting  : Reset
//! Waiting  --> Counting : ButtonPressed / post ButtonPressed; taps = 1
//! Counting --> Counting : ButtonPressed [taps + 1 < 3] / taps++
//! Counting --> Waiting  : ButtonPressed [taps + 1 = 3] / post TripleTap
//! Counting --> Waiting  : TapWindowElapsed (only with a tap window)
//! ```

use qp_core::{QDuration, QStateReturn, QTick};
use qp_qep::{QHsm, QPost, QStateMachine};

use crate::signals::{AppTimers, MachineId, Signal};

/// Taps that make up the gesture
pub const TAPS_PER_GESTURE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseState {
    Waiting,
    Counting,
}

/// Collaborators for one pulse counter dispatch
pub struct PulseContext<'a> {
    /// Machine that receives ButtonPressed and TripleTap
    pub target: &'a mut dyn QPost<Signal>,
    pub timers: &'a mut AppTimers,
    pub now: QTick,
}

pub struct PulseCounter {
    hsm: QHsm<PulseState, Signal>,
    tap_window: Option<QDuration>,
    taps: u32,
}

impl PulseCounter {
    pub fn new(tap_window: Option<QDuration>) -> Self {
        Self {
            hsm: QHsm::new(PulseState::Waiting),
            tap_window,
            taps: 0,
        }
    }

    /// Taps seen in the current count; zero while waiting
    pub fn taps(&self) -> u32 {
        match self.state() {
            PulseState::Counting => self.taps,
            PulseState::Waiting => 0,
        }
    }

    /// Counting window, if one was configured
    pub fn tap_window(&self) -> Option<QDuration> {
        self.tap_window
    }

    fn arm_window(&self, ctx: &mut PulseContext<'_>) {
        let Some(window) = self.tap_window else {
            return;
        };
        // Without the timer the count simply waits for the third tap
        if let Err(err) = ctx
            .timers
            .schedule(MachineId::Pulses, Signal::TapWindowElapsed, window, ctx.now)
        {
            log::warn!("tap window not armed: {}", err);
        }
    }

    fn disarm_window(&self, ctx: &mut PulseContext<'_>) {
        if self.tap_window.is_some() {
            ctx.timers.disarm(MachineId::Pulses, Signal::TapWindowElapsed);
        }
    }
}

impl QStateMachine for PulseCounter {
    type State = PulseState;
    type Event = Signal;
    type Context<'a> = PulseContext<'a>;

    fn hsm(&self) -> &QHsm<PulseState, Signal> {
        &self.hsm
    }

    fn hsm_mut(&mut self) -> &mut QHsm<PulseState, Signal> {
        &mut self.hsm
    }

    fn handle(
        &mut self,
        state: PulseState,
        event: Signal,
        ctx: &mut PulseContext<'_>,
    ) -> QStateReturn<PulseState> {
        match (state, event) {
            (_, Signal::Reset) => {
                self.disarm_window(ctx);
                self.taps = 0;
                QStateReturn::Transition(PulseState::Waiting)
            }
            (PulseState::Waiting, Signal::ButtonPressed) => {
                ctx.target.post(Signal::ButtonPressed);
                self.taps = 1;
                self.arm_window(ctx);
                QStateReturn::Transition(PulseState::Counting)
            }
            (PulseState::Counting, Signal::ButtonPressed) if self.taps + 1 < TAPS_PER_GESTURE => {
                self.taps += 1;
                QStateReturn::Handled
            }
            (PulseState::Counting, Signal::ButtonPressed) => {
                self.taps = TAPS_PER_GESTURE;
                self.disarm_window(ctx);
                ctx.target.post(Signal::TripleTap);
                QStateReturn::Transition(PulseState::Waiting)
            }
            (PulseState::Counting, Signal::TapWindowElapsed) => {
                log::debug!("tap window elapsed after {} taps", self.taps);
                self.taps = 0;
                QStateReturn::Transition(PulseState::Waiting)
            }
            _ => QStateReturn::Ignored,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PulseState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PulseState::Waiting => defmt::write!(fmt, "Waiting"),
            PulseState::Counting => defmt::write!(fmt, "Counting"),
        }
    }
}
