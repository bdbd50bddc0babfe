//! The assembled application: button, pulse counter, light and their timers.

use hal::GpioPin;
use qp_core::{QResult, QTick};
use qp_qep::{QPost, QStateMachine};
use qp_qv::QCooperative;

use crate::button::Debouncer;
use crate::config::AppConfig;
use crate::light::{LightContext, LightController, LightState};
use crate::pulses::{PulseContext, PulseCounter, PulseState};
use crate::signals::{AppTimers, MachineId, Signal};

/// Push-button light, driven one iteration at a time by the QV kernel.
///
/// Every iteration runs, in this order:
/// 1. the light and the pulse counter, consuming whatever the time events
///    delivered at the end of the previous iteration (and anything the
///    counter forwards while doing so)
/// 2. the debouncer, which may post `ButtonPressed` to the pulse counter
/// 3. the pulse counter, which may post `ButtonPressed`/`TripleTap` to the light
/// 4. the light controller
/// 5. the time events, which may post `Timeout`/`TapWindowElapsed`
///
/// An event posted by an earlier stage is therefore consumed in the same
/// iteration, and an event fired by a timer is consumed at the start of the
/// next one. Every mailbox is drained before the next post into it, so the
/// single-slot mailboxes never drop an event.
pub struct App<B, L> {
    button: Debouncer<B, Signal>,
    pulses: PulseCounter,
    light: LightController<L>,
    timers: AppTimers,
}

impl<B: GpioPin, L: GpioPin> App<B, L> {
    /// Wire up the machines, configure both pins and bring every machine to
    /// its reset state at tick `now`.
    pub fn new(config: AppConfig, button_pin: B, light_pin: L, now: QTick) -> QResult<Self> {
        config.validate()?;

        let mut app = Self {
            button: Debouncer::new(
                button_pin,
                Signal::ButtonPressed,
                config.button_active_level,
                config.debounce_threshold,
            ),
            pulses: PulseCounter::new(config.tap_window),
            light: LightController::new(light_pin, config.light_on_level, config.on_duration),
            timers: AppTimers::new(),
        };
        app.button.init();
        app.reset(now);

        log::info!(
            "pulse light ready: on for {}, debounce {} polls",
            config.on_duration,
            config.debounce_threshold
        );
        Ok(app)
    }

    /// Deliver `Reset` to both machines and handle it right away.
    ///
    /// The light only reacts while off; the pulse counter always drops its
    /// count.
    pub fn reset(&mut self, now: QTick) {
        self.light.post(Signal::Reset);
        self.process_light(now);

        self.pulses.post(Signal::Reset);
        self.process_pulses(now);
    }

    /// Current state of the light controller
    pub fn light_state(&self) -> LightState {
        self.light.state()
    }

    /// Current state of the pulse counter
    pub fn pulse_state(&self) -> PulseState {
        self.pulses.state()
    }

    pub fn button(&self) -> &Debouncer<B, Signal> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Debouncer<B, Signal> {
        &mut self.button
    }

    pub fn pulses(&self) -> &PulseCounter {
        &self.pulses
    }

    pub fn light(&self) -> &LightController<L> {
        &self.light
    }

    pub fn timers(&self) -> &AppTimers {
        &self.timers
    }

    fn process_pulses(&mut self, now: QTick) {
        self.pulses.process(&mut PulseContext {
            target: &mut self.light,
            timers: &mut self.timers,
            now,
        });
    }

    fn process_light(&mut self, now: QTick) {
        self.light.process(&mut LightContext {
            timers: &mut self.timers,
            now,
        });
    }
}

impl<B: GpioPin, L: GpioPin> QCooperative for App<B, L> {
    fn step(&mut self, now: QTick) {
        // Timer deliveries first: a press this iteration must not overwrite them
        self.process_light(now);
        self.process_pulses(now);
        self.process_light(now);

        self.button.poll(&mut self.pulses);
        self.process_pulses(now);
        self.process_light(now);

        let pulses = &mut self.pulses;
        let light = &mut self.light;
        self.timers.tick(now, |target, event| {
            match target {
                MachineId::Pulses => pulses.post(event),
                MachineId::Light => light.post(event),
            };
        });
    }
}
