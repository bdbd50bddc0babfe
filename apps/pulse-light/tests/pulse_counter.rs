//! Tap counting and forwarding

use pulse_light::{
    AppTimers, MachineId, PulseContext, PulseCounter, PulseState, Signal, DEFAULT_TAP_WINDOW,
};
use qp_core::{QStateReturn, QTick};
use qp_qep::{QPost, QStateMachine};

#[derive(Default)]
struct Recorder {
    events: Vec<Signal>,
}

impl QPost<Signal> for Recorder {
    fn post(&mut self, event: Signal) -> Option<Signal> {
        self.events.push(event);
        None
    }
}

struct Rig {
    counter: PulseCounter,
    light: Recorder,
    timers: AppTimers,
}

impl Rig {
    fn new(tap_window: Option<qp_core::QDuration>) -> Self {
        let mut rig = Self {
            counter: PulseCounter::new(tap_window),
            light: Recorder::default(),
            timers: AppTimers::new(),
        };
        rig.send(Signal::Reset, 0);
        rig
    }

    fn send(&mut self, event: Signal, now: u32) -> Option<QStateReturn<PulseState>> {
        self.counter.post(event);
        self.counter.process(&mut PulseContext {
            target: &mut self.light,
            timers: &mut self.timers,
            now: QTick::new(now),
        })
    }

    fn tap(&mut self, now: u32) -> Option<QStateReturn<PulseState>> {
        self.send(Signal::ButtonPressed, now)
    }
}

#[test]
fn test_first_tap_is_forwarded() {
    let mut rig = Rig::new(None);
    assert_eq!(rig.counter.state(), PulseState::Waiting);

    let ret = rig.tap(10);
    assert_eq!(ret, Some(QStateReturn::Transition(PulseState::Counting)));
    assert_eq!(rig.light.events, vec![Signal::ButtonPressed]);
    assert_eq!(rig.counter.taps(), 1);
}

#[test]
fn test_third_tap_posts_triple_tap() {
    let mut rig = Rig::new(None);
    rig.tap(10);
    assert_eq!(rig.tap(20), Some(QStateReturn::Handled));
    assert_eq!(rig.counter.taps(), 2);
    assert_eq!(rig.tap(30), Some(QStateReturn::Transition(PulseState::Waiting)));

    assert_eq!(rig.light.events, vec![Signal::ButtonPressed, Signal::TripleTap]);
    assert_eq!(rig.counter.state(), PulseState::Waiting);
    assert_eq!(rig.counter.taps(), 0);
}

#[test]
fn test_six_taps_make_two_gestures() {
    let mut rig = Rig::new(None);
    for i in 0..6 {
        rig.tap(i * 100);
    }
    assert_eq!(
        rig.light.events,
        vec![
            Signal::ButtonPressed,
            Signal::TripleTap,
            Signal::ButtonPressed,
            Signal::TripleTap,
        ]
    );
}

#[test]
fn test_empty_mailbox_does_nothing() {
    let mut rig = Rig::new(None);
    let ret = rig.counter.process(&mut PulseContext {
        target: &mut rig.light,
        timers: &mut rig.timers,
        now: QTick::ZERO,
    });
    assert_eq!(ret, None);
    assert!(rig.light.events.is_empty());
}

#[test]
fn test_unrelated_events_are_ignored() {
    let mut rig = Rig::new(None);
    assert_eq!(rig.send(Signal::Timeout, 0), Some(QStateReturn::Ignored));
    rig.tap(0);
    assert_eq!(rig.send(Signal::TripleTap, 0), Some(QStateReturn::Ignored));
    assert_eq!(rig.counter.state(), PulseState::Counting);
}

#[test]
fn test_reset_drops_count() {
    let mut rig = Rig::new(None);
    rig.tap(0);
    rig.tap(1);
    rig.send(Signal::Reset, 2);
    assert_eq!(rig.counter.state(), PulseState::Waiting);

    // A fresh count starts over, so the next tap is forwarded again
    rig.tap(3);
    assert_eq!(rig.light.events, vec![Signal::ButtonPressed, Signal::ButtonPressed]);
}

#[test]
fn test_no_window_never_arms_timer() {
    let mut rig = Rig::new(None);
    rig.tap(0);
    assert_eq!(rig.timers.pending(), 0);
}

#[test]
fn test_window_is_armed_and_cleared() {
    let mut rig = Rig::new(Some(DEFAULT_TAP_WINDOW));
    rig.tap(0);
    assert!(rig.timers.is_armed(MachineId::Pulses, Signal::TapWindowElapsed));

    rig.tap(100);
    rig.tap(200);
    assert!(!rig.timers.is_armed(MachineId::Pulses, Signal::TapWindowElapsed));
    assert_eq!(rig.light.events.last(), Some(&Signal::TripleTap));
}

#[test]
fn test_window_expiry_abandons_count() {
    let mut rig = Rig::new(Some(DEFAULT_TAP_WINDOW));
    rig.tap(0);
    rig.tap(100);

    let expiry = DEFAULT_TAP_WINDOW.ticks();
    let mut fired = Vec::new();
    rig.timers.tick(QTick::new(expiry - 1), |t, e| fired.push((t, e)));
    assert!(fired.is_empty());
    rig.timers.tick(QTick::new(expiry), |t, e| fired.push((t, e)));
    assert_eq!(fired, vec![(MachineId::Pulses, Signal::TapWindowElapsed)]);

    rig.send(Signal::TapWindowElapsed, expiry);
    assert_eq!(rig.counter.state(), PulseState::Waiting);

    // The next tap counts as a first tap again
    rig.tap(expiry + 10);
    assert_eq!(rig.light.events, vec![Signal::ButtonPressed, Signal::ButtonPressed]);
}

#[test]
fn test_stale_window_is_ignored_while_waiting() {
    let mut rig = Rig::new(Some(DEFAULT_TAP_WINDOW));
    assert_eq!(rig.send(Signal::TapWindowElapsed, 0), Some(QStateReturn::Ignored));
}

#[test]
fn test_every_unlisted_pair_is_ignored() {
    let unlisted = [
        (PulseState::Waiting, Signal::Timeout),
        (PulseState::Waiting, Signal::TripleTap),
        (PulseState::Waiting, Signal::TapWindowElapsed),
        (PulseState::Counting, Signal::Timeout),
        (PulseState::Counting, Signal::TripleTap),
    ];

    for (state, event) in unlisted {
        let mut rig = Rig::new(Some(DEFAULT_TAP_WINDOW));
        if state == PulseState::Counting {
            rig.tap(0);
        }
        assert_eq!(rig.counter.state(), state);
        let taps = rig.counter.taps();
        let forwarded = rig.light.events.len();
        let armed = rig.timers.pending();

        assert_eq!(rig.send(event, 10), Some(QStateReturn::Ignored), "{event:?} in {state:?}");
        assert_eq!(rig.counter.state(), state);
        assert_eq!(rig.counter.taps(), taps);
        assert_eq!(rig.light.events.len(), forwarded);
        assert_eq!(rig.timers.pending(), armed);
    }
}

#[test]
fn test_tap_window_is_kept_as_configured() {
    assert_eq!(PulseCounter::new(None).tap_window(), None);
    assert_eq!(
        PulseCounter::new(Some(DEFAULT_TAP_WINDOW)).tap_window(),
        Some(DEFAULT_TAP_WINDOW)
    );
}
