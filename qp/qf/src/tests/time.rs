extern crate std;

use std::vec::Vec;

use crate::time::QTimeEvtQueue;
use qp_core::{define_events, QDuration, QError, QTick};

define_events! {
    enum Sig {
        Timeout = 1,
        Window = 2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Light,
    Counter,
}

fn fire_all<const N: usize>(
    queue: &mut QTimeEvtQueue<Target, Sig, N>,
    now: u32,
) -> Vec<(Target, Sig)> {
    let mut out = Vec::new();
    queue.tick(QTick::new(now), |target, event| out.push((target, event)));
    out
}

#[test]
fn time_event_fires_at_deadline() {
    let mut queue: QTimeEvtQueue<Target, Sig, 2> = QTimeEvtQueue::new();
    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(100), QTick::new(50))
        .unwrap();
    assert_eq!(queue.pending(), 1);

    assert!(fire_all(&mut queue, 149).is_empty());
    assert_eq!(fire_all(&mut queue, 150), [(Target::Light, Sig::Timeout)]);
    assert_eq!(queue.pending(), 0);

    // Slot freed: nothing fires again
    assert!(fire_all(&mut queue, 10_000).is_empty());
}

#[test]
fn zero_delay_fires_on_next_tick() {
    let mut queue: QTimeEvtQueue<Target, Sig, 1> = QTimeEvtQueue::new();
    queue
        .schedule(Target::Counter, Sig::Window, QDuration::ZERO, QTick::new(7))
        .unwrap();
    assert_eq!(fire_all(&mut queue, 7), [(Target::Counter, Sig::Window)]);
}

#[test]
fn exhaustion_is_reported() {
    let mut queue: QTimeEvtQueue<Target, Sig, 1> = QTimeEvtQueue::new();
    let now = QTick::ZERO;
    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(10), now)
        .unwrap();
    assert_eq!(
        queue.schedule(Target::Counter, Sig::Window, QDuration::from_millis(10), now),
        Err(QError::TimerPoolExhausted)
    );
    assert_eq!(queue.pending(), 1);
}

#[test]
fn rescheduling_same_pair_rearms_instead_of_duplicating() {
    let mut queue: QTimeEvtQueue<Target, Sig, 2> = QTimeEvtQueue::new();
    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(100), QTick::new(0))
        .unwrap();
    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(100), QTick::new(60))
        .unwrap();
    assert_eq!(queue.pending(), 1);

    // Old deadline no longer fires
    assert!(fire_all(&mut queue, 100).is_empty());
    assert_eq!(fire_all(&mut queue, 160), [(Target::Light, Sig::Timeout)]);
}

#[test]
fn rearm_succeeds_when_pool_is_full() {
    let mut queue: QTimeEvtQueue<Target, Sig, 2> = QTimeEvtQueue::new();
    let now = QTick::ZERO;
    queue.schedule(Target::Light, Sig::Timeout, QDuration::from_millis(5), now).unwrap();
    queue.schedule(Target::Counter, Sig::Window, QDuration::from_millis(5), now).unwrap();
    assert!(queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(50), now)
        .is_ok());
    assert_eq!(queue.pending(), queue.capacity());
}

#[test]
fn disarm_cancels_pending_event() {
    let mut queue: QTimeEvtQueue<Target, Sig, 2> = QTimeEvtQueue::default();
    queue
        .schedule(Target::Counter, Sig::Window, QDuration::from_millis(10), QTick::ZERO)
        .unwrap();
    assert!(queue.is_armed(Target::Counter, Sig::Window));
    assert!(queue.disarm(Target::Counter, Sig::Window));
    assert!(!queue.disarm(Target::Counter, Sig::Window));
    assert!(fire_all(&mut queue, 10).is_empty());
}

#[test]
fn same_event_for_different_targets_is_independent() {
    let mut queue: QTimeEvtQueue<Target, Sig, 2> = QTimeEvtQueue::new();
    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(10), QTick::ZERO)
        .unwrap();
    queue
        .schedule(Target::Counter, Sig::Timeout, QDuration::from_millis(20), QTick::ZERO)
        .unwrap();
    assert_eq!(fire_all(&mut queue, 10), [(Target::Light, Sig::Timeout)]);
    assert_eq!(fire_all(&mut queue, 20), [(Target::Counter, Sig::Timeout)]);
}

#[test]
fn handler_may_rearm_from_post_callback() {
    let mut queue: QTimeEvtQueue<Target, Sig, 1> = QTimeEvtQueue::new();
    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(1), QTick::ZERO)
        .unwrap();
    let mut seen = 0;
    let fired = queue.tick(QTick::new(1), |_, _| seen += 1);
    assert_eq!((fired, seen), (1, 1));
    // The slot was released before the callback ran
    assert!(queue
        .schedule(Target::Light, Sig::Timeout, QDuration::from_millis(1), QTick::new(1))
        .is_ok());
}

#[test]
fn delay_beyond_wrap_range_is_rejected() {
    let mut queue: QTimeEvtQueue<Target, Sig, 2> = QTimeEvtQueue::new();
    let too_long = QDuration::from_ticks(QDuration::MAX_DELAY.ticks() + 1);
    assert_eq!(
        queue.schedule(Target::Light, Sig::Timeout, too_long, QTick::ZERO),
        Err(QError::InvalidParameter)
    );
    assert_eq!(queue.pending(), 0);

    queue
        .schedule(Target::Light, Sig::Timeout, QDuration::MAX_DELAY, QTick::ZERO)
        .unwrap();
    assert!(fire_all(&mut queue, 1).is_empty());
    assert!(fire_all(&mut queue, i32::MAX as u32 - 1).is_empty());
    assert_eq!(fire_all(&mut queue, i32::MAX as u32), [(Target::Light, Sig::Timeout)]);
}
