#![no_std]
#![forbid(unsafe_code)]

//! # QP Event Processor (QEP)
//!
//! Flat state machine engine for cooperative, single-threaded systems.
//! Provides:
//! - `QHsm`: the active state plus a single-slot mailbox
//! - `QStateMachine`: the contract each concrete machine implements
//! - `QPost`: the only way one component hands an event to another
//!
//! A machine's state changes only inside its own `process`/`dispatch` call.
//! Other components never touch its fields; they post into its mailbox.

use core::fmt;

use qp_core::{QEvent, QStateReturn};

pub mod mailbox;

pub use mailbox::*;


/// State machine execution context embedded in every concrete machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QHsm<S, E> {
    /// Current active state
    state: S,
    /// Next event to process
    mailbox: QMailbox<E>,
}

impl<S, E> QHsm<S, E>
where
    S: Copy + PartialEq + fmt::Debug,
    E: QEvent,
{
    /// Create a state machine resting in `initial` with an empty mailbox
    pub const fn new(initial: S) -> Self {
        Self {
            state: initial,
            mailbox: QMailbox::new(),
        }
    }

    /// Re-initialize: set the active state and clear the mailbox.
    ///
    /// No RESET is delivered. Machines that need reset-time side effects
    /// post and process one explicitly afterwards.
    pub fn init(&mut self, initial: S) {
        self.state = initial;
        self.mailbox.clear();
    }

    /// Get the current state
    pub fn state(&self) -> S {
        self.state
    }

    /// Store an event for the next `process` call (last write wins)
    pub fn post(&mut self, event: E) -> Option<E> {
        self.mailbox.post(event)
    }

    /// Remove the pending event, if any
    pub fn take(&mut self) -> Option<E> {
        self.mailbox.take()
    }

    /// Check if an event is waiting
    pub fn is_pending(&self) -> bool {
        self.mailbox.is_pending()
    }

    /// Read-only view of the mailbox
    pub fn mailbox(&self) -> &QMailbox<E> {
        &self.mailbox
    }

    /// Apply a handler result to the active state
    fn apply(&mut self, ret: &QStateReturn<S>) {
        if let Some(&target) = ret.target() {
            log::trace!("transition {:?} -> {:?}", self.state, target);
            self.state = target;
        }
    }
}

/// Contract for a concrete state machine.
///
/// Implementors embed a [`QHsm`] and supply one `handle` function that
/// matches on `(state, event)`. The per-dispatch `Context` carries the
/// collaborators a handler may use (timers, the current tick, the machine it
/// forwards to); handlers must return quickly and never block.
pub trait QStateMachine {
    /// Closed set of states
    type State: Copy + PartialEq + fmt::Debug;
    /// Events this machine accepts
    type Event: QEvent;
    /// Collaborators borrowed for the duration of one dispatch
    type Context<'a>;

    /// Embedded execution context
    fn hsm(&self) -> &QHsm<Self::State, Self::Event>;

    /// Embedded execution context, mutably
    fn hsm_mut(&mut self) -> &mut QHsm<Self::State, Self::Event>;

    /// Handle `event` in `state`. Pure with respect to everything except
    /// `self` and `ctx`.
    fn handle(
        &mut self,
        state: Self::State,
        event: Self::Event,
        ctx: &mut Self::Context<'_>,
    ) -> QStateReturn<Self::State>;

    /// Get the current state
    fn state(&self) -> Self::State {
        self.hsm().state()
    }

    /// Handle `event` immediately, bypassing the mailbox
    fn dispatch(
        &mut self,
        event: Self::Event,
        ctx: &mut Self::Context<'_>,
    ) -> QStateReturn<Self::State> {
        let state = self.state();
        let ret = self.handle(state, event, ctx);
        if !ret.is_handled() {
            log::trace!("{:?} ignored in {:?}", event, state);
        }
        self.hsm_mut().apply(&ret);
        ret
    }

    /// Drain and handle the pending event.
    ///
    /// Returns `None` when the mailbox was empty, otherwise the result that
    /// was applied.
    fn process(&mut self, ctx: &mut Self::Context<'_>) -> Option<QStateReturn<Self::State>> {
        let event = self.hsm_mut().take()?;
        Some(self.dispatch(event, ctx))
    }
}

/// Something that accepts posted events
pub trait QPost<E> {
    /// Post `event`, returning any unconsumed event it displaced
    fn post(&mut self, event: E) -> Option<E>;
}

/// Every state machine accepts its own events into its mailbox
impl<M: QStateMachine> QPost<M::Event> for M {
    fn post(&mut self, event: M::Event) -> Option<M::Event> {
        self.hsm_mut().post(event)
    }
}

#[cfg(feature = "defmt")]
impl<S: defmt::Format, E> defmt::Format for QHsm<S, E> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "QHsm{{state: {}}}", self.state);
    }
}
