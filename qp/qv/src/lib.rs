#![no_std]
#![forbid(unsafe_code)]

//! # QV Cooperative Kernel
//!
//! The vanilla (cooperative) kernel: one thread, no preemption, a fixed
//! round-robin over every component of the application. Each iteration
//! samples the tick counter once and hands it to the application, which
//! runs its components in a fixed order. Nothing in an iteration may block.

use qp_core::{QTick, QTickSource};

/// Application driven by the cooperative kernel
pub trait QCooperative {
    /// Run one iteration of the round-robin at tick `now`.
    ///
    /// Must return quickly: a long step stalls every component.
    fn step(&mut self, now: QTick);
}

/// QV kernel - cooperative scheduler
pub struct QV<'c, C: QTickSource + ?Sized> {
    /// System tick source
    clock: &'c C,
    /// Completed iterations (wrapping)
    iterations: u32,
}

impl<'c, C: QTickSource + ?Sized> QV<'c, C> {
    /// Create a kernel reading time from `clock`
    pub fn new(clock: &'c C) -> Self {
        Self {
            clock,
            iterations: 0,
        }
    }

    /// Execute one scheduling cycle
    pub fn run_once<A: QCooperative + ?Sized>(&mut self, app: &mut A) {
        let now = self.clock.now();
        app.step(now);
        self.iterations = self.iterations.wrapping_add(1);
    }

    /// Run the cooperative scheduler forever
    pub fn run<A: QCooperative + ?Sized>(&mut self, app: &mut A) -> ! {
        log::info!("QV running, tick {}", self.clock.now());
        loop {
            self.run_once(app);
        }
    }

    /// Number of completed iterations
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

#[cfg(feature = "defmt")]
impl<'c, C: QTickSource + ?Sized> defmt::Format for QV<'c, C> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "QV{{iterations: {}}}", self.iterations);
    }
}
