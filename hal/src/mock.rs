//! Host-side stand-ins for board pins and the tick interrupt

use core::cell::Cell;

use heapless::Vec;
use qp_core::{QTick, QTickSource};

use crate::error::{HalError, HalResult};
use crate::gpio::{GpioPin, Level, PinMode};

/// Capacity of the write and mode logs
pub const MOCK_LOG_DEPTH: usize = 32;

/// Simulated pin.
///
/// Reads return the level set with [`set_input`](Self::set_input) while the
/// pin is an input, and the last written level while it is an output. Writes
/// are only accepted in an output mode. Every
/// mode change and write is recorded (oldest entries are kept once the log
/// is full).
#[derive(Debug, Clone)]
pub struct MockPin {
    number: u32,
    mode: PinMode,
    input: Level,
    output: Level,
    writes: Vec<Level, MOCK_LOG_DEPTH>,
    modes: Vec<PinMode, MOCK_LOG_DEPTH>,
    valid: bool,
}

impl MockPin {
    /// Floating input reading `Low`
    pub fn new(number: u32) -> Self {
        Self {
            number,
            mode: PinMode::Input,
            input: Level::Low,
            output: Level::Low,
            writes: Vec::new(),
            modes: Vec::new(),
            valid: true,
        }
    }

    /// A handle the board does not know: every operation fails
    pub fn invalid(number: u32) -> Self {
        Self {
            valid: false,
            ..Self::new(number)
        }
    }

    /// Drive the level seen on the pin from outside
    pub fn set_input(&mut self, level: Level) {
        self.input = level;
    }

    pub fn mode(&self) -> PinMode {
        self.mode
    }

    /// Last level written, regardless of mode
    pub fn output(&self) -> Level {
        self.output
    }

    pub fn writes(&self) -> &[Level] {
        &self.writes
    }

    pub fn modes(&self) -> &[PinMode] {
        &self.modes
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.modes.clear();
    }

    fn check(&self) -> HalResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(HalError::InvalidParameter)
        }
    }
}

impl GpioPin for MockPin {
    fn set_mode(&mut self, mode: PinMode) -> HalResult<()> {
        self.check()?;
        self.mode = mode;
        let _ = self.modes.push(mode);
        Ok(())
    }

    fn read(&self) -> HalResult<Level> {
        self.check()?;
        if self.mode.is_output() {
            Ok(self.output)
        } else {
            Ok(self.input)
        }
    }

    fn write(&mut self, level: Level) -> HalResult<()> {
        self.check()?;
        if !self.mode.is_output() {
            return Err(HalError::NotSupported);
        }
        self.output = level;
        let _ = self.writes.push(level);
        Ok(())
    }

    fn pin_number(&self) -> u32 {
        self.number
    }
}

/// Tick source advanced by hand
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Advance by `ms` milliseconds, wrapping
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn set(&self, tick: u32) {
        self.now.set(tick);
    }
}

impl QTickSource for ManualClock {
    fn now(&self) -> QTick {
        QTick::new(self.now.get())
    }
}
