//! GPIO (General Purpose Input/Output) abstraction

use crate::error::HalResult;

/// GPIO pin modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Input (floating)
    Input,
    /// Input with pull-up resistor
    InputPullUp,
    /// Input with pull-down resistor
    InputPullDown,
    /// Output (push-pull)
    Output,
    /// Output (open-drain)
    OutputOpenDrain,
}

impl PinMode {
    pub const fn is_output(self) -> bool {
        matches!(self, PinMode::Output | PinMode::OutputOpenDrain)
    }
}

/// GPIO pin levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Low level (0V)
    Low,
    /// High level (VCC)
    High,
}

impl Level {
    /// The opposite level
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        if value {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "Low"),
            Level::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinMode::Input => defmt::write!(fmt, "Input"),
            PinMode::InputPullUp => defmt::write!(fmt, "InputPullUp"),
            PinMode::InputPullDown => defmt::write!(fmt, "InputPullDown"),
            PinMode::Output => defmt::write!(fmt, "Output"),
            PinMode::OutputOpenDrain => defmt::write!(fmt, "OutputOpenDrain"),
        }
    }
}

/// GPIO pin trait (object-safe)
///
/// A board port hands out one implementor per physical pin. Operations on a
/// handle the board does not know about fail with
/// [`HalError::InvalidParameter`](crate::HalError::InvalidParameter) and
/// leave the hardware untouched.
pub trait GpioPin {
    /// Configure pin mode
    fn set_mode(&mut self, mode: PinMode) -> HalResult<()>;

    /// Read current level
    fn read(&self) -> HalResult<Level>;

    /// Write level (for output pins)
    fn write(&mut self, level: Level) -> HalResult<()>;

    /// Toggle output
    fn toggle(&mut self) -> HalResult<()> {
        let current = self.read()?;
        self.write(current.inverted())
    }

    /// Get pin number
    fn pin_number(&self) -> u32;
}
