//! Common error types for HAL operations

use core::fmt;

/// HAL operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Pin handle or parameter outside what the board provides
    InvalidParameter,
    /// Operation not valid in the pin's current mode (e.g. writing an input)
    NotSupported,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::NotSupported => write!(f, "operation not supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

#[cfg(feature = "defmt")]
impl defmt::Format for HalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidParameter => defmt::write!(fmt, "InvalidParameter"),
            Self::NotSupported => defmt::write!(fmt, "NotSupported"),
        }
    }
}

/// Result type for HAL operations
pub type HalResult<T> = Result<T, HalError>;
