//! Event types and signal definitions for the QP framework

use core::fmt;

/// Type-safe event signal identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QSignal(pub u16);

impl QSignal {
    /// Reserved signal that forces a machine back to its reset configuration
    pub const RESET: QSignal = QSignal(0);

    /// First user-defined signal
    pub const USER: QSignal = QSignal(1);

    /// Create a new signal from a raw value
    pub const fn new(signal: u16) -> Self {
        QSignal(signal)
    }

    /// Get the raw signal value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for QSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QSignal({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QSignal {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "QSignal({})", self.0);
    }
}

/// Base trait for all events in the QP framework.
///
/// Events are small closed tags copied by value into a machine's mailbox, so
/// implementors are expected to be plain `Copy` enums.
pub trait QEvent: Copy + fmt::Debug {
    /// Get the signal identifier for this event
    fn signal(&self) -> QSignal;

    /// Check if this is the reserved reset event
    fn is_reset(&self) -> bool {
        self.signal() == QSignal::RESET
    }
}

/// Event that carries nothing but its signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QStaticEvent {
    pub signal: QSignal,
}

impl QStaticEvent {
    /// Create a new static event
    pub const fn new(signal: QSignal) -> Self {
        Self { signal }
    }
}

impl QEvent for QStaticEvent {
    fn signal(&self) -> QSignal {
        self.signal
    }
}

/// Macro to define a closed event enum and its signal mapping
#[macro_export]
macro_rules! define_events {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $signal:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $crate::QEvent for $name {
            fn signal(&self) -> $crate::QSignal {
                match self {
                    $(
                        $name::$variant => $crate::QSignal($signal),
                    )*
                }
            }
        }
    };
}
