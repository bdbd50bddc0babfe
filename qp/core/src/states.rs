//! State handler return codes

use core::fmt;

/// Outcome of handling one event in one state.
///
/// Exactly one of these is produced per dispatch. States are closed enums
/// owned by each concrete machine, so the target of a transition is the state
/// value itself rather than a handler pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QStateReturn<S> {
    /// Event is not meaningful in this state
    Ignored,
    /// Event was handled without changing state
    Handled,
    /// Event was handled and the machine moves to the given state
    Transition(S),
}

impl<S> QStateReturn<S> {
    /// Check if the event was acted upon
    pub fn is_handled(&self) -> bool {
        !matches!(self, QStateReturn::Ignored)
    }

    /// Check if this is a transition
    pub fn is_transition(&self) -> bool {
        matches!(self, QStateReturn::Transition(_))
    }

    /// Target state of a transition, if any
    pub fn target(&self) -> Option<&S> {
        match self {
            QStateReturn::Transition(target) => Some(target),
            _ => None,
        }
    }
}

impl<S: fmt::Debug> fmt::Display for QStateReturn<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QStateReturn::Ignored => write!(f, "Ignored"),
            QStateReturn::Handled => write!(f, "Handled"),
            QStateReturn::Transition(target) => write!(f, "Transition({:?})", target),
        }
    }
}

#[cfg(feature = "defmt")]
impl<S: defmt::Format> defmt::Format for QStateReturn<S> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            QStateReturn::Ignored => defmt::write!(fmt, "Ignored"),
            QStateReturn::Handled => defmt::write!(fmt, "Handled"),
            QStateReturn::Transition(target) => defmt::write!(fmt, "Transition({})", target),
        }
    }
}
