//! Application configuration

use hal::Level;
use qp_core::{QDuration, QError, QResult};

/// How long the light stays on after a press
pub const DEFAULT_ON_DURATION: QDuration = QDuration::from_secs(60);

/// Tap counting window for callers that opt into it
pub const DEFAULT_TAP_WINDOW: QDuration = QDuration::from_millis(1000);

/// Consecutive active samples required to accept a press
pub const DEFAULT_DEBOUNCE_THRESHOLD: u32 = 5;

/// Board wiring and timing of the push-button light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Light on-time before the automatic switch-off
    pub on_duration: QDuration,
    /// Abandon an unfinished tap count after this long. `None` keeps
    /// counting until the third tap arrives.
    pub tap_window: Option<QDuration>,
    /// Debounce threshold in main-loop iterations, not milliseconds.
    /// Size it against the loop frequency.
    pub debounce_threshold: u32,
    /// Level read on the button pin while it is pressed
    pub button_active_level: Level,
    /// Level written to the light pin to turn the light on
    pub light_on_level: Level,
}

impl AppConfig {
    /// Active-low button and active-low light, as on the reference board
    pub const fn new() -> Self {
        Self {
            on_duration: DEFAULT_ON_DURATION,
            tap_window: None,
            debounce_threshold: DEFAULT_DEBOUNCE_THRESHOLD,
            button_active_level: Level::Low,
            light_on_level: Level::Low,
        }
    }

    pub const fn with_on_duration(mut self, on_duration: QDuration) -> Self {
        self.on_duration = on_duration;
        self
    }

    pub const fn with_tap_window(mut self, tap_window: Option<QDuration>) -> Self {
        self.tap_window = tap_window;
        self
    }

    pub const fn with_debounce_threshold(mut self, threshold: u32) -> Self {
        self.debounce_threshold = threshold;
        self
    }

    pub const fn with_levels(mut self, button_active: Level, light_on: Level) -> Self {
        self.button_active_level = button_active;
        self.light_on_level = light_on;
        self
    }

    /// Reject values the machines cannot work with. Both durations must be
    /// non-zero and no longer than [`QDuration::MAX_DELAY`].
    pub fn validate(&self) -> QResult<()> {
        if self.debounce_threshold == 0 || !schedulable(self.on_duration) {
            return Err(QError::InvalidParameter);
        }
        if let Some(window) = self.tap_window {
            if !schedulable(window) {
                return Err(QError::InvalidParameter);
            }
        }
        Ok(())
    }
}

fn schedulable(delay: QDuration) -> bool {
    !delay.is_zero() && delay <= QDuration::MAX_DELAY
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
