//! Cancellable one-shot timer for collapsing bursts of input.

use chrono::{DateTime, Duration, Utc};

/// Quiet period after the last search keystroke before a fetch goes out.
pub const DEFAULT_DEBOUNCE_MS: i64 = 500;

/// Re-armable deadline that fires once per settled window.
///
/// Every `arm` pushes the deadline to `now + window`; `fire_if_due` returns
/// `true` exactly once after the deadline passes and then disarms.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<DateTime<Utc>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.deadline = Some(now + self.window);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn fire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending fire, `None` when disarmed.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline
            .map(|deadline| (deadline - now).max(Duration::zero()))
    }
}
