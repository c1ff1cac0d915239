use std::time::{Duration, Instant};

/// Default delay between losing focus and clearing the popup
pub const DEFAULT_BLUR_DELAY_MS: u64 = 200;

/// Cancellable deadline for the delayed clear that follows a blur
///
/// A pointer click on a popup row lands after the input has already lost
/// focus, so the clear waits `delay` before taking effect. At most one
/// deadline is pending; scheduling again replaces it.
#[derive(Debug, Clone)]
pub struct BlurTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl BlurTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed
    ///
    /// Returns true exactly once per scheduled deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for BlurTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_BLUR_DELAY_MS))
    }
}

#[cfg(test)]
#[path = "blur_timer_tests.rs"]
mod blur_timer_tests;
