//! Timed backlight with re-arming shutoff.
//!
//! The primary action turns the light on and schedules a shutoff
//! [`BACKLIGHT_TIMEOUT`] later. Pressing again while lit replaces the
//! pending deadline instead of stacking a second one, so the earlier
//! shutoff can never switch the light off early. The deadline is polled
//! from the frame loop; there is no separate timer thread.

use std::time::Instant;

use crate::config::BACKLIGHT_TIMEOUT;

/// Backlight state: either off, or on with a shutoff deadline.
pub struct Backlight {
    deadline: Option<Instant>,
}

impl Backlight {
    /// Starts off.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Turn the light on and (re-)arm the shutoff deadline.
    pub fn turn_on(&mut self, now: Instant) {
        self.deadline = Some(now + BACKLIGHT_TIMEOUT);
    }

    /// Advance the clock; switches the light off once the deadline passes.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
        }
    }

    #[inline]
    pub const fn is_on(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Backlight {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
