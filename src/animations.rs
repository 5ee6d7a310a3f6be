//! Slide transitions for the bubble and gauge bubbles.
//!
//! Every sensor burst produces new destination geometry; each on-screen
//! element then glides from wherever it currently is to the new spot over
//! [`ANIM_DURATION`] with an ease-in/ease-out curve and no delay. The three
//! transitions (bubble, x gauge, y gauge) are independent.
//!
//! Re-targeting mid-flight starts the new slide from the interpolated
//! current position, not the previous destination, so a burst arriving
//! before the last slide finished never makes the element jump.
//!
//! The interpolation itself is a pure function of progress
//! ([`SlideTransition::position_at`]); the clock only enters through
//! [`SlideTransition::position`]. That split keeps the math testable
//! without sleeping.

use std::time::Instant;

use embedded_graphics::prelude::Point;

use crate::config::ANIM_DURATION;

/// Ease-in/ease-out timing curve on [0, 1]: quadratic acceleration into
/// quadratic deceleration, continuous at the 0.5 midpoint.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// One animated screen element's sliding top-left corner. The element's
/// size is fixed and owned by whatever draws it.
pub struct SlideTransition {
    start: Point,
    finish: Point,
    started: Instant,
}

impl SlideTransition {
    /// Create a transition parked at `origin` (start == finish, so
    /// [`Self::position`] is stable until the first re-target).
    pub fn new(origin: Point) -> Self {
        Self {
            start: origin,
            finish: origin,
            started: Instant::now(),
        }
    }

    /// Begin sliding toward a new destination from the current
    /// interpolated position.
    pub fn retarget(&mut self, finish: Point) {
        self.start = self.position();
        self.finish = finish;
        self.started = Instant::now();
    }

    /// Current top-left position according to the wall clock.
    pub fn position(&self) -> Point {
        let progress = self.started.elapsed().as_secs_f32() / ANIM_DURATION.as_secs_f32();
        self.position_at(progress)
    }

    /// Position at a given progress fraction. Progress is clamped to
    /// [0, 1]; past 1 the element rests at the destination.
    fn position_at(&self, progress: f32) -> Point {
        let eased = ease_in_out(progress.clamp(0.0, 1.0));
        Point::new(
            self.start.x + ((self.finish.x - self.start.x) as f32 * eased) as i32,
            self.start.y + ((self.finish.y - self.start.y) as f32 * eased) as i32,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: Point, to: Point) -> SlideTransition {
        let mut t = SlideTransition::new(from);
        t.retarget(to);
        t
    }

    // -------------------------------------------------------------------------
    // Easing Curve Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0, "curve should start at 0");
        assert_eq!(ease_in_out(1.0), 1.0, "curve should end at 1");
    }

    #[test]
    fn test_ease_midpoint() {
        assert!(
            (ease_in_out(0.5) - 0.5).abs() < 1e-6,
            "the two halves should meet at 0.5"
        );
    }

    #[test]
    fn test_ease_monotonic() {
        let mut prev = ease_in_out(0.0);
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = ease_in_out(t);
            assert!(v >= prev, "curve should be non-decreasing, dipped at t={t}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_slow_start_fast_middle() {
        // Ease-in: the first tenth covers far less than a tenth of the path
        assert!(ease_in_out(0.1) < 0.05, "start should be slow");
        // The middle is the fastest stretch
        let mid_rate = ease_in_out(0.55) - ease_in_out(0.45);
        let start_rate = ease_in_out(0.1) - ease_in_out(0.0);
        assert!(mid_rate > start_rate, "middle should outpace the start");
    }

    // -------------------------------------------------------------------------
    // Transition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_transition_endpoints() {
        let t = transition(Point::new(10, 20), Point::new(50, 80));
        assert_eq!(t.position_at(0.0), Point::new(10, 20), "progress 0 should be the start");
        assert_eq!(t.position_at(1.0), Point::new(50, 80), "progress 1 should be the finish");
    }

    #[test]
    fn test_transition_holds_past_duration() {
        let t = transition(Point::new(0, 0), Point::new(40, 0));
        assert_eq!(
            t.position_at(3.5),
            Point::new(40, 0),
            "past the duration the element should rest at the destination"
        );
    }

    #[test]
    fn test_transition_midpoint_between_endpoints() {
        let t = transition(Point::new(0, 0), Point::new(40, -40));
        let mid = t.position_at(0.5);
        assert!((0..=40).contains(&mid.x), "midpoint x should lie on the path");
        assert!((-40..=0).contains(&mid.y), "midpoint y should lie on the path");
    }

    #[test]
    fn test_new_transition_is_parked() {
        let t = SlideTransition::new(Point::new(84, 82));
        assert_eq!(
            t.position_at(0.37),
            Point::new(84, 82),
            "an un-targeted transition should not move"
        );
    }
}
