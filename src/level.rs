//! The tilt-to-screen pipeline and calibration state.
//!
//! Data flows one way per sensor burst:
//!
//! ```text
//! raw burst -> average -> (angle extraction, disc scaling)
//!           -> calibration subtraction -> box clamp -> circular projection
//!           -> screen geometry (bubble origin, gauge origins, readout text)
//! ```
//!
//! # Angle Extraction
//!
//! Each axis angle comes from the fixed-point arctangent of that axis
//! against z, converted to degrees, shifted by -180, then folded once into
//! [-90, 90]. Tilt beyond 90 degrees has no extra meaning for a level, so
//! the fold wraps instead of clamping.
//!
//! # Calibration
//!
//! The controller is a two-state machine: Uncalibrated (initial) and
//! Calibrated. Calibrating snapshots the current disc offset and angles;
//! the snapshot is subtracted from every later reading until the same
//! action clears it. The subtraction is unconditional because the offset
//! is zero while uncalibrated.
//!
//! # Clamping Order
//!
//! The per-axis box clamp to +-PRACTICAL_RADIUS runs before the circular
//! projection and is not redundant with it: a heavily tilted corner case
//! like (60, 60) first becomes (41, 41) and is then projected onto the
//! circle, which lands on a different point than projecting (60, 60)
//! directly. Both stages are kept deliberately.

use core::fmt::Write;

use embedded_graphics::prelude::Point;
use heapless::String;

use crate::config::{
    BAR_X_MID, BAR_Y_MID, LINE_LEVEL, MARGIN, MILLI_G_PER_PIXEL, PRACTICAL_RADIUS, X_GAUGE_Y, Y_GAUGE_X,
};
use crate::sensor::{AccelSample, average_burst};
use crate::trig::{atan2_lookup, newton_sqrt, trigangle_to_deg};

// =============================================================================
// Pipeline Types
// =============================================================================

/// Tilt angles in whole degrees, one per axis, folded into [-90, 90]
/// before calibration subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TiltAngles {
    pub x: i16,
    pub y: i16,
}

/// Bubble offset from the disc center in pixels. After projection,
/// `sqrt(x^2 + y^2) <= PRACTICAL_RADIUS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiscPosition {
    pub x: i16,
    pub y: i16,
}

/// One-shot calibration snapshot. Either all zero (uncalibrated) or the
/// reading captured at the moment of calibration; never averaged or
/// updated afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Calibration {
    loc: DiscPosition,
    angles: TiltAngles,
    active: bool,
}

/// Everything the presentation layer needs for one tick: destination
/// geometry for the three slide transitions plus the formatted readouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelFrame {
    /// Top-left of the bubble square on screen.
    pub bubble_origin: Point,
    /// Top-left of the x-gauge bubble (travels horizontally).
    pub gauge_x_origin: Point,
    /// Top-left of the y-gauge bubble (travels vertically).
    pub gauge_y_origin: Point,
    /// Calibrated angles, for anything that wants the numbers.
    pub angles: TiltAngles,
    /// Formatted decimal readouts, at most 4 chars including sign.
    pub angle_x_text: String<4>,
    pub angle_y_text: String<4>,
}

// =============================================================================
// Pure Pipeline Stages
// =============================================================================

/// Extract one axis tilt angle from the averaged reading.
///
/// The binary-angle arctangent reports the rest orientation as 180
/// degrees; the shift re-references it to zero and the fold maps the
/// result onto the meaningful half circle.
fn extract_angle(axis: i16, z: i16) -> i16 {
    let raw = trigangle_to_deg(atan2_lookup(i32::from(axis), i32::from(z))) - 180;
    fold_to_half_range(raw) as i16
}

/// Fold a degree value from [-180, 180) into [-90, 90] by one 180-degree
/// wrap. Applied exactly once; values already in range pass through.
const fn fold_to_half_range(deg: i32) -> i32 {
    if deg > 90 {
        deg - 180
    } else if deg < -90 {
        deg + 180
    } else {
        deg
    }
}

/// Cap a disc offset to the circular boundary.
///
/// If the Euclidean magnitude exceeds `PRACTICAL_RADIUS`, both components
/// are rescaled proportionally (integer division, matching the display's
/// pixel grid) so the magnitude lands on the radius; otherwise the offset
/// is returned unchanged. The (0, 0) case never reaches the division
/// because its magnitude is not greater than the radius.
fn square_to_circle(loc: DiscPosition) -> DiscPosition {
    let (xf, yf) = (f32::from(loc.x), f32::from(loc.y));
    let radius = newton_sqrt(xf * xf + yf * yf);

    if radius > f32::from(PRACTICAL_RADIUS) {
        let r = radius as i32;
        DiscPosition {
            x: (i32::from(PRACTICAL_RADIUS) * i32::from(loc.x) / r) as i16,
            y: (i32::from(PRACTICAL_RADIUS) * i32::from(loc.y) / r) as i16,
        }
    } else {
        loc
    }
}

/// X-gauge bubble x position for an angle. The gauge clamp to [-90, 90]
/// is separate from the extraction fold: calibration subtraction can push
/// an already-folded angle past 90.
fn gauge_x_position(angle: i16) -> i32 {
    BAR_X_MID + i32::from(angle.clamp(-90, 90)) / 2
}

/// Y-gauge bubble y position. Screen y grows downward, so positive tilt
/// moves the bubble up the bar.
fn gauge_y_position(angle: i16) -> i32 {
    BAR_Y_MID - i32::from(angle.clamp(-90, 90)) / 2
}

/// Format an angle for its readout. Calibrated angles stay within
/// [-180, 180], so 4 chars always suffice.
fn format_angle(angle: i16) -> String<4> {
    let mut text = String::new();
    let _ = write!(text, "{angle}");
    text
}

// =============================================================================
// Controller
// =============================================================================

/// Owns all pipeline state: the calibration snapshot plus the last
/// computed reading (needed both for calibration capture and as the
/// transition start geometry). Single-threaded by construction; every
/// handler below runs on the event loop thread.
pub struct LevelController {
    calibration: Calibration,
    /// Last calibrated, folded angles.
    last_angles: TiltAngles,
    /// Last projected disc offset (pre-margin coordinates).
    last_disc: DiscPosition,
}

impl LevelController {
    pub const fn new() -> Self {
        Self {
            calibration: Calibration {
                loc: DiscPosition { x: 0, y: 0 },
                angles: TiltAngles { x: 0, y: 0 },
                active: false,
            },
            last_angles: TiltAngles { x: 0, y: 0 },
            last_disc: DiscPosition { x: 0, y: 0 },
        }
    }

    /// Run the full pipeline for one sensor burst.
    pub fn on_sensor_burst(&mut self, samples: &[AccelSample]) -> LevelFrame {
        let avg = average_burst(samples);

        // Milli-g down to disc pixels. Screen x grows rightward while
        // positive x acceleration means a leftward tilt, hence the sign flip.
        let mut loc = DiscPosition {
            x: -(avg.x / MILLI_G_PER_PIXEL),
            y: avg.y / MILLI_G_PER_PIXEL,
        };

        loc.x -= self.calibration.loc.x;
        loc.y -= self.calibration.loc.y;

        // Box clamp before the circular projection (see module docs)
        loc.x = loc.x.clamp(-PRACTICAL_RADIUS, PRACTICAL_RADIUS);
        loc.y = loc.y.clamp(-PRACTICAL_RADIUS, PRACTICAL_RADIUS);

        let angles = TiltAngles {
            x: extract_angle(avg.x, avg.z) - self.calibration.angles.x,
            y: extract_angle(avg.y, avg.z) - self.calibration.angles.y,
        };

        let loc = square_to_circle(loc);

        self.last_disc = loc;
        self.last_angles = angles;

        LevelFrame {
            bubble_origin: Point::new(
                i32::from(loc.x + PRACTICAL_RADIUS + MARGIN),
                i32::from(loc.y + PRACTICAL_RADIUS + LINE_LEVEL),
            ),
            gauge_x_origin: Point::new(gauge_x_position(angles.x), X_GAUGE_Y),
            gauge_y_origin: Point::new(Y_GAUGE_X, gauge_y_position(angles.y)),
            angles,
            angle_x_text: format_angle(angles.x),
            angle_y_text: format_angle(angles.y),
        }
    }

    /// Toggle calibration. Returns the new calibrated state.
    ///
    /// Calibrating snapshots the last reading as-is; un-calibrating zeroes
    /// the snapshot. The snapshot is never a function of readings taken
    /// after this moment.
    pub fn on_calibrate_toggle(&mut self) -> bool {
        if self.calibration.active {
            self.calibration = Calibration::default();
        } else {
            self.calibration = Calibration {
                loc: self.last_disc,
                angles: self.last_angles,
                active: true,
            };
        }
        self.calibration.active
    }

    #[inline]
    pub const fn is_calibrated(&self) -> bool {
        self.calibration.active
    }
}

impl Default for LevelController {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLES_PER_BURST;

    fn burst_of(x: i16, y: i16, z: i16) -> [AccelSample; SAMPLES_PER_BURST] {
        [AccelSample::new(x, y, z); SAMPLES_PER_BURST]
    }

    // -------------------------------------------------------------------------
    // Fold Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fold_passthrough_in_range() {
        for deg in [-90, -45, 0, 45, 90] {
            assert_eq!(fold_to_half_range(deg), deg, "{deg} should pass through unfolded");
        }
    }

    #[test]
    fn test_fold_wraps_once() {
        assert_eq!(fold_to_half_range(91), -89);
        assert_eq!(fold_to_half_range(179), -1);
        assert_eq!(fold_to_half_range(-91), 89);
        assert_eq!(fold_to_half_range(-180), 0, "rest orientation should fold to 0");
    }

    #[test]
    fn test_fold_output_always_in_half_range() {
        for deg in -180..180 {
            let folded = fold_to_half_range(deg);
            assert!(
                (-90..=90).contains(&folded),
                "fold({deg}) = {folded} out of [-90, 90]"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Projection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_projection_inside_radius_unchanged() {
        for (x, y) in [(0, 0), (10, -20), (41, 0), (0, -41), (29, 29)] {
            let loc = DiscPosition { x, y };
            assert_eq!(
                square_to_circle(loc),
                loc,
                "({x}, {y}) is within the radius and should pass unchanged"
            );
        }
    }

    #[test]
    fn test_projection_caps_magnitude() {
        for (x, y) in [(41, 41), (-41, 41), (41, -30), (-35, -38), (40, 15)] {
            let out = square_to_circle(DiscPosition { x, y });
            let mag = f32::from(out.x)
                .mul_add(f32::from(out.x), f32::from(out.y) * f32::from(out.y))
                .sqrt();
            assert!(
                mag <= f32::from(PRACTICAL_RADIUS) + 0.5,
                "projected ({x}, {y}) -> ({}, {}) magnitude {mag} exceeds radius",
                out.x,
                out.y
            );
        }
    }

    #[test]
    fn test_projection_preserves_direction() {
        let out = square_to_circle(DiscPosition { x: 41, y: 41 });
        assert!(out.x > 0 && out.y > 0, "projection should not flip signs");
        assert_eq!(out.x, out.y, "a diagonal input should stay on the diagonal");
    }

    // -------------------------------------------------------------------------
    // Gauge Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_gauge_positions_at_rest() {
        assert_eq!(gauge_x_position(0), BAR_X_MID, "0 degrees should sit at the bar midpoint");
        assert_eq!(gauge_y_position(0), BAR_Y_MID);
    }

    #[test]
    fn test_gauge_clamp_beyond_ninety() {
        // Calibration subtraction can exceed the fold range; the gauge
        // clamps independently
        assert_eq!(gauge_x_position(150), gauge_x_position(90), "gauge should clamp at 90");
        assert_eq!(gauge_x_position(-150), gauge_x_position(-90));
        assert_eq!(gauge_y_position(90), BAR_Y_MID - 45, "positive tilt moves up the bar");
        assert_eq!(gauge_y_position(-90), BAR_Y_MID + 45);
    }

    // -------------------------------------------------------------------------
    // Readout Formatting Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_angle_fits_four_chars() {
        for angle in [-180i16, -90, -9, 0, 9, 90, 180] {
            let text = format_angle(angle);
            assert!(text.len() <= 4, "\"{text}\" should fit the 4-char readout");
            assert_eq!(text.parse::<i16>().unwrap(), angle, "readout should round-trip");
        }
    }

    // -------------------------------------------------------------------------
    // End-to-End Pipeline Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_flat_face_up_centers_bubble() {
        let mut controller = LevelController::new();
        let frame = controller.on_sensor_burst(&burst_of(0, 0, 1000));

        assert_eq!(frame.angles, TiltAngles { x: 0, y: 0 }, "flat should read 0/0 degrees");
        assert_eq!(frame.angle_x_text.as_str(), "0");
        assert_eq!(frame.angle_y_text.as_str(), "0");
        assert_eq!(
            frame.bubble_origin,
            Point::new(
                i32::from(PRACTICAL_RADIUS + MARGIN),
                i32::from(PRACTICAL_RADIUS + LINE_LEVEL)
            ),
            "flat should park the bubble at the disc center"
        );
        assert_eq!(frame.gauge_x_origin.x, BAR_X_MID);
        assert_eq!(frame.gauge_y_origin.y, BAR_Y_MID);
    }

    #[test]
    fn test_strong_x_tilt_deflects_forty_pixels() {
        // x = -960 mg -> loc_x = -(-960)/24 = 40, within the radius, unchanged
        let mut controller = LevelController::new();
        let frame = controller.on_sensor_burst(&burst_of(-960, 0, 280));

        assert_eq!(
            frame.bubble_origin.x,
            40 + i32::from(PRACTICAL_RADIUS + MARGIN),
            "-960 mg should deflect the bubble 40 px toward positive x"
        );
        assert_eq!(
            frame.bubble_origin.y,
            i32::from(PRACTICAL_RADIUS + LINE_LEVEL),
            "y axis should stay centered"
        );
        assert!(frame.angles.x < -60, "a near-1g x reading should report a steep angle");
    }

    #[test]
    fn test_extreme_tilt_stays_on_disc() {
        // Both axes beyond full scale: box clamp then circular projection
        let mut controller = LevelController::new();
        let frame = controller.on_sensor_burst(&burst_of(-2000, 2000, 100));

        let dx = frame.bubble_origin.x - i32::from(PRACTICAL_RADIUS + MARGIN);
        let dy = frame.bubble_origin.y - i32::from(PRACTICAL_RADIUS + LINE_LEVEL);
        let mag = ((dx * dx + dy * dy) as f32).sqrt();
        assert!(
            mag <= f32::from(PRACTICAL_RADIUS) + 0.5,
            "bubble center must stay on the disc, magnitude {mag}"
        );
    }

    #[test]
    fn test_calibration_zeroes_current_attitude() {
        let mut controller = LevelController::new();
        let tilted = burst_of(400, -300, 800);

        controller.on_sensor_burst(&tilted);
        assert!(controller.on_calibrate_toggle(), "toggle from initial state should calibrate");
        assert!(controller.is_calibrated());

        // The same attitude now reads as level
        let frame = controller.on_sensor_burst(&tilted);
        assert_eq!(frame.angles, TiltAngles { x: 0, y: 0 }, "calibrated attitude should read 0/0");
        assert_eq!(
            frame.bubble_origin,
            Point::new(
                i32::from(PRACTICAL_RADIUS + MARGIN),
                i32::from(PRACTICAL_RADIUS + LINE_LEVEL)
            ),
            "calibrated attitude should center the bubble"
        );
    }

    #[test]
    fn test_calibration_idempotence() {
        let mut controller = LevelController::new();
        let tilted = burst_of(500, 200, 700);

        let before = controller.on_sensor_burst(&tilted);

        assert!(controller.on_calibrate_toggle(), "first toggle calibrates");
        assert!(!controller.on_calibrate_toggle(), "second toggle un-calibrates");
        assert!(!controller.is_calibrated());

        let after = controller.on_sensor_burst(&tilted);
        assert_eq!(before, after, "calibrate/un-calibrate should restore readings bit-for-bit");
    }

    #[test]
    fn test_calibration_snapshot_is_one_shot() {
        let mut controller = LevelController::new();
        controller.on_sensor_burst(&burst_of(400, 0, 900));
        controller.on_calibrate_toggle();

        // Later, different readings must not affect the stored offset:
        // returning to the calibration attitude must read level again
        controller.on_sensor_burst(&burst_of(-700, 300, 600));
        let frame = controller.on_sensor_burst(&burst_of(400, 0, 900));
        assert_eq!(
            frame.angles,
            TiltAngles { x: 0, y: 0 },
            "offset must stay pinned to the calibration-time snapshot"
        );
    }
}
