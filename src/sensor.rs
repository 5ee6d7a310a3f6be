//! Accelerometer sample types, burst averaging, and the simulator's fake
//! tilt signal.
//!
//! # Burst Averaging
//!
//! The sensor service delivers bursts of [`crate::config::SAMPLES_PER_BURST`]
//! raw samples per callback. [`average_burst`] reduces a burst to one
//! arithmetic-mean sample per axis with truncating integer division. This
//! is plain noise suppression, not a filter: nothing carries over between
//! bursts.
//!
//! # Simulated Tilt
//!
//! [`TiltSignal`] stands in for the real accelerometer in simulator mode.
//! Two slow sinusoids drive a pitch/roll pair, which is converted to the
//! milli-g triple a watch lying at that attitude would report, plus a small
//! per-sample wobble so the burst averaging has actual noise to suppress.

use crate::config::SAMPLES_PER_BURST;

// =============================================================================
// Sample Type
// =============================================================================

/// One raw accelerometer reading, signed milli-g per axis. At rest, face
/// up, the reading is approximately (0, 0, 1000) before gravity sign
/// conventions; the pipeline only cares about ratios and signs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

// =============================================================================
// Burst Averaging
// =============================================================================

/// Average a burst of raw samples per axis.
///
/// Sums in i32 (a full burst of i16 extremes cannot overflow) and divides
/// by the burst length with truncation toward zero, discarding the
/// remainder. An empty burst returns the zero sample.
pub fn average_burst(samples: &[AccelSample]) -> AccelSample {
    if samples.is_empty() {
        return AccelSample::default();
    }

    let mut sum_x: i32 = 0;
    let mut sum_y: i32 = 0;
    let mut sum_z: i32 = 0;
    for s in samples {
        sum_x += i32::from(s.x);
        sum_y += i32::from(s.y);
        sum_z += i32::from(s.z);
    }

    let n = samples.len() as i32;
    AccelSample {
        x: (sum_x / n) as i16,
        y: (sum_y / n) as i16,
        z: (sum_z / n) as i16,
    }
}

// =============================================================================
// Simulated Accelerometer (simulator mode)
// =============================================================================

/// Peak simulated tilt per axis, degrees. Large enough to push the bubble
/// to the disc edge now and then.
const TILT_AMPLITUDE_X: f32 = 55.0;
const TILT_AMPLITUDE_Y: f32 = 40.0;

/// Per-sample wobble amplitude in milli-g. Roughly what a wrist-worn
/// accelerometer jitters by while "held still".
const WOBBLE_MILLI_G: f32 = 12.0;

/// Generates bursts of fake accelerometer data from a slow pitch/roll
/// motion. Call [`TiltSignal::next_burst`] once per sensor tick.
pub struct TiltSignal {
    /// Time parameter, advances once per burst.
    t: f32,
}

impl TiltSignal {
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Produce the next burst of raw samples.
    ///
    /// The underlying attitude advances once per burst; the samples within
    /// a burst differ only by the wobble term.
    pub fn next_burst(&mut self) -> [AccelSample; SAMPLES_PER_BURST] {
        self.t += 0.1;

        // Slow, incommensurate frequencies so the bubble traces a wandering
        // path instead of a fixed figure
        let tilt_x = (self.t * 0.23).sin() * TILT_AMPLITUDE_X;
        let tilt_y = (self.t * 0.31 + 1.3).sin() * TILT_AMPLITUDE_Y;

        let base = attitude_to_milli_g(tilt_x, tilt_y);

        let mut burst = [AccelSample::default(); SAMPLES_PER_BURST];
        for (i, sample) in burst.iter_mut().enumerate() {
            let wobble = (self.t * 13.7 + i as f32 * 2.1).sin() * WOBBLE_MILLI_G;
            *sample = AccelSample {
                x: base.x + wobble as i16,
                y: base.y + wobble as i16,
                z: base.z - wobble as i16,
            };
        }
        burst
    }
}

impl Default for TiltSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a pitch/roll pair (degrees) to the milli-g triple gravity
/// projects onto the watch axes at that attitude.
fn attitude_to_milli_g(tilt_x: f32, tilt_y: f32) -> AccelSample {
    let (rx, ry) = (tilt_x.to_radians(), tilt_y.to_radians());
    AccelSample::new(
        (rx.sin() * 1000.0) as i16,
        (ry.sin() * 1000.0) as i16,
        (rx.cos() * ry.cos() * 1000.0) as i16,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
