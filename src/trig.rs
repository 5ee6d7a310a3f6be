//! Fixed-point math for the tilt pipeline: Newton square root and a
//! binary-angle arctangent lookup.
//!
//! # Binary Angle Units
//!
//! [`atan2_lookup`] reports angles in 1/65536ths of a full turn
//! (`TRIG_MAX_ANGLE` = 0x10000 = 360 degrees). This keeps the whole angle
//! path in integer math; [`trigangle_to_deg`] converts to whole degrees at
//! the very end.
//!
//! # CORDIC
//!
//! The arctangent is computed in CORDIC vectoring mode: the input vector is
//! rotated toward the positive x axis through a fixed sequence of
//! `atan(2^-i)` micro-rotations (shifts and adds only), accumulating the
//! applied rotation. Fourteen iterations leave a residual well below a
//! tenth of a degree, far inside the whole-degree resolution the level
//! display uses.
//!
//! # Square Root
//!
//! [`newton_sqrt`] is only used for the disc-radius magnitude check. It
//! iterates `a <- (a + num/a) / 2` until `a*a` is within `SQRT_TOLERANCE`
//! of the input. Zero and negative inputs return 0 explicitly; the naive
//! recurrence would divide by zero there.

/// One full turn in binary angle units.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Absolute tolerance on `a*a - num` for the Newton square root.
pub const SQRT_TOLERANCE: f32 = 0.001;

/// Number of CORDIC micro-rotations. Each halves the residual angle.
const CORDIC_ITERATIONS: usize = 14;

/// `atan(2^-i)` for i = 0..14, in binary angle units (45 degrees = 8192).
const CORDIC_ATAN_TABLE: [i64; CORDIC_ITERATIONS] = [
    8192, 4836, 2555, 1297, 651, 326, 163, 81, 41, 20, 10, 5, 3, 1,
];

/// Pre-shift applied to CORDIC inputs. Milli-g readings are small (a few
/// thousand); shifting up first keeps the `>> i` steps from losing the
/// low bits early.
const CORDIC_PRESCALE: u32 = 16;

// =============================================================================
// Square Root
// =============================================================================

/// Square root by Newton's method.
///
/// Returns `a` with `0 <= a*a - num < SQRT_TOLERANCE` for positive `num`,
/// and 0.0 for `num <= 0` (explicit guard, the iteration is undefined
/// there).
///
/// The iteration starts from `max(num, 1.0)`, which is always at or above
/// the true root, so the sequence decreases monotonically onto it and the
/// one-sided tolerance check is sufficient.
pub fn newton_sqrt(num: f32) -> f32 {
    if num <= 0.0 {
        return 0.0;
    }

    let mut a = if num < 1.0 { 1.0 } else { num };
    while a * a - num >= SQRT_TOLERANCE {
        a = (a + num / a) / 2.0;
    }
    a
}

// =============================================================================
// Arctangent Lookup
// =============================================================================

/// Fixed-point two-argument arctangent.
///
/// Returns the angle of the vector `(x, y)` in binary angle units,
/// `0..TRIG_MAX_ANGLE`, measured counterclockwise from the positive x
/// axis. `atan2_lookup(0, 0)` returns 0.
///
/// Integer-only: quadrant pre-rotation, then CORDIC vectoring with the
/// `CORDIC_ATAN_TABLE` micro-rotations.
pub fn atan2_lookup(y: i32, x: i32) -> u16 {
    if x == 0 && y == 0 {
        return 0;
    }

    let mut xr = i64::from(x) << CORDIC_PRESCALE;
    let mut yr = i64::from(y) << CORDIC_PRESCALE;

    // Vectoring mode only converges for |angle| < ~99 degrees, so fold the
    // left half-plane onto the right one first (rotate by 180 degrees).
    let mut angle: i64 = 0;
    if xr < 0 {
        xr = -xr;
        yr = -yr;
        angle = i64::from(TRIG_MAX_ANGLE) / 2;
    }

    for (i, atan) in CORDIC_ATAN_TABLE.iter().enumerate() {
        if yr == 0 {
            break;
        }
        if yr > 0 {
            let x_new = xr + (yr >> i);
            yr -= xr >> i;
            xr = x_new;
            angle += atan;
        } else {
            let x_new = xr - (yr >> i);
            yr += xr >> i;
            xr = x_new;
            angle -= atan;
        }
    }

    angle.rem_euclid(i64::from(TRIG_MAX_ANGLE)) as u16
}

/// Convert a binary angle to whole degrees, truncating. Output is in
/// `0..360`.
pub const fn trigangle_to_deg(angle: u16) -> i32 {
    angle as i32 * 360 / TRIG_MAX_ANGLE
}

// =============================================================================
// Unit Tests
// =============================================================================
