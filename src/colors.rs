//! Color constants for the level face.
//!
//! The face keeps a classic watch look: dark ink on a paper background.
//! Rgb565 is used because it is native to the simulator display; the
//! built-in `RgbColor` trait constants cover everything except the two
//! application-specific shades.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Ink: disc outline, bars, bubble rings, readout text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. The lit face background and the bubble fill.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. The status label while calibrated.
pub const RED: Rgb565 = Rgb565::RED;

/// Unlit face background: the dim gray of a watch LCD without backlight.
/// RGB565: (20, 42, 21) - roughly 65% brightness.
pub const UNLIT: Rgb565 = Rgb565::new(20, 42, 21);

/// Subtle gray for the gauge bar center ticks.
/// RGB565: (12, 24, 12) - roughly 40% brightness.
pub const TICK_GRAY: Rgb565 = Rgb565::new(12, 24, 12);
