//! The moving parts of the face: the main level bubble and the two gauge
//! bubbles.
//!
//! All three are drawn at whatever origin the animation layer hands over,
//! so this module knows nothing about tilt or easing. The main bubble is a
//! 12x12 circle; the gauge bubbles are tall/wide ellipses matching their
//! bar's orientation.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Ellipse, PrimitiveStyle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BLACK, WHITE};
use crate::config::{BOX_SIZE, GAUGE_BUBBLE_H, GAUGE_BUBBLE_W};

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// Bubble interior. Drawn first, then the ring goes over it.
const BUBBLE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Bubble ring: 2 px black outline.
const BUBBLE_RING: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 2);

/// Gauge bubbles get a lighter 1 px ring so they read at their small size.
const GAUGE_RING: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 1);

/// Size of the x-axis gauge bubble (narrow, tall).
const GAUGE_X_SIZE: Size = Size::new(GAUGE_BUBBLE_W, GAUGE_BUBBLE_H);

/// Size of the y-axis gauge bubble (wide, flat).
const GAUGE_Y_SIZE: Size = Size::new(GAUGE_BUBBLE_H, GAUGE_BUBBLE_W);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the main bubble with its top-left at `origin`.
pub fn draw_bubble(display: &mut SimulatorDisplay<Rgb565>, origin: Point) {
    Circle::new(origin, BOX_SIZE).into_styled(BUBBLE_FILL).draw(display).ok();
    Circle::new(origin, BOX_SIZE).into_styled(BUBBLE_RING).draw(display).ok();
}

/// Draw the x-axis gauge bubble with its top-left at `origin`.
pub fn draw_gauge_bubble_x(display: &mut SimulatorDisplay<Rgb565>, origin: Point) {
    Ellipse::new(origin, GAUGE_X_SIZE).into_styled(BUBBLE_FILL).draw(display).ok();
    Ellipse::new(origin, GAUGE_X_SIZE).into_styled(GAUGE_RING).draw(display).ok();
}

/// Draw the y-axis gauge bubble with its top-left at `origin`.
pub fn draw_gauge_bubble_y(display: &mut SimulatorDisplay<Rgb565>, origin: Point) {
    Ellipse::new(origin, GAUGE_Y_SIZE).into_styled(BUBBLE_FILL).draw(display).ok();
    Ellipse::new(origin, GAUGE_Y_SIZE).into_styled(GAUGE_RING).draw(display).ok();
}
