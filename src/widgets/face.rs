//! Static level-face artwork: the disc, the two gauge bars, and their
//! center ticks.
//!
//! Everything here is drawn with primitives rather than bitmap resources.
//! All positions are `const Point` derived from the layout constants, and
//! all styles are const (`PrimitiveStyle::with_stroke` is const fn in
//! embedded-graphics 0.8).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BLACK, TICK_GRAY};
use crate::config::{
    BAR_PIXELS, BAR_X_MID, BAR_X_START, BAR_Y_MID, BAR_Y_START, DIAMETER, DISC_CENTER_X, DISC_CENTER_Y, LINE_LEVEL,
    MARGIN, X_GAUGE_Y, Y_GAUGE_X,
};

// =============================================================================
// Face Layout Constants (compile-time)
// =============================================================================

/// Top-left of the disc's bounding box.
const DISC_ORIGIN: Point = Point::new(MARGIN as i32, LINE_LEVEL as i32);

/// Crosshair arm length at the disc center.
const CROSSHAIR_ARM: i32 = 5;

/// The x gauge bar runs horizontally through the x-gauge bubble's center.
const X_BAR_Y: i32 = X_GAUGE_Y + 10;
const X_BAR_START: Point = Point::new(BAR_X_START as i32, X_BAR_Y);
const X_BAR_END: Point = Point::new((BAR_X_START + BAR_PIXELS) as i32, X_BAR_Y);

/// Center tick on the x bar: 18 px tall, straddling the bar.
const X_TICK_TOP: Point = Point::new(BAR_X_MID, X_BAR_Y - 9);
const X_TICK_BOTTOM: Point = Point::new(BAR_X_MID, X_BAR_Y + 9);

/// The y gauge bar runs vertically through the y-gauge bubble's center.
const Y_BAR_X: i32 = Y_GAUGE_X + 10;
const Y_BAR_START: Point = Point::new(Y_BAR_X, BAR_Y_START as i32);
const Y_BAR_END: Point = Point::new(Y_BAR_X, (BAR_Y_START + BAR_PIXELS) as i32);

/// Center tick on the y bar: 18 px wide, straddling the bar.
const Y_TICK_LEFT: Point = Point::new(Y_BAR_X - 9, BAR_Y_MID);
const Y_TICK_RIGHT: Point = Point::new(Y_BAR_X + 9, BAR_Y_MID);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// Disc outline: 2 px black ring.
const DISC_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 2);

/// Gauge bars: 1 px black lines.
const BAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 1);

/// Center ticks and the disc crosshair: subtle gray so the bubbles stay
/// the visually dominant elements.
const TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(TICK_GRAY, 1);

// =============================================================================
// Drawing
// =============================================================================

/// Repaint the whole face over `backdrop` (lit or unlit background).
pub fn draw_face(display: &mut SimulatorDisplay<Rgb565>, backdrop: Rgb565) {
    display.clear(backdrop).ok();

    // Level disc with a crosshair marking dead center
    Circle::new(DISC_ORIGIN, DIAMETER).into_styled(DISC_STYLE).draw(display).ok();
    Line::new(
        Point::new(DISC_CENTER_X - CROSSHAIR_ARM, DISC_CENTER_Y),
        Point::new(DISC_CENTER_X + CROSSHAIR_ARM, DISC_CENTER_Y),
    )
    .into_styled(TICK_STYLE)
    .draw(display)
    .ok();
    Line::new(
        Point::new(DISC_CENTER_X, DISC_CENTER_Y - CROSSHAIR_ARM),
        Point::new(DISC_CENTER_X, DISC_CENTER_Y + CROSSHAIR_ARM),
    )
    .into_styled(TICK_STYLE)
    .draw(display)
    .ok();

    // X gauge bar along the top edge
    Line::new(X_BAR_START, X_BAR_END).into_styled(BAR_STYLE).draw(display).ok();
    Line::new(X_TICK_TOP, X_TICK_BOTTOM).into_styled(TICK_STYLE).draw(display).ok();

    // Y gauge bar along the left edge
    Line::new(Y_BAR_START, Y_BAR_END).into_styled(BAR_STYLE).draw(display).ok();
    Line::new(Y_TICK_LEFT, Y_TICK_RIGHT).into_styled(TICK_STYLE).draw(display).ok();
}
