//! Text overlays: the two angle readouts and the calibration status label.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BLACK, RED};
use crate::styles::{CENTERED, READOUT_STYLE, STATUS_FONT};

// =============================================================================
// Readout Layout Constants (compile-time)
// =============================================================================

/// X-axis angle readout sits above the right end of the x gauge bar.
const READOUT_X_POS: Point = Point::new(127, 17);

/// Y-axis angle readout sits below the bottom end of the y gauge bar.
const READOUT_Y_POS: Point = Point::new(17, 150);

/// Calibration status label, centered along the bottom edge.
const STATUS_POS: Point = Point::new(74, 160);

const STATUS_CALIBRATED: &str = "Calibrated";
const STATUS_IDLE: &str = "Calibrate";

// =============================================================================
// Drawing
// =============================================================================

/// Draw both angle readouts (already formatted, at most 4 chars each).
pub fn draw_angle_readouts(display: &mut SimulatorDisplay<Rgb565>, angle_x: &str, angle_y: &str) {
    Text::with_text_style(angle_x, READOUT_X_POS, READOUT_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(angle_y, READOUT_Y_POS, READOUT_STYLE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the status label. Red while a calibration offset is applied so the
/// user can tell readings are relative, black otherwise.
pub fn draw_status_label(display: &mut SimulatorDisplay<Rgb565>, calibrated: bool) {
    let (label, color) = if calibrated {
        (STATUS_CALIBRATED, RED)
    } else {
        (STATUS_IDLE, BLACK)
    };
    let style = MonoTextStyle::new(STATUS_FONT, color);
    Text::with_text_style(label, STATUS_POS, style, CENTERED).draw(display).ok();
}
