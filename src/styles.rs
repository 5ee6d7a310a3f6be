//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` construction is const in
//! embedded-graphics 0.8, so every fixed style lives in the binary's
//! read-only data instead of being rebuilt each frame. The status label
//! needs a dynamic color (black/red follows the calibration state), so
//! only its font is exposed; callers build the style with the color of
//! the moment.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13_BOLD},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, RED};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text. Used for the readouts, status label, and boot title.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for console output on the boot screen.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small black text for the two angle readouts.
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Boot screen title (`ProFont` 18pt, red).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, RED);

/// Boot screen console text.
pub const CONSOLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Status label font. The color tracks the calibration state, so callers
/// build `MonoTextStyle::new(STATUS_FONT, color)` per draw.
pub const STATUS_FONT: &MonoFont = &FONT_7X13_BOLD;
