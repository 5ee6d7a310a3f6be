//! Boot screen with console-style startup messages.
//!
//! A short "booting" sequence with an animated spinner and sequential
//! messages while the accelerometer service comes up. At 144x168 there is
//! room for the title, a divider, and a handful of console lines; the
//! message list is short enough that nothing ever scrolls off.
//!
//! ```text
//! ┌──────────────────────────┐
//! │      Watch Level         │  Title
//! │──────────────────────────│  Divider line
//! │ > Starting accel svc...  │
//! │   50 Hz, 5-sample bursts │  Console output
//! │ > Ready.            /    │
//! └──────────────────────────┘
//! ```

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use crate::colors::{RED, WHITE};
use crate::styles::{CENTERED, CONSOLE_STYLE, LEFT_ALIGNED, TITLE_STYLE};

// =============================================================================
// Boot Screen Layout Constants (compile-time)
// =============================================================================

/// Title text position (horizontally centered).
const TITLE_POS: Point = Point::new(72, 22);

/// Divider line between the title and the console area.
const LINE_START: Point = Point::new(8, 30);
const LINE_END: Point = Point::new(136, 30);

/// Console text origin and line spacing.
const CONSOLE_X: i32 = 6;
const CONSOLE_START_Y: i32 = 44;
const CONSOLE_LINE_HEIGHT: i32 = 12;

/// Spinner position, bottom-right corner.
const SPINNER_POS: Point = Point::new(132, 160);

// =============================================================================
// Pre-computed Styles (const fn in embedded-graphics 0.8)
// =============================================================================

/// Red stroke style for the divider line (1 px).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RED, 1);

// =============================================================================
// Boot Screen Function
// =============================================================================

/// Run the boot sequence.
///
/// Returns `false` if the window is closed, `true` when the sequence
/// completes and the level face should take over.
pub fn run_loading_screen(display: &mut SimulatorDisplay<Rgb565>, window: &mut Window) -> bool {
    // Init messages: (text, display duration in ms)
    let init_messages = [
        ("Starting accel service...", 700),
        ("50 Hz, 5-sample bursts", 600),
        ("Loading level face...", 600),
        ("Ready.", 400),
    ];

    // Classic text-mode spinner
    let spinner_chars = ['|', '/', '-', '\\'];
    let mut spinner_idx = 0;
    let mut spinner_frame = 0u32;

    let mut console_lines: Vec<&str> = Vec::new();

    for (msg, duration_ms) in &init_messages {
        console_lines.push(msg);

        let msg_start = Instant::now();
        let msg_duration = Duration::from_millis(*duration_ms as u64);

        while msg_start.elapsed() < msg_duration {
            for ev in window.events() {
                if matches!(ev, SimulatorEvent::Quit) {
                    return false;
                }
            }

            display.clear(WHITE).ok();

            // Advance the spinner every 8 frames (~130ms) for a calm spin
            spinner_frame = spinner_frame.wrapping_add(1);
            if spinner_frame.is_multiple_of(8) {
                spinner_idx = (spinner_idx + 1) % spinner_chars.len();
            }

            Text::with_text_style("Watch Level", TITLE_POS, TITLE_STYLE, CENTERED)
                .draw(display)
                .ok();

            Line::new(LINE_START, LINE_END)
                .into_styled(DIVIDER_STYLE)
                .draw(display)
                .ok();

            // Console lines, latest marked with ">"
            for (i, line) in console_lines.iter().enumerate() {
                let y_pos = CONSOLE_START_Y + (i as i32 * CONSOLE_LINE_HEIGHT);
                let prefix = if i == console_lines.len() - 1 { "> " } else { "  " };
                let mut full_line: String<64> = String::new();
                let _ = write!(full_line, "{prefix}{line}");
                Text::with_text_style(&full_line, Point::new(CONSOLE_X, y_pos), CONSOLE_STYLE, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
            }

            let mut spinner_text: String<4> = String::new();
            let _ = write!(spinner_text, "{}", spinner_chars[spinner_idx]);
            Text::with_text_style(&spinner_text, SPINNER_POS, CONSOLE_STYLE, CENTERED)
                .draw(display)
                .ok();

            window.update(display);
            thread::sleep(Duration::from_millis(16));
        }
    }

    // Brief pause after "Ready." before the level face appears
    thread::sleep(Duration::from_millis(400));
    true
}
