// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, i32->i16 casts for pixel math
#![allow(clippy::cast_precision_loss)] // i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Bubble level simulator for a 144x168 smartwatch display.
//!
//! The face shows three views of the watch's attitude, all fed by the same
//! accelerometer pipeline:
//! - A circular level disc with a free-roaming bubble (both axes at once)
//! - Two single-axis gauge bars along the top and left edges
//! - Numeric angle readouts in whole degrees
//!
//! Sensor data arrives as 5-sample bursts at 50 Hz. Each burst is averaged,
//! converted to disc pixels and per-axis angles via a fixed-point
//! arctangent, corrected by the one-shot calibration offset, and clamped to
//! the disc. The bubbles then glide to their new spots over 100 ms with an
//! ease-in/ease-out curve, so the 10 Hz sensor cadence reads as continuous
//! motion at 50 FPS.
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key | Action |
//! |--------|-----|--------|
//! | Select | `S` | Backlight on for 30 s (re-arms on repeat press) |
//! | Down   | `C` | Toggle calibration (snapshot / clear offset) |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────┐
//! │ ────────┼──────── x gauge   │
//! │ │                     -12   │  angle readout
//! │ │      ╭─────────╮          │
//! │ ┼      │    +    │          │  94px level disc,
//! │ │      │  (o)    │          │  bubble on a 41px
//! │ │      ╰─────────╯          │  practical radius
//! │ y gauge                     │
//! │   7        Calibrate        │  readout + status
//! └─────────────────────────────┘
//! ```

mod animations;
mod backlight;
mod colors;
mod config;
mod level;
mod screens;
mod sensor;
mod styles;
mod trig;
mod widgets;

use std::thread;
use std::time::Instant;

use animations::SlideTransition;
use backlight::Backlight;
use colors::{UNLIT, WHITE};
use config::{BURST_INTERVAL_FRAMES, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use level::LevelController;
use screens::run_loading_screen;
use sensor::TiltSignal;
use widgets::{
    draw_angle_readouts,
    draw_bubble,
    draw_face,
    draw_gauge_bubble_x,
    draw_gauge_bubble_y,
    draw_status_label,
};

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Watch Level", &output_settings);

    // Initial clear before the boot sequence
    display.clear(WHITE).ok();
    window.update(&display);

    // Returns false if the user closes the window during boot
    if !run_loading_screen(&mut display, &mut window) {
        return;
    }

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut signal = TiltSignal::new();
    let mut controller = LevelController::new();
    let mut backlight = Backlight::new();

    // Seed the pipeline with one burst so the readouts have text and the
    // transitions have real geometry before the first in-loop burst
    let mut frame = controller.on_sensor_burst(&signal.next_burst());

    // One transition per moving element, parked at the seeded geometry
    let mut bubble_slide = SlideTransition::new(frame.bubble_origin);
    let mut gauge_x_slide = SlideTransition::new(frame.gauge_x_origin);
    let mut gauge_y_slide = SlideTransition::new(frame.gauge_y_origin);

    // Frame counter drives the burst cadence (wraps to avoid overflow)
    let mut frame_count = 0u32;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, button presses)
        // Button mapping (matches the physical watch buttons):
        //   S - Select: backlight on
        //   C - Down: calibration toggle
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => backlight.turn_on(Instant::now()),
                        Keycode::C => {
                            controller.on_calibrate_toggle();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Backlight shutoff is deadline-based, polled once per frame
        backlight.poll(Instant::now());

        // ======================================================================
        // Sensor Burst (every 5th frame = 100 ms at 50 FPS)
        // ======================================================================

        if frame_count.is_multiple_of(BURST_INTERVAL_FRAMES) {
            frame = controller.on_sensor_burst(&signal.next_burst());
            bubble_slide.retarget(frame.bubble_origin);
            gauge_x_slide.retarget(frame.gauge_x_origin);
            gauge_y_slide.retarget(frame.gauge_y_origin);
        }

        // ======================================================================
        // Rendering (full repaint, everything animates continuously)
        // ======================================================================

        let backdrop = if backlight.is_on() { WHITE } else { UNLIT };
        draw_face(&mut display, backdrop);

        draw_bubble(&mut display, bubble_slide.position());
        draw_gauge_bubble_x(&mut display, gauge_x_slide.position());
        draw_gauge_bubble_y(&mut display, gauge_y_slide.position());

        draw_angle_readouts(&mut display, &frame.angle_x_text, &frame.angle_y_text);
        draw_status_label(&mut display, controller.is_calibrated());

        window.update(&display);

        frame_count = frame_count.wrapping_add(1);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{BAR_X_MID, BAR_Y_MID, LINE_LEVEL, MARGIN, PRACTICAL_RADIUS, X_GAUGE_Y, Y_GAUGE_X};

    // -------------------------------------------------------------------------
    // Rest Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_rest_geometry_is_consistent() {
        // A level attitude parks every element at its geometric rest point
        let mut controller = LevelController::new();
        let frame = controller.on_sensor_burst(&[sensor::AccelSample::new(0, 0, 1000)]);

        assert_eq!(
            frame.bubble_origin,
            Point::new(i32::from(PRACTICAL_RADIUS + MARGIN), i32::from(PRACTICAL_RADIUS + LINE_LEVEL)),
        );
        assert_eq!(frame.gauge_x_origin, Point::new(BAR_X_MID, X_GAUGE_Y));
        assert_eq!(frame.gauge_y_origin, Point::new(Y_GAUGE_X, BAR_Y_MID));
    }

    #[test]
    fn test_simulated_signal_stays_on_disc() {
        // Whatever the fake signal produces, the pipeline must keep the
        // bubble origin inside the screen
        let mut signal = TiltSignal::new();
        let mut controller = LevelController::new();

        for _ in 0..500 {
            let frame = controller.on_sensor_burst(&signal.next_burst());
            let x = frame.bubble_origin.x;
            let y = frame.bubble_origin.y;
            assert!((0..SCREEN_WIDTH as i32).contains(&x), "bubble x {x} off screen");
            assert!((0..SCREEN_HEIGHT as i32).contains(&y), "bubble y {y} off screen");
        }
    }
}
