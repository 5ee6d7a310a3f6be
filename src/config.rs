//! Application configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! All face geometry (disc position, gauge bar midpoints, bubble rest
//! position) is derived at compile time from the base constants, avoiding
//! per-frame arithmetic in the render loop. The numbers describe a 144x168
//! watch display with a 94 px level disc and two 89 px gauge bars.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (classic 144x168 watch screen).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Simulator window scale factor (144x168 is tiny on a desktop).
pub const WINDOW_SCALE: u32 = 3;

// =============================================================================
// Sensor Configuration
// =============================================================================

/// Samples delivered per accelerometer burst. The aggregator averages the
/// whole burst before any angle or position extraction.
pub const SAMPLES_PER_BURST: usize = 5;

/// Accelerometer sampling rate in Hz. With 5-sample bursts this means one
/// burst every 100 ms, which sets the cadence of the whole pipeline.
pub const SAMPLING_RATE_HZ: u32 = 50;

/// Raw milli-g per disc pixel. Divides the +-1000 milli-g rest range down
/// to the 41 px practical radius (1000 / 24 = 41).
pub const MILLI_G_PER_PIXEL: i16 = 24;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames between sensor bursts. 5 frames at 50 FPS = 100 ms, matching the
/// 50 Hz / 5-sample burst cadence.
pub const BURST_INTERVAL_FRAMES: u32 = 5;

/// Duration of each bubble/gauge slide transition.
pub const ANIM_DURATION: Duration = Duration::from_millis(100);

/// How long the backlight stays on after the primary action. A new press
/// re-arms the deadline rather than stacking a second shutoff.
pub const BACKLIGHT_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Level Face Geometry
// =============================================================================

/// Bubble square size in pixels (the bubble sprite is 12x12).
pub const BOX_SIZE: u32 = 12;

/// Gauge bubble size: 8 px across the travel axis, 20 px along the bar
/// normal. The y gauge uses the same size with width/height swapped.
pub const GAUGE_BUBBLE_W: u32 = 8;
pub const GAUGE_BUBBLE_H: u32 = 20;

/// Drawn disc diameter.
pub const DIAMETER: u32 = 94;

/// Usable disc radius: drawn radius minus border and bubble width. The
/// bubble center never leaves a circle of this radius.
pub const PRACTICAL_RADIUS: i16 = 41;

/// Disc left margin on screen.
pub const MARGIN: i16 = 37;

/// Disc top margin on screen.
pub const LINE_LEVEL: i16 = 35;

/// Length of the x/y gauge bars.
pub const BAR_PIXELS: i16 = 89;

/// Start of the x gauge bar along the x axis.
pub const BAR_X_START: i16 = 9;

/// Start of the y gauge bar along the y axis.
pub const BAR_Y_START: i16 = 34;

/// Fixed y of the x-gauge bubble (it only travels horizontally).
pub const X_GAUGE_Y: i32 = 5;

/// Fixed x of the y-gauge bubble (it only travels vertically).
pub const Y_GAUGE_X: i32 = 8;

// =============================================================================
// Derived Geometry (compile-time)
// =============================================================================

/// Midpoint of the x gauge bar: where the bubble sits at 0 degrees.
pub const BAR_X_MID: i32 = (BAR_PIXELS / 2 + BAR_X_START) as i32;

/// Midpoint of the y gauge bar.
pub const BAR_Y_MID: i32 = (BAR_PIXELS / 2 + BAR_Y_START) as i32;

/// Disc center on screen. The bubble's top-left origin for a disc offset
/// (x, y) is (x + PRACTICAL_RADIUS + MARGIN, y + PRACTICAL_RADIUS + LINE_LEVEL),
/// so a zero offset centers the bubble here.
pub const DISC_CENTER_X: i32 = MARGIN as i32 + (DIAMETER / 2) as i32;
pub const DISC_CENTER_Y: i32 = LINE_LEVEL as i32 + (DIAMETER / 2) as i32;
