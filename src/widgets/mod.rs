//! Widget components for the level face.
//!
//! - [`face`]: static artwork - disc outline, gauge bars, center ticks
//! - [`bubbles`]: the moving parts - main bubble and the two gauge bubbles
//! - [`readouts`]: angle numbers and the calibration status label
//!
//! Everything redraws every frame: the bubbles animate continuously, so
//! the face underneath them must be repainted anyway, and at 144x168 the
//! full repaint is far below the frame budget.

mod bubbles;
mod face;
mod readouts;

pub use bubbles::{draw_bubble, draw_gauge_bubble_x, draw_gauge_bubble_y};
pub use face::draw_face;
pub use readouts::{draw_angle_readouts, draw_status_label};
