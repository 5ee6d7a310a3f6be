//! Screens shown before the level face takes over.

mod loading;

pub use loading::run_loading_screen;
