//! Platform abstraction layer
//!
//! Adapters between the host's window/event loop and the session:
//! - `input`: key and mouse events -> latched paddle direction, quit, level pick
//! - `time`: millisecond tick counter -> per-frame delta in seconds

pub mod input;
pub mod time;

pub use input::{InputEvent, InputState, Key, MouseButton, menu_click_level};
pub use time::FrameClock;
