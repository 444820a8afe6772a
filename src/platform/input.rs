//! Input event handling
//!
//! The host forwards raw events; `InputState` keeps the latched paddle
//! direction and hands the session one `FrameInput` per frame.

use crate::screen::FrameInput;
use crate::sim::{Direction, Level};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Raw events from the host window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window pixel coordinates, origin at the top-left
    MouseDown { button: MouseButton, x: i32, y: i32 },
    CloseRequested,
}

/// Level select buttons on the menu image: (level, top, bottom), all sharing
/// one horizontal span
const MENU_BUTTONS: [(Level, i32, i32); 3] = [
    (Level::One, 162, 235),
    (Level::Two, 258, 330),
    (Level::Three, 357, 428),
];
const MENU_BUTTON_LEFT: i32 = 112;
const MENU_BUTTON_RIGHT: i32 = 352;

/// Which level button (if any) a click on the level select screen landed on
pub fn menu_click_level(x: i32, y: i32) -> Option<Level> {
    if x <= MENU_BUTTON_LEFT || x >= MENU_BUTTON_RIGHT {
        return None;
    }
    MENU_BUTTONS
        .iter()
        .find(|(_, top, bottom)| y > *top && y < *bottom)
        .map(|(level, _, _)| *level)
}

/// Accumulated input between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    direction: Direction,
    quit: bool,
    selected: Option<Level>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Right | Key::D) => self.direction = Direction::Right,
            InputEvent::KeyDown(Key::Left | Key::A) => self.direction = Direction::Left,
            InputEvent::KeyUp(Key::Right | Key::D | Key::Left | Key::A) => {
                self.direction = Direction::Still
            }
            InputEvent::KeyUp(Key::Escape) | InputEvent::CloseRequested => self.quit = true,
            InputEvent::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                if let Some(level) = menu_click_level(x, y) {
                    self.selected = Some(level);
                }
            }
            _ => {}
        }
    }

    /// Current latched direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snapshot for this frame. The level pick is one-shot; direction and
    /// quit stay latched.
    pub fn take_frame_input(&mut self) -> FrameInput {
        FrameInput {
            quit: self.quit,
            direction: self.direction,
            select: self.selected.take(),
        }
    }
}
