//! Per-tick input batches handed to the active scene

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A discrete input event (screen-space positions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close / quit request
    Quit,
    /// Pointer moved to a new position
    PointerMoved(Vec2),
    /// Primary button pressed at a position
    PointerDown(Vec2),
}

/// Snapshot of the keys the game cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    /// Jump
    pub up: bool,
}

impl KeyState {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        up: false,
    };

    /// Horizontal direction: -1 left, +1 right, 0 none.
    ///
    /// Left wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        }
    }
}

/// Everything collected from the frontend for one tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputBatch {
    pub events: Vec<InputEvent>,
    pub keys: KeyState,
}

impl InputBatch {
    pub fn new(events: Vec<InputEvent>, keys: KeyState) -> Self {
        Self { events, keys }
    }

    /// Batch with only held keys
    pub fn keys(keys: KeyState) -> Self {
        Self {
            events: Vec::new(),
            keys,
        }
    }

    /// Batch with a single click
    pub fn click(at: Vec2) -> Self {
        Self {
            events: vec![InputEvent::PointerDown(at)],
            keys: KeyState::NONE,
        }
    }

    pub fn quit() -> Self {
        Self {
            events: vec![InputEvent::Quit],
            keys: KeyState::NONE,
        }
    }

    pub fn wants_quit(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_wins_when_both_held() {
        let keys = KeyState {
            left: true,
            right: true,
            up: false,
        };
        assert_eq!(keys.horizontal(), -1);
    }

    #[test]
    fn test_wants_quit() {
        assert!(InputBatch::quit().wants_quit());
        assert!(!InputBatch::click(Vec2::ZERO).wants_quit());
    }
}
