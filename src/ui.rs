//! Menu buttons and screen layout
//!
//! Buttons are plain rectangles with a hover flag; positions are fixed for the
//! 500 × 500 screen.

use glam::Vec2;

use crate::sim::Rect;

/// Fixed screen positions and button rectangles
pub mod layout {
    use super::Rect;

    pub const TITLE_AT: (f32, f32) = (38.0, 40.0);
    pub const THUNDER_AT: (f32, f32) = (200.0, 50.0);
    pub const START_BUTTON: Rect = Rect::new(178.0, 120.0, 144.0, 60.0);
    pub const HOW_TO_PLAY_BUTTON: Rect = Rect::new(117.0, 240.0, 266.0, 60.0);
    pub const HOW_TO_PLAY_SCROLL: Rect = Rect::new(50.0, 10.0, 400.0, 480.0);

    pub const GAME_BACKGROUND_AT: (f32, f32) = (0.0, -500.0);
    pub const PAUSE_BUTTON: Rect = Rect::new(400.0, 15.0, 64.0, 64.0);
    pub const RESUME_BUTTON: Rect = Rect::new(188.0, 140.0, 124.0, 124.0);
    pub const PAUSED_QUIT_BUTTON: Rect = Rect::new(160.0, 320.0, 180.0, 64.0);
    /// Score text is centered `SCORE_FROM_BOTTOM` above the bottom edge
    pub const SCORE_FROM_BOTTOM: f32 = 470.0;
    pub const SCORE_SIZE: u16 = 50;
    pub const SCORE_COLOR: [u8; 3] = [204, 204, 0];

    pub const YOUR_SCORE_AT: (f32, f32) = (88.0, 40.0);
    pub const GAME_OVER_QUIT_BUTTON: Rect = Rect::new(160.0, 380.0, 180.0, 64.0);
    pub const REPLAY_BUTTON: Rect = Rect::new(140.0, 287.0, 220.0, 64.0);
    pub const FINAL_SCORE_SIZE: u16 = 100;
    pub const FINAL_SCORE_COLOR: [u8; 3] = [0, 153, 51];
}

/// Turn a layout tuple into a position
pub fn at(pos: (f32, f32)) -> Vec2 {
    Vec2::new(pos.0, pos.1)
}

/// A clickable rectangle that remembers whether the pointer is over it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub hovered: bool,
}

impl Button {
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            hovered: false,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.rect.contains_point(p)
    }

    /// Update hover state from a pointer position
    pub fn track(&mut self, p: Vec2) {
        self.hovered = self.contains(p);
    }

    pub fn top_left(&self) -> Vec2 {
        self.rect.top_left()
    }
}
