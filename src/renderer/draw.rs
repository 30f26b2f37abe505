//! Draw commands
//!
//! Scenes describe a frame as an ordered list of blits and text; the frontend
//! owns the images and fonts and does the actual rasterization.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Pose, Rect};

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    /// Animated home background, frame 0..8
    HomeBackground(u8),
    /// Thunder overlay, frame 0..=8
    Thunder(u8),
    Title,
    StartButton { hovered: bool },
    HowToPlayButton { hovered: bool },
    HowToPlayScroll,
    GameBackground,
    PauseButton,
    ResumeButton,
    QuitButton { hovered: bool },
    ReplayButton { hovered: bool },
    YourScore,
    SafePlatform,
    HazardPlatform,
    Player(Pose),
}

/// RGB text color
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Image at its native size, top-left at `at`
    Blit { sprite: Sprite, at: Vec2 },
    /// Image scaled into `rect`
    BlitScaled { sprite: Sprite, rect: Rect },
    /// Text centered on `center`
    Text {
        text: String,
        size: u16,
        color: Rgb,
        center: Vec2,
    },
    /// End of frame
    Present,
}

/// Ordered draw list for one frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Canvas {
    pub commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blit(&mut self, sprite: Sprite, at: Vec2) {
        self.commands.push(DrawCommand::Blit { sprite, at });
    }

    pub fn blit_scaled(&mut self, sprite: Sprite, rect: Rect) {
        self.commands.push(DrawCommand::BlitScaled { sprite, rect });
    }

    pub fn text(&mut self, text: impl Into<String>, size: u16, color: Rgb, center: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            size,
            color,
            center,
        });
    }

    pub fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }

    pub fn is_presented(&self) -> bool {
        matches!(self.commands.last(), Some(DrawCommand::Present))
    }

    /// All blits of a sprite matching `pred`, in draw order
    pub fn blits_where(
        &self,
        pred: impl Fn(&Sprite) -> bool,
    ) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| match c {
            DrawCommand::Blit { sprite, .. } | DrawCommand::BlitScaled { sprite, .. } => {
                pred(sprite)
            }
            _ => false,
        })
    }
}
