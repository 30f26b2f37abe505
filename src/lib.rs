//! Jungle Jumper - A vertical platform-jumping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, platforms, collisions, scroll)
//! - `scene`: Home / Game / GameOver state machine
//! - `app`: Game loop driver
//! - `platform`: Frontend abstraction (input in, frames out)
//! - `renderer`: Draw commands produced by scenes
//! - `tuning`: Difficulty thresholds

pub mod app;
pub mod audio;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::{App, Context, Frame, TickOutcome};
pub use input::{InputBatch, InputEvent, KeyState};
pub use platform::{Frontend, FrontendError};

use serde::{Deserialize, Serialize};

/// Window title used by [`start`]
pub const WINDOW_TITLE: &str = "Jungle Jumper";

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Start position is `(width / 2, height - PLAYER_START_LIFT)`
    pub const PLAYER_START_LIFT: f32 = 40.0;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 0.8;
    /// Horizontal acceleration while a direction key is held
    pub const RUN_ACCEL: f32 = 0.7;
    /// Linear drag on horizontal speed
    pub const RUN_FRICTION: f32 = -0.12;
    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f32 = -20.0;
    /// Where a left-edge wrap lands, measured in from the right edge
    pub const WRAP_EDGE_INSET: f32 = 1.0;

    /// Scroll starts when the player's top is at or above this share of the screen
    pub const SCROLL_THRESHOLD: f32 = 0.25;
    pub const SCORE_PER_SCROLL: u64 = 10;

    /// Generated platform height
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Minimum field sizes after replenish
    pub const MIN_SAFE_PLATFORMS: usize = 6;
    pub const MIN_HAZARD_PLATFORMS: usize = 4;
    /// New platforms spawn with y in `[SPAWN_BAND_TOP, 0)`
    pub const SPAWN_BAND_TOP: i32 = -40;
    /// Minimum vertical gap between a new platform and any safe platform
    pub const SPAWN_SEPARATION: f32 = 20.0;
    /// Rejection-sampling budget for one spawn
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    /// Animation frame counts
    pub const RUN_FRAMES: u8 = 8;
    pub const IDLE_FRAMES: u8 = 12;
    pub const HOME_BACKGROUND_FRAMES: u8 = 8;
    /// Thunder frame is picked from `0..=HOME_THUNDER_MAX`
    pub const HOME_THUNDER_MAX: u8 = 8;

    /// Frame pacing requests
    pub const HOME_FRAME_DELAY_MS: u64 = 100;
    pub const JUMP_FPS_CAP: u32 = 45;

    /// Loop count for the home screen music
    pub const HOME_MUSIC_LOOPS: u32 = 10;
}

/// Screen dimensions handed to everything that needs them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: consts::SCREEN_WIDTH,
            height: consts::SCREEN_HEIGHT,
        }
    }
}

impl Screen {
    /// Y coordinate at which scrolling kicks in
    #[inline]
    pub fn scroll_line(&self) -> f32 {
        self.height * consts::SCROLL_THRESHOLD
    }
}

/// Wrap a horizontal coordinate into `[0, width)`.
///
/// Crossing the right edge (inclusive) lands at 0, crossing the left edge
/// lands just inside the right edge.
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    if x >= width {
        0.0
    } else if x < 0.0 {
        (width - consts::WRAP_EDGE_INSET).max(0.0)
    } else {
        x
    }
}

/// Run the game with the headless frontend until it quits.
pub fn start() -> Result<(), FrontendError> {
    let seed = platform::clock_seed();
    let mut app = App::new(WINDOW_TITLE, Screen::default(), seed);
    let mut frontend = platform::HeadlessFrontend::default();
    app.run(&mut frontend)
}
