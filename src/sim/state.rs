//! Game state for a single run
//!
//! Everything a run needs lives here and is discarded with it; a new run always
//! starts from `GameState::new`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::platforms::PlatformField;
use super::player::Player;
use crate::Screen;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndCause {
    /// Dropped below the bottom of the screen
    Fell,
    /// Touched a hazard platform
    Hazard,
}

/// Complete state of one run (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub screen: Screen,
    pub player: Player,
    pub platforms: PlatformField,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of scroll ticks so far
    pub scroll_ticks: u64,
    #[serde(skip)]
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64, screen: Screen) -> Self {
        let mut state = Self {
            seed,
            screen,
            player: Player::spawn(screen),
            platforms: PlatformField::starting_layout(screen),
            score: 0,
            time_ticks: 0,
            scroll_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.replenish();
        state
    }

    /// Top the platform fields back up for the current score
    pub fn replenish(&mut self) {
        self.platforms
            .replenish(self.score, &mut self.rng, self.screen);
    }

    /// The player's box has dropped to or past the bottom edge
    pub fn player_fell(&self) -> bool {
        self.player.bounds().top() >= self.screen.height
    }

    /// The player's box is in the top band that drives scrolling
    pub fn in_scroll_band(&self) -> bool {
        self.player.bounds().top() <= self.screen.scroll_line()
    }
}
