//! Platform field: safe and hazard platforms plus the endless generator
//!
//! New platforms appear in a thin band just above the visible area and are
//! kept vertically apart from every safe platform so spawns never stack.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::Screen;
use crate::consts::*;
use crate::tuning::DifficultyTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Can be landed on
    Safe,
    /// Ends the run on contact
    Hazard,
}

impl PlatformKind {
    pub fn min_count(&self) -> usize {
        match self {
            PlatformKind::Safe => MIN_SAFE_PLATFORMS,
            PlatformKind::Hazard => MIN_HAZARD_PLATFORMS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformField {
    pub safe: Vec<Rect>,
    pub hazard: Vec<Rect>,
    #[serde(skip)]
    tuning: DifficultyTuning,
}

impl PlatformField {
    pub fn new(safe: Vec<Rect>, hazard: Vec<Rect>) -> Self {
        Self {
            safe,
            hazard,
            tuning: DifficultyTuning::default(),
        }
    }

    /// Opening layout: a full-width floor under the player and a few ledges
    pub fn starting_layout(screen: Screen) -> Self {
        let (w, h) = (screen.width, screen.height);
        let safe = vec![
            Rect::new(0.0, h - PLAYER_START_LIFT, w, PLAYER_START_LIFT),
            Rect::new(w / 2.0, h * 0.7, 120.0, PLATFORM_HEIGHT),
            Rect::new(125.0, 190.0, 100.0, PLATFORM_HEIGHT),
            Rect::new(320.0, 120.0, 100.0, PLATFORM_HEIGHT),
            Rect::new(175.0, 60.0, 50.0, PLATFORM_HEIGHT),
        ];
        let hazard = vec![
            Rect::new(80.0, 400.0, 100.0, PLATFORM_HEIGHT),
            Rect::new(300.0, 50.0, 80.0, PLATFORM_HEIGHT),
        ];
        Self::new(safe, hazard)
    }

    /// Move every platform down by `dy` and drop the ones whose top reached
    /// `bottom`. Returns the number removed.
    pub fn scroll(&mut self, dy: f32, bottom: f32) -> usize {
        let before = self.safe.len() + self.hazard.len();
        self.safe = shift_and_cull(&self.safe, dy, bottom);
        self.hazard = shift_and_cull(&self.hazard, dy, bottom);
        before - (self.safe.len() + self.hazard.len())
    }

    /// Top both fields back up to their minimum counts
    pub fn replenish(&mut self, score: u64, rng: &mut Pcg32, screen: Screen) {
        while self.safe.len() < PlatformKind::Safe.min_count() {
            let plat = self.spawn(PlatformKind::Safe, score, rng, screen);
            self.safe.push(plat);
        }
        while self.hazard.len() < PlatformKind::Hazard.min_count() {
            let plat = self.spawn(PlatformKind::Hazard, score, rng, screen);
            self.hazard.push(plat);
        }
    }

    fn spawn(&self, kind: PlatformKind, score: u64, rng: &mut Pcg32, screen: Screen) -> Rect {
        let (min_w, max_w) = self.tuning.width_range(kind, score);
        let width = rng.random_range(min_w..max_w);
        let y = self.spawn_y(rng);
        // Keep at least one x candidate on screens narrower than the platform
        let max_x = (screen.width as i32 - width).max(1);
        let x = rng.random_range(0..max_x);

        log::debug!("Spawned {:?} platform at ({}, {}) width {}", kind, x, y, width);
        Rect::new(x as f32, y, width as f32, PLATFORM_HEIGHT)
    }

    /// Pick a spawn y that keeps clear of every safe platform
    fn spawn_y(&self, rng: &mut Pcg32) -> f32 {
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let y = rng.random_range(SPAWN_BAND_TOP..0) as f32;
            if self.clear_of_safe(y) {
                return y;
            }
        }

        // Band is saturated: stack above the highest safe platform instead
        let highest = self
            .safe
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        let y = (SPAWN_BAND_TOP as f32).min(highest - SPAWN_SEPARATION);
        log::warn!("Spawn band saturated, placing platform at y={}", y);
        y
    }

    fn clear_of_safe(&self, y: f32) -> bool {
        self.safe.iter().all(|p| (y - p.y).abs() >= SPAWN_SEPARATION)
    }
}

fn shift_and_cull(plats: &[Rect], dy: f32, bottom: f32) -> Vec<Rect> {
    plats
        .iter()
        .map(|p| p.shifted_down(dy))
        .filter(|p| p.top() < bottom)
        .collect()
}
