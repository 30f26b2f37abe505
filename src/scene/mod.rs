//! Scene state machine
//!
//! Home → Game → GameOver → Home | Game. Each scene runs its own
//! input/update/render cycle and may request a transition; the driver only
//! looks at the request after the scene has rendered, so a scene always
//! finishes the tick in which it asked to leave.

pub mod game;
pub mod game_over;
pub mod home;

pub use game::Game;
pub use game_over::GameOver;
pub use home::Home;

use serde::Serialize;

use crate::app::Context;
use crate::input::{InputEvent, KeyState};
use crate::renderer::Canvas;

/// Which scene is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SceneKind {
    Home,
    Game,
    GameOver,
}

/// A requested switch to another scene. The driver builds the new scene, so
/// every successor starts from a clean instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    Home,
    /// Fresh run, score 0
    Game,
    /// Carries only the final score
    GameOver { score: u64 },
}

impl Transition {
    pub fn kind(&self) -> SceneKind {
        match self {
            Transition::Home => SceneKind::Home,
            Transition::Game => SceneKind::Game,
            Transition::GameOver { .. } => SceneKind::GameOver,
        }
    }

    /// Build the scene this transition points at
    pub fn into_scene(self, ctx: &mut Context) -> Box<dyn Scene> {
        match self {
            Transition::Home => Box::new(Home::new(ctx)),
            Transition::Game => Box::new(Game::new(ctx.next_seed(), ctx.screen)),
            Transition::GameOver { score } => Box::new(GameOver::new(score, ctx)),
        }
    }
}

/// One top-level game mode
pub trait Scene {
    fn kind(&self) -> SceneKind;

    fn process_input(&mut self, _events: &[InputEvent], _keys: KeyState, _ctx: &mut Context) {}

    fn update(&mut self, _ctx: &mut Context) {}

    fn render(&self, _canvas: &mut Canvas) {}

    /// Current score, for scenes that have one
    fn score(&self) -> Option<u64> {
        None
    }

    /// Hand the pending transition (if any) to the driver
    fn take_transition(&mut self) -> Option<Transition>;
}
