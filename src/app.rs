//! Game loop driver
//!
//! Owns the active scene and the per-run `Context`. Each tick pumps one input
//! batch through `process_input → update → render`, hands the finished frame to
//! the frontend and then switches scenes if the active one asked to.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::Screen;
use crate::audio::AudioCue;
use crate::input::InputBatch;
use crate::platform::{Frontend, FrontendError};
use crate::renderer::Canvas;
use crate::scene::{Home, Scene, SceneKind};

/// Frame-pacing requests for the frontend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pacing {
    /// Sleep this long before the next tick
    pub delay_ms: Option<u64>,
    /// Do not run faster than this many frames per second
    pub fps_cap: Option<u32>,
}

/// Everything a tick produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub canvas: Canvas,
    pub sounds: Vec<AudioCue>,
    pub pacing: Pacing,
}

/// Handle passed to scenes: screen size, output buffers and a seed source
pub struct Context {
    pub screen: Screen,
    sounds: Vec<AudioCue>,
    pacing: Pacing,
    seeds: Pcg32,
}

impl Context {
    pub fn new(screen: Screen, seed: u64) -> Self {
        Self {
            screen,
            sounds: Vec::new(),
            pacing: Pacing::default(),
            seeds: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn play(&mut self, cue: AudioCue) {
        self.sounds.push(cue);
    }

    pub fn delay(&mut self, ms: u64) {
        self.pacing.delay_ms = Some(ms);
    }

    pub fn cap_fps(&mut self, fps: u32) {
        self.pacing.fps_cap = Some(fps);
    }

    /// Seed for a new scene's RNG
    pub fn next_seed(&mut self) -> u64 {
        self.seeds.random()
    }

    /// Collect the sounds and pacing requested since the last frame
    pub fn take_frame(&mut self) -> Frame {
        Frame {
            tick: 0,
            canvas: Canvas::new(),
            sounds: std::mem::take(&mut self.sounds),
            pacing: std::mem::take(&mut self.pacing),
        }
    }
}

/// Result of a single driver tick
#[derive(Debug)]
pub enum TickOutcome {
    /// A quit event arrived; nothing was dispatched
    Quit,
    Continue(Frame),
}

pub struct App {
    title: String,
    ctx: Context,
    scene: Box<dyn Scene>,
    ticks: u64,
}

impl App {
    /// Create the driver with the home screen active
    pub fn new(title: &str, screen: Screen, seed: u64) -> Self {
        log::info!("{} starting ({}x{}, seed {})", title, screen.width, screen.height, seed);
        let mut ctx = Context::new(screen, seed);
        let scene: Box<dyn Scene> = Box::new(Home::new(&mut ctx));
        Self {
            title: title.to_string(),
            ctx,
            scene,
            ticks: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn active(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    pub fn active_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    /// Run one tick for an input batch
    pub fn step(&mut self, batch: &InputBatch) -> TickOutcome {
        if batch.wants_quit() {
            return TickOutcome::Quit;
        }

        self.scene
            .process_input(&batch.events, batch.keys, &mut self.ctx);
        self.scene.update(&mut self.ctx);

        let mut frame = self.ctx.take_frame();
        self.scene.render(&mut frame.canvas);
        frame.tick = self.ticks;
        self.ticks += 1;

        if let Some(transition) = self.scene.take_transition() {
            log::info!("Scene {:?} -> {:?}", self.scene.kind(), transition.kind());
            self.scene = transition.into_scene(&mut self.ctx);
        }

        TickOutcome::Continue(frame)
    }

    /// Drive the game until the frontend sends a quit event
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<(), FrontendError> {
        loop {
            let batch = frontend.poll()?;
            match self.step(&batch) {
                TickOutcome::Quit => {
                    log::info!("Quit after {} ticks", self.ticks);
                    return Ok(());
                }
                TickOutcome::Continue(frame) => frontend.present(&frame)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;
    use crate::scene::Game;
    use crate::ui::layout;

    fn app() -> App {
        App::new("test", Screen::default(), 77)
    }

    fn expect_frame(outcome: TickOutcome) -> Frame {
        match outcome {
            TickOutcome::Continue(frame) => frame,
            TickOutcome::Quit => panic!("unexpected quit"),
        }
    }

    /// Home -> Game through the start button
    fn start_game(app: &mut App) {
        app.step(&InputBatch::click(layout::START_BUTTON.center()));
        assert_eq!(app.active_kind(), SceneKind::Game);
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.active_kind(), SceneKind::Home);
        assert_eq!(app.title(), "test");
    }

    #[test]
    fn test_quit_short_circuits_tick() {
        let mut app = app();
        let outcome = app.step(&InputBatch::quit());
        assert!(matches!(outcome, TickOutcome::Quit));
        assert_eq!(app.ticks(), 0);
    }

    #[test]
    fn test_start_click_switches_to_fresh_game() {
        let mut app = app();
        let frame = expect_frame(app.step(&InputBatch::click(layout::START_BUTTON.center())));
        // The home scene still rendered the tick in which it asked to leave
        assert!(frame.canvas.is_presented());
        assert_eq!(frame.pacing.delay_ms, Some(crate::consts::HOME_FRAME_DELAY_MS));
        assert_eq!(app.active_kind(), SceneKind::Game);
        assert_eq!(app.active().score(), Some(0));
    }

    #[test]
    fn test_fall_leads_to_game_over_then_replay() {
        let mut app = app();
        start_game(&mut app);

        // Never touch a key; stand still on the floor forever
        for _ in 0..20 {
            expect_frame(app.step(&InputBatch::keys(KeyState::NONE)));
        }
        assert_eq!(app.active_kind(), SceneKind::Game);

        // Replace the active scene with one about to fall
        let mut game = Game::new(1, Screen::default());
        game.state_mut().score = 1234;
        game.state_mut().platforms.safe.clear();
        game.state_mut().player.pos.y = 499.0;
        app.scene = Box::new(game);

        expect_frame(app.step(&InputBatch::keys(KeyState::NONE)));
        assert_eq!(app.active_kind(), SceneKind::GameOver);
        assert_eq!(app.active().score(), Some(1234));

        let frame = expect_frame(app.step(&InputBatch::click(layout::REPLAY_BUTTON.center())));
        assert!(frame.canvas.is_presented());
        assert_eq!(app.active_kind(), SceneKind::Game);
        assert_eq!(app.active().score(), Some(0));
    }

    #[test]
    fn test_game_over_quit_returns_home() {
        let mut app = app();
        app.scene = crate::scene::Transition::GameOver { score: 40 }.into_scene(&mut app.ctx);
        app.step(&InputBatch::click(layout::GAME_OVER_QUIT_BUTTON.center()));
        assert_eq!(app.active_kind(), SceneKind::Home);
    }

    #[test]
    fn test_tick_counter_in_frames() {
        let mut app = app();
        let first = expect_frame(app.step(&InputBatch::default()));
        let second = expect_frame(app.step(&InputBatch::default()));
        assert_eq!(first.tick, 0);
        assert_eq!(second.tick, 1);
    }
}
