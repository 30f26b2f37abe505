//! The playing field, with a pause overlay
//!
//! Movement and contacts run during input processing; scrolling, spawning and
//! the fall check run during update. While paused neither runs and only the
//! pause overlay's buttons respond.

use glam::Vec2;

use super::{Scene, SceneKind, Transition};
use crate::Screen;
use crate::app::Context;
use crate::audio::{AudioCue, SoundEffect};
use crate::consts::*;
use crate::input::{InputEvent, KeyState};
use crate::renderer::{Canvas, Sprite};
use crate::sim::{self, GameState, TickReport};
use crate::ui::{self, Button, layout};

pub struct Game {
    state: GameState,
    paused: bool,
    pause: Button,
    resume: Button,
    quit: Button,
    next: Option<Transition>,
}

impl Game {
    pub fn new(seed: u64, screen: Screen) -> Self {
        log::info!("New run with seed {}", seed);
        Self {
            state: GameState::new(seed, screen),
            paused: false,
            pause: Button::new(layout::PAUSE_BUTTON),
            resume: Button::new(layout::RESUME_BUTTON),
            quit: Button::new(layout::PAUSED_QUIT_BUTTON),
            next: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Turn simulation events into sounds, pacing and transitions
    fn react(&mut self, report: TickReport, ctx: &mut Context) {
        if report.landed {
            ctx.cap_fps(JUMP_FPS_CAP);
        }
        if report.jumped {
            ctx.play(AudioCue::play(SoundEffect::Jump));
        }
        if let Some(cause) = report.ended {
            log::info!(
                "Run ended ({:?}) with score {} after {} ticks",
                cause,
                self.state.score,
                self.state.time_ticks
            );
            self.next = Some(Transition::GameOver {
                score: self.state.score,
            });
        }
    }

    fn render_playing(&self, canvas: &mut Canvas) {
        let screen = self.state.screen;
        canvas.blit(Sprite::GameBackground, ui::at(layout::GAME_BACKGROUND_AT));
        for plat in &self.state.platforms.safe {
            canvas.blit_scaled(Sprite::SafePlatform, *plat);
        }
        for plat in &self.state.platforms.hazard {
            canvas.blit_scaled(Sprite::HazardPlatform, *plat);
        }
        canvas.blit(Sprite::PauseButton, self.pause.top_left());
        canvas.text(
            self.state.score.to_string(),
            layout::SCORE_SIZE,
            layout::SCORE_COLOR,
            Vec2::new(screen.width / 2.0, screen.height - layout::SCORE_FROM_BOTTOM),
        );
        canvas.blit(Sprite::Player(self.state.player.pose()), self.state.player.pos);
    }

    fn render_paused(&self, canvas: &mut Canvas) {
        canvas.blit(Sprite::GameBackground, Vec2::ZERO);
        canvas.blit(Sprite::Title, ui::at(layout::TITLE_AT));
        canvas.blit(
            Sprite::QuitButton {
                hovered: self.quit.hovered,
            },
            self.quit.top_left(),
        );
        canvas.blit(Sprite::ResumeButton, self.resume.top_left());
    }
}

impl Scene for Game {
    fn kind(&self) -> SceneKind {
        SceneKind::Game
    }

    fn process_input(&mut self, events: &[InputEvent], keys: KeyState, ctx: &mut Context) {
        if !self.paused {
            let report = sim::apply_input(&mut self.state, keys);
            self.react(report, ctx);
            for event in events {
                if let InputEvent::PointerDown(p) = *event {
                    if self.pause.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        self.paused = true;
                        log::debug!("Paused at score {}", self.state.score);
                    }
                }
            }
            return;
        }

        for event in events {
            match *event {
                InputEvent::PointerMoved(p) => self.quit.track(p),
                InputEvent::PointerDown(p) => {
                    if self.resume.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        self.paused = false;
                        log::debug!("Resumed");
                    }
                    if self.quit.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        self.next = Some(Transition::Home);
                    }
                }
                InputEvent::Quit => {}
            }
        }
    }

    fn update(&mut self, ctx: &mut Context) {
        if self.paused {
            return;
        }
        let report = sim::advance(&mut self.state);
        self.react(report, ctx);
    }

    fn render(&self, canvas: &mut Canvas) {
        if self.paused {
            self.render_paused(canvas);
        } else {
            self.render_playing(canvas);
        }
        canvas.present();
    }

    fn score(&self) -> Option<u64> {
        Some(self.state.score)
    }

    fn take_transition(&mut self) -> Option<Transition> {
        self.next.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use crate::sim::Rect;

    fn game() -> (Game, Context) {
        (
            Game::new(2024, Screen::default()),
            Context::new(Screen::default(), 9),
        )
    }

    fn click(rect: Rect) -> [InputEvent; 1] {
        [InputEvent::PointerDown(rect.center())]
    }

    #[test]
    fn test_fall_requests_game_over_with_score() {
        let (mut game, mut ctx) = game();
        game.state_mut().score = 730;
        game.state_mut().player.pos.y = 500.0;
        game.update(&mut ctx);
        assert_eq!(
            game.take_transition(),
            Some(Transition::GameOver { score: 730 })
        );
    }

    #[test]
    fn test_hazard_requests_game_over() {
        let (mut game, mut ctx) = game();
        let state = game.state_mut();
        state.platforms.hazard = vec![Rect::new(240.0, 200.0, 60.0, 20.0)];
        state.player.pos.y = 170.0;
        state.player.vel.y = 2.0;
        state.score = 50;
        game.process_input(&[], KeyState::NONE, &mut ctx);
        assert_eq!(
            game.take_transition(),
            Some(Transition::GameOver { score: 50 })
        );
    }

    #[test]
    fn test_jump_plays_sound_and_caps_frame_rate() {
        let (mut game, mut ctx) = game();
        let up = KeyState {
            up: true,
            ..KeyState::NONE
        };
        game.process_input(&[], up, &mut ctx);
        let frame = ctx.take_frame();
        assert!(frame.sounds.contains(&AudioCue::play(SoundEffect::Jump)));
        assert_eq!(frame.pacing.fps_cap, Some(JUMP_FPS_CAP));
        assert_eq!(game.state().player.vel.y, JUMP_VELOCITY);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let (mut game, mut ctx) = game();
        game.process_input(&click(layout::PAUSE_BUTTON), KeyState::NONE, &mut ctx);
        assert!(game.is_paused());

        let pos = game.state().player.pos;
        let ticks = game.state().time_ticks;
        let right = KeyState {
            right: true,
            ..KeyState::NONE
        };
        for _ in 0..10 {
            game.process_input(&[], right, &mut ctx);
            game.update(&mut ctx);
        }
        assert_eq!(game.state().player.pos, pos);
        assert_eq!(game.state().time_ticks, ticks);

        let mut canvas = Canvas::new();
        game.render(&mut canvas);
        assert_eq!(canvas.blits_where(|s| *s == Sprite::ResumeButton).count(), 1);
        assert_eq!(canvas.blits_where(|s| *s == Sprite::SafePlatform).count(), 0);

        game.process_input(&click(layout::RESUME_BUTTON), KeyState::NONE, &mut ctx);
        assert!(!game.is_paused());
        assert_eq!(game.take_transition(), None);
    }

    #[test]
    fn test_quit_from_pause_goes_home() {
        let (mut game, mut ctx) = game();
        game.process_input(&click(layout::PAUSE_BUTTON), KeyState::NONE, &mut ctx);
        game.process_input(&click(layout::PAUSED_QUIT_BUTTON), KeyState::NONE, &mut ctx);
        assert_eq!(game.take_transition(), Some(Transition::Home));
    }

    #[test]
    fn test_render_draws_field_and_score() {
        let (game, _ctx) = game();
        let mut canvas = Canvas::new();
        game.render(&mut canvas);

        let safe = canvas.blits_where(|s| *s == Sprite::SafePlatform).count();
        let hazard = canvas.blits_where(|s| *s == Sprite::HazardPlatform).count();
        assert_eq!(safe, game.state().platforms.safe.len());
        assert_eq!(hazard, game.state().platforms.hazard.len());
        let score = canvas.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, center, .. } => Some((text.as_str(), *center)),
            _ => None,
        });
        assert_eq!(score, Some(("0", Vec2::new(250.0, 30.0))));
        assert!(canvas.is_presented());
    }
}
