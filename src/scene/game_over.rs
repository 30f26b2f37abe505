//! Final score with Replay and Quit

use glam::Vec2;

use super::{Scene, SceneKind, Transition};
use crate::Screen;
use crate::app::Context;
use crate::audio::{AudioCue, SoundEffect};
use crate::input::{InputEvent, KeyState};
use crate::renderer::{Canvas, Sprite};
use crate::ui::{self, Button, layout};

pub struct GameOver {
    score: u64,
    screen: Screen,
    quit: Button,
    replay: Button,
    next: Option<Transition>,
}

impl GameOver {
    pub fn new(score: u64, ctx: &mut Context) -> Self {
        ctx.play(AudioCue::play(SoundEffect::Fail));
        Self {
            score,
            screen: ctx.screen,
            quit: Button::new(layout::GAME_OVER_QUIT_BUTTON),
            replay: Button::new(layout::REPLAY_BUTTON),
            next: None,
        }
    }
}

impl Scene for GameOver {
    fn kind(&self) -> SceneKind {
        SceneKind::GameOver
    }

    fn process_input(&mut self, events: &[InputEvent], _keys: KeyState, ctx: &mut Context) {
        for event in events {
            match *event {
                InputEvent::PointerMoved(p) => {
                    self.quit.track(p);
                    self.replay.track(p);
                }
                InputEvent::PointerDown(p) => {
                    if self.quit.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        self.next = Some(Transition::Home);
                    }
                    if self.replay.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        ctx.play(AudioCue::Stop(SoundEffect::Fail));
                        self.next = Some(Transition::Game);
                    }
                }
                InputEvent::Quit => {}
            }
        }
    }

    fn render(&self, canvas: &mut Canvas) {
        canvas.blit(Sprite::GameBackground, Vec2::ZERO);
        canvas.blit(Sprite::YourScore, ui::at(layout::YOUR_SCORE_AT));
        canvas.blit(
            Sprite::QuitButton {
                hovered: self.quit.hovered,
            },
            self.quit.top_left(),
        );
        canvas.blit(
            Sprite::ReplayButton {
                hovered: self.replay.hovered,
            },
            self.replay.top_left(),
        );
        canvas.text(
            self.score.to_string(),
            layout::FINAL_SCORE_SIZE,
            layout::FINAL_SCORE_COLOR,
            Vec2::new(self.screen.width / 2.0, self.screen.height / 2.0 - 50.0),
        );
        canvas.present();
    }

    fn score(&self) -> Option<u64> {
        Some(self.score)
    }

    fn take_transition(&mut self) -> Option<Transition> {
        self.next.take()
    }
}
