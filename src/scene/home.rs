//! Title screen with Start and How-to-play

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Scene, SceneKind, Transition};
use crate::app::Context;
use crate::audio::{AudioCue, SoundEffect};
use crate::consts::*;
use crate::input::{InputEvent, KeyState};
use crate::renderer::{Canvas, Sprite};
use crate::ui::{self, Button, layout};

pub struct Home {
    start: Button,
    how_to_play: Button,
    /// Instructions scroll is on screen
    showing_help: bool,
    background_frame: u8,
    thunder_frame: u8,
    rng: Pcg32,
    next: Option<Transition>,
}

impl Home {
    pub fn new(ctx: &mut Context) -> Self {
        ctx.play(AudioCue::looped(SoundEffect::HomeMusic, HOME_MUSIC_LOOPS));
        Self {
            start: Button::new(layout::START_BUTTON),
            how_to_play: Button::new(layout::HOW_TO_PLAY_BUTTON),
            showing_help: false,
            background_frame: 0,
            thunder_frame: 0,
            rng: Pcg32::seed_from_u64(ctx.next_seed()),
            next: None,
        }
    }

    pub fn showing_help(&self) -> bool {
        self.showing_help
    }
}

impl Scene for Home {
    fn kind(&self) -> SceneKind {
        SceneKind::Home
    }

    fn process_input(&mut self, events: &[InputEvent], _keys: KeyState, ctx: &mut Context) {
        for event in events {
            match *event {
                InputEvent::PointerMoved(p) => {
                    self.start.track(p);
                    self.how_to_play.track(p);
                    if !layout::HOW_TO_PLAY_SCROLL.contains_point(p) {
                        self.showing_help = false;
                    }
                }
                InputEvent::PointerDown(p) => {
                    if self.how_to_play.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        self.showing_help = true;
                    }
                    if self.start.contains(p) {
                        ctx.play(AudioCue::play(SoundEffect::Click));
                        ctx.play(AudioCue::Stop(SoundEffect::HomeMusic));
                        self.start.hovered = true;
                        self.next = Some(Transition::Game);
                    }
                }
                InputEvent::Quit => {}
            }
        }
    }

    fn update(&mut self, ctx: &mut Context) {
        // Keeps the background animation from racing
        ctx.delay(HOME_FRAME_DELAY_MS);
        self.background_frame = (self.background_frame + 1) % HOME_BACKGROUND_FRAMES;
        self.thunder_frame = self.rng.random_range(0..=HOME_THUNDER_MAX);
    }

    fn render(&self, canvas: &mut Canvas) {
        canvas.blit(Sprite::HomeBackground(self.background_frame), glam::Vec2::ZERO);
        canvas.blit(Sprite::Thunder(self.thunder_frame), ui::at(layout::THUNDER_AT));
        canvas.blit(Sprite::Title, ui::at(layout::TITLE_AT));
        canvas.blit(
            Sprite::StartButton {
                hovered: self.start.hovered,
            },
            self.start.top_left(),
        );
        canvas.blit(
            Sprite::HowToPlayButton {
                hovered: self.how_to_play.hovered,
            },
            self.how_to_play.top_left(),
        );
        if self.showing_help {
            canvas.blit(Sprite::HowToPlayScroll, layout::HOW_TO_PLAY_SCROLL.top_left());
        }
        canvas.present();
    }

    fn take_transition(&mut self) -> Option<Transition> {
        self.next.take()
    }
}
