//! Headless frontend with an autopilot
//!
//! Plays the game without a window: the autopilot reads each presented frame,
//! clicks through the menus and steers the player toward the nearest safe
//! platform above it. Useful as a smoke run and as the native entry point.

use glam::Vec2;

use super::{Frontend, FrontendError};
use crate::app::Frame;
use crate::consts::PLAYER_WIDTH;
use crate::input::{InputBatch, InputEvent, KeyState};
use crate::renderer::{Canvas, DrawCommand, Sprite};
use crate::sim::Rect;
use crate::ui::layout;

/// Frames to linger on a menu before clicking
const MENU_WAIT_FRAMES: u32 = 3;
/// Horizontal dead zone when lining up under a platform
const STEER_TOLERANCE: f32 = 8.0;

pub const DEFAULT_MAX_RUNS: u32 = 3;
pub const DEFAULT_MAX_TICKS: u64 = 20_000;

/// What the autopilot wants to do next
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Wait,
    Click(Vec2),
    Keys(KeyState),
}

impl Decision {
    fn into_batch(self) -> InputBatch {
        match self {
            Decision::Wait => InputBatch::default(),
            Decision::Click(p) => InputBatch::new(
                vec![InputEvent::PointerMoved(p), InputEvent::PointerDown(p)],
                KeyState::NONE,
            ),
            Decision::Keys(keys) => InputBatch::keys(keys),
        }
    }
}

#[derive(Debug, Default)]
pub struct Autopilot {
    menu_frames: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next input from the last frame
    pub fn decide(&mut self, canvas: &Canvas) -> Decision {
        let has = |sprite: fn(&Sprite) -> bool| canvas.blits_where(sprite).next().is_some();

        let menu_button = if has(|s| matches!(s, Sprite::StartButton { .. })) {
            Some(layout::START_BUTTON)
        } else if has(|s| matches!(s, Sprite::ReplayButton { .. })) {
            Some(layout::REPLAY_BUTTON)
        } else if has(|s| *s == Sprite::ResumeButton) {
            Some(layout::RESUME_BUTTON)
        } else {
            None
        };

        if let Some(button) = menu_button {
            self.menu_frames += 1;
            if self.menu_frames > MENU_WAIT_FRAMES {
                self.menu_frames = 0;
                return Decision::Click(button.center());
            }
            return Decision::Wait;
        }
        self.menu_frames = 0;

        match player_position(canvas) {
            Some(player) => Decision::Keys(steer(player, &safe_platforms(canvas))),
            None => Decision::Wait,
        }
    }
}

fn player_position(canvas: &Canvas) -> Option<Vec2> {
    canvas.commands.iter().find_map(|c| match c {
        DrawCommand::Blit {
            sprite: Sprite::Player(_),
            at,
        } => Some(*at),
        _ => None,
    })
}

fn safe_platforms(canvas: &Canvas) -> Vec<Rect> {
    canvas
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::BlitScaled {
                sprite: Sprite::SafePlatform,
                rect,
            } => Some(*rect),
            _ => None,
        })
        .collect()
}

/// Hold jump and line up under the closest safe platform above the player
fn steer(player: Vec2, safe: &[Rect]) -> KeyState {
    let target = safe
        .iter()
        .filter(|p| p.top() < player.y)
        .max_by(|a, b| a.top().total_cmp(&b.top()));

    let mut keys = KeyState {
        up: true,
        ..KeyState::NONE
    };
    if let Some(target) = target {
        let dx = target.center().x - (player.x + PLAYER_WIDTH / 2.0);
        keys.left = dx < -STEER_TOLERANCE;
        keys.right = dx > STEER_TOLERANCE;
    }
    keys
}

/// Final score shown on a game-over frame
fn final_score(canvas: &Canvas) -> Option<u64> {
    canvas.commands.iter().find_map(|c| match c {
        DrawCommand::Text { text, size, .. } if *size == layout::FINAL_SCORE_SIZE => {
            text.parse().ok()
        }
        _ => None,
    })
}

pub struct HeadlessFrontend {
    pilot: Autopilot,
    pending: InputBatch,
    max_runs: u32,
    max_ticks: u64,
    runs: u32,
    best_score: u64,
    presented: u64,
    requested_delay_ms: u64,
    in_game_over: bool,
    quitting: bool,
    closed: bool,
}

impl Default for HeadlessFrontend {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RUNS, DEFAULT_MAX_TICKS)
    }
}

impl HeadlessFrontend {
    pub fn new(max_runs: u32, max_ticks: u64) -> Self {
        Self {
            pilot: Autopilot::new(),
            pending: InputBatch::default(),
            max_runs,
            max_ticks,
            runs: 0,
            best_score: 0,
            presented: 0,
            requested_delay_ms: 0,
            in_game_over: false,
            quitting: false,
            closed: false,
        }
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    fn observe_game_over(&mut self, canvas: &Canvas) {
        let game_over = canvas
            .blits_where(|s| matches!(s, Sprite::ReplayButton { .. }))
            .next()
            .is_some();
        if game_over && !self.in_game_over {
            self.runs += 1;
            let score = final_score(canvas).unwrap_or(0);
            self.best_score = self.best_score.max(score);
            log::info!("Autopilot run {} ended with score {}", self.runs, score);
        }
        self.in_game_over = game_over;
    }
}

impl Frontend for HeadlessFrontend {
    fn poll(&mut self) -> Result<InputBatch, FrontendError> {
        if self.closed {
            return Err(FrontendError::Closed);
        }
        if self.quitting {
            self.closed = true;
            log::info!(
                "Autopilot done: {} runs, best score {}, {} frames, {} ms of requested delay",
                self.runs,
                self.best_score,
                self.presented,
                self.requested_delay_ms
            );
            return Ok(InputBatch::quit());
        }
        Ok(std::mem::take(&mut self.pending))
    }

    fn present(&mut self, frame: &Frame) -> Result<(), FrontendError> {
        if !frame.canvas.is_presented() {
            return Err(FrontendError::FrameRejected {
                tick: frame.tick,
                reason: "missing present".to_string(),
            });
        }
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", serde_json::to_string(frame)?);
        }

        self.presented += 1;
        self.requested_delay_ms += frame.pacing.delay_ms.unwrap_or(0);
        self.observe_game_over(&frame.canvas);

        if self.runs >= self.max_runs || self.presented >= self.max_ticks {
            self.quitting = true;
        } else {
            self.pending = self.pilot.decide(&frame.canvas).into_batch();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Screen;
    use crate::app::App;
    use crate::consts::SCORE_PER_SCROLL;

    fn playing_canvas(player: Vec2, safe: &[Rect]) -> Canvas {
        let mut canvas = Canvas::new();
        for plat in safe {
            canvas.blit_scaled(Sprite::SafePlatform, *plat);
        }
        canvas.blit(Sprite::Player(crate::sim::Pose::Idle(0)), player);
        canvas.present();
        canvas
    }

    #[test]
    fn test_steers_toward_platform_above() {
        let safe = [
            Rect::new(300.0, 200.0, 80.0, 20.0),
            Rect::new(0.0, 100.0, 80.0, 20.0),
            Rect::new(0.0, 460.0, 500.0, 40.0),
        ];
        let mut pilot = Autopilot::new();
        let decision = pilot.decide(&playing_canvas(Vec2::new(100.0, 300.0), &safe));
        assert_eq!(
            decision,
            Decision::Keys(KeyState {
                left: false,
                right: true,
                up: true,
            })
        );
    }

    #[test]
    fn test_waits_then_clicks_menu() {
        let mut canvas = Canvas::new();
        canvas.blit(Sprite::StartButton { hovered: false }, Vec2::ZERO);
        canvas.present();

        let mut pilot = Autopilot::new();
        for _ in 0..MENU_WAIT_FRAMES {
            assert_eq!(pilot.decide(&canvas), Decision::Wait);
        }
        assert_eq!(
            pilot.decide(&canvas),
            Decision::Click(layout::START_BUTTON.center())
        );
    }

    #[test]
    fn test_game_over_frames_count_runs_and_best_score() {
        let game_over = |score: &str| {
            let mut canvas = Canvas::new();
            canvas.blit(Sprite::ReplayButton { hovered: false }, Vec2::ZERO);
            canvas.text(score, layout::FINAL_SCORE_SIZE, [0, 0, 0], Vec2::ZERO);
            canvas.present();
            Frame {
                canvas,
                ..Frame::default()
            }
        };
        let mut playing = Frame::default();
        playing.canvas.present();

        let mut frontend = HeadlessFrontend::new(5, 1_000);
        frontend.present(&game_over("120")).unwrap();
        // Lingering on the same game-over screen is still one run
        frontend.present(&game_over("120")).unwrap();
        frontend.present(&playing).unwrap();
        frontend.present(&game_over("40")).unwrap();

        assert_eq!(frontend.runs(), 2);
        assert_eq!(frontend.best_score(), 120);
        assert_eq!(frontend.presented(), 4);
    }

    #[test]
    fn test_rejects_unpresented_frame() {
        let mut frontend = HeadlessFrontend::default();
        let frame = Frame::default();
        assert!(matches!(
            frontend.present(&frame),
            Err(FrontendError::FrameRejected { .. })
        ));
    }

    #[test]
    fn test_autopilot_session_terminates() {
        let mut app = App::new("headless", Screen::default(), 31337);
        let mut frontend = HeadlessFrontend::new(2, 3_000);
        app.run(&mut frontend).unwrap();

        assert!(frontend.presented() > 0);
        assert!(frontend.presented() <= 3_000);
        assert!(frontend.runs() <= 2);
        assert_eq!(frontend.best_score() % SCORE_PER_SCROLL, 0);
        // Polling after the quit batch is an error
        assert!(matches!(frontend.poll(), Err(FrontendError::Closed)));
    }
}
