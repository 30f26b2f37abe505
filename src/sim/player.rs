//! Player kinematics
//!
//! Semi-implicit Euler with a half-step position correction, constant gravity,
//! linear horizontal drag and a teleport wrap at the screen edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::input::KeyState;
use crate::{Screen, wrap_x};

/// Which animation the player is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pose {
    RunLeft(u8),
    RunRight(u8),
    Jump,
    Idle(u8),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Logical y after the last scroll tick (score accrues only when it changes)
    pub prev_y: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    pub jumping: bool,
    /// Running animation frame, wraps at `RUN_FRAMES`
    pub moving_counter: u8,
    /// Idle animation frame, wraps at `IDLE_FRAMES`
    pub idle_counter: u8,
}

impl Player {
    /// Player at the start position for a screen
    pub fn spawn(screen: Screen) -> Self {
        let start = Vec2::new(screen.width * 0.5, screen.height - PLAYER_START_LIFT);
        Self::at(start)
    }

    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            prev_y: pos.y,
            moving_left: false,
            moving_right: false,
            jumping: false,
            moving_counter: 0,
            idle_counter: 0,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Current bounding box
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, Self::size())
    }

    /// Integrate one tick of movement from the held keys
    pub fn step(&mut self, keys: KeyState, screen_width: f32) {
        self.acc = Vec2::new(0.0, GRAVITY);

        match keys.horizontal() {
            -1 => {
                self.acc.x = -RUN_ACCEL;
                self.moving_left = true;
                self.moving_right = false;
            }
            1 => {
                self.acc.x = RUN_ACCEL;
                self.moving_left = false;
                self.moving_right = true;
            }
            _ => {
                self.moving_left = false;
                self.moving_right = false;
            }
        }

        self.acc.x += self.vel.x * RUN_FRICTION;
        self.vel += self.acc;
        self.pos += self.vel + 0.5 * self.acc;
        self.pos.x = wrap_x(self.pos.x, screen_width);
    }

    /// Jump check, only reachable from a landing.
    ///
    /// Returns true if the jump impulse was applied.
    pub fn jump(&mut self, keys: KeyState) -> bool {
        if keys.up {
            self.jumping = true;
            self.vel.y = JUMP_VELOCITY;
            true
        } else {
            self.jumping = false;
            false
        }
    }

    /// Stand on a surface whose top edge is at `top`
    pub fn land_on(&mut self, top: f32) {
        self.pos.y = top - PLAYER_HEIGHT;
        self.vel.y = 0.0;
    }

    /// Advance both animation counters by one frame
    pub fn animate(&mut self) {
        self.moving_counter = (self.moving_counter + 1) % RUN_FRAMES;
        self.idle_counter = (self.idle_counter + 1) % IDLE_FRAMES;
    }

    pub fn pose(&self) -> Pose {
        if self.moving_left {
            Pose::RunLeft(self.moving_counter)
        } else if self.moving_right {
            Pose::RunRight(self.moving_counter)
        } else if self.jumping {
            Pose::Jump
        } else {
            Pose::Idle(self.idle_counter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: KeyState = KeyState {
        left: false,
        right: true,
        up: false,
    };

    #[test]
    fn test_gravity_step() {
        let mut player = Player::at(Vec2::new(100.0, 100.0));
        player.step(KeyState::NONE, SCREEN_WIDTH);
        assert_eq!(player.acc, Vec2::new(0.0, GRAVITY));
        assert!((player.vel.y - 0.8).abs() < 1e-6);
        // pos += vel + 0.5 * acc = 0.8 + 0.4
        assert!((player.pos.y - 101.2).abs() < 1e-4);
        assert_eq!(player.pos.x, 100.0);
    }

    #[test]
    fn test_drag_limits_run_speed() {
        let mut player = Player::at(Vec2::new(100.0, 100.0));
        for _ in 0..200 {
            player.step(RIGHT, 1.0e9);
        }
        // Terminal speed where 0.7 + v * -0.12 == 0
        assert!((player.vel.x - 0.7 / 0.12).abs() < 0.01);
        assert!(player.moving_right);
        assert!(!player.moving_left);
    }

    #[test]
    fn test_wraps_both_edges() {
        let mut player = Player::at(Vec2::new(SCREEN_WIDTH - 0.5, 100.0));
        player.vel.x = 3.0;
        player.step(KeyState::NONE, SCREEN_WIDTH);
        assert_eq!(player.pos.x, 0.0);

        let mut player = Player::at(Vec2::new(0.5, 100.0));
        player.vel.x = -3.0;
        player.step(KeyState::NONE, SCREEN_WIDTH);
        assert_eq!(player.pos.x, SCREEN_WIDTH - WRAP_EDGE_INSET);
    }

    #[test]
    fn test_jump_requires_key() {
        let mut player = Player::at(Vec2::new(100.0, 100.0));
        player.jumping = true;
        assert!(!player.jump(KeyState::NONE));
        assert!(!player.jumping);
        assert_eq!(player.vel.y, 0.0);

        let up = KeyState {
            up: true,
            ..KeyState::NONE
        };
        assert!(player.jump(up));
        assert!(player.jumping);
        assert_eq!(player.vel.y, JUMP_VELOCITY);
    }

    #[test]
    fn test_pose_priority() {
        let mut player = Player::at(Vec2::ZERO);
        player.jumping = true;
        assert_eq!(player.pose(), Pose::Jump);
        player.moving_right = true;
        player.moving_counter = 3;
        assert_eq!(player.pose(), Pose::RunRight(3));
    }

    #[test]
    fn test_animation_counters_wrap() {
        let mut player = Player::at(Vec2::ZERO);
        for _ in 0..12 {
            player.animate();
        }
        assert_eq!(player.idle_counter, 0);
        assert_eq!(player.moving_counter, 12 % RUN_FRAMES);
    }
}
