//! Per-tick simulation
//!
//! A tick is split the way the game scene drives it: `apply_input` (movement and
//! contact, during input processing) then `advance` (scroll, replenish, fall
//! check, during update). `tick` runs both back to back.

use serde::Serialize;

use super::collision::resolve_landing;
use super::state::{EndCause, GameState};
use crate::consts::*;
use crate::input::KeyState;

/// What happened during a tick, for sounds and scene transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub landed: bool,
    pub jumped: bool,
    /// Distance the world moved down, if this was a scroll tick
    pub scrolled: Option<f32>,
    /// Score gained this tick
    pub scored: u64,
    pub ended: Option<EndCause>,
}

impl TickReport {
    fn merge(self, later: TickReport) -> TickReport {
        TickReport {
            landed: self.landed || later.landed,
            jumped: self.jumped || later.jumped,
            scrolled: later.scrolled.or(self.scrolled),
            scored: self.scored + later.scored,
            // A later end overrides an earlier one, matching scene transitions
            ended: later.ended.or(self.ended),
        }
    }
}

/// Move the player from the held keys and resolve contacts
pub fn apply_input(state: &mut GameState, keys: KeyState) -> TickReport {
    state.player.step(keys, state.screen.width);
    let contact = resolve_landing(&mut state.player, &state.platforms, keys);

    TickReport {
        landed: contact.landed,
        jumped: contact.jumped,
        ended: contact.hazard.then_some(EndCause::Hazard),
        ..Default::default()
    }
}

/// Animate, scroll, replenish and check for a fall
pub fn advance(state: &mut GameState) -> TickReport {
    state.time_ticks += 1;
    state.player.animate();

    let mut report = TickReport::default();
    if state.in_scroll_band() {
        let before = state.score;
        report.scrolled = Some(scroll(state));
        report.scored = state.score - before;
    }

    state.replenish();

    if state.player_fell() {
        report.ended = Some(EndCause::Fell);
    }
    report
}

/// One scroll step: the world moves down by the player's vertical speed.
///
/// Score accrues only if the player's logical y moved since the last scroll
/// step. Returns the scroll distance.
pub fn scroll(state: &mut GameState) -> f32 {
    let dy = state.player.vel.y.abs();
    let player = &mut state.player;

    if player.pos.y != player.prev_y {
        state.score += SCORE_PER_SCROLL;
    }
    player.pos.y += dy;
    player.prev_y = player.pos.y;

    let removed = state.platforms.scroll(dy, state.screen.height);
    if removed > 0 {
        log::debug!("Scrolled {:.1}px, {} platforms left the screen", dy, removed);
    }
    state.scroll_ticks += 1;
    dy
}

/// Advance the run by one full tick
pub fn tick(state: &mut GameState, keys: KeyState) -> TickReport {
    let input = apply_input(state, keys);
    let update = advance(state);
    input.merge(update)
}
