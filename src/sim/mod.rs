//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each platform field)
//! - No rendering or platform dependencies

pub mod collision;
pub mod platforms;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Contact, resolve_landing};
pub use platforms::{PlatformField, PlatformKind};
pub use player::{Player, Pose};
pub use rect::Rect;
pub use state::{EndCause, GameState};
pub use tick::{TickReport, advance, apply_input, scroll, tick};
