//! Landing and hazard contact
//!
//! Only a descending player can touch a platform. Landing on a safe platform
//! is the one place a jump can start.

use super::player::Player;
use super::platforms::PlatformField;
use crate::input::KeyState;

/// What the player touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// Landed on at least one safe platform
    pub landed: bool,
    /// A landing turned into a jump
    pub jumped: bool,
    /// Touched a hazard
    pub hazard: bool,
}

/// Resolve the player against both platform fields.
///
/// The descending check and the player box are both taken once on entry:
/// snapping onto one platform never moves the box the others are tested
/// against, and a jump does not stop the remaining platforms from being tested.
pub fn resolve_landing(player: &mut Player, field: &PlatformField, keys: KeyState) -> Contact {
    let mut contact = Contact::default();
    if player.vel.y <= 0.0 {
        return contact;
    }
    let hit = player.bounds();

    for plat in &field.safe {
        if hit.overlaps(plat) {
            player.land_on(plat.top());
            contact.landed = true;
            if player.jump(keys) {
                contact.jumped = true;
            }
        }
    }

    for plat in &field.hazard {
        if hit.overlaps(plat) {
            contact.hazard = true;
        }
    }

    contact
}
