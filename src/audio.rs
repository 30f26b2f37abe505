//! Sound cues
//!
//! Scenes only say what should be heard; playback belongs to the frontend.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Home screen music
    HomeMusic,
    /// Any button click
    Click,
    /// Player jumped off a platform
    Jump,
    /// Run ended
    Fail,
}

/// A fire-and-forget audio request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Start a sound, repeating it `loops` extra times
    Play { sound: SoundEffect, loops: u32 },
    /// Stop a sound if it is playing
    Stop(SoundEffect),
}

impl AudioCue {
    /// Play once
    pub fn play(sound: SoundEffect) -> Self {
        AudioCue::Play { sound, loops: 0 }
    }

    pub fn looped(sound: SoundEffect, loops: u32) -> Self {
        AudioCue::Play { sound, loops }
    }
}
