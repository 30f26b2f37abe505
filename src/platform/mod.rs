//! Platform abstraction layer
//!
//! A frontend supplies one input batch per tick and consumes the frame the
//! driver produced (draw commands, sound cues, pacing). Windowing, audio
//! playback and rasterization all live behind this trait.

pub mod headless;

pub use headless::{Autopilot, HeadlessFrontend};

use thiserror::Error;

use crate::app::Frame;
use crate::input::InputBatch;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// Input was requested after the frontend shut down
    #[error("input source closed")]
    Closed,
    /// A frame did not end with a present command
    #[error("frame {tick} rejected: {reason}")]
    FrameRejected { tick: u64, reason: String },
    #[error("failed to encode frame trace: {0}")]
    Trace(#[from] serde_json::Error),
}

pub trait Frontend {
    /// Pending events and held keys for the next tick
    fn poll(&mut self) -> Result<InputBatch, FrontendError>;

    /// Show a finished frame
    fn present(&mut self, frame: &Frame) -> Result<(), FrontendError>;
}

/// Seed derived from the wall clock
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
