//! Rendering boundary
//!
//! The core never touches pixels. Each scene fills a `Canvas` with draw
//! commands that end in `Present`.

pub mod draw;

pub use draw::{Canvas, DrawCommand, Rgb, Sprite};
