//! The finger-painting canvas: configuration and the stroke renderer.

mod config;
mod renderer;

pub use config::CanvasConfig;
pub use renderer::{CompositeFrame, StrokeRenderer};
