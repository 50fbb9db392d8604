//! Orbit Pilot
//!
//! A small 3D scene demo built on wgpu and winit: an orbit camera over a lit
//! ground plane, showing either a six-colored cube or a "pilot" that turns to
//! face away from the camera while the pointer is dragged.

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;
pub mod wgpu_utils;

pub use app::{PilotApp, RenderLoop, StopToken};
pub use config::{DemoConfig, DemoMode};

/// Runs the demo in `mode` with the default configuration until it exits
pub fn run(mode: DemoMode) -> Result<(), error::AppError> {
    PilotApp::new(DemoConfig::for_mode(mode))?.run()
}
