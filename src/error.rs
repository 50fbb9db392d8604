//! Error types shared across the crate.
//!
//! Scene graph mutations, GPU bootstrap and the application shell each get their
//! own enum so callers can match on the layer that failed. The binary folds all
//! of them into `anyhow::Error` at the top level.

use crate::gfx::scene::ObjectId;

/// Failures while editing the scene graph
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("object not found: {0}")]
    UnknownObject(ObjectId),
    #[error("parenting {child} under {parent} would create a cycle")]
    ParentCycle { child: ObjectId, parent: ObjectId },
}

/// Failures while creating or driving the GPU renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to request GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface has no supported texture format")]
    NoSurfaceFormat,
    #[error("shader '{0}' has not been loaded")]
    MissingShader(String),
    #[error("render pipeline '{0}' is not available")]
    MissingPipeline(String),
    #[error("surface out of memory")]
    OutOfMemory,
}

/// Failures in the windowed application shell
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("renderer error: {0}")]
    Render(#[from] RenderError),
    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),
}

/// Failures while reading the demo configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown demo mode '{0}' (expected 'cube' or 'pilot')")]
    UnknownMode(String),
}
