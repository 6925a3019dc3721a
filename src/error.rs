//! Library error type.

use thiserror::Error;

/// Errors from render engine setup and frame rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("failed to create render pipeline: {0}")]
    PipelineCreation(String),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
