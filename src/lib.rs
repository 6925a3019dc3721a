//! Meadow
//!
//! A static pastoral 3D scene viewer built on wgpu and winit: a meadow
//! with trees, houses, animals, clouds, a pond, and a sun, explored with
//! an orbit camera.

pub mod app;
pub mod error;
pub mod gfx;
pub mod wgpu_utils;
pub mod world;

// Re-export main types for convenience
pub use app::MeadowApp;
pub use error::RenderError;
pub use gfx::{OrbitCamera, RenderEngine, Scene};

/// Creates an application with the full meadow scene already assembled.
pub fn default() -> MeadowApp {
    let mut app = MeadowApp::new();
    world::populate(app.scene_mut());
    app
}
