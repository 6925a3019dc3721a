//! # Graphics Module
//!
//! All graphics-related functionality: the orbit camera system, procedural
//! primitive geometry, the wgpu rendering pipeline, GPU resource handling,
//! and the scene container.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
pub use scene::Scene;
