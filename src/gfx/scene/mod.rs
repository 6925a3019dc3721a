//! # Scene Management Module
//!
//! Holds the populated scene: the flat list of renderable objects, the
//! material registry, and the camera. Objects are created once during scene
//! assembly and never mutated afterwards.

pub mod object;
pub mod scene;
pub mod vertex;

pub use object::{DrawObject, Mesh, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;
