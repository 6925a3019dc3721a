//! # World Building
//!
//! Everything between raw geometry and the finished scene: the primitive
//! factory ([`primitive`]), the composite object builders ([`builders`]),
//! and the fixed assembly script ([`assembly`]) that populates the scene
//! once at startup.

pub mod assembly;
pub mod builders;
pub mod primitive;

pub use assembly::populate;
pub use builders::AnimalKind;
pub use primitive::{Placement, Shape};
