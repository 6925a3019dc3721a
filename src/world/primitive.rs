//! Primitive factory
//!
//! Maps a [`Shape`] descriptor to generated geometry and wraps it in a
//! scene [`Object`]. Factory output sits at the origin with identity
//! rotation; placement is the caller's job, usually via [`spawn`].

use cgmath::{Matrix4, Rad, Vector3};

use crate::gfx::{
    geometry::{self, GeometryData},
    scene::{Mesh, Object, Scene},
};

/// Shape descriptor for a single primitive.
///
/// Dimensions are passed through to the generators unchecked; callers are
/// expected to supply positive values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        segments: u32,
        rings: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

impl Shape {
    pub fn generate(&self) -> GeometryData {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => geometry::generate_box(width, height, depth),
            Shape::Sphere {
                radius,
                segments,
                rings,
            } => geometry::generate_sphere(radius, segments, rings),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => geometry::generate_cylinder(radius_top, radius_bottom, height, segments),
            Shape::Cone {
                radius,
                height,
                segments,
            } => geometry::generate_cone(radius, height, segments),
            Shape::Plane { width, height } => geometry::generate_plane(width, height),
        }
    }
}

/// Position plus per-axis rotation for a spawned primitive.
///
/// Only single-axis rotations occur in this scene, so the composition
/// order (Z * Y * X) never matters in practice.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub position: Vector3<f32>,
    pub rotation: Vector3<Rad<f32>>,
}

impl Placement {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            rotation: Vector3::new(Rad(0.0), Rad(0.0), Rad(0.0)),
        }
    }

    pub fn rotated_x(mut self, angle: Rad<f32>) -> Self {
        self.rotation.x = angle;
        self
    }

    pub fn rotated_y(mut self, angle: Rad<f32>) -> Self {
        self.rotation.y = angle;
        self
    }

    pub fn rotated_z(mut self, angle: Rad<f32>) -> Self {
        self.rotation.z = angle;
        self
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(self.rotation.z)
            * Matrix4::from_angle_y(self.rotation.y)
            * Matrix4::from_angle_x(self.rotation.x)
    }
}

/// Creates a renderable leaf at the origin with identity rotation.
pub fn primitive(name: &str, shape: Shape, material_id: &str) -> Object {
    let geometry = shape.generate();
    Object::new(name, Mesh::from_geometry(&geometry), material_id)
}

/// Creates a primitive and inserts it into the scene at the placement.
pub fn spawn(scene: &mut Scene, name: &str, shape: Shape, material_id: &str, placement: Placement) {
    let mut object = primitive(name, shape, material_id);
    object.transform = placement.to_matrix();
    scene.add_object(object);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Zero};

    #[test]
    fn test_factory_output_is_at_origin() {
        let object = primitive(
            "sphere",
            Shape::Sphere {
                radius: 0.7,
                segments: 16,
                rings: 16,
            },
            "sun",
        );
        assert_eq!(object.transform, Matrix4::identity());
        assert_eq!(object.translation(), Vector3::zero());
    }

    #[test]
    fn test_placement_translation() {
        let placement = Placement::at(6.0, 0.75, -2.0);
        let matrix = placement.to_matrix();
        assert_eq!(matrix.w.truncate(), Vector3::new(6.0, 0.75, -2.0));
    }

    #[test]
    fn test_shape_dispatch() {
        let plane = Shape::Plane {
            width: 5.0,
            height: 3.0,
        }
        .generate();
        assert_eq!(plane.vertex_count(), 4);

        let cone = Shape::Cone {
            radius: 1.5,
            height: 1.0,
            segments: 4,
        }
        .generate();
        assert!(cone.triangle_count() > 0);
    }
}
