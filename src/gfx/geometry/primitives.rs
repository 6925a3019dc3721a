//! # Primitive Shape Generation
//!
//! Functions to generate the basic 3D shapes used by the scene builders.
//! All shapes are centered at the origin with Y as the up axis.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate an axis-aligned box with the given extents.
///
/// Each face has four dedicated vertices with an outward face normal.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    let positions = [
        // Front face (+Z)
        [-hw, -hh, hd], [hw, -hh, hd], [hw, hh, hd], [-hw, hh, hd],
        // Back face (-Z)
        [-hw, -hh, -hd], [-hw, hh, -hd], [hw, hh, -hd], [hw, -hh, -hd],
        // Left face (-X)
        [-hw, -hh, -hd], [-hw, -hh, hd], [-hw, hh, hd], [-hw, hh, -hd],
        // Right face (+X)
        [hw, -hh, hd], [hw, -hh, -hd], [hw, hh, -hd], [hw, hh, hd],
        // Top face (+Y)
        [-hw, hh, hd], [hw, hh, hd], [hw, hh, -hd], [-hw, hh, -hd],
        // Bottom face (-Y)
        [-hw, -hh, -hd], [hw, -hh, -hd], [hw, -hh, hd], [-hw, -hh, hd],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.positions = positions.to_vec();
    for normal in face_normals {
        for _ in 0..4 {
            data.normals.push(normal);
        }
    }

    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere.
///
/// `segments` is the longitude count, `rings` the latitude count.
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let rings = rings.max(2);

    for ring in 0..=rings {
        let theta = ring as f32 * PI / rings as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for seg in 0..=segs {
            let phi = seg as f32 * 2.0 * PI / segs as f32;

            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            data.positions.push([x * radius, y * radius, z * radius]);
            // Normal equals the unit-sphere position
            data.normals.push([x, y, z]);
        }
    }

    for ring in 0..rings {
        for seg in 0..segs {
            let first = ring * (segs + 1) + seg;
            let second = first + segs + 1;

            data.indices.push(first);
            data.indices.push(first + 1);
            data.indices.push(second);

            data.indices.push(second);
            data.indices.push(first + 1);
            data.indices.push(second + 1);
        }
    }

    data
}

/// Generate a cylinder along the Y axis, from -height/2 to height/2.
///
/// Different top and bottom radii produce a truncated cone; a zero top
/// radius collapses the top ring into an apex (see [`generate_cone`]).
pub fn generate_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let half_height = height * 0.5;

    // Outward side normal, tilted by the radius difference
    let slope = radius_bottom - radius_top;
    let normal_len = (height * height + slope * slope).sqrt();
    let (ny, radial) = (slope / normal_len, height / normal_len);

    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let cos_a = angle.cos();
        let sin_a = angle.sin();

        data.positions
            .push([radius_bottom * cos_a, -half_height, radius_bottom * sin_a]);
        data.normals.push([cos_a * radial, ny, sin_a * radial]);

        data.positions
            .push([radius_top * cos_a, half_height, radius_top * sin_a]);
        data.normals.push([cos_a * radial, ny, sin_a * radial]);
    }

    for i in 0..segs {
        let bottom_current = i * 2;
        let top_current = bottom_current + 1;
        let bottom_next = (i + 1) * 2;
        let top_next = bottom_next + 1;

        data.indices.push(bottom_current);
        data.indices.push(top_current);
        data.indices.push(bottom_next);

        data.indices.push(top_current);
        data.indices.push(top_next);
        data.indices.push(bottom_next);
    }

    // Bottom cap
    if radius_bottom > 0.0 {
        add_cap(&mut data, radius_bottom, -half_height, segs, false);
    }
    // Top cap, skipped for an apex
    if radius_top > 0.0 {
        add_cap(&mut data, radius_top, half_height, segs, true);
    }

    data
}

/// Generate a cone: a cylinder whose top ring is collapsed to an apex.
///
/// Low segment counts are deliberate silhouettes, e.g. 4 segments gives the
/// pyramid used for house roofs.
pub fn generate_cone(radius: f32, height: f32, segments: u32) -> GeometryData {
    generate_cylinder(0.0, radius, height, segments)
}

/// Generate a flat plane in the XY plane with its normal on +Z.
///
/// Callers rotate it into place (the ground and pond lie it flat with a
/// -90 degree rotation about X).
pub fn generate_plane(width: f32, height: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let (hw, hh) = (width * 0.5, height * 0.5);

    data.positions = vec![[-hw, -hh, 0.0], [hw, -hh, 0.0], [hw, hh, 0.0], [-hw, hh, 0.0]];
    data.normals = vec![[0.0, 0.0, 1.0]; 4];
    data.indices = vec![0, 1, 2, 2, 3, 0];

    data
}

fn add_cap(data: &mut GeometryData, radius: f32, y: f32, segs: u32, facing_up: bool) {
    let normal = if facing_up {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, -1.0, 0.0]
    };

    let center_index = data.positions.len() as u32;
    data.positions.push([0.0, y, 0.0]);
    data.normals.push(normal);

    let ring_start = data.positions.len() as u32;
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        data.positions
            .push([radius * angle.cos(), y, radius * angle.sin()]);
        data.normals.push(normal);
    }

    for i in 0..segs {
        let current = ring_start + i;
        let next = ring_start + i + 1;
        if facing_up {
            data.indices.extend_from_slice(&[center_index, next, current]);
        } else {
            data.indices.extend_from_slice(&[center_index, current, next]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_generation() {
        let cube = generate_box(1.0, 1.0, 1.0);
        assert_eq!(cube.positions.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_box_extents() {
        let data = generate_box(2.0, 1.5, 2.0);
        for p in &data.positions {
            assert!(p[0].abs() <= 1.0 + f32::EPSILON);
            assert!(p[1].abs() <= 0.75 + f32::EPSILON);
            assert!(p[2].abs() <= 1.0 + f32::EPSILON);
        }
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(0.6, 16, 16);
        assert!(!sphere.positions.is_empty());
        assert!(!sphere.indices.is_empty());
        assert_eq!(sphere.positions.len(), sphere.normals.len());

        // All positions lie on the sphere surface
        for p in &sphere.positions {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((len - 0.6).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cylinder_generation() {
        let segs = 8;
        let cyl = generate_cylinder(0.05, 0.05, 0.3, segs);
        // Side wall rings plus two caps (center + ring each)
        let expected_vertices = (segs + 1) * 2 + 2 * (segs + 2);
        assert_eq!(cyl.positions.len(), expected_vertices as usize);
        // Side quads + two cap fans
        assert_eq!(cyl.triangle_count(), (segs * 2 + segs * 2) as usize);
    }

    #[test]
    fn test_cone_has_no_top_cap() {
        let segs = 4;
        let cone = generate_cone(1.5, 1.0, segs);
        let cyl = generate_cylinder(0.2, 0.2, 1.0, segs);
        // One cap fan fewer than the full cylinder
        assert_eq!(
            cone.triangle_count() + segs as usize,
            cyl.triangle_count()
        );
        // Apex ring sits at the top
        let top_y = cone.positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        assert!((top_y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(100.0, 100.0);
        assert_eq!(plane.positions.len(), 4);
        assert_eq!(plane.triangle_count(), 2);
        for n in &plane.normals {
            assert_eq!(*n, [0.0, 0.0, 1.0]);
        }
    }
}
