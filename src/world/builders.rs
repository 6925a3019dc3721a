//! Composite scene object builders
//!
//! Each builder assembles one recognizable object (tree, house, cloud,
//! animal, grass blade, pond, sun) out of factory primitives, baking the
//! group placement into every part's transform before inserting it into
//! the scene. Construction is deterministic: the same inputs always yield
//! the same part counts, offsets, and colors.

use cgmath::{Deg, Rad};

use crate::gfx::{resources::material::Material, scene::Scene};

use super::primitive::{spawn, Placement, Shape};

/// The two animal recipes the scene knows how to build.
///
/// The closed enum replaces a stringly-typed tag; there is no "unknown
/// animal" case to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    Dog,
    Sheep,
}

/// The 100x100 ground plane, lying flat at y = 0.
pub fn add_ground(scene: &mut Scene) {
    scene.ensure_material(
        "ground",
        Material::from_hex("ground", 0x22B822).with_double_sided(),
    );

    spawn(
        scene,
        "ground",
        Shape::Plane {
            width: 100.0,
            height: 100.0,
        },
        "ground",
        Placement::at(0.0, 0.0, 0.0).rotated_x(Rad::from(Deg(-90.0))),
    );
}

/// A tree: trunk cylinder topped by a sphere canopy, scaled uniformly.
pub fn add_tree(scene: &mut Scene, x: f32, z: f32, scale: f32) {
    scene.ensure_material("tree_trunk", Material::from_hex("tree_trunk", 0x8B4513));
    scene.ensure_material("tree_canopy", Material::from_hex("tree_canopy", 0x228B22));

    spawn(
        scene,
        "tree_trunk",
        Shape::Cylinder {
            radius_top: 0.2 * scale,
            radius_bottom: 0.2 * scale,
            height: 1.0 * scale,
            segments: 16,
        },
        "tree_trunk",
        Placement::at(x, 0.5 * scale, z),
    );

    spawn(
        scene,
        "tree_canopy",
        Shape::Sphere {
            radius: 0.6 * scale,
            segments: 16,
            rings: 16,
        },
        "tree_canopy",
        Placement::at(x, 1.3 * scale, z),
    );
}

/// A house: box base with a four-sided cone roof rotated 45 degrees so its
/// edges line up with the walls.
pub fn add_house(scene: &mut Scene, x: f32, z: f32) {
    scene.ensure_material("house_base", Material::from_hex("house_base", 0xFFCC99));
    scene.ensure_material("house_roof", Material::from_hex("house_roof", 0x8B0000));

    spawn(
        scene,
        "house_base",
        Shape::Box {
            width: 2.0,
            height: 1.5,
            depth: 2.0,
        },
        "house_base",
        Placement::at(x, 0.75, z),
    );

    spawn(
        scene,
        "house_roof",
        Shape::Cone {
            radius: 1.5,
            height: 1.0,
            segments: 4,
        },
        "house_roof",
        Placement::at(x, 1.75, z).rotated_y(Rad::from(Deg(45.0))),
    );
}

/// A cloud: three overlapping spheres of shrinking radius.
pub fn add_cloud(scene: &mut Scene, x: f32, y: f32, z: f32) {
    scene.ensure_material("cloud", Material::from_hex("cloud", 0xFFFFFF));

    let puffs: [(f32, f32); 3] = [(0.6, -0.5), (0.5, 0.0), (0.4, 0.5)];

    for (radius, offset) in puffs {
        spawn(
            scene,
            "cloud_puff",
            Shape::Sphere {
                radius,
                segments: 12,
                rings: 12,
            },
            "cloud",
            Placement::at(x + offset, y, z),
        );
    }
}

/// An animal at (x, z), built from one of the two fixed recipes.
pub fn add_animal(scene: &mut Scene, x: f32, z: f32, kind: AnimalKind) {
    match kind {
        AnimalKind::Dog => add_dog(scene, x, z),
        AnimalKind::Sheep => add_sheep(scene, x, z),
    }
}

/// Dog: box body and head, two ear boxes, four cylinder legs, and a tail
/// cylinder tilted 45 degrees. Nine parts, grouped at (x, 0, z).
fn add_dog(scene: &mut Scene, x: f32, z: f32) {
    scene.ensure_material("dog_body", Material::from_hex("dog_body", 0x8B4513));
    scene.ensure_material("dog_head", Material::from_hex("dog_head", 0xA0522D));
    scene.ensure_material("dog_trim", Material::from_hex("dog_trim", 0x5C3317));

    spawn(
        scene,
        "dog_body",
        Shape::Box {
            width: 1.0,
            height: 0.5,
            depth: 0.4,
        },
        "dog_body",
        Placement::at(x, 0.25, z),
    );

    spawn(
        scene,
        "dog_head",
        Shape::Box {
            width: 0.4,
            height: 0.4,
            depth: 0.4,
        },
        "dog_head",
        Placement::at(x + 0.7, 0.35, z),
    );

    for ear_z in [-0.1, 0.1] {
        spawn(
            scene,
            "dog_ear",
            Shape::Box {
                width: 0.1,
                height: 0.2,
                depth: 0.05,
            },
            "dog_trim",
            Placement::at(x + 0.75, 0.55, z + ear_z),
        );
    }

    let leg_offsets: [(f32, f32); 4] = [(-0.35, -0.15), (0.35, -0.15), (-0.35, 0.15), (0.35, 0.15)];
    for (leg_x, leg_z) in leg_offsets {
        spawn(
            scene,
            "dog_leg",
            Shape::Cylinder {
                radius_top: 0.05,
                radius_bottom: 0.05,
                height: 0.3,
                segments: 8,
            },
            "dog_trim",
            Placement::at(x + leg_x, 0.0, z + leg_z),
        );
    }

    spawn(
        scene,
        "dog_tail",
        Shape::Cylinder {
            radius_top: 0.03,
            radius_bottom: 0.03,
            height: 0.4,
            segments: 8,
        },
        "dog_trim",
        Placement::at(x - 0.55, 0.4, z).rotated_z(Rad::from(Deg(45.0))),
    );
}

/// Sheep: a white body sphere and a dark head sphere. Two parts.
fn add_sheep(scene: &mut Scene, x: f32, z: f32) {
    scene.ensure_material("sheep_body", Material::from_hex("sheep_body", 0xFFFFFF));
    scene.ensure_material("sheep_head", Material::from_hex("sheep_head", 0x333333));

    spawn(
        scene,
        "sheep_body",
        Shape::Sphere {
            radius: 0.4,
            segments: 12,
            rings: 12,
        },
        "sheep_body",
        Placement::at(x, 0.4, z),
    );

    spawn(
        scene,
        "sheep_head",
        Shape::Sphere {
            radius: 0.2,
            segments: 8,
            rings: 8,
        },
        "sheep_head",
        Placement::at(x + 0.4, 0.4, z),
    );
}

/// A single grass blade: a thin cylinder.
pub fn add_grass(scene: &mut Scene, x: f32, z: f32) {
    scene.ensure_material("grass", Material::from_hex("grass", 0x006400));

    spawn(
        scene,
        "grass_blade",
        Shape::Cylinder {
            radius_top: 0.02,
            radius_bottom: 0.02,
            height: 0.3,
            segments: 8,
        },
        "grass",
        Placement::at(x, 0.15, z),
    );
}

/// The pond: a translucent double-sided plane floating just above the
/// ground so it never z-fights with it.
pub fn add_pond(scene: &mut Scene, x: f32, z: f32, width: f32, height: f32) {
    scene.ensure_material(
        "pond",
        Material::from_hex("pond", 0x1E90FF)
            .with_opacity(0.7)
            .with_double_sided(),
    );

    spawn(
        scene,
        "pond",
        Shape::Plane { width, height },
        "pond",
        Placement::at(x, 0.1, z).rotated_x(Rad::from(Deg(-90.0))),
    );
}

/// The sun: a yellow sphere hanging in the sky.
pub fn add_sun(scene: &mut Scene, x: f32, y: f32, z: f32) {
    scene.ensure_material("sun", Material::from_hex("sun", 0xFFFF00));

    spawn(
        scene,
        "sun",
        Shape::Sphere {
            radius: 0.7,
            segments: 16,
            rings: 16,
        },
        "sun",
        Placement::at(x, y, z),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{CameraController, CameraManager, OrbitCamera};
    use cgmath::{Vector3, Zero};

    fn empty_scene() -> Scene {
        let camera = OrbitCamera::new(10.0, 0.3, 0.0, Vector3::zero(), 1.0);
        let controller = CameraController::new(0.005, 0.1);
        Scene::new(CameraManager::new(camera, controller))
    }

    #[test]
    fn test_tree_has_two_parts_at_expected_offsets() {
        let mut scene = empty_scene();
        add_tree(&mut scene, 0.0, 0.0, 1.0);

        assert_eq!(scene.object_count(), 2);
        let trunk = scene.objects_named("tree_trunk").next().unwrap();
        let canopy = scene.objects_named("tree_canopy").next().unwrap();
        assert_eq!(trunk.translation(), Vector3::new(0.0, 0.5, 0.0));
        assert_eq!(canopy.translation(), Vector3::new(0.0, 1.3, 0.0));
    }

    #[test]
    fn test_tree_scale_moves_canopy() {
        let mut scene = empty_scene();
        add_tree(&mut scene, 3.0, 3.0, 1.2);

        let trunk = scene.objects_named("tree_trunk").next().unwrap();
        let canopy = scene.objects_named("tree_canopy").next().unwrap();
        assert_eq!(trunk.translation(), Vector3::new(3.0, 0.6, 3.0));
        assert!((canopy.translation().y - 1.56).abs() < 1e-6);
    }

    #[test]
    fn test_house_parts_and_roof_rotation() {
        let mut scene = empty_scene();
        add_house(&mut scene, 6.0, -2.0);

        assert_eq!(scene.object_count(), 2);
        let base = scene.objects_named("house_base").next().unwrap();
        let roof = scene.objects_named("house_roof").next().unwrap();
        assert_eq!(base.translation(), Vector3::new(6.0, 0.75, -2.0));
        assert_eq!(roof.translation(), Vector3::new(6.0, 1.75, -2.0));

        // 45 degree rotation about Y: the rotation block holds cos/sin
        let cos45 = std::f32::consts::FRAC_1_SQRT_2;
        assert!((roof.transform.x.x - cos45).abs() < 1e-6);
        assert!((roof.transform.x.z + cos45).abs() < 1e-6);
        assert!((roof.transform.z.x - cos45).abs() < 1e-6);
        assert!((roof.transform.z.z - cos45).abs() < 1e-6);
    }

    #[test]
    fn test_cloud_is_three_offset_puffs() {
        let mut scene = empty_scene();
        add_cloud(&mut scene, 3.0, 8.0, -8.0);

        let puffs: Vec<_> = scene.objects_named("cloud_puff").collect();
        assert_eq!(puffs.len(), 3);
        assert_eq!(puffs[0].translation(), Vector3::new(2.5, 8.0, -8.0));
        assert_eq!(puffs[1].translation(), Vector3::new(3.0, 8.0, -8.0));
        assert_eq!(puffs[2].translation(), Vector3::new(3.5, 8.0, -8.0));
    }

    #[test]
    fn test_dog_has_nine_parts() {
        let mut scene = empty_scene();
        add_animal(&mut scene, 2.0, 2.0, AnimalKind::Dog);

        assert_eq!(scene.object_count(), 9);
        assert_eq!(scene.objects_named("dog_leg").count(), 4);
        assert_eq!(scene.objects_named("dog_ear").count(), 2);
        assert_eq!(scene.objects_named("dog_tail").count(), 1);

        let head = scene.objects_named("dog_head").next().unwrap();
        assert_eq!(head.translation(), Vector3::new(2.7, 0.35, 2.0));
    }

    #[test]
    fn test_sheep_has_two_parts() {
        let mut scene = empty_scene();
        add_animal(&mut scene, -3.0, 3.0, AnimalKind::Sheep);

        assert_eq!(scene.object_count(), 2);
        let body = scene.objects_named("sheep_body").next().unwrap();
        let head = scene.objects_named("sheep_head").next().unwrap();
        assert_eq!(body.translation(), Vector3::new(-3.0, 0.4, 3.0));
        assert_eq!(head.translation(), Vector3::new(-2.6, 0.4, 3.0));
    }

    #[test]
    fn test_pond_material_is_translucent_and_double_sided() {
        let mut scene = empty_scene();
        add_pond(&mut scene, 0.0, 0.0, 5.0, 3.0);

        let pond = scene.objects_named("pond").next().unwrap();
        assert_eq!(pond.translation(), Vector3::new(0.0, 0.1, 0.0));
        let material = scene.material_for_object(pond);
        assert!(material.is_transparent());
        assert!(material.double_sided);
    }

    #[test]
    fn test_builders_are_order_independent() {
        let mut alone = empty_scene();
        add_tree(&mut alone, 0.0, 0.0, 1.0);

        let mut crowded = empty_scene();
        add_ground(&mut crowded);
        add_house(&mut crowded, -7.0, -3.0);
        add_tree(&mut crowded, 0.0, 0.0, 1.0);

        let lone_trunk = alone.objects_named("tree_trunk").next().unwrap();
        let crowded_trunk = crowded.objects_named("tree_trunk").next().unwrap();
        assert_eq!(lone_trunk.translation(), crowded_trunk.translation());
        assert_eq!(lone_trunk.transform, crowded_trunk.transform);
    }

    #[test]
    fn test_material_registration_is_idempotent() {
        let mut scene = empty_scene();
        add_tree(&mut scene, 0.0, 0.0, 1.0);
        add_tree(&mut scene, 5.0, -5.0, 1.0);

        assert_eq!(scene.material_manager.len(), 2);
    }
}
