//! Scene assembly
//!
//! One fixed script that builds the whole meadow: ground, a tree line,
//! scattered grass, three houses, a dog, a sheep, ten clouds, a pond, and
//! the sun. Every coordinate is a literal, so two runs always produce the
//! same scene.

use crate::gfx::scene::Scene;

use super::builders::{
    add_animal, add_cloud, add_grass, add_ground, add_house, add_pond, add_sun, add_tree,
    AnimalKind,
};

/// Populates an empty scene with the full meadow.
pub fn populate(scene: &mut Scene) {
    add_ground(scene);

    // Tree line along z = -5
    for x in (-10..=10).step_by(5) {
        add_tree(scene, x as f32, -5.0, 1.0);
    }
    add_tree(scene, 3.0, 3.0, 1.2);
    add_tree(scene, -5.0, 4.0, 0.8);

    // Grass strip in front of the houses
    for x in -15..=15 {
        add_grass(scene, x as f32, 1.0);
    }

    add_house(scene, -7.0, -3.0);
    add_house(scene, 6.0, -2.0);
    add_house(scene, 0.0, 4.0);

    add_animal(scene, 2.0, 2.0, AnimalKind::Dog);
    add_animal(scene, -3.0, 3.0, AnimalKind::Sheep);

    let cloud_positions: [(f32, f32, f32); 10] = [
        (-5.0, 7.0, -10.0),
        (3.0, 8.0, -8.0),
        (8.0, 6.0, -9.0),
        (-10.0, 9.0, -12.0),
        (0.0, 10.0, -14.0),
        (5.0, 7.5, -13.0),
        (-7.0, 6.5, -11.0),
        (10.0, 9.0, -10.0),
        (12.0, 8.0, -13.0),
        (-12.0, 8.0, -9.0),
    ];
    for (x, y, z) in cloud_positions {
        add_cloud(scene, x, y, z);
    }

    add_pond(scene, 0.0, 0.0, 5.0, 3.0);

    add_sun(scene, 10.0, 8.0, -15.0);

    log::info!(
        "scene populated: {} objects, {} materials",
        scene.object_count(),
        scene.material_manager.len()
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

    fn populated_scene() -> Scene {
        let mut scene = empty_scene();
        populate(&mut scene);
        scene
    }

    #[test]
    fn test_population_counts() {
        let scene = populated_scene();

        assert_eq!(scene.objects_named("ground").count(), 1);
        assert_eq!(scene.objects_named("tree_trunk").count(), 7);
        assert_eq!(scene.objects_named("tree_canopy").count(), 7);
        assert_eq!(scene.objects_named("grass_blade").count(), 31);
        assert_eq!(scene.objects_named("house_base").count(), 3);
        assert_eq!(scene.objects_named("house_roof").count(), 3);
        assert_eq!(scene.objects_named("dog").count(), 9);
        assert_eq!(scene.objects_named("sheep").count(), 2);
        assert_eq!(scene.objects_named("cloud_puff").count(), 30);
        assert_eq!(scene.objects_named("pond").count(), 1);
        assert_eq!(scene.objects_named("sun").count(), 1);

        assert_eq!(scene.object_count(), 95);
    }

    #[test]
    fn test_population_is_deterministic() {
        let first = populated_scene();
        let second = populated_scene();

        assert_eq!(first.object_count(), second.object_count());
        for (a, b) in first.objects.iter().zip(second.objects.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.material_id, b.material_id);
            assert_eq!(a.transform, b.transform);
        }
    }

    #[test]
    fn test_tree_line_positions() {
        let scene = populated_scene();
        let trunk_xs: Vec<f32> = scene
            .objects_named("tree_trunk")
            .take(5)
            .map(|trunk| trunk.translation().x)
            .collect();
        assert_eq!(trunk_xs, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);

        for trunk in scene.objects_named("tree_trunk").take(5) {
            assert_eq!(trunk.translation().z, -5.0);
        }
    }

    #[test]
    fn test_landmark_placements() {
        let scene = populated_scene();

        let sun = scene.objects_named("sun").next().unwrap();
        assert_eq!(sun.translation(), Vector3::new(10.0, 8.0, -15.0));

        let pond = scene.objects_named("pond").next().unwrap();
        assert_eq!(pond.translation(), Vector3::new(0.0, 0.1, 0.0));

        let dog_body = scene.objects_named("dog_body").next().unwrap();
        assert_eq!(dog_body.translation(), Vector3::new(2.0, 0.25, 2.0));
    }

    #[test]
    fn test_only_pond_is_transparent() {
        let scene = populated_scene();
        let transparent: Vec<_> = scene
            .objects
            .iter()
            .filter(|object| scene.material_for_object(object).is_transparent())
            .collect();
        assert_eq!(transparent.len(), 1);
        assert_eq!(transparent[0].name, "pond");
    }
}
