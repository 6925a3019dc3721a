use wgpu::Device;

use crate::gfx::{
    camera::camera_utils::CameraManager,
    resources::material::{Material, MaterialManager},
};

use super::object::Object;

/// Main scene containing objects, materials, and camera.
///
/// Populated once by the assembly script before the event loop starts;
/// after that only the camera state changes.
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
}

impl Scene {
    /// Creates a new, empty scene with the given camera manager.
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Updates per-frame state (camera matrices).
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    /// Appends a fully placed object to the scene.
    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Registers a material under `name` unless one already exists.
    ///
    /// Builders call this for every part they spawn, so registration has to
    /// be idempotent per name.
    pub fn ensure_material(&mut self, name: &str, material: Material) {
        if self.material_manager.get_material(name).is_none() {
            self.material_manager.add_material(material);
        }
    }

    /// Material assigned to the object, or the default material when the
    /// reference is dangling.
    pub fn material_for_object(&self, object: &Object) -> &Material {
        self.material_manager.material_or_default(&object.material_id)
    }

    /// Uploads mesh/transform/material data for the whole scene.
    ///
    /// Must be called once the GPU context exists and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }
        self.material_manager.update_all_gpu_resources(device, queue);

        log::debug!(
            "scene GPU upload complete: {} objects, {} materials",
            self.objects.len(),
            self.material_manager.len()
        );
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Objects whose name starts with `prefix`, in insertion order.
    pub fn objects_named<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Object> + 'a {
        self.objects
            .iter()
            .filter(move |object| object.name.starts_with(prefix))
    }
}
