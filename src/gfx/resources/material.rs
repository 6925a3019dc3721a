//! Material system for flat-color rendering
//!
//! Provides material definitions and centralized management with GPU
//! resource handling. Materials are stored in [`MaterialManager`] and
//! objects reference them by id. A material is a color plus two flags the
//! renderer cares about: transparency (alpha below one) and double-sidedness.

use std::collections::HashMap;
use wgpu::Device;

use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

/// Material ID for referencing materials
pub type MaterialId = String;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Material bind group management, slot 2 in the pipelines.
pub struct MaterialBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .create(device, "Material Bind Group Layout");

        MaterialBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(&mut self, device: &Device, ubo: &MaterialUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Material Bind Group"),
        );
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }
}

/// Flat-color material description.
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub double_sided: bool,

    // GPU resources, shared by all objects using this material
    material_ubo: Option<MaterialUBO>,
    material_bindings: Option<MaterialBindings>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            double_sided: false,
            material_ubo: None,
            material_bindings: None,
        }
    }
}

impl Material {
    pub fn new(name: &str, base_color: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            double_sided: false,
            material_ubo: None,
            material_bindings: None,
        }
    }

    /// Creates an opaque material from a packed 0xRRGGBB color.
    pub fn from_hex(name: &str, hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(name, [r, g, b, 1.0])
    }

    /// Builder pattern: set alpha transparency.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.base_color[3] = opacity.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: render both faces of each triangle.
    pub fn with_double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Transparent materials draw after opaque ones, with blending.
    pub fn is_transparent(&self) -> bool {
        self.base_color[3] < 1.0
    }

    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            base_color: self.base_color,
        }
    }

    /// Creates or refreshes the GPU uniform and bind group.
    pub fn update_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        let uniform = self.uniform();
        match (&mut self.material_ubo, &mut self.material_bindings) {
            (Some(ubo), Some(_)) => {
                ubo.update_content(queue, uniform);
            }
            _ => {
                let ubo = MaterialUBO::new_with_data(device, &self.uniform());
                let mut bindings = MaterialBindings::new(device);
                bindings.create_bind_group(device, &ubo);
                self.material_ubo = Some(ubo);
                self.material_bindings = Some(bindings);
            }
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.material_bindings
            .as_ref()
            .and_then(|bindings| bindings.bind_group.as_ref())
    }
}

/// Centralized material storage, keyed by material name.
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material: Material,
}

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Resolves a material id, falling back to the default material.
    pub fn material_or_default(&self, id: &str) -> &Material {
        self.materials.get(id).unwrap_or(&self.default_material)
    }

    pub fn update_all_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for material in self.materials.values_mut() {
            material.update_gpu_resources(device, queue);
        }
        self.default_material.update_gpu_resources(device, queue);
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn list_materials(&self) -> Vec<&String> {
        self.materials.keys().collect()
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_decodes_channels() {
        let material = Material::from_hex("trunk", 0x8B4513);
        assert!((material.base_color[0] - 0x8B as f32 / 255.0).abs() < 1e-6);
        assert!((material.base_color[1] - 0x45 as f32 / 255.0).abs() < 1e-6);
        assert!((material.base_color[2] - 0x13 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(material.base_color[3], 1.0);
        assert!(!material.is_transparent());
    }

    #[test]
    fn test_opacity_marks_transparent() {
        let material = Material::from_hex("pond", 0x1E90FF)
            .with_opacity(0.7)
            .with_double_sided();
        assert!(material.is_transparent());
        assert!(material.double_sided);
    }

    #[test]
    fn test_manager_falls_back_to_default() {
        let mut manager = MaterialManager::new();
        manager.add_material(Material::from_hex("leaves", 0x228B22));
        assert!(manager.get_material("leaves").is_some());
        assert_eq!(manager.material_or_default("missing").name, "Default");
    }
}
