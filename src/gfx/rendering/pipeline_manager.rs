//! Render pipeline registry
//!
//! The scene needs three variants of the same color pipeline: opaque
//! back-face-culled, opaque double-sided, and transparent. Configurations
//! are registered up front and compiled together once the shared bind group
//! layouts exist.

use std::{collections::HashMap, sync::Arc};
use wgpu::*;

use crate::gfx::resources::texture_resource::TextureResource;
use crate::gfx::scene::vertex::Vertex3D;

/// Configuration for creating a render pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub shader: String,
    pub cull_mode: Option<Face>,
    pub blend: Option<BlendState>,
    pub depth_write_enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: "Default Pipeline".to_string(),
            shader: "scene".to_string(),
            cull_mode: Some(Face::Back),
            blend: Some(BlendState::REPLACE),
            depth_write_enabled: true,
        }
    }
}

impl PipelineConfig {
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_shader(mut self, shader: &str) -> Self {
        self.shader = shader.to_string();
        self
    }

    pub fn with_cull_mode(mut self, cull_mode: Option<Face>) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    /// Alpha blending with depth writes off, for translucent materials.
    pub fn with_alpha_blending(mut self) -> Self {
        self.blend = Some(BlendState::ALPHA_BLENDING);
        self.depth_write_enabled = false;
        self
    }
}

/// Manages render pipelines compiled from registered configurations.
pub struct PipelineManager {
    device: Arc<Device>,

    pipelines: HashMap<String, RenderPipeline>,
    pipeline_configs: HashMap<String, PipelineConfig>,
    shader_modules: HashMap<String, ShaderModule>,
    pending_pipelines: Vec<String>,
}

impl PipelineManager {
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            pipelines: HashMap::new(),
            pipeline_configs: HashMap::new(),
            shader_modules: HashMap::new(),
            pending_pipelines: Vec::new(),
        }
    }

    /// Compile a shader module under a short name.
    pub fn load_shader(&mut self, name: &str, source: &str) {
        let shader_module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });
        self.shader_modules.insert(name.to_string(), shader_module);
    }

    /// Register a pipeline configuration (doesn't create it yet).
    pub fn register_pipeline(&mut self, name: &str, config: PipelineConfig) {
        self.pipeline_configs.insert(name.to_string(), config);
        self.pending_pipelines.push(name.to_string());
    }

    /// Create every registered pipeline against the shared layouts and the
    /// surface color format.
    pub fn create_all_pipelines(
        &mut self,
        bind_group_layouts: &[&BindGroupLayout],
        color_format: TextureFormat,
    ) -> Result<(), String> {
        let pending: Vec<String> = self.pending_pipelines.drain(..).collect();

        for name in pending {
            let config = self
                .pipeline_configs
                .get(&name)
                .ok_or_else(|| format!("no pipeline config registered for '{name}'"))?
                .clone();

            let shader = self
                .shader_modules
                .get(&config.shader)
                .ok_or_else(|| format!("shader '{}' not loaded", config.shader))?;

            let layout = self
                .device
                .create_pipeline_layout(&PipelineLayoutDescriptor {
                    label: Some(&format!("{} Layout", config.label)),
                    bind_group_layouts,
                    push_constant_ranges: &[],
                });

            let pipeline = self
                .device
                .create_render_pipeline(&RenderPipelineDescriptor {
                    label: Some(&config.label),
                    layout: Some(&layout),
                    vertex: VertexState {
                        module: shader,
                        entry_point: Some("vs_main"),
                        compilation_options: PipelineCompilationOptions::default(),
                        buffers: &[Vertex3D::desc()],
                    },
                    fragment: Some(FragmentState {
                        module: shader,
                        entry_point: Some("fs_main"),
                        compilation_options: PipelineCompilationOptions::default(),
                        targets: &[Some(ColorTargetState {
                            format: color_format,
                            blend: config.blend,
                            write_mask: ColorWrites::ALL,
                        })],
                    }),
                    primitive: PrimitiveState {
                        topology: PrimitiveTopology::TriangleList,
                        strip_index_format: None,
                        front_face: FrontFace::Ccw,
                        cull_mode: config.cull_mode,
                        unclipped_depth: false,
                        polygon_mode: PolygonMode::Fill,
                        conservative: false,
                    },
                    depth_stencil: Some(DepthStencilState {
                        format: TextureResource::DEPTH_FORMAT,
                        depth_write_enabled: config.depth_write_enabled,
                        depth_compare: CompareFunction::Less,
                        stencil: StencilState::default(),
                        bias: DepthBiasState::default(),
                    }),
                    multisample: MultisampleState::default(),
                    multiview: None,
                    cache: None,
                });

            self.pipelines.insert(name, pipeline);
        }

        Ok(())
    }

    pub fn get_pipeline(&self, name: &str) -> Option<&RenderPipeline> {
        self.pipelines.get(name)
    }
}
