//! WGPU-based rendering engine
//!
//! Owns the surface, device, queue, depth buffer, and the color pipelines,
//! and renders the static scene once per frame from the current camera.

use std::sync::Arc;
use wgpu::TextureFormat;

use crate::error::RenderError;
use crate::gfx::{
    camera::camera_utils::CameraUniform,
    resources::{
        global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO},
        texture_resource::TextureResource,
    },
    scene::{object::DrawObject, object::Object, scene::Scene},
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

/// Sky blue, the fixed scene background.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.529,
    g: 0.808,
    b: 0.922,
    a: 1.0,
};

/// Core rendering engine managing GPU resources and draw calls.
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
}

impl RenderEngine {
    /// Creates a new render engine for the given window.
    ///
    /// Initializes wgpu, creates the depth buffer, and compiles the three
    /// color pipeline variants (opaque, double-sided, transparent).
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| RenderError::NoAdapter)?;

        log::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let mut global_bindings = GlobalBindings::new(&device);
        global_bindings.create_bind_group(&device, &global_ubo);

        let transform_bind_group_layout = Object::transform_bind_group_layout(&device);

        let material_bindings =
            crate::gfx::resources::material::MaterialBindings::new(&device);

        let device_handle: Arc<wgpu::Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("scene", include_str!("scene.wgsl"));

        pipeline_manager.register_pipeline(
            "opaque",
            PipelineConfig::default().with_label("OPAQUE"),
        );
        pipeline_manager.register_pipeline(
            "double_sided",
            PipelineConfig::default()
                .with_label("DOUBLE SIDED")
                .with_cull_mode(None),
        );
        pipeline_manager.register_pipeline(
            "transparent",
            PipelineConfig::default()
                .with_label("TRANSPARENT")
                .with_cull_mode(None)
                .with_alpha_blending(),
        );

        pipeline_manager
            .create_all_pipelines(
                &[
                    global_bindings.bind_group_layout(),
                    &transform_bind_group_layout,
                    material_bindings.bind_group_layout(),
                ],
                format,
            )
            .map_err(RenderError::PipelineCreation)?;

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            pipeline_manager,
            global_ubo,
            global_bindings,
        })
    }

    /// Renders one frame of the scene from the current camera.
    ///
    /// Single render pass: opaque objects first (culled or double-sided per
    /// material), then transparent ones with depth writes off so the pond
    /// composites over the ground.
    pub fn render_frame(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and try again next frame
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface timeout, skipping frame");
                return Ok(());
            }
            Err(err) => return Err(RenderError::Surface(err)),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            self.draw_objects(&mut render_pass, scene, false);
            self.draw_objects(&mut render_pass, scene, true);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    fn draw_objects<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        scene: &'a Scene,
        transparent: bool,
    ) {
        for object in scene.objects.iter() {
            let material = scene.material_for_object(object);
            if material.is_transparent() != transparent {
                continue;
            }

            let pipeline_name = if material.is_transparent() {
                "transparent"
            } else if material.double_sided {
                "double_sided"
            } else {
                "opaque"
            };

            let (Some(pipeline), Some(transform_bind_group), Some(material_bind_group)) = (
                self.pipeline_manager.get_pipeline(pipeline_name),
                object.transform_bind_group(),
                material.bind_group(),
            ) else {
                continue;
            };

            render_pass.set_pipeline(pipeline);
            render_pass.set_bind_group(1, transform_bind_group, &[]);
            render_pass.set_bind_group(2, material_bind_group, &[]);
            render_pass.draw_object(object);
        }
    }

    /// Pushes updated camera data to the GPU. Called once per frame.
    pub fn update(&mut self, camera_uniform: CameraUniform) {
        update_global_ubo(&mut self.global_ubo, &self.queue, camera_uniform);
    }

    /// Resizes the render surface and recreates the depth buffer.
    ///
    /// Zero-sized dimensions (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");

        log::debug!("surface resized to {}x{}", width, height);
    }

    /// Current surface dimensions.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
