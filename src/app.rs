use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::{
        camera_controller::CameraController,
        camera_utils::CameraManager,
        orbit_camera::{initial_orbit, OrbitCamera},
    },
    rendering::render_engine::RenderEngine,
    scene::Scene,
};

/// Windowed application wrapping the event loop and render state.
///
/// Construct with [`MeadowApp::new`], populate the scene through
/// [`MeadowApp::scene_mut`], then call [`MeadowApp::run`]. The window and
/// GPU context are created lazily on the first `resumed` event.
pub struct MeadowApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
}

impl MeadowApp {
    /// Creates the application with the default camera framing.
    pub fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let (distance, pitch, yaw) = initial_orbit();
        let camera = OrbitCamera::new(distance, pitch, yaw, cgmath::Vector3::new(0.0, 0.0, 0.0), 1.0);
        let controller = CameraController::new(0.005, 0.1);

        let camera_manager = CameraManager::new(camera, controller);
        let scene = Scene::new(camera_manager);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene,
            },
        }
    }

    /// Mutable access to the scene, for populating it before `run`.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.app_state.scene
    }

    /// Runs the event loop until the window closes (consumes self).
    pub fn run(mut self) -> Result<(), EventLoopError> {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop.run_app(&mut self.app_state)
    }
}

impl Default for MeadowApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("meadow")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();

            let window_clone = window_handle.clone();
            let renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, width, height).await
            });

            let renderer = match renderer {
                Ok(renderer) => renderer,
                Err(err) => {
                    log::error!("failed to initialize renderer: {err}");
                    event_loop.exit();
                    return;
                }
            };

            self.scene
                .camera_manager
                .camera
                .resize_projection(width, height);
            self.scene
                .init_gpu_resources(renderer.device(), renderer.queue());

            self.render_engine = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if matches!(
                    event.physical_key,
                    winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
                ) {
                    event_loop.exit();
                    return;
                }
                self.scene.camera_manager.process_keyboard_event(&event);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.scene.update();
                render_engine.update(self.scene.camera_manager.camera.uniform);

                if let Err(err) = render_engine.render_frame(&self.scene) {
                    log::error!("render failed: {err}");
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        self.scene.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
