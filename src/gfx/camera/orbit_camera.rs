use super::camera_utils::{convert_matrix4_to_array, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Orbit camera: spherical coordinates around a target point.
///
/// `distance`, `pitch`, and `yaw` define the eye position; the projection
/// uses a 75 degree vertical FOV with a 0.1..1000 depth range.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // recalculated by update()
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: Rad::from(Deg(75.0)),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Restore the startup framing of the scene.
    pub fn reset_to_default(&mut self) {
        let (distance, pitch, yaw) = initial_orbit();
        self.distance = distance;
        self.pitch = pitch;
        self.yaw = yaw;
        self.target = Vector3::zero();
        self.update();
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.distance.max(1.0 + f32::EPSILON)) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Pans the camera relative to the current view direction.
    ///
    /// `delta.0` moves the focus left/right, `delta.1` up/down, both scaled
    /// by distance so panning feels the same at every zoom level.
    pub fn pan(&mut self, delta: (f32, f32)) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        let pan_scale = self.distance * 0.1;
        let movement = right * delta.0 * pan_scale + up * delta.1 * pan_scale;

        self.eye += movement;
        self.target += movement;
    }

    /// Recomputes the eye after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    /// Viewport resize: the aspect ratio becomes exactly width / height.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

/// Orbit parameters for the default framing: eye at (0, 5, 15) looking at
/// the origin, yaw 0 placing the eye on +Z.
pub fn initial_orbit() -> (f32, f32, f32) {
    let eye = Vector3::new(0.0f32, 5.0, 15.0);
    let distance = eye.magnitude();
    let pitch = (eye.y / distance).asin();
    (distance, pitch, 0.0)
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: Some(80.0),
            min_pitch: -std::f32::consts::PI / 2.0 + f32::EPSILON,
            max_pitch: std::f32::consts::PI / 2.0 - f32::EPSILON,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_sets_exact_aspect() {
        let mut camera = OrbitCamera::new(10.0, 0.3, 0.0, Vector3::zero(), 1.0);
        camera.resize_projection(1920, 1080);
        assert_eq!(camera.aspect, 1920.0 / 1080.0);
        camera.resize_projection(997, 313);
        assert_eq!(camera.aspect, 997.0 / 313.0);
    }

    #[test]
    fn test_initial_orbit_places_eye_at_default_framing() {
        let (distance, pitch, yaw) = initial_orbit();
        let camera = OrbitCamera::new(distance, pitch, yaw, Vector3::zero(), 1.5);
        assert!((camera.eye.x - 0.0).abs() < 1e-4);
        assert!((camera.eye.y - 5.0).abs() < 1e-4);
        assert!((camera.eye.z - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_respects_bounds() {
        let mut camera = OrbitCamera::new(10.0, 0.3, 0.0, Vector3::zero(), 1.0);
        camera.bounds.min_distance = Some(2.0);
        camera.bounds.max_distance = Some(20.0);
        camera.set_distance(100.0);
        assert_eq!(camera.distance, 20.0);
        camera.set_distance(0.5);
        assert_eq!(camera.distance, 2.0);
    }
}
