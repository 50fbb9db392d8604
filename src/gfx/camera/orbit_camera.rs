use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform, OrbitAngles};
use cgmath::*;
use std::f32::consts::PI;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Radius used when a position collapses onto the target
const MIN_RADIUS: f32 = 0.0001;

/// Camera orbiting a target point, parameterized by two angles and a distance.
///
/// `alpha` is the horizontal (longitudinal) angle, `beta` the vertical angle
/// measured from the +Y axis, and `radius` the distance to `target`:
///
/// eye = target + (r cos(alpha) sin(beta), r cos(beta), r sin(alpha) sin(beta))
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
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

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl OrbitAngles for OrbitCamera {
    fn current_horizontal_angle(&self) -> f32 {
        self.alpha
    }
}

impl OrbitCamera {
    pub fn new(alpha: f32, beta: f32, radius: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            alpha,
            beta,
            radius,
            eye: Vector3::zero(), // Will be auto-calculated in `update()` nevertheless.
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: Rad(0.8),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    /// Configures the zoom bounds and re-clamps the current radius into them
    pub fn set_radius_limits(&mut self, lower: Option<f32>, upper: Option<f32>) {
        self.bounds.lower_radius_limit = lower;
        self.bounds.upper_radius_limit = upper;
        self.set_radius(self.radius);
    }

    pub fn set_radius(&mut self, radius: f32) {
        let mut bounded = radius;
        if let Some(lower) = self.bounds.lower_radius_limit {
            bounded = bounded.max(lower);
        }
        if let Some(upper) = self.bounds.upper_radius_limit {
            bounded = bounded.min(upper);
        }
        self.radius = bounded;
        self.update();
    }

    /// Zooms by `delta` wheel units; the step grows with the current distance
    pub fn zoom(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.radius.max(1.0) * 10.0) * delta;
        self.set_radius(self.radius + corrected_zoom);
    }

    pub fn set_beta(&mut self, beta: f32) {
        self.beta = beta.clamp(self.bounds.lower_beta_limit, self.bounds.upper_beta_limit);
        self.update();
    }

    pub fn add_beta(&mut self, delta: f32) {
        self.set_beta(self.beta + delta);
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        let mut bounded_alpha = alpha;
        if let Some(lower) = self.bounds.lower_alpha_limit {
            bounded_alpha = bounded_alpha.max(lower);
        }
        if let Some(upper) = self.bounds.upper_alpha_limit {
            bounded_alpha = bounded_alpha.min(upper);
        }
        self.alpha = bounded_alpha;
        self.update();
    }

    pub fn add_alpha(&mut self, delta: f32) {
        self.set_alpha(self.alpha + delta);
    }

    /// Places the camera at a cartesian position and rebuilds alpha, beta and
    /// radius from it. Alpha stays within one turn of its previous value.
    pub fn set_position(&mut self, position: Vector3<f32>) {
        let offset = position - self.target;

        let mut radius = offset.magnitude();
        if radius == 0.0 {
            radius = MIN_RADIUS;
        }

        let previous_alpha = self.alpha;
        let mut alpha = if offset.x == 0.0 && offset.z == 0.0 {
            PI / 2.0
        } else {
            (offset.x / (offset.x * offset.x + offset.z * offset.z).sqrt()).acos()
        };
        if offset.z < 0.0 {
            alpha = 2.0 * PI - alpha;
        }
        let correction_turns = ((previous_alpha - alpha) / (2.0 * PI)).round();
        alpha += correction_turns * 2.0 * PI;

        self.alpha = alpha;
        self.beta = (offset.y / radius).clamp(-1.0, 1.0).acos();
        self.radius = radius;
        self.check_limits();
    }

    /// Re-applies every bound to the current parameters
    fn check_limits(&mut self) {
        self.set_alpha(self.alpha);
        self.set_beta(self.beta);
        self.set_radius(self.radius);
    }

    /// Updates the camera after changing `radius`, `alpha` or `beta`.
    fn update(&mut self) {
        self.eye = calculate_cartesian_eye_position(self.alpha, self.beta, self.radius, self.target);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub lower_radius_limit: Option<f32>,
    pub upper_radius_limit: Option<f32>,
    pub lower_beta_limit: f32,
    pub upper_beta_limit: f32,
    pub lower_alpha_limit: Option<f32>,
    pub upper_alpha_limit: Option<f32>,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            lower_radius_limit: None,
            upper_radius_limit: None,
            lower_beta_limit: 0.01,
            upper_beta_limit: PI - 0.01,
            lower_alpha_limit: None,
            upper_alpha_limit: None,
        }
    }
}

fn calculate_cartesian_eye_position(
    alpha: f32,
    beta: f32,
    radius: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        radius * alpha.cos() * beta.sin(),
        radius * beta.cos(),
        radius * alpha.sin() * beta.sin(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_eye_from_angles() {
        let camera = OrbitCamera::new(0.0, PI / 2.0, 10.0, Vector3::zero(), 1.0);
        assert!(close(camera.eye.x, 10.0));
        assert!(close(camera.eye.y, 0.0));
        assert!(close(camera.eye.z, 0.0));
    }

    #[test]
    fn test_radius_clamped_to_limits() {
        let mut camera = OrbitCamera::new(-PI / 4.0, PI / 3.0, 15.0, Vector3::zero(), 1.0);
        camera.set_radius_limits(Some(9.0), Some(50.0));
        assert_eq!(camera.radius, 15.0);

        camera.set_radius(3.0);
        assert_eq!(camera.radius, 9.0);
        camera.set_radius(120.0);
        assert_eq!(camera.radius, 50.0);

        for _ in 0..200 {
            camera.zoom(-1.0);
        }
        assert_eq!(camera.radius, 9.0);
        for _ in 0..200 {
            camera.zoom(1.0);
        }
        assert_eq!(camera.radius, 50.0);
    }

    #[test]
    fn test_limits_reclamp_current_radius() {
        let mut camera = OrbitCamera::new(0.0, 1.0, 0.0, Vector3::zero(), 1.0);
        camera.set_radius_limits(Some(9.0), Some(50.0));
        assert_eq!(camera.radius, 9.0);
    }

    #[test]
    fn test_set_position_rebuilds_angles() {
        let mut camera = OrbitCamera::new(0.0, 0.0, 0.0, Vector3::zero(), 1.0);
        camera.set_position(Vector3::new(0.0, 10.0, -15.0));

        let expected_radius = (10.0f32 * 10.0 + 15.0 * 15.0).sqrt();
        assert!(close(camera.radius, expected_radius));
        assert!(close(camera.alpha, -PI / 2.0));
        assert!(close(camera.beta, (10.0 / expected_radius).acos()));
        assert!(close(camera.eye.y, 10.0));
        assert!(close(camera.eye.z, -15.0));
    }

    #[test]
    fn test_beta_stays_off_the_poles() {
        let mut camera = OrbitCamera::new(0.0, 1.0, 10.0, Vector3::zero(), 1.0);
        camera.add_beta(10.0);
        assert!(camera.beta < PI);
        camera.add_beta(-20.0);
        assert!(camera.beta > 0.0);
    }
}
