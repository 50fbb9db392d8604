use cgmath::{Matrix4, SquareMatrix};

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};
use crate::input::pointer::PointerEvent;

pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
    controls_attached: bool,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self {
            camera,
            controller,
            controls_attached: false,
        }
    }

    /// Binds pointer input to the camera so dragging orbits and the wheel zooms
    pub fn attach_control(&mut self) {
        self.controls_attached = true;
    }

    /// Unbinds pointer input and drops any orbit drag in progress
    pub fn detach_control(&mut self) {
        self.controls_attached = false;
        self.controller.reset();
    }

    pub fn controls_attached(&self) -> bool {
        self.controls_attached
    }

    /// Forwards a pointer event to the controller when controls are attached.
    ///
    /// Returns true if the camera moved.
    pub fn process_pointer(&mut self, event: &PointerEvent) -> bool {
        if !self.controls_attached {
            return false;
        }
        self.controller.process_pointer(event, &mut self.camera)
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

/// Read access to a camera's orbit position.
///
/// Anything that reacts to where the camera currently sits on its orbit takes
/// this trait rather than a concrete camera, so it can be driven by a stub.
pub trait OrbitAngles {
    /// Horizontal orbit angle (alpha) in radians
    fn current_horizontal_angle(&self) -> f32;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}
