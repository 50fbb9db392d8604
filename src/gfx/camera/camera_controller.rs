use super::orbit_camera::OrbitCamera;
use crate::input::pointer::{PointerButton, PointerEvent};

/// Built-in orbit behavior: drag with the primary pointer to orbit, wheel to zoom.
/// Other buttons are ignored.
pub struct CameraController {
    /// Radians of orbit per pixel of pointer travel
    pub rotate_speed: f32,
    /// Scale applied to wheel deltas
    pub zoom_speed: f32,
    is_pointer_down: bool,
    last_position: Option<(f32, f32)>,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            is_pointer_down: false,
            last_position: None,
        }
    }

    /// Applies one pointer event to the camera. Returns true if the camera moved.
    pub fn process_pointer(&mut self, event: &PointerEvent, camera: &mut OrbitCamera) -> bool {
        match *event {
            PointerEvent::Down {
                x,
                y,
                button: PointerButton::Primary,
            } => {
                self.is_pointer_down = true;
                self.last_position = Some((x, y));
                false
            }
            PointerEvent::Up {
                button: PointerButton::Primary,
                ..
            } => {
                self.is_pointer_down = false;
                self.last_position = None;
                false
            }
            PointerEvent::Move { x, y } => {
                let previous = self.last_position.replace((x, y));
                if !self.is_pointer_down {
                    return false;
                }
                let Some((last_x, last_y)) = previous else {
                    return false;
                };

                let (dx, dy) = (x - last_x, y - last_y);
                if dx == 0.0 && dy == 0.0 {
                    return false;
                }

                // Dragging right swings the camera toward decreasing alpha
                camera.add_alpha(-dx * self.rotate_speed);
                camera.add_beta(-dy * self.rotate_speed);
                true
            }
            PointerEvent::Wheel { delta } => {
                if delta == 0.0 {
                    return false;
                }
                camera.zoom(-delta * self.zoom_speed);
                true
            }
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => false,
        }
    }

    /// Forgets any in-progress drag
    pub fn reset(&mut self) {
        self.is_pointer_down = false;
        self.last_position = None;
    }

    /// Returns true if currently orbiting
    pub fn is_rotating(&self) -> bool {
        self.is_pointer_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn camera() -> OrbitCamera {
        let mut camera = OrbitCamera::new(0.0, 1.0, 15.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
        camera.set_radius_limits(Some(9.0), Some(50.0));
        camera
    }

    #[test]
    fn test_drag_orbits() {
        let mut camera = camera();
        let mut controller = CameraController::new(0.01, 1.0);

        controller.process_pointer(&PointerEvent::down(100.0, 100.0), &mut camera);
        assert!(controller.is_rotating());
        assert!(controller.process_pointer(&PointerEvent::Move { x: 150.0, y: 90.0 }, &mut camera));

        assert!((camera.alpha - (-0.5)).abs() < 1e-5);
        assert!((camera.beta - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_hover_does_not_orbit() {
        let mut camera = camera();
        let mut controller = CameraController::new(0.01, 1.0);

        assert!(!controller.process_pointer(&PointerEvent::Move { x: 10.0, y: 10.0 }, &mut camera));
        assert!(!controller.process_pointer(&PointerEvent::Move { x: 90.0, y: 10.0 }, &mut camera));
        assert_eq!(camera.alpha, 0.0);

        controller.process_pointer(&PointerEvent::down(90.0, 10.0), &mut camera);
        controller.process_pointer(&PointerEvent::up(90.0, 10.0), &mut camera);
        assert!(!controller.process_pointer(&PointerEvent::Move { x: 200.0, y: 10.0 }, &mut camera));
        assert_eq!(camera.alpha, 0.0);
    }

    #[test]
    fn test_wheel_zoom_respects_bounds() {
        let mut camera = camera();
        let mut controller = CameraController::new(0.01, 1.0);

        for _ in 0..100 {
            controller.process_pointer(&PointerEvent::Wheel { delta: 1.0 }, &mut camera);
        }
        assert_eq!(camera.radius, 9.0);

        for _ in 0..100 {
            controller.process_pointer(&PointerEvent::Wheel { delta: -1.0 }, &mut camera);
        }
        assert_eq!(camera.radius, 50.0);
    }

    #[test]
    fn test_secondary_button_does_not_orbit() {
        let mut camera = camera();
        let mut controller = CameraController::new(0.01, 1.0);
        let right_down = PointerEvent::Down {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Secondary,
        };

        controller.process_pointer(&right_down, &mut camera);
        assert!(!controller.is_rotating());
        assert!(!controller.process_pointer(&PointerEvent::Move { x: 40.0, y: 0.0 }, &mut camera));
        assert_eq!(camera.alpha, 0.0);

        // Releasing another button leaves a primary drag running
        controller.process_pointer(&PointerEvent::down(40.0, 0.0), &mut camera);
        let right_up = PointerEvent::Up {
            x: 40.0,
            y: 0.0,
            button: PointerButton::Secondary,
        };
        controller.process_pointer(&right_up, &mut camera);
        assert!(controller.is_rotating());
    }
}
