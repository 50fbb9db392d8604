//! # Drag Rotation
//!
//! While any pointer button is held down, every pointer move turns the pilot
//! so it faces the same way as the camera: `yaw = -pi/2 - alpha`, where alpha is
//! the camera's current horizontal orbit angle. The camera's own orbit controls
//! see the same events first, so the yaw always follows the freshest alpha. Only
//! the primary button orbits the camera; other buttons turn the pilot in place.
//!
//! ```text
//!          Down                 Move (writes yaw)
//!   Idle ────────▶ Dragging ◀──────────┘
//!    ▲                │
//!    └──────  Up ─────┘
//! ```

use std::f32::consts::FRAC_PI_2;

use log::debug;

use super::pointer::PointerEvent;
use crate::gfx::{
    camera::OrbitAngles,
    scene::{Object, ObjectId, Scene},
};

/// Yaw that makes the target face away from a camera at horizontal angle `alpha`
pub fn facing_yaw(alpha: f32) -> f32 {
    -FRAC_PI_2 - alpha
}

/// Something whose rotation about the vertical axis can be driven
pub trait YawTarget {
    fn yaw(&self) -> f32;
    fn set_yaw(&mut self, yaw: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Pointer-driven yaw for one scene object
#[derive(Debug, Default)]
pub struct DragRotationController {
    state: DragState,
    pilot: Option<ObjectId>,
}

impl DragRotationController {
    /// Creates an idle controller driving `pilot`, if there is one
    pub fn new(pilot: Option<ObjectId>) -> Self {
        Self {
            state: DragState::Idle,
            pilot,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn pilot(&self) -> Option<ObjectId> {
        self.pilot
    }

    /// Applies one pointer event.
    ///
    /// Returns true if a yaw was written to `target`. A missing target leaves
    /// the state machine running and writes nothing.
    pub fn handle<C, T>(&mut self, event: &PointerEvent, camera: &C, target: Option<&mut T>) -> bool
    where
        C: OrbitAngles + ?Sized,
        T: YawTarget + ?Sized,
    {
        match event {
            PointerEvent::Down { .. } => {
                self.transition(DragState::Dragging);
                false
            }
            PointerEvent::Up { .. } => {
                self.transition(DragState::Idle);
                false
            }
            PointerEvent::Move { .. } if self.is_dragging() => {
                let Some(target) = target else {
                    return false;
                };
                let yaw = facing_yaw(camera.current_horizontal_angle());
                target.set_yaw(yaw);
                true
            }
            PointerEvent::Move { .. } | PointerEvent::Wheel { .. } => false,
        }
    }

    /// [`handle`](Self::handle) against the pilot object inside `scene`
    pub fn handle_scene(&mut self, event: &PointerEvent, scene: &mut Scene) -> bool {
        match self.pilot {
            Some(pilot) => {
                let (camera, object) = scene.camera_and_object_mut(pilot);
                self.handle(event, camera, object)
            }
            None => self.handle::<_, Object>(event, scene.camera(), None),
        }
    }

    fn transition(&mut self, next: DragState) {
        if self.state != next {
            debug!("drag rotation: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
