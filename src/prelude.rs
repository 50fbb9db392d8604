//! # Orbit Pilot Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use orbit_pilot::prelude::*;
//!
//! let mut demo = DemoScene::build(&DemoConfig::for_mode(DemoMode::Pilot)).unwrap();
//! demo.handle_pointer(&PointerEvent::down(0.0, 0.0));
//! demo.handle_pointer(&PointerEvent::Move { x: 20.0, y: 0.0 });
//! ```

pub use crate::app::{PilotApp, RenderLoop, StopToken};
pub use crate::config::{CameraConfig, CameraPlacement, DemoConfig, DemoMode, EnvironmentConfig, PilotConfig};
pub use crate::demo::DemoScene;
pub use crate::error::{AppError, ConfigError, RenderError, SceneError};

pub use crate::gfx::camera::{CameraManager, OrbitAngles, OrbitCamera};
pub use crate::gfx::geometry::{generate_box, generate_cube, generate_cylinder, merge_meshes, GeometryData};
pub use crate::gfx::scene::{HemisphericLight, Object, ObjectId, Scene};
pub use crate::input::{DragRotationController, PointerButton, PointerEvent, YawTarget};

pub use cgmath::{InnerSpace, Vector3, Zero};
