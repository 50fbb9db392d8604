//! # Demo Scenes
//!
//! Composition root of the demo: builds a [`Scene`] for a [`DemoMode`] and
//! routes pointer input through it.
//!
//! Both modes share the orbit camera, light and ground. Cube mode adds the
//! six-colored cube and nothing reacts to dragging beyond the camera. Pilot
//! mode adds the pilot with its axis gizmo plus a [`DragRotationController`]
//! that keeps the pilot turned with the camera.

pub mod environment;
pub mod objects;

#[cfg(test)]
mod test_scenarios;

pub use environment::{create_camera, create_environment, Environment};
pub use objects::{build_pilot, build_static_cube, PILOT_MATERIAL};

use log::info;

use crate::{
    config::{DemoConfig, DemoMode},
    error::SceneError,
    gfx::scene::{ObjectId, Scene},
    input::{DragRotationController, PointerEvent},
};

/// A fully populated demo scene and the controllers attached to it
pub struct DemoScene {
    pub scene: Scene,
    pub mode: DemoMode,
    pub environment: Environment,
    /// The static cube, in cube mode
    pub cube: Option<ObjectId>,
    /// The pilot, in pilot mode when it could be built
    pub pilot: Option<ObjectId>,
    /// Present in pilot mode, even if the pilot itself is missing
    pub drag: Option<DragRotationController>,
}

impl DemoScene {
    /// Builds camera, environment and the mode's object
    pub fn build(config: &DemoConfig) -> Result<Self, SceneError> {
        let (width, height) = config.window_size;
        let aspect = width as f32 / height.max(1) as f32;

        let mut scene = Scene::new(create_camera(&config.camera, aspect));
        let environment = create_environment(&mut scene, &config.environment);

        let (cube, pilot, drag) = match config.mode {
            DemoMode::StaticCube => {
                let cube = build_static_cube(
                    &mut scene,
                    config.cube_size,
                    config.cube_face_colors,
                    config.cube_elevation,
                );
                (Some(cube), None, None)
            }
            DemoMode::Pilot => {
                let pilot = build_pilot(&mut scene, &config.pilot, config.axis_scale)?;
                (None, pilot, Some(DragRotationController::new(pilot)))
            }
        };

        let stats = scene.get_statistics();
        info!(
            "Built {} scene: {} objects, {} triangles, {} lines, {} vertices",
            config.mode, stats.object_count, stats.total_triangles, stats.total_lines, stats.total_vertices
        );

        Ok(Self {
            scene,
            mode: config.mode,
            environment,
            cube,
            pilot,
            drag,
        })
    }

    /// Delivers a pointer event to the camera controls, then to the drag
    /// rotation controller. Returns true if anything in the scene changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let camera_moved = self.scene.camera_manager.process_pointer(event);
        let rotated = match self.drag.as_mut() {
            Some(drag) => drag.handle_scene(event, &mut self.scene),
            None => false,
        };
        camera_moved || rotated
    }

    /// Keeps the camera projection in step with the surface size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene
            .camera_manager
            .camera
            .resize_projection(width, height);
    }
}
