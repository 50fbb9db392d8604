//! Camera, light and ground: the parts every demo mode shares.

use log::debug;

use crate::{
    config::{CameraConfig, CameraPlacement, EnvironmentConfig},
    gfx::{
        camera::{CameraController, CameraManager, OrbitCamera},
        geometry::generate_ground,
        scene::{HemisphericLight, Object, ObjectId, Scene},
    },
};

/// Builds the orbit camera with its radius bounds and attaches pointer control
pub fn create_camera(config: &CameraConfig, aspect: f32) -> CameraManager {
    let camera = match config.placement {
        CameraPlacement::Angles {
            alpha,
            beta,
            radius,
        } => OrbitCamera::new(alpha, beta, radius, config.target, aspect),
        CameraPlacement::Position(position) => {
            let mut camera = OrbitCamera::new(0.0, 0.0, 0.0, config.target, aspect);
            camera.set_position(position);
            camera
        }
    };

    let mut camera_manager = CameraManager::new(
        camera,
        CameraController::new(config.rotate_speed, config.zoom_speed),
    );
    camera_manager
        .camera
        .set_radius_limits(Some(config.lower_radius_limit), Some(config.upper_radius_limit));
    camera_manager.attach_control();

    let camera = &camera_manager.camera;
    debug!(
        "camera placed: alpha={:.3} beta={:.3} radius={:.3}",
        camera.alpha, camera.beta, camera.radius
    );
    camera_manager
}

/// Ids of what [`create_environment`] added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub light_index: usize,
    pub ground: ObjectId,
}

/// Adds one hemispheric light, the scene ambient color and a ground plane.
///
/// Every call adds a new light and ground; call it once per scene.
pub fn create_environment(scene: &mut Scene, config: &EnvironmentConfig) -> Environment {
    scene.add_light(
        HemisphericLight::new("light", config.light_direction).with_intensity(config.light_intensity),
    );
    scene.ambient_color = config.ambient_color;

    let ground = scene.add_object(Object::new(
        "ground",
        generate_ground(config.ground_width, config.ground_height, 1),
    ));

    Environment {
        light_index: scene.lights.len() - 1,
        ground,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DemoConfig, DemoMode};
    use cgmath::{InnerSpace, Vector3};
    use std::f32::consts::PI;

    #[test]
    fn test_angles_placement() {
        let config = DemoConfig::for_mode(DemoMode::StaticCube);
        let manager = create_camera(&config.camera, 1.5);

        assert!((manager.camera.alpha + PI / 4.0).abs() < 1e-6);
        assert!((manager.camera.beta - PI / 3.0).abs() < 1e-6);
        assert_eq!(manager.camera.radius, 15.0);
        assert_eq!(manager.camera.bounds.lower_radius_limit, Some(9.0));
        assert_eq!(manager.camera.bounds.upper_radius_limit, Some(50.0));
        assert!(manager.controls_attached());
    }

    #[test]
    fn test_position_placement() {
        let config = DemoConfig::for_mode(DemoMode::Pilot);
        let manager = create_camera(&config.camera, 1.5);

        assert!((manager.camera.eye - Vector3::new(0.0, 10.0, -15.0)).magnitude() < 1e-3);
        assert!((manager.camera.alpha + PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_environment_contents() {
        let config = DemoConfig::default();
        let mut scene = Scene::new(create_camera(&config.camera, 1.5));
        let environment = create_environment(&mut scene, &config.environment);

        assert_eq!(scene.lights.len(), 1);
        let light = &scene.lights[environment.light_index];
        assert_eq!(light.intensity, 0.7);
        let expected = Vector3::new(0.5, 1.0, 0.0).normalize();
        assert!((light.direction - expected).magnitude() < 1e-6);
        assert_eq!(scene.ambient_color, [0.3, 0.3, 0.3]);

        let ground = scene.object(environment.ground).unwrap();
        assert_eq!(ground.name, "ground");
        let extent = ground
            .geometry()
            .unwrap()
            .vertices
            .iter()
            .map(|v| v[0].abs().max(v[2].abs()))
            .fold(0.0, f32::max);
        assert_eq!(extent, 25.0);
    }

    #[test]
    fn test_environment_is_not_deduplicated() {
        let config = DemoConfig::default();
        let mut scene = Scene::new(create_camera(&config.camera, 1.5));
        create_environment(&mut scene, &config.environment);
        create_environment(&mut scene, &config.environment);

        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.object_count(), 2);
    }
}
