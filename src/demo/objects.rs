//! The object each demo mode places on the ground.

use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::warn;

use crate::{
    config::PilotConfig,
    error::SceneError,
    gfx::{
        geometry::{generate_box, generate_cube, generate_cylinder, merge_meshes},
        gizmos::build_local_axes,
        resources::Material,
        scene::{Object, ObjectId, Scene},
    },
};

/// Name of the material applied to the pilot body
pub const PILOT_MATERIAL: &str = "pilot";

/// Adds a cube with one color per face, lifted by `elevation`.
///
/// `face_colors` are in +Z, -Z, +X, -X, +Y, -Y order.
pub fn build_static_cube(
    scene: &mut Scene,
    size: f32,
    face_colors: [[f32; 4]; 6],
    elevation: f32,
) -> ObjectId {
    let mut cube = Object::new("box", generate_cube(size, Some(face_colors)));
    cube.position.y += elevation;
    scene.add_object(cube)
}

/// Adds the pilot (tapered cylinder body merged with an offset box arm) and a
/// local axis gizmo that turns with it.
///
/// Returns `Ok(None)` when the body and arm cannot be merged; the gizmo is
/// still in the scene then, unattached.
pub fn build_pilot(
    scene: &mut Scene,
    config: &PilotConfig,
    axis_scale: f32,
) -> Result<Option<ObjectId>, SceneError> {
    let axes = build_local_axes(scene, axis_scale)?;

    let body = generate_cylinder(
        config.body_height,
        config.diameter_top,
        config.diameter_bottom,
        config.tessellation,
    );
    let arm = generate_box(config.arm_width, config.arm_height, config.arm_depth, None);
    let arm_offset = Matrix4::from_translation(Vector3::new(config.arm_offset_x, 0.0, 0.0));

    let Some(geometry) = merge_meshes(&[(body, Matrix4::identity()), (arm, arm_offset)], false)
    else {
        warn!("pilot body and arm could not be merged, continuing without a pilot");
        return Ok(None);
    };

    let [r, g, b] = config.color;
    scene.add_material(Material::new(PILOT_MATERIAL, [r, g, b]));

    let mut pilot = Object::new("pilot", geometry);
    pilot.set_material(PILOT_MATERIAL);
    pilot.position.y += config.elevation;
    let pilot = scene.add_object(pilot);

    scene.set_parent(axes.anchor, Some(pilot))?;
    Ok(Some(pilot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DemoConfig,
        gfx::camera::{CameraController, CameraManager, OrbitCamera},
    };

    fn scene() -> Scene {
        let camera = OrbitCamera::new(0.0, 1.0, 10.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
        Scene::new(CameraManager::new(camera, CameraController::new(0.01, 1.0)))
    }

    #[test]
    fn test_pilot_is_merged_and_raised() {
        let config = DemoConfig::default();
        let mut scene = scene();
        let pilot = build_pilot(&mut scene, &config.pilot, 1.0).unwrap().unwrap();

        let object = scene.object(pilot).unwrap();
        assert_eq!(object.position.y, 0.5);
        assert_eq!(object.get_material_id(), Some(PILOT_MATERIAL));
        assert_eq!(
            scene
                .material_manager
                .get_material(PILOT_MATERIAL)
                .map(|m| m.diffuse_color),
            Some([1.0, 0.5, 0.0])
        );

        // 24-segment cylinder (50 side + 2 * 26 cap vertices) plus a 24-vertex box
        let geometry = object.geometry().unwrap();
        assert_eq!(geometry.vertex_count(), 50 + 52 + 24);

        // arm vertices are shifted along +X
        let max_x = geometry.vertices.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
        assert!((max_x - (0.125 + 0.15)).abs() < 1e-6);
    }

    #[test]
    fn test_gizmo_anchor_parented_to_pilot() {
        let config = DemoConfig::default();
        let mut scene = scene();
        let pilot = build_pilot(&mut scene, &config.pilot, 1.0).unwrap().unwrap();

        let anchor = scene.find_by_name("local_origin").unwrap();
        assert_eq!(scene.object(anchor).and_then(Object::parent), Some(pilot));
        for axis in ["axisX", "axisY", "axisZ"] {
            let axis = scene.find_by_name(axis).unwrap();
            assert_eq!(scene.object(axis).and_then(Object::parent), Some(anchor));
        }
    }

    #[test]
    fn test_cube_rests_on_ground() {
        let config = DemoConfig::default();
        let mut scene = scene();
        let cube = build_static_cube(
            &mut scene,
            config.cube_size,
            config.cube_face_colors,
            config.cube_elevation,
        );

        let object = scene.object(cube).unwrap();
        assert_eq!(object.position.y, 1.0);
        assert_eq!(object.get_material_id(), None);
    }

    #[test]
    fn test_cube_elevation_is_independent_of_size() {
        let config = DemoConfig::default();
        let mut scene = scene();
        let cube = build_static_cube(&mut scene, 5.0, config.cube_face_colors, config.cube_elevation);

        let object = scene.object(cube).unwrap();
        assert_eq!(object.position.y, 1.0);
        let top = object
            .geometry()
            .unwrap()
            .vertices
            .iter()
            .map(|v| v[1])
            .fold(f32::MIN, f32::max);
        assert_eq!(top, 2.5);
    }
}
