use super::*;
use crate::{
    config::DemoConfig,
    gfx::{
        geometry::{generate_cube, Topology},
        scene::Object,
    },
    input::PointerButton,
};
use cgmath::{Vector3, Vector4};
use std::f32::consts::PI;

fn demo(mode: DemoMode) -> DemoScene {
    DemoScene::build(&DemoConfig::for_mode(mode)).unwrap()
}

fn drag(demo: &mut DemoScene, from: (f32, f32), to: (f32, f32)) {
    demo.handle_pointer(&PointerEvent::down(from.0, from.1));
    demo.handle_pointer(&PointerEvent::Move { x: to.0, y: to.1 });
    demo.handle_pointer(&PointerEvent::up(to.0, to.1));
}

#[test]
fn test_cube_scene_contents() {
    let demo = demo(DemoMode::StaticCube);

    assert!(demo.pilot.is_none());
    assert!(demo.drag.is_none());
    assert_eq!(demo.scene.object_count(), 2);

    let cube = demo.scene.object(demo.cube.unwrap()).unwrap();
    assert_eq!(cube.name, "box");
    assert_eq!(cube.position, Vector3::new(0.0, 1.0, 0.0));

    // Same face layout as a plain cube with the configured colors
    let expected = generate_cube(2.0, Some(DemoConfig::default().cube_face_colors));
    assert_eq!(cube.geometry().unwrap().colors, expected.colors);
    assert_eq!(cube.geometry().unwrap().colors[0], [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(cube.geometry().unwrap().colors[23], [0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_cube_scene_ignores_drag_rotation() {
    let mut demo = demo(DemoMode::StaticCube);
    let alpha = demo.scene.camera().alpha;

    drag(&mut demo, (100.0, 100.0), (140.0, 100.0));

    assert!((demo.scene.camera().alpha - (alpha - 0.2)).abs() < 1e-5);
    let cube = demo.scene.object(demo.cube.unwrap()).unwrap();
    assert_eq!(cube.rotation, Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_pilot_scene_contents() {
    let demo = demo(DemoMode::Pilot);

    // ground, gizmo anchor, three axes, pilot
    assert_eq!(demo.scene.object_count(), 6);
    assert!(demo.cube.is_none());
    assert_eq!(demo.drag.as_ref().and_then(|d| d.pilot()), demo.pilot);
    assert!((demo.scene.camera().alpha + PI / 2.0).abs() < 1e-5);

    let stats = demo.scene.get_statistics();
    assert_eq!(stats.light_count, 1);
    assert_eq!(stats.total_lines, 12);
}

#[test]
fn test_drag_turns_pilot_with_camera() {
    let mut demo = demo(DemoMode::Pilot);
    let pilot = demo.pilot.unwrap();

    demo.handle_pointer(&PointerEvent::down(100.0, 100.0));
    assert!(demo.handle_pointer(&PointerEvent::Move { x: 110.0, y: 100.0 }));

    // The camera sees the move first, so the yaw follows its new alpha
    let alpha = demo.scene.camera().alpha;
    assert!((alpha - (-PI / 2.0 - 0.05)).abs() < 1e-5);
    let yaw = demo.scene.object(pilot).unwrap().rotation.y;
    assert!((yaw - (-PI / 2.0 - alpha)).abs() < 1e-6);
    assert!((yaw - 0.05).abs() < 1e-5);

    demo.handle_pointer(&PointerEvent::up(110.0, 100.0));
    demo.handle_pointer(&PointerEvent::Move { x: 300.0, y: 100.0 });
    assert_eq!(demo.scene.object(pilot).unwrap().rotation.y, yaw);
}

#[test]
fn test_secondary_drag_turns_pilot_without_orbiting() {
    let mut demo = demo(DemoMode::Pilot);
    let pilot = demo.pilot.unwrap();
    if let Some(object) = demo.scene.object_mut(pilot) {
        object.rotation.y = 1.0;
    }

    demo.handle_pointer(&PointerEvent::Down {
        x: 0.0,
        y: 0.0,
        button: PointerButton::Secondary,
    });
    assert!(demo.drag.as_ref().unwrap().is_dragging());
    assert!(demo.handle_pointer(&PointerEvent::Move { x: 80.0, y: 0.0 }));

    assert!((demo.scene.camera().alpha + PI / 2.0).abs() < 1e-5);
    assert!(demo.scene.object(pilot).unwrap().rotation.y.abs() < 1e-5);

    demo.handle_pointer(&PointerEvent::Up {
        x: 80.0,
        y: 0.0,
        button: PointerButton::Secondary,
    });
    assert!(!demo.drag.as_ref().unwrap().is_dragging());
}

#[test]
fn test_moves_without_press_leave_pilot_alone() {
    let mut demo = demo(DemoMode::Pilot);
    let pilot = demo.pilot.unwrap();

    for x in [10.0, 50.0, 90.0] {
        assert!(!demo.handle_pointer(&PointerEvent::Move { x, y: 20.0 }));
    }
    assert_eq!(demo.scene.object(pilot).unwrap().rotation.y, 0.0);
}

#[test]
fn test_wheel_zoom_is_clamped() {
    let mut demo = demo(DemoMode::Pilot);

    demo.handle_pointer(&PointerEvent::Wheel { delta: 1000.0 });
    assert_eq!(demo.scene.camera().radius, 9.0);

    demo.handle_pointer(&PointerEvent::Wheel { delta: -1000.0 });
    assert_eq!(demo.scene.camera().radius, 50.0);

    // Wheel never touches the pilot
    let pilot = demo.scene.object(demo.pilot.unwrap()).unwrap();
    assert_eq!(pilot.rotation.y, 0.0);
}

#[test]
fn test_gizmo_follows_pilot_yaw() {
    let mut demo = demo(DemoMode::Pilot);
    drag(&mut demo, (0.0, 0.0), (60.0, 0.0));

    let yaw = demo.scene.object(demo.pilot.unwrap()).unwrap().rotation.y;
    assert!((yaw - 0.3).abs() < 1e-5);

    let axis_x = demo.scene.find_by_name("axisX").unwrap();
    let tip = demo.scene.world_matrix(axis_x).unwrap() * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert!((tip.x - yaw.cos()).abs() < 1e-5);
    assert!((tip.y - 0.5).abs() < 1e-5);
    assert!((tip.z + yaw.sin()).abs() < 1e-5);
}

#[test]
fn test_gizmo_anchor_is_hidden_but_axes_are_not() {
    let demo = demo(DemoMode::Pilot);

    let anchor = demo.scene.find_by_name("local_origin").unwrap();
    assert!(!demo.scene.object(anchor).unwrap().visible);
    for name in ["axisX", "axisY", "axisZ"] {
        let axis = demo.scene.find_by_name(name).unwrap();
        let axis = demo.scene.object(axis).unwrap();
        assert!(axis.visible);
        assert_eq!(axis.mesh.as_ref().map(|m| m.topology()), Some(Topology::Lines));
    }
}

#[test]
fn test_unmergeable_pilot_keeps_running() {
    let mut config = DemoConfig::for_mode(DemoMode::Pilot);
    // Too many vertices for 16-bit indices
    config.pilot.tessellation = 40_000;

    let mut demo = DemoScene::build(&config).unwrap();
    assert!(demo.pilot.is_none());
    assert!(demo.drag.is_some());
    assert!(demo.scene.find_by_name("pilot").is_none());

    let anchor = demo.scene.find_by_name("local_origin").unwrap();
    assert_eq!(demo.scene.object(anchor).and_then(Object::parent), None);

    drag(&mut demo, (0.0, 0.0), (20.0, 0.0));
    assert!(!demo.drag.as_ref().unwrap().is_dragging());
}

#[test]
fn test_resize_updates_aspect() {
    let mut demo = demo(DemoMode::Pilot);
    assert!((demo.scene.camera().aspect - 1.5).abs() < 1e-6);

    demo.resize(800, 800);
    assert_eq!(demo.scene.camera().aspect, 1.0);
    demo.resize(800, 0);
    assert_eq!(demo.scene.camera().aspect, 1.0);
}
