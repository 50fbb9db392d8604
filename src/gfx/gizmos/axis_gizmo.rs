//! # Local Axis Gizmo
//!
//! Three colored arrows (X red, Y green, Z blue) hung under one invisible
//! anchor, so parenting the anchor to an object shows that object's local
//! frame as it moves and turns.

use cgmath::Vector3;

use crate::{
    error::SceneError,
    gfx::{
        geometry::{generate_box, generate_lines},
        scene::{Object, ObjectId, Scene},
    },
};

pub const X_AXIS_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const Y_AXIS_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const Z_AXIS_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Ids of the objects making up one axis gizmo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisGizmo {
    /// Invisible unit box the axes are parented to
    pub anchor: ObjectId,
    /// X, Y and Z arrows in that order
    pub axes: [ObjectId; 3],
}

/// Shaft from the origin to the tip, then two barbs folding back from the tip
fn arrow(tip: Vector3<f32>, barb_left: Vector3<f32>, barb_right: Vector3<f32>) -> [Vector3<f32>; 5] {
    [Vector3::new(0.0, 0.0, 0.0), tip, barb_left, tip, barb_right]
}

/// Polyline points of the X, Y and Z arrows for a gizmo of `size`
pub fn axis_points(size: f32) -> [[Vector3<f32>; 5]; 3] {
    let s = size;
    [
        arrow(
            Vector3::new(s, 0.0, 0.0),
            Vector3::new(s * 0.95, 0.05 * s, 0.0),
            Vector3::new(s * 0.95, -0.05 * s, 0.0),
        ),
        arrow(
            Vector3::new(0.0, s, 0.0),
            Vector3::new(-0.05 * s, s * 0.95, 0.0),
            Vector3::new(0.05 * s, s * 0.95, 0.0),
        ),
        arrow(
            Vector3::new(0.0, 0.0, s),
            Vector3::new(0.0, -0.05 * s, s * 0.95),
            Vector3::new(0.0, 0.05 * s, s * 0.95),
        ),
    ]
}

/// Adds a local axis gizmo of the given size to `scene`.
///
/// The anchor starts at the origin with no parent; callers attach it where the
/// axes should appear.
pub fn build_local_axes(scene: &mut Scene, size: f32) -> Result<AxisGizmo, SceneError> {
    let mut anchor = Object::new("local_origin", generate_box(1.0, 1.0, 1.0, None));
    anchor.set_visible(false);
    let anchor = scene.add_object(anchor);

    let [x_points, y_points, z_points] = axis_points(size);
    let axes = [
        ("axisX", x_points, X_AXIS_COLOR),
        ("axisY", y_points, Y_AXIS_COLOR),
        ("axisZ", z_points, Z_AXIS_COLOR),
    ]
    .map(|(name, points, color)| scene.add_object(Object::new(name, generate_lines(&points, color))));

    for axis in axes {
        scene.set_parent(axis, Some(anchor))?;
    }

    Ok(AxisGizmo { anchor, axes })
}
