//! # Primitive Shape Generation
//!
//! This module contains functions to generate the primitive shapes of the demo.
//! All shapes are Y-up, centered at the origin and carry normals and vertex colors.

use super::{GeometryData, Topology, WHITE};
use cgmath::{InnerSpace, Vector3};
use std::f32::consts::PI;

/// Generate a box centered at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
/// * `face_colors` - Optional color per face, in +Z, -Z, +X, -X, +Y, -Y order
///
/// Every face owns four vertices so each face can carry its own normal and color.
pub fn generate_box(
    width: f32,
    height: f32,
    depth: f32,
    face_colors: Option<[[f32; 4]; 6]>,
) -> GeometryData {
    let mut data = GeometryData::new(Topology::Triangles);

    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    // Corners listed counter-clockwise as seen from outside the face
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // +Z
        (
            [0.0, 0.0, 1.0],
            [[-hw, -hh, hd], [hw, -hh, hd], [hw, hh, hd], [-hw, hh, hd]],
        ),
        // -Z
        (
            [0.0, 0.0, -1.0],
            [[hw, -hh, -hd], [-hw, -hh, -hd], [-hw, hh, -hd], [hw, hh, -hd]],
        ),
        // +X
        (
            [1.0, 0.0, 0.0],
            [[hw, -hh, hd], [hw, -hh, -hd], [hw, hh, -hd], [hw, hh, hd]],
        ),
        // -X
        (
            [-1.0, 0.0, 0.0],
            [[-hw, -hh, -hd], [-hw, -hh, hd], [-hw, hh, hd], [-hw, hh, -hd]],
        ),
        // +Y
        (
            [0.0, 1.0, 0.0],
            [[-hw, hh, hd], [hw, hh, hd], [hw, hh, -hd], [-hw, hh, -hd]],
        ),
        // -Y
        (
            [0.0, -1.0, 0.0],
            [[-hw, -hh, -hd], [hw, -hh, -hd], [hw, -hh, hd], [-hw, -hh, hd]],
        ),
    ];

    for (face_index, (normal, corners)) in faces.iter().enumerate() {
        let color = face_colors.map_or(WHITE, |colors| colors[face_index]);
        let base = data.vertices.len() as u32;

        for corner in corners {
            data.push_vertex(*corner, *normal, color);
        }

        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a cube of edge length `size`
pub fn generate_cube(size: f32, face_colors: Option<[[f32; 4]; 6]>) -> GeometryData {
    generate_box(size, size, size, face_colors)
}

/// Generate a tapered cylinder along the Y axis
///
/// # Arguments
/// * `height` - Height of the cylinder (along Y)
/// * `diameter_top` - Diameter of the upper cap
/// * `diameter_bottom` - Diameter of the lower cap
/// * `tessellation` - Number of radial segments (at least 3)
///
/// Returns a cylinder centered at the origin extending from -height/2 to height/2 in Y.
pub fn generate_cylinder(
    height: f32,
    diameter_top: f32,
    diameter_bottom: f32,
    tessellation: u32,
) -> GeometryData {
    let mut data = GeometryData::new(Topology::Triangles);

    let segs = tessellation.max(3);
    let half_height = height * 0.5;
    let radius_top = diameter_top * 0.5;
    let radius_bottom = diameter_bottom * 0.5;

    // Side normals lean upward when the cylinder narrows toward the top
    let slope = radius_bottom - radius_top;

    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();

        let normal = Vector3::new(cos_a * height, slope, sin_a * height).normalize();
        let normal = [normal.x, normal.y, normal.z];

        data.push_vertex(
            [radius_bottom * cos_a, -half_height, radius_bottom * sin_a],
            normal,
            WHITE,
        );
        data.push_vertex(
            [radius_top * cos_a, half_height, radius_top * sin_a],
            normal,
            WHITE,
        );
    }

    for i in 0..segs {
        let bottom_current = i * 2;
        let top_current = bottom_current + 1;
        let bottom_next = (i + 1) * 2;
        let top_next = bottom_next + 1;

        data.indices
            .extend_from_slice(&[bottom_current, top_current, bottom_next]);
        data.indices
            .extend_from_slice(&[top_current, top_next, bottom_next]);
    }

    // Caps get their own vertices so they keep flat normals
    push_cap(&mut data, segs, -half_height, radius_bottom, -1.0);
    push_cap(&mut data, segs, half_height, radius_top, 1.0);

    data
}

fn push_cap(data: &mut GeometryData, segs: u32, y: f32, radius: f32, facing: f32) {
    let normal = [0.0, facing, 0.0];
    let center = data.push_vertex([0.0, y, 0.0], normal, WHITE);

    let rim_start = data.vertices.len() as u32;
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        data.push_vertex([radius * angle.cos(), y, radius * angle.sin()], normal, WHITE);
    }

    for i in 0..segs {
        let current = rim_start + i;
        let next = current + 1;
        if facing > 0.0 {
            data.indices.extend_from_slice(&[center, next, current]);
        } else {
            data.indices.extend_from_slice(&[center, current, next]);
        }
    }
}

/// Generate a ground plane in the XZ plane
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Z direction)
/// * `subdivisions` - Number of subdivisions along each side
///
/// Returns a plane centered at the origin with normal pointing up (positive Y).
pub fn generate_ground(width: f32, height: f32, subdivisions: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::Triangles);

    let segs = subdivisions.max(1);

    for z in 0..=segs {
        let v = z as f32 / segs as f32;
        let pos_z = (v - 0.5) * height;

        for x in 0..=segs {
            let u = x as f32 / segs as f32;
            let pos_x = (u - 0.5) * width;

            data.push_vertex([pos_x, 0.0, pos_z], [0.0, 1.0, 0.0], WHITE);
        }
    }

    for z in 0..segs {
        for x in 0..segs {
            let i = z * (segs + 1) + x;
            let next_row = i + segs + 1;

            data.indices.extend_from_slice(&[i, next_row, i + 1]);
            data.indices
                .extend_from_slice(&[next_row, next_row + 1, i + 1]);
        }
    }

    data
}

/// Generate a polyline: consecutive points are joined by line segments
pub fn generate_lines(points: &[Vector3<f32>], color: [f32; 4]) -> GeometryData {
    let mut data = GeometryData::new(Topology::Lines);

    for point in points {
        data.push_vertex([point.x, point.y, point.z], [0.0, 0.0, 0.0], color);
    }

    for i in 1..points.len() as u32 {
        data.indices.extend_from_slice(&[i - 1, i]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_generation() {
        let cube = generate_cube(2.0, None);
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.vertices.iter().flatten().all(|c| c.abs() == 1.0));
    }

    #[test]
    fn test_box_face_order_follows_normals() {
        let cube = generate_cube(1.0, None);
        let expected = [
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ];
        for (face, normal) in expected.iter().enumerate() {
            assert!(cube.normals[face * 4..face * 4 + 4].iter().all(|n| n == normal));
        }
    }

    #[test]
    fn test_cylinder_generation() {
        let cylinder = generate_cylinder(1.0, 0.2, 0.5, 6);
        // side ring (7 * 2) + two caps (1 center + 7 rim each)
        assert_eq!(cylinder.vertex_count(), 14 + 16);
        assert_eq!(cylinder.triangle_count(), 12 + 12);

        let max_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert!((max_y - 0.5).abs() < 1e-6);

        // tapered: bottom ring is wider than top ring
        let bottom = cylinder.vertices[0];
        let top = cylinder.vertices[1];
        assert!((bottom[0] - 0.25).abs() < 1e-6);
        assert!((top[0] - 0.1).abs() < 1e-6);
        // side normals lean up
        assert!(cylinder.normals[0][1] > 0.0);
    }

    #[test]
    fn test_ground_generation() {
        let ground = generate_ground(50.0, 50.0, 1);
        assert_eq!(ground.vertices.len(), 4);
        assert_eq!(ground.indices.len(), 6);
        assert!(ground.vertices.iter().all(|v| v[1] == 0.0 && v[0].abs() == 25.0));

        let grid = generate_ground(2.0, 2.0, 2);
        assert_eq!(grid.vertices.len(), 9); // 3x3 grid
        assert_eq!(grid.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
    }

    #[test]
    fn test_lines_generation() {
        let points = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.95, 0.05, 0.0),
        ];
        let lines = generate_lines(&points, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(lines.topology, Topology::Lines);
        assert_eq!(lines.indices, vec![0, 1, 1, 2]);
        assert_eq!(lines.line_count(), 2);
    }
}
