//! # Procedural Geometry Generation
//!
//! This module provides functions to generate the primitive shapes used by the
//! demo procedurally, so no model files are needed.
//!
//! ## Supported Primitives
//!
//! - **Box**: width/height/depth with optional per-face colors
//! - **Cylinder**: tapered cylinder with separate top and bottom diameters
//! - **Ground**: flat plane lying in the XZ plane
//! - **Lines**: polyline segments for gizmos
//!
//! Several shapes can be combined into one with [`merge_meshes`].
//!
//! ## Usage
//!
//! ```rust
//! use orbit_pilot::gfx::geometry::{generate_box, generate_cylinder, merge_meshes};
//! use cgmath::{Matrix4, SquareMatrix, Vector3};
//!
//! let body = generate_cylinder(1.0, 0.2, 0.5, 24);
//! let arm = generate_box(0.3, 1.0, 0.1875, None);
//! let merged = merge_meshes(
//!     &[
//!         (body, Matrix4::identity()),
//!         (arm, Matrix4::from_translation(Vector3::new(0.125, 0.0, 0.0))),
//!     ],
//!     false,
//! );
//! assert!(merged.is_some());
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::{InnerSpace, Matrix, Matrix3, Matrix4, SquareMatrix, Vector3, Vector4};

/// Largest vertex count addressable with 16-bit indices
pub const MAX_16_BIT_VERTICES: usize = 65_536;

/// Default vertex color (white, so material colors show through unchanged)
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// How the indices of a [`GeometryData`] are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every three indices form a triangle
    Triangles,
    /// Every two indices form a line segment
    Lines,
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z), zero for line geometry
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors (r, g, b, a)
    pub colors: Vec<[f32; 4]>,
    /// Primitive indices (counter-clockwise winding for triangles)
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            topology,
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry (zero for lines)
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => 0,
        }
    }

    /// Get the number of line segments in this geometry (zero for triangles)
    pub fn line_count(&self) -> usize {
        match self.topology {
            Topology::Lines => self.indices.len() / 2,
            Topology::Triangles => 0,
        }
    }

    /// Appends a vertex and returns its index
    pub(crate) fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.colors.push(color);
        index
    }

    /// Returns a copy with `transform` baked into positions and normals
    pub fn transformed(&self, transform: &Matrix4<f32>) -> Self {
        let normal_matrix = normal_matrix(transform);

        let vertices = self
            .vertices
            .iter()
            .map(|p| {
                let v = transform * Vector4::new(p[0], p[1], p[2], 1.0);
                [v.x, v.y, v.z]
            })
            .collect();

        let normals = self
            .normals
            .iter()
            .map(|n| {
                let n = Vector3::new(n[0], n[1], n[2]);
                if n.magnitude2() == 0.0 {
                    return [0.0, 0.0, 0.0];
                }
                let n = (normal_matrix * n).normalize();
                [n.x, n.y, n.z]
            })
            .collect();

        Self {
            vertices,
            normals,
            colors: self.colors.clone(),
            indices: self.indices.clone(),
            topology: self.topology,
        }
    }
}

/// Inverse-transpose of the upper 3x3 block, identity when not invertible
pub(crate) fn normal_matrix(transform: &Matrix4<f32>) -> Matrix3<f32> {
    let upper = Matrix3::from_cols(
        transform.x.truncate(),
        transform.y.truncate(),
        transform.z.truncate(),
    );
    upper
        .invert()
        .map(|inverse| inverse.transpose())
        .unwrap_or_else(Matrix3::identity)
}

/// Merges several shapes into one, baking each part's transform into its
/// vertices so the result shares a single transform.
///
/// Returns `None` when there is nothing to merge, when the parts mix triangle
/// and line topologies, or when the merged vertex count does not fit 16-bit
/// indices and `allow_32_bit_indices` is false.
pub fn merge_meshes(
    parts: &[(GeometryData, Matrix4<f32>)],
    allow_32_bit_indices: bool,
) -> Option<GeometryData> {
    let (first, _) = parts.first()?;
    let topology = first.topology;

    if parts.iter().any(|(part, _)| part.topology != topology) {
        return None;
    }

    let total_vertices: usize = parts.iter().map(|(part, _)| part.vertex_count()).sum();
    if total_vertices > MAX_16_BIT_VERTICES && !allow_32_bit_indices {
        return None;
    }

    let mut merged = GeometryData::new(topology);
    for (part, transform) in parts {
        let baked = part.transformed(transform);
        let offset = merged.vertices.len() as u32;

        merged.vertices.extend(baked.vertices);
        merged.normals.extend(baked.normals);
        merged.colors.extend(baked.colors);
        merged.indices.extend(baked.indices.iter().map(|i| i + offset));
    }

    Some(merged)
}
