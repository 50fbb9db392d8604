//! # Vertex Data Structures
//!
//! GPU-compatible vertex format shared by every pipeline.

use crate::gfx::geometry::GeometryData;

/// A 3D vertex with position, normal and color data.
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Vertex color [r, g, b, a], multiplied with the material diffuse color
    pub color: [f32; 4],
}

impl Vertex3D {
    /// Interleaves the attribute streams of a [`GeometryData`]
    pub fn from_geometry(geometry: &GeometryData) -> Vec<Vertex3D> {
        geometry
            .vertices
            .iter()
            .zip(&geometry.normals)
            .zip(&geometry.colors)
            .map(|((position, normal), color)| Vertex3D {
                position: *position,
                normal: *normal,
                color: *color,
            })
            .collect()
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3) at shader location 0
    /// - Attribute 1: Normal (Float32x3) at shader location 1
    /// - Attribute 2: Color (Float32x4) at shader location 2
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    #[test]
    fn test_interleaves_geometry() {
        let cube = generate_cube(2.0, Some([[0.5, 0.5, 0.5, 1.0]; 6]));
        let vertices = Vertex3D::from_geometry(&cube);

        assert_eq!(vertices.len(), 24);
        assert_eq!(vertices[0].position, cube.vertices[0]);
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[23].color, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_layout_stride() {
        assert_eq!(std::mem::size_of::<Vertex3D>(), 40);
        assert_eq!(Vertex3D::desc().array_stride, 40);
    }
}
