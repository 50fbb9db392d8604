//! Global uniform bindings for camera and lighting data
//!
//! Per-frame state shared by every object in a scene: the camera matrices, the
//! first hemispheric light and the scene ambient color. Bound to slot 0 in all
//! render pipelines.

use crate::{
    gfx::{camera::CameraUniform, scene::HemisphericLight, scene::Scene},
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Global uniform buffer content structure
///
/// MUST match the `Globals` struct in the mesh shader exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_proj: [[f32; 4]; 4], // Camera view-projection matrix
    view_position: [f32; 4],  // Camera position (homogeneous coordinates)

    light_direction: [f32; 4], // xyz toward the sky, w = intensity
    light_diffuse: [f32; 4],
    light_ground: [f32; 4],
    ambient: [f32; 4],
}

impl GlobalUBOContent {
    /// Packs the camera and the first light; no light means zero intensity
    pub fn new(camera: &CameraUniform, light: Option<&HemisphericLight>, ambient: [f32; 3]) -> Self {
        let (light_direction, light_diffuse, light_ground) = match light {
            Some(light) => (
                [
                    light.direction.x,
                    light.direction.y,
                    light.direction.z,
                    light.intensity,
                ],
                rgb_to_rgba(light.diffuse),
                rgb_to_rgba(light.ground_color),
            ),
            None => ([0.0, 1.0, 0.0, 0.0], [0.0; 4], [0.0; 4]),
        };

        Self {
            view_proj: camera.view_proj,
            view_position: camera.view_position,
            light_direction,
            light_diffuse,
            light_ground,
            ambient: rgb_to_rgba(ambient),
        }
    }

    pub fn light_intensity(&self) -> f32 {
        self.light_direction[3]
    }
}

fn rgb_to_rgba([r, g, b]: [f32; 3]) -> [f32; 4] {
    [r, g, b, 1.0]
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer from the scene's camera and lights
///
/// Should be called each frame after [`Scene::update`].
pub fn update_global_ubo(ubo: &mut GlobalUBO, queue: &wgpu::Queue, scene: &Scene) {
    let content = GlobalUBOContent::new(
        &scene.camera().uniform,
        scene.lights.first(),
        scene.ambient_color,
    );
    ubo.update_content(queue, content);
}

/// Manages bind group layouts and bind groups for global uniforms
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    /// Creates the layout and the bind group for `ubo`
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform()) // Global uniforms (camera + light)
            .create(device, "Globals Bind Group");

        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Global Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_layout_size() {
        // 16-byte aligned for WGSL uniform rules
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 144);
    }

    #[test]
    fn test_packs_first_light() {
        let light = HemisphericLight::new("light", Vector3::new(0.0, 1.0, 0.0)).with_intensity(0.7);
        let content = GlobalUBOContent::new(&CameraUniform::default(), Some(&light), [0.3; 3]);

        assert_eq!(content.light_direction, [0.0, 1.0, 0.0, 0.7]);
        assert_eq!(content.light_intensity(), 0.7);
        assert_eq!(content.light_diffuse, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(content.ambient, [0.3, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn test_no_light_is_dark() {
        let content = GlobalUBOContent::new(&CameraUniform::default(), None, [0.0; 3]);
        assert_eq!(content.light_intensity(), 0.0);
    }
}
