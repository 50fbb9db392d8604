use std::fmt;

use cgmath::{Matrix4, Rad, Vector3, Zero};
use wgpu::Device;

use super::vertex::Vertex3D;
use crate::{
    gfx::{
        geometry::{normal_matrix, GeometryData, Topology},
        resources::material::{Material, MaterialId},
    },
    input::drag_rotation::YawTarget,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Handle of an object inside a [`Scene`](super::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-object uniform data. MUST match `ObjectData` in the mesh shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
}

impl ObjectUniform {
    pub fn new(world: Matrix4<f32>, material: &Material) -> Self {
        let normal = Matrix4::from(normal_matrix(&world));
        let [ar, ag, ab] = material.ambient_color;
        Self {
            model: world.into(),
            normal_matrix: normal.into(),
            diffuse: material.diffuse_rgba(),
            ambient: [ar, ag, ab, 0.0],
        }
    }
}

type ObjectUBO = UniformBuffer<ObjectUniform>;

/// Layout of bind group 1, shared by every object
pub fn create_object_bind_group_layout(device: &Device) -> BindGroupLayoutWithDesc {
    BindGroupLayoutBuilder::new()
        .next_binding_rendering(binding_types::uniform())
        .create(device, "Object Bind Group")
}

/// CPU geometry plus its lazily created vertex/index buffers
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    topology: Topology,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        Self {
            vertices: Vertex3D::from_geometry(geometry),
            indices: geometry.indices.clone(),
            topology: geometry.topology,
            vertex_buffer: None,
            index_buffer: None,
            index_count: geometry.indices.len() as u32,
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn is_uploaded(&self) -> bool {
        self.vertex_buffer.is_some() && self.index_buffer.is_some()
    }

    fn init_gpu_resources(&mut self, device: &Device, label: &str) {
        if self.is_uploaded() || self.indices.is_empty() {
            return;
        }

        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertex Buffer")),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Index Buffer")),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = Some(index_buffer);
    }
}

// GPU resources struct to hold the object uniform and its bind group
pub struct ObjectGpuResources {
    object_ubo: ObjectUBO,
    bind_group: wgpu::BindGroup,
}

/// A node of the scene graph, optionally carrying a mesh
pub struct Object {
    pub name: String,
    pub mesh: Option<Mesh>,
    pub position: Vector3<f32>,
    /// Euler angles in radians, applied yaw (y), pitch (x), roll (z)
    pub rotation: Vector3<f32>,
    pub scaling: Vector3<f32>,
    pub visible: bool,
    pub(crate) parent: Option<ObjectId>,
    pub(crate) material: Option<MaterialId>,
    pub(crate) geometry: Option<GeometryData>,
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl Object {
    /// Creates a visible object at the origin
    pub fn new(name: &str, geometry: GeometryData) -> Self {
        Self {
            name: name.to_string(),
            mesh: Some(Mesh::from_geometry(&geometry)),
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scaling: Vector3::new(1.0, 1.0, 1.0),
            visible: true,
            parent: None,
            material: None,
            geometry: Some(geometry),
            gpu_resources: None,
        }
    }

    /// Creates a transform-only node without geometry
    pub fn empty(name: &str) -> Self {
        Self {
            mesh: None,
            geometry: None,
            ..Self::new(name, GeometryData::new(Topology::Triangles))
        }
    }

    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    pub fn geometry(&self) -> Option<&GeometryData> {
        self.geometry.as_ref()
    }

    pub fn set_material(&mut self, material_id: &str) {
        self.material = Some(material_id.to_string());
    }

    pub fn get_material_id(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// T * Ry * Rx * Rz * S
    pub fn local_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scaling.x, self.scaling.y, self.scaling.z)
    }

    /// True when the object has GPU buffers and should be drawn
    pub fn is_drawable(&self) -> bool {
        self.visible
            && self.gpu_resources.is_some()
            && self.mesh.as_ref().is_some_and(Mesh::is_uploaded)
    }

    pub fn init_gpu_resources(
        &mut self,
        device: &Device,
        layout: &BindGroupLayoutWithDesc,
        world: Matrix4<f32>,
        material: &Material,
    ) {
        let Some(mesh) = self.mesh.as_mut() else {
            return;
        };
        mesh.init_gpu_resources(device, &self.name);

        if self.gpu_resources.is_none() {
            let object_ubo = ObjectUBO::new_with_data(device, &ObjectUniform::new(world, material));
            let bind_group = BindGroupBuilder::new(layout)
                .resource(object_ubo.binding_resource())
                .create(device, &format!("{} Bind Group", self.name));
            self.gpu_resources = Some(ObjectGpuResources {
                object_ubo,
                bind_group,
            });
        }
    }

    /// Writes the world transform and material colors to the GPU
    pub fn update_uniform(&mut self, queue: &wgpu::Queue, world: Matrix4<f32>, material: &Material) {
        if let Some(gpu_resources) = &mut self.gpu_resources {
            gpu_resources
                .object_ubo
                .update_content(queue, ObjectUniform::new(world, material));
        }
    }

    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources.as_ref().map(|res| &res.bind_group)
    }
}

impl YawTarget for Object {
    fn yaw(&self) -> f32 {
        self.rotation.y
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.rotation.y = yaw;
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            return; // Skip drawing if not uploaded
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn draw_object(&mut self, object: &'b Object) {
        let (Some(mesh), Some(bind_group)) = (&object.mesh, object.get_bind_group()) else {
            return;
        };
        self.set_bind_group(1, bind_group, &[]);
        self.draw_mesh(mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;
    use cgmath::{SquareMatrix, Vector4};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_local_matrix_order() {
        let mut object = Object::new("box", generate_cube(1.0, None));
        object.position = Vector3::new(0.0, 0.5, 0.0);
        object.rotation.y = FRAC_PI_2;
        object.scaling = Vector3::new(2.0, 2.0, 2.0);

        // scale, then yaw +X onto -Z, then translate
        let p = object.local_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 0.5).abs() < 1e-5);
        assert!((p.z + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_target_writes_rotation_y() {
        let mut object = Object::new("pilot", generate_cube(1.0, None));
        object.set_yaw(-1.25);
        assert_eq!(object.rotation.y, -1.25);
        assert_eq!(object.yaw(), -1.25);
        assert_eq!(object.rotation.x, 0.0);
    }

    #[test]
    fn test_uniform_carries_material() {
        let material = Material::new("pilot", [1.0, 0.5, 0.0]).with_ambient(0.2, 0.2, 0.2);
        let uniform = ObjectUniform::new(Matrix4::identity(), &material);

        assert_eq!(uniform.diffuse, [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(uniform.ambient, [0.2, 0.2, 0.2, 0.0]);
        let identity: [[f32; 4]; 4] = Matrix4::identity().into();
        assert_eq!(uniform.normal_matrix, identity);
    }

    #[test]
    fn test_empty_object_is_never_drawable() {
        let object = Object::empty("anchor");
        assert!(object.mesh.is_none());
        assert!(!object.is_drawable());
    }
}
