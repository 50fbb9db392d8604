use cgmath::Matrix4;
use wgpu::Device;

use super::{
    light::HemisphericLight,
    object::{Object, ObjectId},
};
use crate::{
    error::SceneError,
    gfx::{
        camera::{CameraManager, OrbitCamera},
        geometry::Topology,
        resources::material::{Material, MaterialManager},
    },
    wgpu_utils::BindGroupLayoutWithDesc,
};

/// Main scene containing objects, lights, materials and camera
pub struct Scene {
    pub camera_manager: CameraManager,
    pub lights: Vec<HemisphericLight>,
    /// Flat color added to every surface, scaled by the material's ambient color
    pub ambient_color: [f32; 3],
    pub clear_color: wgpu::Color,
    pub material_manager: MaterialManager, // Centralized material storage
    objects: Vec<Object>,
}

impl Scene {
    /// Creates a new scene with the given camera manager
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            lights: Vec::new(),
            ambient_color: [0.0, 0.0, 0.0],
            clear_color: wgpu::Color {
                r: 0.2,
                g: 0.2,
                b: 0.3,
                a: 1.0,
            },
            material_manager: MaterialManager::new(),
            objects: Vec::new(),
        }
    }

    /// Updates the scene (camera matrices, etc.)
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera_manager.camera
    }

    pub fn add_light(&mut self, light: HemisphericLight) {
        self.lights.push(light);
    }

    pub fn add_material(&mut self, material: Material) {
        self.material_manager.add_material(material);
    }

    /// Adds an object as a root of the scene graph
    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0)
    }

    /// Iterates over all objects in insertion order
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// First object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|object| object.name == name)
            .map(ObjectId)
    }

    /// The camera and one object, borrowed together
    pub fn camera_and_object_mut(&mut self, id: ObjectId) -> (&OrbitCamera, Option<&mut Object>) {
        (&self.camera_manager.camera, self.objects.get_mut(id.0))
    }

    /// Attaches `child` under `parent`, or detaches it with `None`.
    ///
    /// The child keeps its local transform, so it moves with the parent from
    /// now on.
    pub fn set_parent(&mut self, child: ObjectId, parent: Option<ObjectId>) -> Result<(), SceneError> {
        self.check_id(child)?;

        if let Some(parent) = parent {
            self.check_id(parent)?;

            let mut ancestor = Some(parent);
            while let Some(current) = ancestor {
                if current == child {
                    return Err(SceneError::ParentCycle { child, parent });
                }
                ancestor = self.objects[current.0].parent;
            }
        }

        self.objects[child.0].parent = parent;
        Ok(())
    }

    /// Local matrix of `id` composed with every ancestor's
    pub fn world_matrix(&self, id: ObjectId) -> Result<Matrix4<f32>, SceneError> {
        self.check_id(id)?;

        let object = &self.objects[id.0];
        let mut world = object.local_matrix();
        let mut ancestor = object.parent;
        while let Some(current) = ancestor {
            let parent = &self.objects[current.0];
            world = parent.local_matrix() * world;
            ancestor = parent.parent;
        }
        Ok(world)
    }

    fn check_id(&self, id: ObjectId) -> Result<(), SceneError> {
        if id.0 < self.objects.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownObject(id))
        }
    }

    /// Objects to draw with the given topology, in insertion order
    pub fn drawable_objects(&self, topology: Topology) -> impl Iterator<Item = &Object> {
        self.objects.iter().filter(move |object| {
            object.is_drawable()
                && object
                    .mesh
                    .as_ref()
                    .is_some_and(|mesh| mesh.topology() == topology)
        })
    }

    /// Initializes GPU resources for all objects
    ///
    /// Must be called after the GPU context is available and before rendering.
    /// Objects added later are picked up by the next call.
    pub fn init_gpu_resources(&mut self, device: &Device, layout: &BindGroupLayoutWithDesc) {
        let worlds = self.world_matrices();
        let Self {
            objects,
            material_manager,
            ..
        } = self;

        for (object, world) in objects.iter_mut().zip(worlds) {
            let material = material_manager.get_material_for_object(object.get_material_id());
            object.init_gpu_resources(device, layout, world, material);
        }
    }

    /// Syncs world transforms and material colors of every object to the GPU
    pub fn sync_gpu(&mut self, queue: &wgpu::Queue) {
        let worlds = self.world_matrices();
        let Self {
            objects,
            material_manager,
            ..
        } = self;

        for (object, world) in objects.iter_mut().zip(worlds) {
            let material = material_manager.get_material_for_object(object.get_material_id());
            object.update_uniform(queue, world, material);
        }
    }

    fn world_matrices(&self) -> Vec<Matrix4<f32>> {
        self.objects()
            .map(|(id, object)| {
                self.world_matrix(id)
                    .unwrap_or_else(|_| object.local_matrix())
            })
            .collect()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let geometries = || self.objects.iter().filter_map(Object::geometry);

        SceneStatistics {
            object_count: self.objects.len(),
            light_count: self.lights.len(),
            material_count: self.material_manager.material_count(),
            total_triangles: geometries().map(|g| g.triangle_count()).sum(),
            total_lines: geometries().map(|g| g.line_count()).sum(),
            total_vertices: geometries().map(|g| g.vertex_count()).sum(),
        }
    }
}

/// Scene statistics for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub light_count: usize,
    pub material_count: usize,
    pub total_triangles: usize,
    pub total_lines: usize,
    pub total_vertices: usize,
}
