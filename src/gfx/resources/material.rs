//! Material system
//!
//! Materials are stored centrally in [`MaterialManager`] and objects reference
//! them by name. Their colors are written into each object's uniform when the
//! scene is synced to the GPU.

use std::collections::HashMap;

/// Material ID for referencing materials
pub type MaterialId = String;

/// Flat-shaded material lit by the scene's hemispheric light
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Multiplied with vertex colors and the light's diffuse term
    pub diffuse_color: [f32; 3],
    /// Multiplied with the scene ambient color
    pub ambient_color: [f32; 3],
    pub alpha: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            diffuse_color: [1.0, 1.0, 1.0],
            ambient_color: [0.0, 0.0, 0.0],
            alpha: 1.0,
        }
    }
}

impl Material {
    pub fn new(name: &str, diffuse_color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            diffuse_color,
            ..Default::default()
        }
    }

    /// Builder pattern: Set ambient response from RGB values
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient_color = [r, g, b];
        self
    }

    /// Builder pattern: Set alpha transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Diffuse color with alpha, as laid out in the object uniform
    pub fn diffuse_rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.diffuse_color;
        [r, g, b, self.alpha]
    }
}

/// Manages all materials of a scene
///
/// Objects without a material, or naming one that does not exist, render with
/// the default material.
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material: Material,
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    /// Adds a material, replacing any material with the same name
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Gets material for an object with fallback to default
    pub fn get_material_for_object(&self, material_id: Option<&str>) -> &Material {
        material_id
            .and_then(|id| self.get_material(id))
            .unwrap_or(&self.default_material)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}
