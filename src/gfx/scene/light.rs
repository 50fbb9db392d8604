use cgmath::{InnerSpace, Vector3};

/// Sky/ground light: surfaces facing `direction` receive `diffuse`, surfaces
/// facing away receive `ground_color`, blended by the angle between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphericLight {
    pub name: &'static str,
    /// Points toward the sky, normalized
    pub direction: Vector3<f32>,
    pub intensity: f32,
    pub diffuse: [f32; 3],
    pub ground_color: [f32; 3],
}

impl HemisphericLight {
    pub fn new(name: &'static str, direction: Vector3<f32>) -> Self {
        let direction = if direction.magnitude2() > 0.0 {
            direction.normalize()
        } else {
            Vector3::unit_y()
        };
        Self {
            name,
            direction,
            intensity: 1.0,
            diffuse: [1.0, 1.0, 1.0],
            ground_color: [0.0, 0.0, 0.0],
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let light = HemisphericLight::new("light", Vector3::new(0.5, 1.0, 0.0)).with_intensity(0.7);
        assert!((light.direction.magnitude() - 1.0).abs() < 1e-6);
        assert_eq!(light.intensity, 0.7);

        let degenerate = HemisphericLight::new("light", Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(degenerate.direction, Vector3::unit_y());
    }
}
