//! # Demo Configuration
//!
//! Every tunable of the demo lives in [`DemoConfig`]. The values are fixed at
//! build time through the [`Default`] implementation; only the [`DemoMode`] is
//! chosen at startup (first CLI argument, then the `ORBIT_PILOT_MODE`
//! environment variable, then [`DemoMode::Pilot`]).

use std::{f32::consts::PI, fmt, str::FromStr};

use cgmath::Vector3;

use crate::error::ConfigError;

/// Environment variable consulted when no mode argument is given
pub const MODE_ENV_VAR: &str = "ORBIT_PILOT_MODE";

/// Which object the demo puts on the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoMode {
    /// A size-2 cube with six colored faces, no pointer interaction
    StaticCube,
    /// The cylinder + arm pilot with its local axes, rotated by dragging
    #[default]
    Pilot,
}

impl DemoMode {
    /// Resolves the mode from an optional CLI argument, falling back to the
    /// environment and finally to the default mode.
    pub fn resolve(arg: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(arg) = arg {
            return arg.parse();
        }
        match std::env::var(MODE_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl FromStr for DemoMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" | "static-cube" => Ok(Self::StaticCube),
            "pilot" => Ok(Self::Pilot),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for DemoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticCube => f.write_str("cube"),
            Self::Pilot => f.write_str("pilot"),
        }
    }
}

/// Initial placement of the orbit camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraPlacement {
    /// Explicit orbit angles (radians) and distance
    Angles { alpha: f32, beta: f32, radius: f32 },
    /// Zero angles and distance, then an explicit cartesian position
    Position(Vector3<f32>),
}

/// Orbit camera settings
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub placement: CameraPlacement,
    pub target: Vector3<f32>,
    pub lower_radius_limit: f32,
    pub upper_radius_limit: f32,
    /// Radians of orbit per pixel of pointer drag
    pub rotate_speed: f32,
    /// Radius change per wheel line
    pub zoom_speed: f32,
}

/// Hemispheric light and ambient settings
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentConfig {
    pub light_direction: Vector3<f32>,
    pub light_intensity: f32,
    pub ambient_color: [f32; 3],
    pub ground_width: f32,
    pub ground_height: f32,
}

/// Cylinder body + box arm dimensions of the pilot
#[derive(Debug, Clone, Copy)]
pub struct PilotConfig {
    pub body_height: f32,
    pub diameter_top: f32,
    pub diameter_bottom: f32,
    pub tessellation: u32,
    pub arm_height: f32,
    pub arm_width: f32,
    pub arm_depth: f32,
    pub arm_offset_x: f32,
    pub color: [f32; 3],
    /// How far the merged pilot is raised above the ground
    pub elevation: f32,
}

/// Everything the demo needs to build and run a scene
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub mode: DemoMode,
    pub window_title: String,
    pub window_size: (u32, u32),
    pub antialias: bool,
    /// Stop the render loop after this many frames (`None` runs forever)
    pub max_frames: Option<u64>,
    pub camera: CameraConfig,
    pub environment: EnvironmentConfig,
    pub axis_scale: f32,
    pub cube_size: f32,
    /// Upward offset of the cube from the origin
    pub cube_elevation: f32,
    /// Face colors of the static cube, in +Z, -Z, +X, -X, +Y, -Y order
    pub cube_face_colors: [[f32; 4]; 6],
    pub pilot: PilotConfig,
}

impl DemoConfig {
    /// Default configuration for the given mode
    pub fn for_mode(mode: DemoMode) -> Self {
        let placement = match mode {
            DemoMode::StaticCube => CameraPlacement::Angles {
                alpha: -PI / 4.0,
                beta: PI / 3.0,
                radius: 15.0,
            },
            DemoMode::Pilot => CameraPlacement::Position(Vector3::new(0.0, 10.0, -15.0)),
        };

        let mut config = Self {
            mode,
            ..Self::default()
        };
        config.camera.placement = placement;
        config
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mode: DemoMode::Pilot,
            window_title: "gameCanvas".to_string(),
            window_size: (1200, 800),
            antialias: true,
            max_frames: None,
            camera: CameraConfig {
                placement: CameraPlacement::Position(Vector3::new(0.0, 10.0, -15.0)),
                target: Vector3::new(0.0, 0.0, 0.0),
                lower_radius_limit: 9.0,
                upper_radius_limit: 50.0,
                rotate_speed: 0.005,
                zoom_speed: 1.0,
            },
            environment: EnvironmentConfig {
                light_direction: Vector3::new(0.5, 1.0, 0.0),
                light_intensity: 0.7,
                ambient_color: [0.3, 0.3, 0.3],
                ground_width: 50.0,
                ground_height: 50.0,
            },
            axis_scale: 1.0,
            cube_size: 2.0,
            cube_elevation: 1.0,
            cube_face_colors: [
                [1.0, 0.0, 0.0, 1.0], // red
                [0.0, 1.0, 0.0, 1.0], // green
                [0.0, 0.0, 1.0, 1.0], // blue
                [1.0, 1.0, 0.0, 1.0], // yellow
                [1.0, 0.0, 1.0, 1.0], // magenta
                [0.0, 1.0, 1.0, 1.0], // cyan
            ],
            pilot: PilotConfig {
                body_height: 1.0,
                diameter_top: 0.2,
                diameter_bottom: 0.5,
                tessellation: 24,
                arm_height: 1.0,
                arm_width: 0.3,
                arm_depth: 0.1875,
                arm_offset_x: 0.125,
                color: [1.0, 0.5, 0.0],
                elevation: 0.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("cube".parse::<DemoMode>().unwrap(), DemoMode::StaticCube);
        assert_eq!(" Pilot ".parse::<DemoMode>().unwrap(), DemoMode::Pilot);
        assert!("sphere".parse::<DemoMode>().is_err());
    }

    #[test]
    fn test_explicit_argument_wins() {
        assert_eq!(DemoMode::resolve(Some("cube")).unwrap(), DemoMode::StaticCube);
    }

    #[test]
    fn test_camera_placement_per_mode() {
        let cube = DemoConfig::for_mode(DemoMode::StaticCube);
        assert!(matches!(
            cube.camera.placement,
            CameraPlacement::Angles { radius, .. } if radius == 15.0
        ));

        let pilot = DemoConfig::for_mode(DemoMode::Pilot);
        assert!(matches!(pilot.camera.placement, CameraPlacement::Position(_)));
        assert_eq!(pilot.camera.lower_radius_limit, 9.0);
        assert_eq!(pilot.camera.upper_radius_limit, 50.0);
    }
}
