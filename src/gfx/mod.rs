//! # Graphics Module
//!
//! Everything between the scene description and pixels on screen.
//!
//! - **Camera** ([`camera`]) - orbit camera with pointer orbit and wheel zoom
//! - **Geometry** ([`geometry`]) - procedural boxes, cylinders, ground and
//!   polylines, plus mesh merging
//! - **Gizmos** ([`gizmos`]) - the local axis gizmo
//! - **Rendering** ([`rendering`]) - surface, pipelines and the frame pass
//! - **Resources** ([`resources`]) - materials, global uniforms, render targets
//! - **Scene** ([`scene`]) - objects, parenting and lights
//!
//! The [`RenderEngine`] is created by [`PilotApp`](crate::app::PilotApp) once a
//! window exists; a [`Scene`](scene::Scene) can be built and tested without it.

pub mod camera;
pub mod geometry;
pub mod gizmos;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use camera::OrbitCamera;
pub use rendering::RenderEngine;
