//! # Scene Management Module
//!
//! Scene graph of the demo: an arena of [`Object`]s addressed by [`ObjectId`],
//! parent links between them, the scene's lights and its materials.
//!
//! ## Key Components
//!
//! - [`Scene`] - The main scene container that manages objects, lights, camera and materials
//! - [`Object`] - A node with an optional mesh, a local transform and a visibility flag
//! - [`HemisphericLight`] - Sky/ground light used for all shading
//! - [`Vertex3D`] - 3D vertex data structure with position, normal and color
//!
//! ## Transforms
//!
//! The world matrix of an object is its parent's world matrix times its own
//! `T * Ry * Rx * Rz * S`. Hiding an object skips its draw call only; its
//! children are still drawn.
//!
//! A scene can be built and inspected without a GPU. Buffers are created by
//! [`Scene::init_gpu_resources`] once a device exists.

pub mod light;
pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use light::HemisphericLight;
pub use object::{DrawObject, Object, ObjectId};
pub use scene::{Scene, SceneStatistics};
pub use vertex::Vertex3D;
