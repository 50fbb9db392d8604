//! # Gizmo System
//!
//! Gizmos are visual aids built from ordinary scene objects. They are added to
//! a [`Scene`](crate::gfx::scene::Scene) like any other mesh and follow
//! whatever they are parented to.
//!
//! - [`AxisGizmo`] - local X/Y/Z arrows under an invisible anchor

pub mod axis_gizmo;

// Re-export main types
pub use axis_gizmo::{build_local_axes, AxisGizmo};
