//! # Pointer Input
//!
//! Converts window input into [`PointerEvent`]s and hosts the controllers that
//! react to them. Events are dispatched synchronously in arrival order: first to
//! the camera's built-in orbit controls, then to the [`DragRotationController`].

pub mod drag_rotation;
pub mod pointer;

pub use drag_rotation::{facing_yaw, DragRotationController, DragState, YawTarget};
pub use pointer::{PointerButton, PointerEvent, PointerTranslator};
