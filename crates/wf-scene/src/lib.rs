//! Rendering-host boundary for the wf-core engine.
//!
//! The core emits placement records and per-tick mutation descriptors; this
//! crate defines the host interface those flow into, an in-memory
//! [`SceneGraph`] reference host, and a [`SceneDriver`] that wires
//! control-panel actions to session transitions.

pub mod driver;
pub mod graph;
pub mod host;

pub use driver::SceneDriver;
pub use graph::{GroupSnapshot, MarkerObject, MarkerSnapshot, SceneGraph, SceneSnapshot};
pub use host::RenderHost;
