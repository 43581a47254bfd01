#![warn(missing_docs)]

//! Scene-graph geometry nodes and change propagation for trellis.
//!
//! A geometry node owns its shape parameters and the published
//! [`trellis_mesh::MeshBuffers`]. Mutating a geometry-affecting field
//! synchronously rebuilds the buffers and pushes a no-payload notification
//! to every registered [`GeometryObserver`]: render state dirty, bounding
//! volume invalid. Consumers re-read lazily; nothing is batched or
//! deferred, and everything runs on the mutating thread.

mod node;
mod observer;

pub use node::{DishField, DishGeometry, NodeState};
pub use observer::{GeometryObserver, ObserverId};
