//! Consumer-side notification interface.

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle for a registered observer, valid until unregistered.
    pub struct ObserverId;
}

/// Notification interface for nodes depending on a geometry node.
///
/// Both calls are push-only and carry no payload: the observer records
/// staleness and recomputes from the node's buffers on its own next read.
/// Implementations use interior mutability (the scene graph is
/// single-threaded) and must not call back into the notifying node.
pub trait GeometryObserver {
    /// Previously cached render state for this geometry is stale.
    fn render_state_dirty(&self);

    /// The cached bounding volume no longer bounds this geometry and must
    /// be recomputed before its next use.
    fn bounding_volume_invalid(&self);
}
