//! The dish geometry node and its change-propagation controller.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use trellis_geometry::{build_dish, DishParams, ParameterError, Subdivision};
use trellis_mesh::MeshBuffers;

use crate::{GeometryObserver, ObserverId};

/// Fields of the dish node, as carried by change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishField {
    /// Base diameter.
    Diameter,
    /// Section height.
    Height,
    /// Revolution-axis semi-axis.
    Radius,
    /// Tessellation density.
    Subdivision,
    /// Base cap on/off.
    Bottom,
    /// Backface-culling render hint; does not touch the mesh.
    Solid,
}

impl DishField {
    /// True if a change to this field changes the tessellated surface.
    pub fn affects_geometry(self) -> bool {
        !matches!(self, DishField::Solid)
    }
}

/// Rebuild state of a geometry node.
///
/// `Dirty` is only ever observable from within a rebuild: every
/// geometry-affecting mutation rebuilds synchronously before returning,
/// so callers always find the node `Clean` and its buffers consistent
/// with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Published buffers match the current parameters.
    Clean,
    /// A rebuild is in flight.
    Dirty,
}

/// A dish geometry node: exclusive owner of its shape parameters and of
/// the mesh it publishes.
///
/// Consumers hold `&MeshBuffers` reads on the node's single geometry slot
/// and a registration in the observer list; they must not retain a view
/// across a rebuild.
pub struct DishGeometry {
    params: DishParams,
    solid: bool,
    mesh: MeshBuffers,
    state: NodeState,
    observers: SlotMap<ObserverId, Rc<dyn GeometryObserver>>,
}

impl DishGeometry {
    /// Create a node and build its initial mesh.
    pub fn new(params: DishParams) -> Result<Self, ParameterError> {
        let mesh = build_dish(&params)?;
        log::debug!(
            "dish node created: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(Self {
            params,
            solid: true,
            mesh,
            state: NodeState::Clean,
            observers: SlotMap::with_key(),
        })
    }

    /// Current shape parameters.
    pub fn params(&self) -> &DishParams {
        &self.params
    }

    /// The published mesh (the node's single geometry slot).
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Rebuild state. See [`NodeState`].
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Vertex count of the published mesh. Consumers may cache this until
    /// the next dirty notification.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Triangle count of the published mesh. Consumers may cache this until
    /// the next dirty notification.
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Backface-culling render hint.
    pub fn solid(&self) -> bool {
        self.solid
    }

    /// Set the base diameter.
    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), ParameterError> {
        self.set_field(DishField::Diameter, |node| node.params.diameter = diameter)
    }

    /// Set the section height.
    pub fn set_height(&mut self, height: f64) -> Result<(), ParameterError> {
        self.set_field(DishField::Height, |node| node.params.height = height)
    }

    /// Set the revolution-axis semi-axis.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ParameterError> {
        self.set_field(DishField::Radius, |node| node.params.radius = radius)
    }

    /// Set the tessellation density.
    pub fn set_subdivision(&mut self, subdivision: Subdivision) -> Result<(), ParameterError> {
        self.set_field(DishField::Subdivision, |node| {
            node.params.subdivision = subdivision
        })
    }

    /// Toggle the base cap.
    pub fn set_bottom(&mut self, bottom: bool) -> Result<(), ParameterError> {
        self.set_field(DishField::Bottom, |node| node.params.bottom = bottom)
    }

    /// Set the render hint. Never rebuilds and never notifies.
    pub fn set_solid(&mut self, solid: bool) -> Result<(), ParameterError> {
        self.set_field(DishField::Solid, |node| node.solid = solid)
    }

    /// React to a changed field.
    ///
    /// Geometry-affecting fields trigger a full synchronous rebuild of the
    /// mesh followed by observer notification; all other fields are
    /// ignored. This is the entry point for externally delivered
    /// parameter-change events; the typed setters route through it.
    pub fn field_changed(&mut self, field: DishField) -> Result<(), ParameterError> {
        if !field.affects_geometry() {
            log::trace!("dish field {field:?} changed, geometry unaffected");
            return Ok(());
        }

        self.state = NodeState::Dirty;
        // Built aside and swapped in, so a failed rebuild leaves the
        // previously published buffers untouched.
        let mesh = build_dish(&self.params)?;
        self.mesh = mesh;
        self.state = NodeState::Clean;

        log::debug!(
            "dish rebuilt after {field:?} change: {} vertices, {} triangles",
            self.mesh.vertex_count(),
            self.mesh.triangle_count()
        );
        self.notify_observers();
        Ok(())
    }

    /// Register a dependent node for post-rebuild notification.
    pub fn register_observer(&mut self, observer: Rc<dyn GeometryObserver>) -> ObserverId {
        self.observers.insert(observer)
    }

    /// Remove a registration. Returns false if the id was already gone.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id).is_some()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn set_field(
        &mut self,
        field: DishField,
        apply: impl FnOnce(&mut Self),
    ) -> Result<(), ParameterError> {
        let previous = self.params;
        apply(self);
        match self.field_changed(field) {
            Ok(()) => Ok(()),
            Err(err) => {
                // Roll the mutation back: the published parameters always
                // describe the published buffers.
                self.params = previous;
                self.state = NodeState::Clean;
                Err(err)
            }
        }
    }

    fn notify_observers(&self) {
        for observer in self.observers.values() {
            observer.render_state_dirty();
            observer.bounding_volume_invalid();
        }
    }
}

impl fmt::Debug for DishGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DishGeometry")
            .field("params", &self.params)
            .field("solid", &self.solid)
            .field("state", &self.state)
            .field("vertices", &self.mesh.vertex_count())
            .field("triangles", &self.mesh.triangle_count())
            .field("observers", &self.observers.len())
            .finish()
    }
}
