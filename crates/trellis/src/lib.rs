#![warn(missing_docs)]

//! trellis: scene-graph geometry nodes for declarative 3D content.
//!
//! Provides the dish node: a parametric ellipsoid-of-revolution section
//! tessellated into triangle buffers, rebuilt synchronously whenever a
//! geometry-affecting parameter changes and pushing dirty notifications to
//! registered consumers.
//!
//! # Example
//!
//! ```
//! use trellis::{DishGeometry, DishParams};
//!
//! # fn main() -> Result<(), trellis::ParameterError> {
//! let mut dish = DishGeometry::new(DishParams::default())?;
//! assert_eq!(dish.triangle_count(), 1175);
//!
//! // A shallower section keeps fewer latitude rings.
//! dish.set_height(0.25)?;
//! assert!(dish.triangle_count() < 1175);
//! # Ok(())
//! # }
//! ```

pub use trellis_geometry;
pub use trellis_math;
pub use trellis_mesh;
pub use trellis_scene;

pub use trellis_geometry::{
    build_cap, build_dish, resolve, tessellate_side, DishParams, ParameterError, ResolvedDish,
    RimSnapshot, RimVertex, Subdivision,
};
pub use trellis_mesh::{MeshBuffers, MeshError};
pub use trellis_scene::{DishField, DishGeometry, GeometryObserver, NodeState, ObserverId};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Consumer {
        render_dirty: Cell<bool>,
        bounds_stale: Cell<bool>,
    }

    impl GeometryObserver for Consumer {
        fn render_state_dirty(&self) {
            self.render_dirty.set(true);
        }

        fn bounding_volume_invalid(&self) {
            self.bounds_stale.set(true);
        }
    }

    #[test]
    fn test_change_propagation_end_to_end() {
        let mut dish = DishGeometry::new(DishParams::default()).unwrap();
        let consumer = Rc::new(Consumer::default());
        let id = dish.register_observer(consumer.clone());

        // Consumers cache counts until notified.
        let cached = (dish.vertex_count(), dish.triangle_count());

        dish.set_subdivision(Subdivision::new(8, 8)).unwrap();
        assert!(consumer.render_dirty.get());
        assert!(consumer.bounds_stale.get());
        assert_ne!((dish.vertex_count(), dish.triangle_count()), cached);
        assert_eq!(dish.mesh().validate(), Ok(()));

        // After deregistration the next rebuild is silent.
        consumer.render_dirty.set(false);
        assert!(dish.unregister_observer(id));
        dish.set_bottom(false).unwrap();
        assert!(!consumer.render_dirty.get());
    }

    #[test]
    fn test_node_publishes_the_generator_output() {
        let params = DishParams {
            height: 0.4,
            subdivision: Subdivision::new(12, 16),
            ..DishParams::default()
        };
        let dish = DishGeometry::new(params).unwrap();
        assert_eq!(dish.mesh(), &build_dish(&params).unwrap());
    }
}
