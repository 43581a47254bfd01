//! Drive a dish node through a few declarative parameter changes.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use trellis::{DishGeometry, DishParams, GeometryObserver, Subdivision};

/// Stand-in for a parent shape node caching render state and bounds.
#[derive(Default)]
struct ParentNode {
    render_dirty: Cell<bool>,
    bounds_stale: Cell<bool>,
}

impl GeometryObserver for ParentNode {
    fn render_state_dirty(&self) {
        self.render_dirty.set(true);
    }

    fn bounding_volume_invalid(&self) {
        self.bounds_stale.set(true);
    }
}

fn print_stats(label: &str, dish: &DishGeometry) {
    println!(
        "{label}: {} vertices, {} triangles",
        dish.vertex_count(),
        dish.triangle_count()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    // The default dish: a capped unit hemisphere.
    let mut dish = DishGeometry::new(DishParams::default())?;
    print_stats("default dish", &dish);

    let parent = Rc::new(ParentNode::default());
    dish.register_observer(parent.clone());

    // Flatten it into a shallow bowl section.
    dish.set_height(0.25)?;
    print_stats("shallow section", &dish);
    println!(
        "parent notified: render_dirty={}, bounds_stale={}",
        parent.render_dirty.get(),
        parent.bounds_stale.get()
    );

    // Open the bottom and coarsen the tessellation.
    parent.render_dirty.set(false);
    dish.set_bottom(false)?;
    dish.set_subdivision(Subdivision::new(8, 8))?;
    print_stats("open coarse dish", &dish);

    // Invalid parameters are rejected without touching the mesh.
    if let Err(err) = dish.set_diameter(-1.0) {
        println!("rejected: {err}");
    }
    print_stats("after rejected change", &dish);

    Ok(())
}
