//! Point-region octrees for values stored on a bounded 3D integer lattice.
//!
//! This crate re-exports the cubetree member crates:
//!
//! - [`core`]: lattice points, cubes, and octant routing
//! - [`partition`]: the [`PrOctree`](partition::PrOctree) spatial index, behind the default
//!   `partition` feature
//!
//! Optional features:
//!
//! - `serde`: serialization of points, cubes, and octree configuration
//! - `mint`: conversions between `Point3i` and `mint::Point3<i64>`

pub use cubetree_core as core;

#[cfg(feature = "partition")]
pub use cubetree_partition as partition;

pub mod prelude {
    pub use super::core::prelude::*;

    #[cfg(feature = "partition")]
    pub use super::partition::{
        Covering, Criterion, Element, OctreeConfig, OctreeError, OctreeVisitor, PrOctree,
        VisitStatus,
    };
}
