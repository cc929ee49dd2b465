//! Integer lattice geometry shared by the cubetree crates.
//!
//! - [`Point3i`]: a point on the 3D integer lattice
//! - [`Cube`]: an axis-aligned cube given by its center and half edge length
//! - [`Octant`]: the fixed convention for routing a point to one of a cube's 8 children

mod cube;
mod octant;
mod point;

pub use cube::Cube;
pub use octant::Octant;
pub use point::{Point3i, PointN};

pub mod prelude {
    pub use super::{Cube, Octant, Point3i, PointN};
}
