//! Point-region octrees over a bounded 3D integer lattice.
//!
//! A [`PrOctree`] stores arbitrary values keyed by lattice points. Cells split into 8 children when
//! a leaf overflows its capacity, and merge back into a single leaf when coordinate-directed
//! removals bring a subtree back down to exactly the capacity.
//!
//! Range queries are driven by a caller-supplied [`Criterion`] which classifies each cell's
//! [`Cube`](cubetree_core::Cube) as outside, inside, or partially overlapping the query region.
//! Whole subtrees are pruned or accepted without looking at their elements.
//!
//! ```
//! use cubetree_partition::{Covering, PrOctree};
//! use cubetree_partition::cubetree_core::Cube;
//!
//! let mut octree = PrOctree::new(2, 3, 8).unwrap();
//! assert!(octree.insert("a", 1, 1, 1));
//! assert!(octree.insert("b", 2, 2, 2));
//! assert!(octree.insert("c", -3, -3, -3));
//! assert!(!octree.insert("d", 9, 0, 0));
//!
//! assert!(octree.contains_at(&"b", 2, 2, 2));
//!
//! // Everything with a positive X coordinate.
//! let positive_x = |cube: &Cube| {
//!     if cube.max().x() < 1 {
//!         Covering::Outside
//!     } else if cube.min().x() >= 1 {
//!         Covering::Inside
//!     } else {
//!         Covering::Partial
//!     }
//! };
//! assert_eq!(octree.query(&positive_x), vec![&"a", &"b"]);
//! ```
//!
//! # Logging
//!
//! Construction and `clear` are logged at `debug` level, splits and merges at `trace` level,
//! through the `log` facade.

mod cell;
mod config;
mod criterion;
mod dump;
mod element;
mod error;
mod octree;
mod stats;
mod visitor;

pub use cell::Cell;
pub use config::{OctreeConfig, MAX_COORDINATE, MAX_DEPTH};
pub use criterion::{Covering, Criterion};
pub use element::Element;
pub use error::OctreeError;
pub use octree::{Elements, PrOctree};
pub use stats::OctreeStats;
pub use visitor::{OctreeVisitor, VisitStatus};

pub use cubetree_core;
