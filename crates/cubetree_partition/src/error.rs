//! Error types for octree construction.

/// Errors reported when an octree is built from invalid parameters.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum OctreeError {
    /// A leaf must be able to hold at least one element.
    #[error("cell capacity must be positive")]
    ZeroCapacity,

    /// The root cell alone has depth 1.
    #[error("maximum depth must be at least 1")]
    ZeroDepth,

    /// The root range needed to halve down to `max_depth` would overflow cell arithmetic.
    #[error("maximum depth {max_depth} exceeds the supported depth {}", crate::MAX_DEPTH)]
    DepthTooLarge {
        /// Requested maximum depth.
        max_depth: u32,
    },

    /// The bounds do not describe a non-empty interval.
    #[error("bounds [{min}, {max}] are empty, min must be less than max")]
    EmptyBounds {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// The bounds leave no headroom for cell arithmetic.
    #[error("bounds [{min}, {max}] exceed the supported coordinate magnitude {}", crate::MAX_COORDINATE)]
    BoundsTooLarge {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
}
