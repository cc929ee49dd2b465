use crate::OctreeError;

use cubetree_core::{Cube, Point3i};

/// Largest coordinate magnitude accepted for octree bounds. Keeps every cell corner representable
/// in an `i64`.
pub const MAX_COORDINATE: i64 = 1 << 60;

/// Deepest supported `max_depth`. The root range is at least `2^(max_depth - 1)`, which must not
/// exceed [`MAX_COORDINATE`].
pub const MAX_DEPTH: u32 = 61;

/// Parameters of a [`PrOctree`](crate::PrOctree).
///
/// The universe is the cube `[min, max]` on each of the 3 axes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct OctreeConfig {
    /// Maximum number of elements in a leaf before it is split.
    pub capacity: usize,
    /// Depth of the deepest cells. The root has depth 1. Leaves at this depth are never split and
    /// may exceed `capacity`.
    pub max_depth: u32,
    /// Inclusive lower bound of every axis.
    pub min: i64,
    /// Inclusive upper bound of every axis.
    pub max: i64,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self::centered(8, 8, 1024)
    }
}

impl OctreeConfig {
    /// A universe spanning `[-range, range]` on every axis.
    pub fn centered(capacity: usize, max_depth: u32, range: i64) -> Self {
        Self::with_bounds(capacity, max_depth, -range, range)
    }

    pub fn with_bounds(capacity: usize, max_depth: u32, min: i64, max: i64) -> Self {
        Self {
            capacity,
            max_depth,
            min,
            max,
        }
    }

    pub fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    pub fn with_max_depth(self, max_depth: u32) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_range(self, range: i64) -> Self {
        Self {
            min: -range,
            max: range,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), OctreeError> {
        if self.capacity == 0 {
            return Err(OctreeError::ZeroCapacity);
        }
        if self.max_depth == 0 {
            return Err(OctreeError::ZeroDepth);
        }
        if self.max_depth > MAX_DEPTH {
            return Err(OctreeError::DepthTooLarge {
                max_depth: self.max_depth,
            });
        }
        if self.min >= self.max {
            return Err(OctreeError::EmptyBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min < -MAX_COORDINATE || self.max > MAX_COORDINATE {
            return Err(OctreeError::BoundsTooLarge {
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }

    /// `true` iff `p` lies inside the bounds on all axes.
    #[inline]
    pub fn contains(&self, p: &Point3i) -> bool {
        p.is_within(self.min, self.max)
    }

    /// The cube of the root cell.
    ///
    /// The center is the midpoint of the bounds (rounded down). The range is the smallest power of
    /// 2 that reaches both bounds and is at least `2^(max_depth - 1)`, so every split halves the
    /// range exactly and cells at `max_depth` still have a range of at least 1.
    pub fn root_cube(&self) -> Result<Cube, OctreeError> {
        self.validate()?;

        let center = self.min + (self.max - self.min) / 2;
        let half_extent = (self.max - center) as u64;
        let min_range = 1u64 << (self.max_depth - 1);
        let range = half_extent.max(1).next_power_of_two().max(min_range) as i64;

        Ok(Cube::new(Point3i::fill(center), range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_degenerate_parameters() {
        assert_eq!(
            OctreeConfig::centered(0, 3, 8).validate(),
            Err(OctreeError::ZeroCapacity)
        );
        assert_eq!(
            OctreeConfig::centered(2, 0, 8).validate(),
            Err(OctreeError::ZeroDepth)
        );
        assert_eq!(
            OctreeConfig::with_bounds(2, 3, 5, 5).validate(),
            Err(OctreeError::EmptyBounds { min: 5, max: 5 })
        );
        assert_eq!(
            OctreeConfig::centered(2, 3, i64::MAX).validate(),
            Err(OctreeError::BoundsTooLarge {
                min: -i64::MAX,
                max: i64::MAX
            })
        );
        assert_eq!(
            OctreeConfig::centered(2, MAX_DEPTH + 1, 8).validate(),
            Err(OctreeError::DepthTooLarge {
                max_depth: MAX_DEPTH + 1
            })
        );
        assert!(OctreeConfig::default().validate().is_ok());
    }

    #[test]
    fn root_range_leaves_room_for_every_depth() {
        let cube = OctreeConfig::centered(1, 10, 8).root_cube().unwrap();
        assert_eq!(cube.center(), Point3i::ZERO);
        assert_eq!(cube.range(), 1 << 9);

        let cube = OctreeConfig::centered(1, MAX_DEPTH, 8).root_cube().unwrap();
        assert_eq!(cube.range(), MAX_COORDINATE);
    }

    #[test]
    fn symmetric_root_is_centered_at_origin() {
        let cube = OctreeConfig::centered(2, 3, 8).root_cube().unwrap();
        assert_eq!(cube.center(), Point3i::ZERO);
        assert_eq!(cube.range(), 8);
    }

    #[test]
    fn root_range_is_rounded_up_to_power_of_two() {
        let cube = OctreeConfig::with_bounds(2, 3, 0, 100).root_cube().unwrap();
        assert_eq!(cube.center(), Point3i::fill(50));
        assert_eq!(cube.range(), 64);
        assert!(cube.contains(&Point3i::fill(0)));
        assert!(cube.contains(&Point3i::fill(100)));

        let cube = OctreeConfig::with_bounds(2, 3, -7, 4).root_cube().unwrap();
        assert_eq!(cube.center(), Point3i::fill(-2));
        assert_eq!(cube.range(), 8);
        assert!(cube.contains(&Point3i::fill(-7)));
        assert!(cube.contains(&Point3i::fill(4)));
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = OctreeConfig::default()
            .with_capacity(3)
            .with_max_depth(5)
            .with_range(16);
        assert_eq!(config, OctreeConfig::with_bounds(3, 5, -16, 16));
        assert!(config.contains(&Point3i::fill(16)));
        assert!(!config.contains(&Point3i::new(0, 17, 0)));
    }
}
