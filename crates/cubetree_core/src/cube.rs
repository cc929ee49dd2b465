use crate::{Octant, Point3i};

use std::fmt;

/// An axis-aligned cube described by its center and half edge length (the "range").
///
/// The cube spans `center - range ..= center + range` on every axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Cube {
    center: Point3i,
    range: i64,
}

impl Cube {
    /// `range` must be positive.
    #[inline]
    pub fn new(center: Point3i, range: i64) -> Self {
        debug_assert!(range > 0, "cube range must be positive, got {}", range);

        Self { center, range }
    }

    #[inline]
    pub fn center(&self) -> Point3i {
        self.center
    }

    /// Half of the edge length.
    #[inline]
    pub fn range(&self) -> i64 {
        self.range
    }

    #[inline]
    pub fn min(&self) -> Point3i {
        self.center - Point3i::fill(self.range)
    }

    #[inline]
    pub fn max(&self) -> Point3i {
        self.center + Point3i::fill(self.range)
    }

    /// The corner of the cube lying in `octant`, e.g. octant 0 gives `center + range` on all axes.
    #[inline]
    pub fn corner(&self, octant: Octant) -> Point3i {
        self.center + octant.signs() * self.range
    }

    /// Inclusive on both faces.
    #[inline]
    pub fn contains(&self, p: &Point3i) -> bool {
        let min = self.min();
        let max = self.max();

        p.x() >= min.x()
            && p.x() <= max.x()
            && p.y() >= min.y()
            && p.y() <= max.y()
            && p.z() >= min.z()
            && p.z() <= max.z()
    }

    /// The child cube in `octant`, with half the range and its center offset by that half range
    /// toward the octant. The range must be at least 2.
    #[inline]
    pub fn child(&self, octant: Octant) -> Self {
        let half_range = self.range >> 1;

        Self::new(self.center + octant.signs() * half_range, half_range)
    }

    /// The octant of this cube that `p` routes to.
    #[inline]
    pub fn octant_of(&self, p: &Point3i) -> Octant {
        Octant::of(&self.center, p)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center = {} range = {}", self.center, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointN;

    #[test]
    fn corners_follow_octant_order() {
        let cube = Cube::new(PointN([1, 2, 3]), 4);

        assert_eq!(cube.corner(Octant::ALL[0]), PointN([5, 6, 7]));
        assert_eq!(cube.corner(Octant::ALL[1]), PointN([5, 6, -1]));
        assert_eq!(cube.corner(Octant::ALL[6]), PointN([-3, -2, 7]));
        assert_eq!(cube.corner(Octant::ALL[7]), cube.min());
        assert_eq!(cube.corner(Octant::ALL[0]), cube.max());
    }

    #[test]
    fn children_tile_the_parent() {
        let cube = Cube::new(Point3i::ZERO, 8);
        for octant in Octant::ALL.iter() {
            let child = cube.child(*octant);
            assert_eq!(child.range(), 4);
            assert_eq!(cube.octant_of(&child.center()), *octant);
            assert!(cube.contains(&child.min()));
            assert!(cube.contains(&child.max()));
        }
        assert_eq!(cube.child(Octant::ALL[0]).center(), Point3i::fill(4));
        assert_eq!(cube.child(Octant::ALL[7]).center(), Point3i::fill(-4));
    }

    #[test]
    fn contains_is_inclusive() {
        let cube = Cube::new(Point3i::ZERO, 2);
        assert!(cube.contains(&Point3i::fill(2)));
        assert!(cube.contains(&Point3i::fill(-2)));
        assert!(!cube.contains(&PointN([3, 0, 0])));
    }
}
