use std::fmt;
use std::ops::{Add, Mul, Sub};

/// An N-dimensional point, where `N` is the coordinate array.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PointN<N>(pub N);

/// A point on the 3D integer lattice.
pub type Point3i = PointN<[i64; 3]>;

impl Point3i {
    pub const ZERO: Self = PointN([0; 3]);

    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        PointN([x, y, z])
    }

    /// A point with every coordinate equal to `value`.
    #[inline]
    pub const fn fill(value: i64) -> Self {
        PointN([value; 3])
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> i64 {
        self.0[2]
    }

    /// Applies `f` to each pair of coordinates.
    #[inline]
    pub fn map_components(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        PointN([
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        ])
    }

    /// `true` iff every coordinate satisfies `f`.
    #[inline]
    pub fn all_components(&self, f: impl Fn(i64) -> bool) -> bool {
        self.0.iter().all(|c| f(*c))
    }

    /// `true` iff every coordinate lies in the inclusive range `[min, max]`.
    #[inline]
    pub fn is_within(&self, min: i64, max: i64) -> bool {
        self.all_components(|c| c >= min && c <= max)
    }
}

impl Add for Point3i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.map_components(&rhs, |a, b| a + b)
    }
}

impl Sub for Point3i {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.map_components(&rhs, |a, b| a - b)
    }
}

impl Mul<i64> for Point3i {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        PointN([self.x() * rhs, self.y() * rhs, self.z() * rhs])
    }
}

impl Mul<Point3i> for i64 {
    type Output = Point3i;

    #[inline]
    fn mul(self, rhs: Point3i) -> Point3i {
        rhs * self
    }
}

impl From<[i64; 3]> for Point3i {
    #[inline]
    fn from(coords: [i64; 3]) -> Self {
        PointN(coords)
    }
}

impl From<Point3i> for [i64; 3] {
    #[inline]
    fn from(p: Point3i) -> Self {
        p.0
    }
}

impl fmt::Display for Point3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x(), self.y(), self.z())
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point3<i64>> for Point3i {
    #[inline]
    fn from(p: mint::Point3<i64>) -> Self {
        PointN([p.x, p.y, p.z])
    }
}

#[cfg(feature = "mint")]
impl From<Point3i> for mint::Point3<i64> {
    #[inline]
    fn from(p: Point3i) -> Self {
        mint::Point3 {
            x: p.x(),
            y: p.y(),
            z: p.z(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let p = Point3i::new(1, -2, 3);
        let q = PointN([4, 5, -6]);

        assert_eq!(p + q, PointN([5, 3, -3]));
        assert_eq!(p - q, PointN([-3, -7, 9]));
        assert_eq!(p * 2, PointN([2, -4, 6]));
        assert_eq!(2 * p, p * 2);
    }

    #[test]
    fn within_is_inclusive() {
        assert!(Point3i::fill(8).is_within(-8, 8));
        assert!(Point3i::fill(-8).is_within(-8, 8));
        assert!(!Point3i::new(0, 9, 0).is_within(-8, 8));
        assert!(!Point3i::new(0, 0, -9).is_within(-8, 8));
    }

    #[test]
    fn display_matches_dump_format() {
        assert_eq!(Point3i::new(1, -2, 3).to_string(), "(1 -2 3)");
    }
}
