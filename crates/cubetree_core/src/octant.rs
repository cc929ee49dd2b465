use crate::{Point3i, PointN};

/// One of the 8 children of a cube, selected by independent sign tests on each axis against the
/// cube's center.
///
/// The index packs the three tests with X in the highest bit:
///
/// | index | x      | y      | z      |
/// |-------|--------|--------|--------|
/// | 0     | `>= c` | `>= c` | `>= c` |
/// | 1     | `>= c` | `>= c` | `< c`  |
/// | 2     | `>= c` | `< c`  | `>= c` |
/// | 3     | `>= c` | `< c`  | `< c`  |
/// | 4     | `< c`  | `>= c` | `>= c` |
/// | 5     | `< c`  | `>= c` | `< c`  |
/// | 6     | `< c`  | `< c`  | `>= c` |
/// | 7     | `< c`  | `< c`  | `< c`  |
///
/// A coordinate equal to the center always takes the `>=` branch.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Octant(u8);

const X_BIT: u8 = 1 << 2;
const Y_BIT: u8 = 1 << 1;
const Z_BIT: u8 = 1 << 0;

impl Octant {
    /// All octants in index order.
    pub const ALL: [Octant; 8] = [
        Octant(0),
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
    ];

    /// Returns `None` if `index >= 8`.
    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Octant(index))
        } else {
            None
        }
    }

    /// Routes `point` to the octant of the cube centered at `center`.
    #[inline]
    pub fn of(center: &Point3i, point: &Point3i) -> Self {
        let mut octant = 0;
        if point.x() < center.x() {
            octant |= X_BIT;
        }
        if point.y() < center.y() {
            octant |= Y_BIT;
        }
        if point.z() < center.z() {
            octant |= Z_BIT;
        }
        Octant(octant)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The direction of this octant from the parent center: `1` on the `>=` side of an axis, `-1`
    /// on the `<` side.
    #[inline]
    pub fn signs(self) -> Point3i {
        let sign = |bit: u8| if self.0 & bit == 0 { 1 } else { -1 };

        PointN([sign(X_BIT), sign(Y_BIT), sign(Z_BIT)])
    }
}
