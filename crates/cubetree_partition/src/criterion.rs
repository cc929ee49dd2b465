use cubetree_core::Cube;

/// How a cell's cube relates to a query region.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Covering {
    /// No point of the cube is in the region.
    Outside,
    /// Every point of the cube is in the region.
    Inside,
    /// The cube straddles the region's boundary.
    Partial,
}

/// Classifies cell cubes against a query region. This drives pruning in
/// [`PrOctree::query`](crate::PrOctree::query).
///
/// Any `Fn(&Cube) -> Covering` closure is a criterion.
pub trait Criterion {
    fn classify(&self, cube: &Cube) -> Covering;
}

impl<F> Criterion for F
where
    F: Fn(&Cube) -> Covering,
{
    #[inline]
    fn classify(&self, cube: &Cube) -> Covering {
        (self)(cube)
    }
}
