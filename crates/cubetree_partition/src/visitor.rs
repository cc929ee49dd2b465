use crate::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}

/// Visits cells of a [`PrOctree`](crate::PrOctree) in preorder, children in octant order.
pub trait OctreeVisitor<E> {
    fn visit_cell(&mut self, cell: &Cell<E>) -> VisitStatus;
}

impl<E, F> OctreeVisitor<E> for F
where
    F: FnMut(&Cell<E>) -> VisitStatus,
{
    #[inline]
    fn visit_cell(&mut self, cell: &Cell<E>) -> VisitStatus {
        (self)(cell)
    }
}
