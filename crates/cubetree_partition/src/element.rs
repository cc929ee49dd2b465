use cubetree_core::Point3i;

/// A value stored at a lattice point. Elements never move; removing one drops it entirely.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Element<E> {
    value: E,
    point: Point3i,
}

impl<E> Element<E> {
    #[inline]
    pub fn new(value: E, point: Point3i) -> Self {
        Self { value, point }
    }

    #[inline]
    pub fn value(&self) -> &E {
        &self.value
    }

    #[inline]
    pub fn point(&self) -> &Point3i {
        &self.point
    }

    #[inline]
    pub fn into_value(self) -> E {
        self.value
    }
}
