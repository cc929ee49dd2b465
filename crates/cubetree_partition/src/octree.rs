use crate::{
    cell::{LeafMatch, Limits},
    Cell, Covering, Criterion, Element, OctreeConfig, OctreeError, OctreeVisitor, VisitStatus,
};

use cubetree_core::{Cube, Point3i};

/// A point-region octree storing values of type `E` at points of a bounded 3D integer lattice.
///
/// The universe is the cube `[min, max]` on all 3 axes. Leaves hold at most `capacity` elements;
/// inserting into a full leaf splits it into 8 children, unless the leaf is already at `max_depth`.
/// Removing an element by its coordinates merges subdivided cells back into a leaf once their
/// children hold exactly `capacity` elements.
#[derive(Clone, Debug)]
pub struct PrOctree<E> {
    config: OctreeConfig,
    root: Cell<E>,
    len: usize,
}

impl<E> PrOctree<E> {
    /// An empty octree spanning `[-range, range]` on every axis.
    pub fn new(capacity: usize, max_depth: u32, range: i64) -> Result<Self, OctreeError> {
        Self::from_config(OctreeConfig::centered(capacity, max_depth, range))
    }

    /// An empty octree spanning `[min, max]` on every axis.
    pub fn with_bounds(
        capacity: usize,
        max_depth: u32,
        min: i64,
        max: i64,
    ) -> Result<Self, OctreeError> {
        Self::from_config(OctreeConfig::with_bounds(capacity, max_depth, min, max))
    }

    pub fn from_config(config: OctreeConfig) -> Result<Self, OctreeError> {
        let root_cube = config.root_cube()?;

        log::debug!(
            "new octree: capacity = {}, max depth = {}, bounds = [{}, {}], root {}",
            config.capacity,
            config.max_depth,
            config.min,
            config.max,
            root_cube
        );

        Ok(Self {
            config,
            root: Cell::new_leaf(root_cube, 1),
            len: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// The inclusive `(min, max)` bounds shared by all axes.
    #[inline]
    pub fn bounds(&self) -> (i64, i64) {
        (self.config.min, self.config.max)
    }

    /// The cube of the root cell. It may extend past the bounds, since its range is a power of 2.
    #[inline]
    pub fn root_cube(&self) -> &Cube {
        self.root.cube()
    }

    #[inline]
    pub fn root(&self) -> &Cell<E> {
        &self.root
    }

    /// The number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` iff `p` lies inside the bounds on all axes.
    #[inline]
    pub fn in_bounds(&self, p: &Point3i) -> bool {
        self.config.contains(p)
    }

    /// Drops every element and collapses the tree to a single empty leaf.
    pub fn clear(&mut self) {
        log::debug!("clearing octree with {} elements", self.len);

        self.root.clear();
        self.len = 0;
    }

    fn limits(&self) -> Limits {
        Limits {
            capacity: self.config.capacity,
            max_depth: self.config.max_depth,
        }
    }

    /// Stores `value` at `(x, y, z)`. Returns `false`, leaving the tree untouched, if the point is
    /// out of bounds.
    pub fn insert(&mut self, value: E, x: i64, y: i64, z: i64) -> bool {
        self.insert_at(value, Point3i::new(x, y, z))
    }

    /// Same as `insert`, with the coordinates given as a point.
    pub fn insert_at(&mut self, value: E, p: Point3i) -> bool {
        if !self.in_bounds(&p) {
            return false;
        }

        let limits = self.limits();
        self.root.insert(Element::new(value, p), limits);
        self.len += 1;

        true
    }

    /// The leaf whose region contains `(x, y, z)`, or `None` if the point is out of bounds.
    pub fn cell_at(&self, x: i64, y: i64, z: i64) -> Option<&Cell<E>> {
        let p = Point3i::new(x, y, z);
        if !self.in_bounds(&p) {
            return None;
        }

        Some(self.root.leaf_for(&p))
    }

    /// Visit every cell in preorder, children in octant order. See [`VisitStatus`] for how the
    /// visitor controls traversal.
    pub fn visit(&self, visitor: &mut impl OctreeVisitor<E>) -> VisitStatus {
        self.root.visit(visitor)
    }

    /// Iterates over all elements, depth-first in octant order.
    pub fn iter(&self) -> Elements<'_, E> {
        Elements {
            stack: vec![&self.root],
            current: (&[]).iter(),
        }
    }

    /// The values of all elements in cells that `criterion` does not classify as
    /// [`Covering::Outside`].
    ///
    /// A subtree classified [`Covering::Inside`] contributes all of its elements without further
    /// checks. A leaf classified [`Covering::Partial`] also contributes all of its elements, so
    /// points outside of the query region may be reported; use `query_filtered` to test those
    /// points individually.
    ///
    /// Values are ordered depth-first, children in octant order, and in insertion order within a
    /// leaf.
    pub fn query<C>(&self, criterion: &C) -> Vec<&E>
    where
        C: Criterion + ?Sized,
    {
        self.query_elements(criterion)
            .into_iter()
            .map(Element::value)
            .collect()
    }

    /// Same as `query`, but returns the whole elements, including their points.
    pub fn query_elements<C>(&self, criterion: &C) -> Vec<&Element<E>>
    where
        C: Criterion + ?Sized,
    {
        let mut leaves = Vec::new();
        let num_elements = self.root.collect_leaves(criterion, &mut leaves);

        let mut elements = Vec::with_capacity(num_elements);
        for LeafMatch { cell, .. } in leaves {
            elements.extend(cell.elements());
        }

        elements
    }

    /// Same as `query`, but elements of leaves classified [`Covering::Partial`] are only reported
    /// if `refine` accepts their point. Subtrees classified [`Covering::Inside`] are still reported
    /// without calling `refine`.
    pub fn query_filtered<C>(&self, criterion: &C, refine: impl Fn(&Point3i) -> bool) -> Vec<&E>
    where
        C: Criterion + ?Sized,
    {
        let mut leaves = Vec::new();
        let num_elements = self.root.collect_leaves(criterion, &mut leaves);

        let mut values = Vec::with_capacity(num_elements);
        for LeafMatch { cell, covering } in leaves {
            let accept_all = covering == Covering::Inside;
            values.extend(
                cell.elements()
                    .iter()
                    .filter(|e| accept_all || refine(e.point()))
                    .map(Element::value),
            );
        }

        values
    }
}

impl<E: PartialEq> PrOctree<E> {
    /// Searches every leaf for `value`.
    pub fn contains(&self, value: &E) -> bool {
        self.root.contains(value)
    }

    /// Searches only the leaf containing `(x, y, z)` for `value`. Returns `false` if the point is
    /// out of bounds.
    pub fn contains_at(&self, value: &E, x: i64, y: i64, z: i64) -> bool {
        self.cell_at(x, y, z)
            .map_or(false, |leaf| leaf.elements().iter().any(|e| e.value() == value))
    }

    /// Removes the first element equal to `value`, searching the whole tree depth-first.
    ///
    /// Unlike `remove_at`, this never merges cells, so the tree may stay more subdivided than its
    /// contents need.
    pub fn remove(&mut self, value: &E) -> bool {
        self.take(value).is_some()
    }

    /// Same as `remove`, but returns the removed element.
    pub fn take(&mut self, value: &E) -> Option<Element<E>> {
        let removed = self.root.remove(value);
        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }

    /// Removes the first element equal to `value` from the leaf containing `(x, y, z)`, then checks
    /// each ancestor of that leaf, deepest first, for a merge.
    pub fn remove_at(&mut self, value: &E, x: i64, y: i64, z: i64) -> bool {
        self.take_at(value, x, y, z).is_some()
    }

    /// Same as `remove_at`, but returns the removed element.
    pub fn take_at(&mut self, value: &E, x: i64, y: i64, z: i64) -> Option<Element<E>> {
        let p = Point3i::new(x, y, z);
        if !self.in_bounds(&p) {
            return None;
        }

        let removed = self.root.remove_at(value, &p, self.config.capacity);
        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }
}

/// Iterator over the elements of a [`PrOctree`], depth-first in octant order.
pub struct Elements<'a, E> {
    stack: Vec<&'a Cell<E>>,
    current: std::slice::Iter<'a, Element<E>>,
}

impl<'a, E> Iterator for Elements<'a, E> {
    type Item = &'a Element<E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.next() {
                return Some(element);
            }

            let cell = self.stack.pop()?;
            match cell.children() {
                Some(children) => self.stack.extend(children.iter().rev()),
                None => self.current = cell.elements().iter(),
            }
        }
    }
}

impl<'a, E> IntoIterator for &'a PrOctree<E> {
    type Item = &'a Element<E>;
    type IntoIter = Elements<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
