use crate::{Covering, Criterion, Element, OctreeVisitor, VisitStatus};

use cubetree_core::{Cube, Octant, Point3i};

/// A node of a [`PrOctree`](crate::PrOctree). A cell is either a leaf that stores elements or a
/// branch that owns exactly 8 children and no elements.
#[derive(Clone, Debug)]
pub struct Cell<E> {
    cube: Cube,
    depth: u32,
    kind: CellKind<E>,
}

#[derive(Clone, Debug)]
enum CellKind<E> {
    Leaf(Vec<Element<E>>),
    Branch(Box<[Cell<E>; 8]>),
}

/// The structural limits of the tree that owns a cell.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Limits {
    pub capacity: usize,
    pub max_depth: u32,
}

/// A non-empty leaf reached by a criterion traversal, with the classification that admitted it.
pub(crate) struct LeafMatch<'a, E> {
    pub cell: &'a Cell<E>,
    pub covering: Covering,
}

impl<E> Cell<E> {
    pub(crate) fn new_leaf(cube: Cube, depth: u32) -> Self {
        Self {
            cube,
            depth,
            kind: CellKind::Leaf(Vec::new()),
        }
    }

    #[inline]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// The root has depth 1.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, CellKind::Leaf(_))
    }

    /// `true` for a leaf that holds no elements.
    #[inline]
    pub fn is_empty_leaf(&self) -> bool {
        match &self.kind {
            CellKind::Leaf(elements) => elements.is_empty(),
            CellKind::Branch(_) => false,
        }
    }

    /// The elements of a leaf, in insertion order. Branches hold no elements.
    #[inline]
    pub fn elements(&self) -> &[Element<E>] {
        match &self.kind {
            CellKind::Leaf(elements) => elements,
            CellKind::Branch(_) => &[],
        }
    }

    #[inline]
    pub fn children(&self) -> Option<&[Cell<E>; 8]> {
        match &self.kind {
            CellKind::Leaf(_) => None,
            CellKind::Branch(children) => Some(children),
        }
    }

    #[inline]
    pub fn child(&self, octant: Octant) -> Option<&Cell<E>> {
        self.children().map(|children| &children[octant.index()])
    }

    fn can_split(&self, limits: Limits) -> bool {
        self.depth < limits.max_depth
    }

    /// Descends to the leaf whose region contains `p`. Points outside of this cell's cube still
    /// route to some boundary leaf.
    pub(crate) fn leaf_for(&self, p: &Point3i) -> &Cell<E> {
        let mut cell = self;
        while let CellKind::Branch(children) = &cell.kind {
            cell = &children[cell.cube.octant_of(p).index()];
        }

        cell
    }

    /// Appends `element` to the leaf that contains its point, splitting full leaves on the way down
    /// until the element lands in a leaf with room or one at `max_depth`.
    pub(crate) fn insert(&mut self, element: Element<E>, limits: Limits) {
        let is_full = match &self.kind {
            CellKind::Leaf(elements) => elements.len() >= limits.capacity,
            CellKind::Branch(_) => false,
        };
        if is_full && self.can_split(limits) {
            self.split();
        }

        match &mut self.kind {
            CellKind::Leaf(elements) => elements.push(element),
            CellKind::Branch(children) => {
                let octant = self.cube.octant_of(element.point());
                children[octant.index()].insert(element, limits);
            }
        }
    }

    /// Turns this leaf into a branch with 8 empty leaf children, then moves every element into the
    /// child containing it.
    fn split(&mut self) {
        let elements = match &mut self.kind {
            CellKind::Leaf(elements) => std::mem::take(elements),
            CellKind::Branch(_) => return,
        };

        log::trace!(
            "splitting cell at depth {} with {}, {} elements",
            self.depth,
            self.cube,
            elements.len()
        );

        let cube = self.cube;
        let child_depth = self.depth + 1;
        let mut children =
            Box::new(Octant::ALL.map(|o| Cell::new_leaf(cube.child(o), child_depth)));
        for element in elements {
            let child = &mut children[cube.octant_of(element.point()).index()];
            if let CellKind::Leaf(child_elements) = &mut child.kind {
                child_elements.push(element);
            }
        }

        self.kind = CellKind::Branch(children);
    }

    /// Collapses the children back into this cell when they are all leaves holding exactly
    /// `capacity` elements in total. Elements are concatenated in octant order. Returns `true` if
    /// the merge happened.
    fn merge_if_needed(&mut self, capacity: usize) -> bool {
        let children = match &mut self.kind {
            CellKind::Branch(children) => children,
            CellKind::Leaf(_) => return false,
        };

        let mut num_elements = 0;
        for child in children.iter() {
            match &child.kind {
                CellKind::Leaf(elements) => num_elements += elements.len(),
                CellKind::Branch(_) => return false,
            }
        }
        if num_elements != capacity {
            return false;
        }

        let mut merged = Vec::with_capacity(capacity);
        for child in children.iter_mut() {
            if let CellKind::Leaf(elements) = &mut child.kind {
                merged.append(elements);
            }
        }

        log::trace!(
            "merged children of cell at depth {} with {}, {} elements",
            self.depth,
            self.cube,
            merged.len()
        );

        self.kind = CellKind::Leaf(merged);

        true
    }

    pub(crate) fn visit(&self, visitor: &mut impl OctreeVisitor<E>) -> VisitStatus {
        let status = visitor.visit_cell(self);
        if status != VisitStatus::Continue {
            return status;
        }

        if let CellKind::Branch(children) = &self.kind {
            for child in children.iter() {
                if child.visit(visitor) == VisitStatus::ExitEarly {
                    return VisitStatus::ExitEarly;
                }
            }
        }

        VisitStatus::Continue
    }

    /// Collects the non-empty leaves admitted by `criterion`, depth-first in octant order, and
    /// returns their total number of elements.
    pub(crate) fn collect_leaves<'a, C>(
        &'a self,
        criterion: &C,
        leaves: &mut Vec<LeafMatch<'a, E>>,
    ) -> usize
    where
        C: Criterion + ?Sized,
    {
        match criterion.classify(&self.cube) {
            Covering::Outside => 0,
            Covering::Inside => self.collect_all_leaves(leaves),
            Covering::Partial => match &self.kind {
                CellKind::Leaf(elements) => {
                    if elements.is_empty() {
                        return 0;
                    }
                    leaves.push(LeafMatch {
                        cell: self,
                        covering: Covering::Partial,
                    });

                    elements.len()
                }
                CellKind::Branch(children) => children
                    .iter()
                    .map(|child| child.collect_leaves(criterion, leaves))
                    .sum(),
            },
        }
    }

    fn collect_all_leaves<'a>(&'a self, leaves: &mut Vec<LeafMatch<'a, E>>) -> usize {
        match &self.kind {
            CellKind::Leaf(elements) => {
                if elements.is_empty() {
                    return 0;
                }
                leaves.push(LeafMatch {
                    cell: self,
                    covering: Covering::Inside,
                });

                elements.len()
            }
            CellKind::Branch(children) => children
                .iter()
                .map(|child| child.collect_all_leaves(leaves))
                .sum(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.kind = CellKind::Leaf(Vec::new());
    }
}

impl<E: PartialEq> Cell<E> {
    pub(crate) fn contains(&self, value: &E) -> bool {
        match &self.kind {
            CellKind::Leaf(elements) => elements.iter().any(|e| e.value() == value),
            CellKind::Branch(children) => children.iter().any(|child| child.contains(value)),
        }
    }

    /// Removes the first element equal to `value` found in a depth-first search. Never merges.
    pub(crate) fn remove(&mut self, value: &E) -> Option<Element<E>> {
        match &mut self.kind {
            CellKind::Leaf(elements) => remove_first(elements, value),
            CellKind::Branch(children) => children.iter_mut().find_map(|child| child.remove(value)),
        }
    }

    /// Removes the first element equal to `value` from the leaf containing `p`. Every ancestor of
    /// that leaf gets one merge check after a successful removal, starting from the deepest one.
    pub(crate) fn remove_at(
        &mut self,
        value: &E,
        p: &Point3i,
        capacity: usize,
    ) -> Option<Element<E>> {
        let removed = match &mut self.kind {
            CellKind::Leaf(elements) => return remove_first(elements, value),
            CellKind::Branch(children) => {
                let octant = self.cube.octant_of(p);
                children[octant.index()].remove_at(value, p, capacity)
            }
        };

        if removed.is_some() {
            self.merge_if_needed(capacity);
        }

        removed
    }
}

fn remove_first<E: PartialEq>(elements: &mut Vec<Element<E>>, value: &E) -> Option<Element<E>> {
    let index = elements.iter().position(|e| e.value() == value)?;

    Some(elements.remove(index))
}
