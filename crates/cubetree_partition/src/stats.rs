use crate::{Cell, PrOctree, VisitStatus};

use fnv::FnvHashMap;

/// Shape of a [`PrOctree`] at one point in time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OctreeStats {
    pub num_cells: usize,
    pub num_leaves: usize,
    pub num_branches: usize,
    pub num_elements: usize,
    /// Depth of the deepest leaf. The root has depth 1.
    pub max_leaf_depth: u32,
    /// Leaves holding more than `capacity` elements. Only leaves at `max_depth` can get there.
    pub num_overfull_leaves: usize,
    pub leaves_per_depth: FnvHashMap<u32, usize>,
}

impl<E> PrOctree<E> {
    pub fn stats(&self) -> OctreeStats {
        let capacity = self.capacity();
        let mut stats = OctreeStats::default();
        self.visit(&mut |cell: &Cell<E>| {
            stats.num_cells += 1;
            if cell.is_leaf() {
                let num_elements = cell.elements().len();
                stats.num_leaves += 1;
                stats.num_elements += num_elements;
                stats.max_leaf_depth = stats.max_leaf_depth.max(cell.depth());
                if num_elements > capacity {
                    stats.num_overfull_leaves += 1;
                }
                *stats.leaves_per_depth.entry(cell.depth()).or_insert(0) += 1;
            } else {
                stats.num_branches += 1;
            }

            VisitStatus::Continue
        });

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_one_leaf() {
        let octree = PrOctree::<u8>::new(4, 4, 16).unwrap();
        let stats = octree.stats();

        assert_eq!(stats.num_cells, 1);
        assert_eq!(stats.num_leaves, 1);
        assert_eq!(stats.num_branches, 0);
        assert_eq!(stats.max_leaf_depth, 1);
        assert_eq!(stats.leaves_per_depth.get(&1), Some(&1));
    }

    #[test]
    fn counts_follow_splits() {
        let mut octree = PrOctree::new(2, 3, 8).unwrap();
        octree.insert(1, 1, 1, 1);
        octree.insert(2, 2, 2, 2);
        octree.insert(3, 3, 3, 3);
        octree.insert(4, -3, -3, -3);

        let stats = octree.stats();
        assert_eq!(stats.num_branches, 2);
        assert_eq!(stats.num_leaves, 15);
        assert_eq!(stats.num_cells, 17);
        assert_eq!(stats.num_elements, 4);
        assert_eq!(stats.max_leaf_depth, 3);
        assert_eq!(stats.num_overfull_leaves, 1);
        assert_eq!(stats.leaves_per_depth.get(&2), Some(&7));
        assert_eq!(stats.leaves_per_depth.get(&3), Some(&8));
    }
}
