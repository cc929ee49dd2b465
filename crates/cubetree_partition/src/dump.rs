//! Human-readable report of an octree's non-empty leaves. Diagnostic only; the format is not meant
//! to be parsed.

use crate::{Cell, PrOctree, VisitStatus};

use std::fmt::{self, Write};

impl<E> PrOctree<E> {
    pub fn debug_dump(&self) -> String {
        self.to_string()
    }
}

impl<E> fmt::Display for PrOctree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.bounds();
        writeln!(f, "PrOctree")?;
        writeln!(f, "cell capacity = {}", self.capacity())?;
        writeln!(f, "max depth = {}", self.max_depth())?;
        for axis in ["x", "y", "z"].iter() {
            writeln!(f, "min {} = {}", axis, min)?;
            writeln!(f, "max {} = {}", axis, max)?;
        }

        let mut result = Ok(());
        self.visit(&mut |cell: &Cell<E>| {
            if cell.is_leaf() && !cell.is_empty_leaf() {
                result = write_leaf(&mut *f, cell);
                if result.is_err() {
                    return VisitStatus::ExitEarly;
                }
            }

            VisitStatus::Continue
        });

        result
    }
}

fn write_leaf<E>(f: &mut impl Write, cell: &Cell<E>) -> fmt::Result {
    let range = cell.cube().range();
    writeln!(f)?;
    writeln!(f, "depth = {}", cell.depth())?;
    writeln!(f, "size = {}", cell.elements().len())?;
    writeln!(f, "center = {}", cell.cube().center())?;
    writeln!(f, "range = ({} {} {})", range, range, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_lists_only_non_empty_leaves() {
        let mut octree = PrOctree::new(2, 3, 8).unwrap();
        octree.insert('a', 1, 1, 1);
        octree.insert('b', 2, 2, 2);
        octree.insert('c', -3, -3, -3);

        let dump = octree.debug_dump();
        assert!(dump.starts_with("PrOctree\ncell capacity = 2\nmax depth = 3\nmin x = -8\nmax x = 8\n"));
        assert_eq!(dump.matches("depth = ").count() - 1, 2);
        assert!(dump.contains("depth = 2\nsize = 2\ncenter = (4 4 4)\nrange = (4 4 4)\n"));
        assert!(dump.contains("depth = 2\nsize = 1\ncenter = (-4 -4 -4)\nrange = (4 4 4)\n"));
    }

    #[test]
    fn empty_tree_dumps_header_only() {
        let octree = PrOctree::<u8>::new(2, 3, 8).unwrap();
        assert!(!octree.debug_dump().contains("size = "));
    }
}
