//! Counting bounded cells of a tessellation.
//!
//! A cell is bounded when every one of its vertices is finite. Cells that
//! reach infinity (the outer cells of a Voronoi diagram, for instance) are
//! flagged and left out of the count.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point2D;

/// One flag per cell, `true` when the cell has at least one infinite vertex.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellFlags {
    has_infinite: Vec<bool>,
}

impl CellFlags {
    /// Wrap precomputed flags.
    pub fn new(has_infinite: Vec<bool>) -> Self {
        CellFlags { has_infinite }
    }

    /// Derive flags from per-cell vertex lists.
    ///
    /// A cell is flagged when any vertex has a NaN or infinite coordinate.
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[Point2D]>,
    {
        let has_infinite = cells
            .into_iter()
            .map(|cell| !cell.as_ref().iter().all(Point2D::is_finite))
            .collect();
        CellFlags { has_infinite }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.has_infinite.len()
    }

    /// Returns `true` if there are no cells.
    pub fn is_empty(&self) -> bool {
        self.has_infinite.is_empty()
    }

    /// Borrow the raw flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.has_infinite
    }

    /// Indices of the bounded (unflagged) cells, in order.
    pub fn bounded_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.has_infinite
            .iter()
            .enumerate()
            .filter(|(_, infinite)| !**infinite)
            .map(|(i, _)| i)
    }
}

impl From<Vec<bool>> for CellFlags {
    fn from(has_infinite: Vec<bool>) -> Self {
        CellFlags::new(has_infinite)
    }
}

impl FromIterator<bool> for CellFlags {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        CellFlags::new(iter.into_iter().collect())
    }
}

/// Count the cells that are not flagged as infinite.
pub fn count_bounded(has_infinite: &CellFlags) -> usize {
    count_bounded_flags(has_infinite.as_slice())
}

/// [`count_bounded`] over a borrowed flag slice.
pub fn count_bounded_flags(has_infinite: &[bool]) -> usize {
    let mut count = 0;
    for &infinite in has_infinite {
        if !infinite {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_empty() {
        assert_eq!(count_bounded(&CellFlags::default()), 0);
        assert_eq!(count_bounded_flags(&[]), 0);
    }

    #[test]
    fn test_count_mixed() {
        let flags = CellFlags::new(vec![false, false, true]);
        assert_eq!(count_bounded(&flags), 2);
    }

    #[test]
    fn test_count_all_infinite() {
        assert_eq!(count_bounded_flags(&[true, true]), 0);
    }

    #[test]
    fn test_count_leaves_input_untouched() {
        let flags: CellFlags = [true, false, false, true, false].into_iter().collect();
        let before = flags.clone();
        assert_eq!(count_bounded(&flags), 3);
        assert_eq!(count_bounded(&flags), 3);
        assert_eq!(flags, before);
    }

    #[test]
    fn test_from_cells() {
        let bounded = vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0)];
        let open = vec![Point2D::new(0.0, 0.0), Point2D::new(f64::INFINITY, 2.0)];
        let empty: Vec<Point2D> = Vec::new();

        let flags = CellFlags::from_cells([bounded, open, empty]);
        // A cell without vertices has no infinite vertex.
        assert_eq!(flags.as_slice(), &[false, true, false]);
        assert_eq!(count_bounded(&flags), 2);
        assert_eq!(flags.bounded_indices().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_from_cells_nan_vertex() {
        let cells = [[Point2D::new(f64::NAN, 0.0)], [Point2D::new(2.0, 3.0)]];
        let flags = CellFlags::from_cells(&cells);
        assert_eq!(flags.as_slice(), &[true, false]);
    }
}
