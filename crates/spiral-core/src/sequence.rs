//! Fixed-length point sequences and their host table layout.
//!
//! Hosts exchange point sets as `n x 2` numeric tables stored column-major:
//! the `n` x values first, then the `n` y values.

use alloc::vec::Vec;
use core::ops::Index;
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point2D;
use crate::error::SpiralError;

/// An ordered, fixed-length sequence of points labelled by the columns `x` and `y`.
///
/// There is no mutating API; a sequence is built once and handed to the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSequence {
    points: Vec<Point2D>,
}

impl PointSequence {
    /// Column labels attached to the host table.
    pub const COLUMN_NAMES: [&'static str; 2] = ["x", "y"];

    /// Wrap an already populated list of points.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        PointSequence { points }
    }

    /// Read an `n x 2` column-major table.
    ///
    /// # Errors
    ///
    /// Returns `Err(SpiralError::MalformedTable)` if `data` has an odd length.
    pub fn from_column_major(data: &[f64]) -> Result<Self, SpiralError> {
        if data.len() % 2 != 0 {
            return Err(SpiralError::MalformedTable(
                "column-major buffer must hold two equal columns",
            ));
        }
        let (xs, ys) = data.split_at(data.len() / 2);
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Ok(PointSequence { points })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the sequence holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Point2D> {
        self.points.get(index)
    }

    /// Iterate the points in row order.
    pub fn iter(&self) -> slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    /// Borrow the points as a slice.
    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    /// The `x` column.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// The `y` column.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Flatten into the host's column-major `n x 2` layout.
    pub fn to_column_major(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.points.len() * 2);
        out.extend(self.xs());
        out.extend(self.ys());
        out
    }

    /// Write the column-major layout into a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// Returns `Err(SpiralError::MalformedTable)` unless `out.len() == 2 * self.len()`.
    pub fn write_column_major(&self, out: &mut [f64]) -> Result<(), SpiralError> {
        let n = self.points.len();
        if out.len() != n * 2 {
            return Err(SpiralError::MalformedTable(
                "output buffer must hold exactly 2 * n values",
            ));
        }
        let (xs, ys) = out.split_at_mut(n);
        for ((x, y), p) in xs.iter_mut().zip(ys.iter_mut()).zip(&self.points) {
            *x = p.x;
            *y = p.y;
        }
        Ok(())
    }

    /// Consume the sequence and return its points.
    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }
}

impl Index<usize> for PointSequence {
    type Output = Point2D;

    fn index(&self, index: usize) -> &Point2D {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point2D;
    type IntoIter = slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl AsRef<[Point2D]> for PointSequence {
    fn as_ref(&self) -> &[Point2D] {
        &self.points
    }
}
