#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of Fermat spiral helpers."]
#![doc = ""]
#![doc = "This crate provides spiral point generation, symmetric plot limit calculation,"]
#![doc = "and bounded-cell counting. Every operation is a single pass over its input"]
#![doc = "with no shared state."]

extern crate alloc;

use core::fmt;
use libm::fabs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod cells;
pub mod error;
pub mod limits;
pub mod sequence;
pub mod spiral;

pub use cells::{CellFlags, count_bounded, count_bounded_flags};
pub use error::SpiralError;
pub use limits::{DEFAULT_PADDING, LimitCalculator, LimitPair, calculate_limits, calculate_limits_default};
pub use sequence::PointSequence;
pub use spiral::{SpiralGenerator, fermat_point, generate_spiral};

/// A 2‑D point `(x, y)` in plot coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point2D = Point2D::new(0.0, 0.0);

    /// Construct a new point.
    ///
    /// # Arguments
    ///
    /// * `x`: Horizontal coordinate.
    /// * `y`: Vertical coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The larger of `|x|` and `|y|`.
    ///
    /// A NaN coordinate is ignored in favour of the other one; if both are
    /// NaN the result is NaN.
    pub fn max_abs(&self) -> f64 {
        libm::fmax(fabs(self.x), fabs(self.y))
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.4}, y: {:.4})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_constructor() {
        let p = Point2D::new(1.5, -2.0);
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.0);
        assert_eq!(Point2D::default(), Point2D::ORIGIN);
    }

    #[test]
    fn test_point_tuple_conversions() {
        let p: Point2D = (3.0, 4.0).into();
        assert_eq!(p, Point2D::new(3.0, 4.0));
        let (x, y): (f64, f64) = p.into();
        assert_eq!((x, y), (3.0, 4.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point2D::new(1.0, 2.0).is_finite());
        assert!(!Point2D::new(f64::INFINITY, 2.0).is_finite());
        assert!(!Point2D::new(1.0, f64::NEG_INFINITY).is_finite());
        assert!(!Point2D::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_point_max_abs() {
        assert_eq!(Point2D::new(3.0, -4.0).max_abs(), 4.0);
        assert_eq!(Point2D::new(-5.0, 1.0).max_abs(), 5.0);
        assert_eq!(Point2D::new(f64::NAN, -2.0).max_abs(), 2.0);
        assert!(Point2D::new(f64::NAN, f64::NAN).max_abs().is_nan());
    }

    #[test]
    fn test_point_display() {
        let p = Point2D::new(1.0, -0.5);
        assert_eq!(format!("{}", p), "(x: 1.0000, y: -0.5000)");
    }
}
