//! Symmetric plot limits for a point set.
//!
//! The limit is one scalar shared by both axes: the largest absolute
//! coordinate seen, scaled by a padding factor and rounded up.

use core::borrow::Borrow;
use core::fmt;
use libm::{ceil, fabs};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point2D;
use crate::error::SpiralError;

/// Padding applied when the caller does not choose one (10% slack).
pub const DEFAULT_PADDING: f64 = 1.1;

/// Symmetric axis bounds `(lower, upper)` with `lower == -upper` and `upper >= 0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LimitParams"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitPair {
    lower: f64,
    upper: f64,
}

/// Unvalidated serialized form of [`LimitPair`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct LimitParams {
    lower: f64,
    upper: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LimitParams> for LimitPair {
    type Error = SpiralError;

    fn try_from(params: LimitParams) -> Result<Self, SpiralError> {
        if params.upper.is_nan() || params.upper < 0.0 || params.lower != -params.upper {
            return Err(SpiralError::AsymmetricLimits(
                "lower must equal -upper and upper must be non-negative",
            ));
        }
        Ok(LimitPair::symmetric(params.upper))
    }
}

impl LimitPair {
    /// Bounds reported for an empty point set.
    pub const DEFAULT: LimitPair = LimitPair::symmetric(10.0);

    /// Build `(-bound, bound)`.
    pub const fn symmetric(bound: f64) -> Self {
        LimitPair {
            lower: -bound,
            upper: bound,
        }
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if both coordinates of `point` fall inside `[lower, upper]`.
    pub fn contains(&self, point: Point2D) -> bool {
        (self.lower..=self.upper).contains(&point.x) && (self.lower..=self.upper).contains(&point.y)
    }

    /// The pair as `[lower, upper]`, the host's two-element vector.
    pub fn to_array(self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

impl Default for LimitPair {
    fn default() -> Self {
        LimitPair::DEFAULT
    }
}

impl From<LimitPair> for [f64; 2] {
    fn from(limits: LimitPair) -> Self {
        limits.to_array()
    }
}

impl fmt::Display for LimitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.lower, self.upper)
    }
}

/// Running maximum of absolute coordinates across both axes.
///
/// A NaN coordinate never compares greater than the running value and is
/// therefore skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LimitCalculator {
    max_abs: f64,
    count: usize,
}

impl LimitCalculator {
    /// Start an empty scan.
    pub const fn new() -> Self {
        LimitCalculator {
            max_abs: 0.0,
            count: 0,
        }
    }

    /// Fold one point into the scan.
    pub fn push(&mut self, point: Point2D) {
        let abs_x = fabs(point.x);
        let abs_y = fabs(point.y);
        if abs_x > self.max_abs {
            self.max_abs = abs_x;
        }
        if abs_y > self.max_abs {
            self.max_abs = abs_y;
        }
        self.count += 1;
    }

    /// Largest absolute coordinate seen so far (`0.0` before any point).
    pub fn max_abs(&self) -> f64 {
        self.max_abs
    }

    /// Number of points pushed.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if no point has been pushed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Turn the scan into bounds.
    ///
    /// An empty scan yields [`LimitPair::DEFAULT`]; otherwise the bound is
    /// `ceil(max_abs * padding)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(SpiralError::InvalidPadding)` for a non-empty scan if
    /// `padding` is negative or not finite, or if it is zero while an
    /// infinite coordinate was seen.
    pub fn finish(&self, padding: f64) -> Result<LimitPair, SpiralError> {
        if self.is_empty() {
            return Ok(LimitPair::DEFAULT);
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(SpiralError::InvalidPadding("must be non-negative and finite"));
        }
        // inf * 0 is NaN
        if padding == 0.0 && self.max_abs.is_infinite() {
            return Err(SpiralError::InvalidPadding(
                "zero padding cannot scale an infinite coordinate",
            ));
        }
        Ok(LimitPair::symmetric(ceil(self.max_abs * padding)))
    }
}

impl Extend<Point2D> for LimitCalculator {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

/// Compute symmetric padded limits for a point set.
///
/// # Arguments
///
/// * `points`: Any iterable of points or point references.
/// * `padding`: Multiplicative slack on the largest absolute coordinate.
///
/// # Errors
///
/// See [`LimitCalculator::finish`]. An empty point set always yields
/// [`LimitPair::DEFAULT`].
pub fn calculate_limits<I>(points: I, padding: f64) -> Result<LimitPair, SpiralError>
where
    I: IntoIterator,
    I::Item: Borrow<Point2D>,
{
    let mut calc = LimitCalculator::new();
    calc.extend(points.into_iter().map(|p| *p.borrow()));
    calc.finish(padding)
}

/// [`calculate_limits`] with [`DEFAULT_PADDING`].
pub fn calculate_limits_default<I>(points: I) -> LimitPair
where
    I: IntoIterator,
    I::Item: Borrow<Point2D>,
{
    let mut calc = LimitCalculator::new();
    calc.extend(points.into_iter().map(|p| *p.borrow()));
    // DEFAULT_PADDING is positive and finite.
    calc.finish(DEFAULT_PADDING).unwrap_or(LimitPair::DEFAULT)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let limits = LimitPair::symmetric(7.0);
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"lower":-7.0,"upper":7.0}"#);
        let back: LimitPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limits);
    }

    #[test]
    fn test_deserialize_rejects_asymmetric() {
        for json in [r#"{"lower":3.0,"upper":-7.0}"#, r#"{"lower":-2.0,"upper":5.0}"#] {
            let err = serde_json::from_str::<LimitPair>(json).unwrap_err().to_string();
            assert!(err.contains("Asymmetric limits"), "{}", err);
        }
    }
}
