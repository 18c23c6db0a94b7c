//! Fermat spiral point generation.
//!
//! Points follow the parametrization `r = sqrt(theta)`, sampled at
//! `num_points` evenly spaced angles between two endpoints (inclusive).

use alloc::vec::Vec;
use core::fmt;
use libm::{cos, fmax, sin, sqrt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point2D;
use crate::error::SpiralError;
use crate::sequence::PointSequence;

/// Point on the Fermat spiral at angle `theta` (radians).
///
/// Returns `None` when `theta` is negative or not finite, since the radius
/// `sqrt(theta)` has no real value there.
pub fn fermat_point(theta: f64) -> Option<Point2D> {
    if !theta.is_finite() || theta < 0.0 {
        return None;
    }
    Some(polar(theta))
}

fn polar(theta: f64) -> Point2D {
    let r = sqrt(theta);
    Point2D::new(r * cos(theta), r * sin(theta))
}

/// Validated sampling parameters for a Fermat spiral.
///
/// `angle_start` may exceed `angle_end`; the spiral is then traversed backward.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SpiralParams"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralGenerator {
    angle_start: f64,
    angle_end: f64,
    num_points: usize,
}

/// Unvalidated serialized form, checked through [`SpiralGenerator::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SpiralParams {
    angle_start: f64,
    angle_end: f64,
    num_points: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<SpiralParams> for SpiralGenerator {
    type Error = SpiralError;

    fn try_from(params: SpiralParams) -> Result<Self, SpiralError> {
        SpiralGenerator::new(params.angle_start, params.angle_end, params.num_points)
    }
}

impl SpiralGenerator {
    /// Construct a new generator.
    ///
    /// # Arguments
    ///
    /// * `angle_start`: First sampled angle in radians.
    /// * `angle_end`: Last sampled angle in radians.
    /// * `num_points`: Number of points to emit, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns `Err(SpiralError::InvalidPointCount)` if `num_points < 2`.
    /// Returns `Err(SpiralError::NonFiniteAngle)` if either angle is NaN or infinite.
    /// Returns `Err(SpiralError::NegativeAngle)` if either angle is negative.
    pub fn new(angle_start: f64, angle_end: f64, num_points: usize) -> Result<Self, SpiralError> {
        if num_points < 2 {
            return Err(SpiralError::InvalidPointCount("must be at least 2"));
        }
        if !angle_start.is_finite() || !angle_end.is_finite() {
            return Err(SpiralError::NonFiniteAngle("angles must be finite"));
        }
        if angle_start < 0.0 || angle_end < 0.0 {
            return Err(SpiralError::NegativeAngle("angles must be non-negative"));
        }
        Ok(SpiralGenerator {
            angle_start,
            angle_end,
            num_points,
        })
    }

    /// Returns the first sampled angle.
    pub fn angle_start(&self) -> f64 {
        self.angle_start
    }

    /// Returns the last sampled angle.
    pub fn angle_end(&self) -> f64 {
        self.angle_end
    }

    /// Returns the number of points the generator emits.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Angle increment between consecutive points. Negative when traversing backward.
    pub fn step(&self) -> f64 {
        (self.angle_end - self.angle_start) / (self.num_points - 1) as f64
    }

    /// Angle of the point at `index`.
    ///
    /// Both endpoints are non-negative, so any negative value here is
    /// rounding error and is clamped to zero.
    pub fn theta_at(&self, index: usize) -> f64 {
        fmax(self.angle_start + index as f64 * self.step(), 0.0)
    }

    /// Point at `index`.
    pub fn point_at(&self, index: usize) -> Point2D {
        polar(self.theta_at(index))
    }

    /// Emit all `num_points` points in order.
    pub fn generate(&self) -> PointSequence {
        let step = self.step();
        let mut points = Vec::with_capacity(self.num_points);
        for i in 0..self.num_points {
            let theta = fmax(self.angle_start + i as f64 * step, 0.0);
            points.push(polar(theta));
        }
        PointSequence::from_points(points)
    }
}

impl fmt::Display for SpiralGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FermatSpiral (θ: {:.2}..{:.2} rad, n: {})",
            self.angle_start, self.angle_end, self.num_points
        )
    }
}

/// Generate `num_points` points on the Fermat spiral between two angles.
///
/// Shorthand for [`SpiralGenerator::new`] followed by [`SpiralGenerator::generate`].
///
/// # Errors
///
/// See [`SpiralGenerator::new`].
pub fn generate_spiral(
    angle_start: f64,
    angle_end: f64,
    num_points: usize,
) -> Result<PointSequence, SpiralError> {
    Ok(SpiralGenerator::new(angle_start, angle_end, num_points)?.generate())
}
