#![warn(missing_docs)]

//! Error types for the spiral helpers.
//!
//! Every fallible operation in this crate reports one of these variants
//! instead of letting NaN or a division by zero leak into its output.

use core::fmt;

/// Errors that can occur while generating spirals or computing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralError {
    /// Error for an unusable point count.
    /// This variant is returned when fewer than two spiral points are requested.
    InvalidPointCount(&'static str),
    /// Error for a non-finite angle.
    /// This variant is returned when an angle endpoint is NaN or infinite.
    NonFiniteAngle(&'static str),
    /// Error for a negative angle.
    /// The Fermat radius `sqrt(theta)` has no real value below zero.
    NegativeAngle(&'static str),
    /// Error for an invalid padding factor.
    /// This variant is returned when the padding is negative or not finite,
    /// or zero while an infinite coordinate has to be scaled.
    InvalidPadding(&'static str),
    /// Error for a host table whose buffer does not hold `n x 2` values.
    MalformedTable(&'static str),
    /// Error for serialized limits that are not of the form `(-b, b)` with `b >= 0`.
    AsymmetricLimits(&'static str),
}

impl fmt::Display for SpiralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiralError::InvalidPointCount(msg) => write!(f, "Invalid point count: {}", msg),
            SpiralError::NonFiniteAngle(msg) => write!(f, "Non-finite angle: {}", msg),
            SpiralError::NegativeAngle(msg) => write!(f, "Negative angle: {}", msg),
            SpiralError::InvalidPadding(msg) => write!(f, "Invalid padding: {}", msg),
            SpiralError::MalformedTable(msg) => write!(f, "Malformed table: {}", msg),
            SpiralError::AsymmetricLimits(msg) => write!(f, "Asymmetric limits: {}", msg),
        }
    }
}

impl core::error::Error for SpiralError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = SpiralError::InvalidPointCount("must be at least 2");
        assert_eq!(err.to_string(), "Invalid point count: must be at least 2");

        let err = SpiralError::InvalidPadding("must be non-negative and finite");
        assert_eq!(err.to_string(), "Invalid padding: must be non-negative and finite");
    }
}
