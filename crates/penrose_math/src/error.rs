//! Geometry error types
//!
//! Domain violations in the tiling and projection generators. These are
//! reported instead of letting NaN or infinity leak into the scene.

use std::fmt;

/// Error type for the geometric generators
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Tiling line count below zero
    NegativeLineCount(i64),
    /// Grid direction pair is not two distinct indices below the grid count
    DirectionOutOfRange { r: usize, s: usize },
    /// Projection pole is zero, NaN or infinite
    InvalidPole(f64),
    /// A vertex sits on the projection pole's singular hyperplane
    ProjectionSingularity { index: usize, w: f64, pole: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NegativeLineCount(n) => {
                write!(f, "Line count must be non-negative, got {}", n)
            }
            GeometryError::DirectionOutOfRange { r, s } => {
                write!(f, "Invalid grid direction pair ({}, {})", r, s)
            }
            GeometryError::InvalidPole(pole) => {
                write!(f, "Invalid projection pole: {}", pole)
            }
            GeometryError::ProjectionSingularity { index, w, pole } => write!(
                f,
                "Vertex {} (w = {}) is singular for projection pole {}",
                index, w, pole
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
