//! Stereographic projection from 4-space into 3-space
//!
//! A vertex `(x, y, z, w)` maps to `(x, y, z) * 4p / (w - 2p)` for pole `p`.
//! The projection is conformal on the 3-sphere through the vertices, so
//! pentagonal faces stay recognisable after flattening.

use crate::{GeometryError, Vec3, Vec4};

/// Denominators closer to zero than this are treated as singular
const SINGULARITY_EPSILON: f64 = 1e-9;

/// Stereographic projection with a fixed pole
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StereographicProjection {
    pole: f64,
}

impl StereographicProjection {
    /// Create a projection, rejecting a zero or non-finite pole
    pub fn new(pole: f64) -> Result<Self, GeometryError> {
        if !pole.is_finite() || pole == 0.0 {
            return Err(GeometryError::InvalidPole(pole));
        }
        Ok(Self { pole })
    }

    #[inline]
    pub fn pole(&self) -> f64 {
        self.pole
    }

    /// Project one vertex; `index` is only used for error reporting
    pub fn project_point(&self, index: usize, v: Vec4) -> Result<Vec3, GeometryError> {
        let denom = v.w - 2.0 * self.pole;
        if denom.abs() < SINGULARITY_EPSILON {
            return Err(GeometryError::ProjectionSingularity {
                index,
                w: v.w,
                pole: self.pole,
            });
        }
        Ok(v.xyz() * (4.0 * self.pole / denom))
    }

    /// Project every vertex, preserving order
    ///
    /// Fails on the first vertex that lies on the singular hyperplane
    /// `w = 2 * pole`.
    pub fn project(&self, vertices: &[Vec4]) -> Result<Vec<Vec3>, GeometryError> {
        vertices
            .iter()
            .enumerate()
            .map(|(i, v)| self.project_point(i, *v))
            .collect()
    }
}

/// Lowest z among the points, `None` when there are no points
///
/// Used to rest a projected polytope on the floor.
pub fn bounding_offset(points: &[Vec3]) -> Option<f64> {
    points.iter().map(|p| p.z).reduce(f64::min)
}
