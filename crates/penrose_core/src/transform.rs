//! Object transforms
//!
//! A [`Transform`] is an ordered list of rotate/translate/scale steps, applied
//! first to last. This is the ray tracer's own modifier model, so a transform
//! is emitted step by step and means exactly what it computes here.

use serde::{Serialize, Deserialize};

use penrose_math::Vec3;

/// A single transform step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformStep {
    /// Rotate about x, then y, then z (degrees)
    Rotate(Vec3),
    /// Translate by an offset
    Translate(Vec3),
    /// Uniform scale
    Scale(f64),
}

impl TransformStep {
    /// Apply this step to a point
    pub fn apply(&self, p: Vec3) -> Vec3 {
        match *self {
            TransformStep::Rotate(angles) => p.rotated_degrees(angles),
            TransformStep::Translate(offset) => p + offset,
            TransformStep::Scale(factor) => p * factor,
        }
    }
}

/// An ordered sequence of transform steps
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    steps: Vec<TransformStep>,
}

impl Transform {
    /// Create an identity transform (no steps)
    pub fn identity() -> Self {
        Self::default()
    }

    /// Append a rotation (degrees about x, y, z)
    pub fn rotate(mut self, angles: Vec3) -> Self {
        self.steps.push(TransformStep::Rotate(angles));
        self
    }

    /// Append a translation
    pub fn translate(mut self, offset: Vec3) -> Self {
        self.steps.push(TransformStep::Translate(offset));
        self
    }

    /// Append a uniform scale
    pub fn scale(mut self, factor: f64) -> Self {
        self.steps.push(TransformStep::Scale(factor));
        self
    }

    #[inline]
    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Transform a point from object space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.steps.iter().fold(p, |p, step| step.apply(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(t.is_identity());
        assert_eq!(t.transform_point(p), p);
    }

    #[test]
    fn test_steps_apply_in_order() {
        let translate_then_scale = Transform::identity()
            .translate(Vec3::new(1.0, 0.0, 0.0))
            .scale(10.0);
        let scale_then_translate = Transform::identity()
            .scale(10.0)
            .translate(Vec3::new(1.0, 0.0, 0.0));

        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(translate_then_scale.transform_point(p), Vec3::new(20.0, 10.0, 10.0));
        assert_eq!(scale_then_translate.transform_point(p), Vec3::new(11.0, 10.0, 10.0));
    }

    #[test]
    fn test_floor_rotation_lays_plane_flat() {
        // Tiles are built in the z = 0 plane; rotating 90° about x moves them to y = 0
        let floor = Transform::identity().rotate(Vec3::new(90.0, 0.0, 0.0)).scale(10.0);
        let p = floor.transform_point(Vec3::new(1.0, 2.0, 0.0));
        assert!(vec_approx_eq(p, Vec3::new(10.0, 0.0, 20.0)), "got {:?}", p);
    }
}
