//! 3D Vector type

use serde::{Serialize, Deserialize};

/// 3D Vector, used for projected polytope vertices and scene coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Rotate about the x, y and z axes in that order, angles in degrees
    ///
    /// Matches the ray tracer's `rotate <x, y, z>` convention (left-handed,
    /// each axis applied in turn).
    pub fn rotated_degrees(self, angles: Self) -> Self {
        let (sx, cx) = angles.x.to_radians().sin_cos();
        let (sy, cy) = angles.y.to_radians().sin_cos();
        let (sz, cz) = angles.z.to_radians().sin_cos();

        let v = Self::new(self.x, self.y * cx - self.z * sx, self.y * sx + self.z * cx);
        let v = Self::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy);
        Self::new(v.x * cz - v.y * sz, v.x * sz + v.y * cz, v.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
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
    fn test_rotate_x_90_maps_y_to_z() {
        let v = Vec3::new(0.0, 1.0, 0.0).rotated_degrees(Vec3::new(90.0, 0.0, 0.0));
        assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 1.0)), "got {:?}", v);
    }

    #[test]
    fn test_rotate_y_90_maps_z_to_x() {
        let v = Vec3::new(0.0, 0.0, 1.0).rotated_degrees(Vec3::new(0.0, 90.0, 0.0));
        assert!(vec_approx_eq(v, Vec3::new(1.0, 0.0, 0.0)), "got {:?}", v);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = v.rotated_degrees(Vec3::new(30.0, -60.0, 45.0));
        assert!((v.length() - r.length()).abs() < EPSILON);
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), Vec3::new(1.0, 2.0, 3.0));
    }
}
