//! Complex numbers for the pentagrid construction
//!
//! Only the handful of operations the multigrid method needs: arithmetic,
//! unit vectors from an angle, and conversion to a plane point.

use crate::Vec2;

/// A complex number `re + im·i`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `exp(i·theta)`
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Interpret as a point in the plane
    #[inline]
    pub fn to_point(self) -> Vec2 {
        Vec2::new(self.re, self.im)
    }
}

impl std::ops::Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl std::ops::AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.re * scalar, self.im * scalar)
    }
}

impl std::ops::Div for Complex {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        let denom = other.norm_squared();
        let num = self * other.conj();
        Self::new(num.re / denom, num.im / denom)
    }
}

impl std::ops::Div<f64> for Complex {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.re / scalar, self.im / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: Complex, b: Complex) -> bool {
        (a - b).norm_squared().sqrt() < EPSILON
    }

    #[test]
    fn test_i_squared_is_minus_one() {
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_division_inverts_multiplication() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(-0.25, 3.0);
        assert!(approx_eq((a * b) / b, a));
    }

    #[test]
    fn test_from_angle() {
        assert!(approx_eq(Complex::from_angle(PI / 2.0), Complex::I));
        assert!(approx_eq(Complex::from_angle(PI), Complex::new(-1.0, 0.0)));
    }

    #[test]
    fn test_dividing_by_unit_rotates_back() {
        let g = Complex::from_angle(2.0 * PI / 5.0);
        let z = Complex::new(2.0, 1.0);
        assert!(approx_eq((z * g) / g, z));
        assert!(approx_eq(z / g, z * g.conj()));
    }
}
