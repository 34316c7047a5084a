//! 2D vectors over [`FixedPoint`].
//!
//! `+X` right, `+Y` up. Lengths go through the integer square root and
//! angles through the lookup-table `acos`, so every result is reproducible.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::fixed::FixedPoint;

/// A point or direction in the plane.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    /// X component
    pub x: FixedPoint,
    /// Y component
    pub y: FixedPoint,
}

impl FixedVec2 {
    /// (0, 0)
    pub const ZERO: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO);

    /// (1, 1)
    pub const ONE: Self = Self::new(FixedPoint::ONE, FixedPoint::ONE);

    /// +X
    pub const RIGHT: Self = Self::new(FixedPoint::ONE, FixedPoint::ZERO);

    /// +Y
    pub const UP: Self = Self::new(FixedPoint::ZERO, FixedPoint::ONE);

    /// -X
    pub const LEFT: Self = Self::new(FixedPoint::from_raw(-FixedPoint::ONE.raw()), FixedPoint::ZERO);

    /// -Y
    pub const DOWN: Self = Self::new(FixedPoint::ZERO, FixedPoint::from_raw(-FixedPoint::ONE.raw()));

    /// Build from components.
    #[inline]
    pub const fn new(x: FixedPoint, y: FixedPoint) -> Self {
        Self { x, y }
    }

    /// Build from whole-number components.
    #[inline]
    pub const fn from_ints(x: i64, y: i64) -> Self {
        Self::new(FixedPoint::from_int(x), FixedPoint::from_int(y))
    }

    /// Multiply both components by `scalar`.
    #[inline]
    pub fn scale(self, scalar: FixedPoint) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise product.
    #[inline]
    pub fn scale_by(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Divide by a fixed-point scalar (zero divisor falls back like scalar division).
    #[inline]
    pub fn div_scalar(self, scalar: FixedPoint) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }

    /// `x² + y²`. Cheaper than [`Self::length`] for comparisons.
    #[inline]
    pub fn length_squared(self) -> FixedPoint {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> FixedPoint {
        self.length_squared().sqrt()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Self) -> FixedPoint {
        (self - other).length_squared()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> FixedPoint {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector in the same direction, or ZERO for a zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == FixedPoint::ZERO {
            return Self::ZERO;
        }
        self.div_scalar(len)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> FixedPoint {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product. Positive when `other` lies
    /// counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Self) -> FixedPoint {
        self.x * other.y - self.y * other.x
    }

    /// Unsigned angle between two vectors in radians, `[0, π]`.
    pub fn angle(self, other: Self) -> FixedPoint {
        let denominator = self.length() * other.length();
        (self.dot(other) / denominator).acos()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(FixedPoint::min(self.x, other.x), FixedPoint::min(self.y, other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(FixedPoint::max(self.x, other.x), FixedPoint::max(self.y, other.y))
    }

    /// Clamp each component into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: FixedPoint, max: FixedPoint) -> Self {
        Self::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }

    /// Shorten to `max_length` if longer. Direction is preserved.
    pub fn clamp_length(self, max_length: FixedPoint) -> Self {
        let len = self.length();
        if len > max_length {
            self.div_scalar(len / max_length)
        } else {
            self
        }
    }

    /// `self + (other - self) * t`, unclamped.
    #[inline]
    pub fn lerp(self, other: Self, t: FixedPoint) -> Self {
        Self::new(
            FixedPoint::lerp(self.x, other.x, t),
            FixedPoint::lerp(self.y, other.y, t),
        )
    }

    /// [`Self::lerp`] with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp_clamped(self, other: Self, t: FixedPoint) -> Self {
        self.lerp(other, t.clamp(FixedPoint::ZERO, FixedPoint::ONE))
    }

    /// Quarter turn counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Lossless float view, for display.
    #[inline]
    pub fn to_f64s(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl Add for FixedVec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for FixedVec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for FixedVec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<FixedPoint> for FixedVec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: FixedPoint) -> Self {
        self.scale(rhs)
    }
}

impl Div<FixedPoint> for FixedVec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: FixedPoint) -> Self {
        self.div_scalar(rhs)
    }
}

impl fmt::Debug for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy) = self.to_f64s();
        write!(f, "Vec2({:.3}, {:.3})", fx, fy)
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(v: f64) -> FixedPoint {
        FixedPoint::from_f64(v)
    }

    fn v2(x: f64, y: f64) -> FixedVec2 {
        FixedVec2::new(fx(x), fx(y))
    }

    #[test]
    fn test_vec2_constants() {
        assert_eq!(FixedVec2::ZERO.x, FixedPoint::ZERO);
        assert_eq!(FixedVec2::RIGHT.x, FixedPoint::ONE);
        assert_eq!(FixedVec2::UP.y, FixedPoint::ONE);
        assert_eq!(FixedVec2::LEFT, -FixedVec2::RIGHT);
        assert_eq!(FixedVec2::DOWN, -FixedVec2::UP);
    }

    #[test]
    fn test_vec2_add_sub() {
        assert_eq!(v2(3.0, 4.0) + v2(1.0, 2.0), v2(4.0, 6.0));
        assert_eq!(v2(5.0, 7.0) - v2(2.0, 3.0), v2(3.0, 4.0));
    }

    #[test]
    fn test_vec2_scale() {
        assert_eq!(v2(2.0, 3.0).scale(fx(2.0)), v2(4.0, 6.0));
        assert_eq!(v2(2.0, 3.0) * fx(0.5), v2(1.0, 1.5));
        assert_eq!(v2(2.0, 3.0) / fx(2.0), v2(1.0, 1.5));
        assert_eq!(v2(2.0, 3.0).scale_by(v2(3.0, -1.0)), v2(6.0, -3.0));
    }

    #[test]
    fn test_vec2_length() {
        let v = v2(3.0, 4.0);
        assert_eq!(v.length_squared(), fx(25.0));
        assert_eq!(v.length(), fx(5.0));
        assert_eq!(FixedVec2::ZERO.distance_squared(v), fx(25.0));
        assert_eq!(FixedVec2::ZERO.distance(v), fx(5.0));
    }

    #[test]
    fn test_vec2_normalize() {
        let norm = v2(3.0, 4.0).normalize();
        assert!((norm.length() - FixedPoint::ONE).raw().abs() < 4, "Normalized length should be ~1.0");
        assert_eq!(FixedVec2::ZERO.normalize(), FixedVec2::ZERO);
    }

    #[test]
    fn test_vec2_dot_cross() {
        assert_eq!(v2(2.0, 3.0).dot(v2(4.0, 5.0)), fx(23.0));
        assert_eq!(FixedVec2::RIGHT.cross(FixedVec2::UP), FixedPoint::ONE);
        assert_eq!(FixedVec2::UP.cross(FixedVec2::RIGHT), -FixedPoint::ONE);
    }

    #[test]
    fn test_vec2_angle() {
        let right_angle = FixedVec2::RIGHT.angle(FixedVec2::UP);
        assert!((right_angle - FixedPoint::HALF_PI).raw().abs() <= 2);
        let opposite = FixedVec2::RIGHT.angle(FixedVec2::LEFT);
        assert!((opposite - FixedPoint::PI).raw().abs() <= 2);
    }

    #[test]
    fn test_vec2_min_max_clamp() {
        let a = v2(1.0, 5.0);
        let b = v2(3.0, -2.0);
        assert_eq!(a.min(b), v2(1.0, -2.0));
        assert_eq!(a.max(b), v2(3.0, 5.0));
        assert_eq!(v2(100.0, -100.0).clamp(fx(-50.0), fx(50.0)), v2(50.0, -50.0));
    }

    #[test]
    fn test_vec2_clamp_length() {
        let clamped = v2(6.0, 8.0).clamp_length(fx(5.0));
        assert_eq!(clamped, v2(3.0, 4.0));
        let short = v2(0.3, 0.4);
        assert_eq!(short.clamp_length(fx(5.0)), short);
    }

    #[test]
    fn test_vec2_lerp() {
        let a = v2(0.0, 10.0);
        let b = v2(10.0, 20.0);
        assert_eq!(a.lerp(b, FixedPoint::HALF), v2(5.0, 15.0));
        assert_eq!(a.lerp_clamped(b, fx(3.0)), b);
    }

    #[test]
    fn test_vec2_perpendicular() {
        assert_eq!(FixedVec2::RIGHT.perpendicular(), FixedVec2::UP);
        assert_eq!(v2(2.0, 3.0).perpendicular().dot(v2(2.0, 3.0)), FixedPoint::ZERO);
    }

    #[test]
    fn test_vec2_display() {
        assert_eq!(v2(1.5, -2.0).to_string(), "1.500000,-2.000000");
    }

    #[test]
    fn test_vec2_determinism() {
        let a = FixedVec2::new(FixedPoint::from_raw(12_345_678), FixedPoint::from_raw(87_654_321));
        let b = FixedVec2::new(FixedPoint::from_raw(11_111_111), FixedPoint::from_raw(22_222_222));

        for _ in 0..1000 {
            assert_eq!(a + b, a + b);
            assert_eq!(a.length(), a.length());
        }
    }
}
