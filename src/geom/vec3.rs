//! Fixed-Point 3D Vector
//!
//! Same conventions as [`FixedVec2`](super::FixedVec2): right-handed axes,
//! `+Y` up, `+Z` forward. All operations are composed from
//! [`FixedPoint`] operators and the table-driven trig.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::FixedQuat;
use crate::fixed::FixedPoint;

/// 3D vector with fixed-point components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec3 {
    /// X component
    pub x: FixedPoint,
    /// Y component
    pub y: FixedPoint,
    /// Z component
    pub z: FixedPoint,
}

const NEG_ONE: FixedPoint = FixedPoint::from_raw(-FixedPoint::ONE.raw());

impl FixedVec3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ZERO);

    /// (1, 1, 1)
    pub const ONE: Self = Self::new(FixedPoint::ONE, FixedPoint::ONE, FixedPoint::ONE);

    /// +X
    pub const RIGHT: Self = Self::new(FixedPoint::ONE, FixedPoint::ZERO, FixedPoint::ZERO);

    /// -X
    pub const LEFT: Self = Self::new(NEG_ONE, FixedPoint::ZERO, FixedPoint::ZERO);

    /// +Y
    pub const UP: Self = Self::new(FixedPoint::ZERO, FixedPoint::ONE, FixedPoint::ZERO);

    /// -Y
    pub const DOWN: Self = Self::new(FixedPoint::ZERO, NEG_ONE, FixedPoint::ZERO);

    /// +Z
    pub const FORWARD: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ONE);

    /// -Z
    pub const BACK: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO, NEG_ONE);

    /// Cosine distance from 1 below which two directions count as parallel.
    const PARALLEL_THRESHOLD: FixedPoint = FixedPoint::EN3;

    /// Create a new vector from fixed-point components.
    #[inline]
    pub const fn new(x: FixedPoint, y: FixedPoint, z: FixedPoint) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from integer components.
    #[inline]
    pub const fn from_ints(x: i64, y: i64, z: i64) -> Self {
        Self::new(FixedPoint::from_int(x), FixedPoint::from_int(y), FixedPoint::from_int(z))
    }

    /// Scale by a fixed-point scalar.
    #[inline]
    pub fn scale(self, scalar: FixedPoint) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Component-wise product.
    #[inline]
    pub fn scale_by(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divide every component by a scalar.
    #[inline]
    pub fn div_scalar(self, scalar: FixedPoint) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> FixedPoint {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> FixedPoint {
        self.length_squared().sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> FixedPoint {
        (self - other).length_squared()
    }

    /// Distance to another point.
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
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unsigned angle between two vectors in radians, `[0, π]`.
    pub fn angle(self, other: Self) -> FixedPoint {
        let denominator = self.length() * other.length();
        (self.dot(other) / denominator).acos()
    }

    /// Mirror `self` about the plane with unit normal `normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.scale(self.dot(normal) * 2)
    }

    /// Component of `self` along the unit vector `normal`.
    #[inline]
    pub fn project(self, normal: Self) -> Self {
        normal.scale(self.dot(normal))
    }

    /// Component of `self` in the plane with unit normal `normal`.
    #[inline]
    pub fn project_on_plane(self, normal: Self) -> Self {
        self - self.project(normal)
    }

    /// Shorten to `max_length` if longer. Direction is preserved.
    pub fn clamp_magnitude(self, max_length: FixedPoint) -> Self {
        let len = self.length();
        if len > max_length {
            self.div_scalar(len / max_length)
        } else {
            self
        }
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            FixedPoint::min(self.x, other.x),
            FixedPoint::min(self.y, other.y),
            FixedPoint::min(self.z, other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            FixedPoint::max(self.x, other.x),
            FixedPoint::max(self.y, other.y),
            FixedPoint::max(self.z, other.z),
        )
    }

    /// Linear interpolation; `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: FixedPoint) -> Self {
        Self::new(
            FixedPoint::lerp(self.x, other.x, t),
            FixedPoint::lerp(self.y, other.y, t),
            FixedPoint::lerp(self.z, other.z, t),
        )
    }

    /// [`Self::lerp`] with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp_clamped(self, other: Self, t: FixedPoint) -> Self {
        self.lerp(other, t.clamp(FixedPoint::ZERO, FixedPoint::ONE))
    }

    /// Spherical interpolation.
    ///
    /// Rotates the direction of `self` toward `other` by `t` of the angle
    /// between them while the length is interpolated linearly. Nearly
    /// parallel inputs fall back to [`Self::lerp`]; opposite inputs
    /// rotate about an arbitrary perpendicular axis.
    pub fn slerp(self, other: Self, t: FixedPoint) -> Self {
        let from = self.normalize();
        let to = other.normalize();

        let cos_theta = from.dot(to);
        if FixedPoint::ONE - cos_theta <= Self::PARALLEL_THRESHOLD {
            return self.lerp(other, t);
        }

        let angle = cos_theta.acos();
        let mut axis = from.cross(to);
        if axis.length_squared() == FixedPoint::ZERO {
            axis = from.any_perpendicular();
        }

        let rotated = FixedQuat::from_angle_axis(angle * t, axis) * from;
        let length = FixedPoint::lerp(self.length(), other.length(), t);
        rotated.scale(length)
    }

    /// Some unit vector perpendicular to `self`. ZERO for a zero vector.
    pub fn any_perpendicular(self) -> Self {
        let candidate = self.cross(Self::RIGHT);
        if candidate.length_squared() != FixedPoint::ZERO {
            return candidate.normalize();
        }
        self.cross(Self::UP).normalize()
    }

    /// Lossless float view, for display.
    #[inline]
    pub fn to_f64s(self) -> (f64, f64, f64) {
        (self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }
}

impl Add for FixedVec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for FixedVec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for FixedVec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<FixedPoint> for FixedVec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: FixedPoint) -> Self {
        self.scale(rhs)
    }
}

impl Mul<FixedVec3> for FixedPoint {
    type Output = FixedVec3;
    #[inline]
    fn mul(self, rhs: FixedVec3) -> FixedVec3 {
        rhs.scale(self)
    }
}

impl Div<FixedPoint> for FixedVec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: FixedPoint) -> Self {
        self.div_scalar(rhs)
    }
}

impl fmt::Debug for FixedVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy, fz) = self.to_f64s();
        write!(f, "Vec3({:.3}, {:.3}, {:.3})", fx, fy, fz)
    }
}

impl fmt::Display for FixedVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
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

    fn v3(x: f64, y: f64, z: f64) -> FixedVec3 {
        FixedVec3::new(fx(x), fx(y), fx(z))
    }

    fn assert_close(actual: FixedVec3, expected: (f64, f64, f64), tolerance: f64) {
        let (ax, ay, az) = actual.to_f64s();
        assert!(
            (ax - expected.0).abs() <= tolerance
                && (ay - expected.1).abs() <= tolerance
                && (az - expected.2).abs() <= tolerance,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_vec3_axes() {
        assert_eq!(FixedVec3::RIGHT.cross(FixedVec3::UP), FixedVec3::FORWARD);
        assert_eq!(FixedVec3::UP.cross(FixedVec3::FORWARD), FixedVec3::RIGHT);
        assert_eq!(FixedVec3::FORWARD.cross(FixedVec3::RIGHT), FixedVec3::UP);
        assert_eq!(-FixedVec3::FORWARD, FixedVec3::BACK);
        assert_eq!(FixedVec3::LEFT + FixedVec3::RIGHT, FixedVec3::ZERO);
    }

    #[test]
    fn test_vec3_arithmetic() {
        assert_eq!(v3(1.0, 2.0, 3.0) + v3(4.0, 5.0, 6.0), v3(5.0, 7.0, 9.0));
        assert_eq!(v3(1.0, 2.0, 3.0) - v3(4.0, 5.0, 6.0), v3(-3.0, -3.0, -3.0));
        assert_eq!(v3(1.0, 2.0, 3.0) * fx(2.0), v3(2.0, 4.0, 6.0));
        assert_eq!(fx(0.5) * v3(2.0, 4.0, 6.0), v3(1.0, 2.0, 3.0));
        assert_eq!(v3(2.0, 4.0, 6.0) / fx(2.0), v3(1.0, 2.0, 3.0));
        assert_eq!(v3(1.0, 2.0, 3.0).scale_by(v3(2.0, 0.5, -1.0)), v3(2.0, 1.0, -3.0));
    }

    #[test]
    fn test_vec3_length_and_distance() {
        let v = v3(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), fx(49.0));
        assert_eq!(v.length(), fx(7.0));
        assert_eq!(FixedVec3::ZERO.distance(v), fx(7.0));
        assert_eq!(v.distance_squared(v), FixedPoint::ZERO);
    }

    #[test]
    fn test_vec3_normalize() {
        let n = v3(2.0, 3.0, 6.0).normalize();
        assert!((n.length() - FixedPoint::ONE).raw().abs() < 4);
        assert_eq!(FixedVec3::ZERO.normalize(), FixedVec3::ZERO);
    }

    #[test]
    fn test_vec3_angle() {
        let right_angle = FixedVec3::RIGHT.angle(FixedVec3::FORWARD);
        assert!((right_angle - FixedPoint::HALF_PI).raw().abs() <= 2);
        assert_eq!(FixedVec3::UP.angle(FixedVec3::UP * fx(3.0)), FixedPoint::ZERO);
    }

    #[test]
    fn test_vec3_reflect() {
        assert_eq!(v3(1.0, -1.0, 0.0).reflect(FixedVec3::UP), v3(1.0, 1.0, 0.0));
        assert_eq!(v3(2.0, 0.0, -3.0).reflect(FixedVec3::BACK), v3(2.0, 0.0, 3.0));
    }

    #[test]
    fn test_vec3_project() {
        let v = v3(3.0, 4.0, 5.0);
        assert_eq!(v.project(FixedVec3::UP), v3(0.0, 4.0, 0.0));
        assert_eq!(v.project_on_plane(FixedVec3::UP), v3(3.0, 0.0, 5.0));
        assert_eq!(v.project(FixedVec3::UP) + v.project_on_plane(FixedVec3::UP), v);
    }

    #[test]
    fn test_vec3_clamp_magnitude() {
        assert_eq!(v3(4.0, 6.0, 12.0).clamp_magnitude(fx(7.0)), v3(2.0, 3.0, 6.0));
        let short = v3(0.1, 0.1, 0.1);
        assert_eq!(short.clamp_magnitude(FixedPoint::ONE), short);
    }

    #[test]
    fn test_vec3_min_max_lerp() {
        let a = v3(1.0, 5.0, -2.0);
        let b = v3(3.0, -2.0, 0.0);
        assert_eq!(a.min(b), v3(1.0, -2.0, -2.0));
        assert_eq!(a.max(b), v3(3.0, 5.0, 0.0));
        assert_eq!(a.lerp(b, FixedPoint::HALF), v3(2.0, 1.5, -1.0));
        assert_eq!(a.lerp_clamped(b, fx(-4.0)), a);
    }

    #[test]
    fn test_vec3_slerp_quarter_turn() {
        let halfway = FixedVec3::RIGHT.slerp(FixedVec3::UP, FixedPoint::HALF);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(halfway, (s, s, 0.0), 2e-3);

        let end = FixedVec3::RIGHT.slerp(FixedVec3::UP, FixedPoint::ONE);
        assert_close(end, (0.0, 1.0, 0.0), 2e-3);
    }

    #[test]
    fn test_vec3_slerp_interpolates_length() {
        let halfway = FixedVec3::RIGHT.slerp(FixedVec3::UP * fx(3.0), FixedPoint::HALF);
        assert!((halfway.length().to_f64() - 2.0).abs() < 4e-3);
    }

    #[test]
    fn test_vec3_slerp_parallel_is_lerp() {
        let a = v3(0.0, 0.0, 2.0);
        let b = v3(0.0, 0.0, 4.0);
        assert_eq!(a.slerp(b, FixedPoint::HALF), v3(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_vec3_slerp_opposite() {
        let halfway = FixedVec3::RIGHT.slerp(FixedVec3::LEFT, FixedPoint::HALF);
        // Any direction perpendicular to X is acceptable
        assert!(halfway.x.raw().abs() < 128);
        assert!((halfway.length().to_f64() - 1.0).abs() < 4e-3);
    }

    #[test]
    fn test_vec3_any_perpendicular() {
        for v in [FixedVec3::RIGHT, FixedVec3::UP, v3(1.0, 2.0, 3.0)] {
            let p = v.any_perpendicular();
            assert!(v.dot(p).raw().abs() <= 4);
            assert!((p.length() - FixedPoint::ONE).raw().abs() <= 4);
        }
        assert_eq!(FixedVec3::ZERO.any_perpendicular(), FixedVec3::ZERO);
    }

    #[test]
    fn test_vec3_determinism() {
        let a = FixedVec3::new(
            FixedPoint::from_raw(12_345_678),
            FixedPoint::from_raw(-87_654_321),
            FixedPoint::from_raw(3_141_592),
        );
        let b = FixedVec3::from_ints(7, -3, 11);

        for _ in 0..1000 {
            assert_eq!(a.cross(b), a.cross(b));
            assert_eq!(a.slerp(b, FixedPoint::EN1), a.slerp(b, FixedPoint::EN1));
        }
    }
}
