//! Fixed-Point Quaternion
//!
//! Unit quaternions for deterministic 3D rotation. Components are stored
//! `x, y, z` (vector part) then `w` (scalar part).
//!
//! ```text
//!   from_angle_axis(θ, n)  =  (n·sin(θ/2), cos(θ/2))
//!   rotate(v)              =  q · (v, 0) · q*
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::FixedVec3;
use crate::fixed::FixedPoint;

/// Rotation quaternion with fixed-point components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedQuat {
    /// Vector part, X
    pub x: FixedPoint,
    /// Vector part, Y
    pub y: FixedPoint,
    /// Vector part, Z
    pub z: FixedPoint,
    /// Scalar part
    pub w: FixedPoint,
}

impl FixedQuat {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ONE);

    /// Create from raw components.
    #[inline]
    pub const fn new(x: FixedPoint, y: FixedPoint, z: FixedPoint, w: FixedPoint) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized
    /// first; a zero axis yields a pure-scalar quaternion.
    pub fn from_angle_axis(angle: FixedPoint, axis: FixedVec3) -> Self {
        let half = angle / 2;
        let v = axis.normalize() * half.sin();
        Self::new(v.x, v.y, v.z, half.cos())
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    ///
    /// Parallel directions give IDENTITY. Opposite directions turn half
    /// a revolution about an arbitrary perpendicular axis.
    pub fn from_to_rotation(from: FixedVec3, to: FixedVec3) -> Self {
        let from = from.normalize();
        let to = to.normalize();

        let cos_theta = from.dot(to);
        let mut axis = from.cross(to);
        if axis.length_squared() == FixedPoint::ZERO {
            if cos_theta >= FixedPoint::ZERO {
                return Self::IDENTITY;
            }
            axis = from.any_perpendicular();
        }

        Self::from_angle_axis(cos_theta.acos(), axis)
    }

    /// Vector part as a [`FixedVec3`].
    #[inline]
    pub fn vector(self) -> FixedVec3 {
        FixedVec3::new(self.x, self.y, self.z)
    }

    /// Negated vector part. Equals the inverse for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> FixedPoint {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared norm.
    #[inline]
    pub fn magnitude_squared(self) -> FixedPoint {
        self.dot(self)
    }

    /// Norm.
    #[inline]
    pub fn magnitude(self) -> FixedPoint {
        self.magnitude_squared().sqrt()
    }

    /// Scaled to unit norm. A zero quaternion normalizes to IDENTITY.
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len == FixedPoint::ZERO {
            return Self::IDENTITY;
        }
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Multiplicative inverse: the conjugate over the squared norm.
    pub fn inverse(self) -> Self {
        let norm_squared = self.magnitude_squared();
        let conjugate = self.conjugate();
        if norm_squared == FixedPoint::ONE {
            return conjugate;
        }
        Self::new(
            conjugate.x / norm_squared,
            conjugate.y / norm_squared,
            conjugate.z / norm_squared,
            conjugate.w / norm_squared,
        )
    }

    /// Angle in radians between two rotations, `[0, π]`.
    ///
    /// `q` and `-q` encode the same rotation, so the scalar part of the
    /// difference is taken by magnitude.
    pub fn angle(self, other: Self) -> FixedPoint {
        let difference = self.inverse() * other;
        difference.w.abs().acos() * 2
    }

    /// Decompose into `(angle, axis)`. The axis is ZERO for IDENTITY.
    pub fn to_angle_axis(self) -> (FixedPoint, FixedVec3) {
        (self.w.acos() * 2, self.vector().normalize())
    }

    /// Rotate a vector: `q · (v, 0) · q*`.
    #[inline]
    pub fn rotate(self, v: FixedVec3) -> FixedVec3 {
        let pure = Self::new(v.x, v.y, v.z, FixedPoint::ZERO);
        (self * pure * self.conjugate()).vector()
    }
}

impl Default for FixedQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for FixedQuat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = self;
        let b = rhs;
        Self::new(
            a.w * b.x + b.w * a.x + a.y * b.z - b.y * a.z,
            a.w * b.y + b.w * a.y + a.z * b.x - b.z * a.x,
            a.w * b.z + b.w * a.z + a.x * b.y - b.x * a.y,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl Mul<FixedVec3> for FixedQuat {
    type Output = FixedVec3;
    #[inline]
    fn mul(self, rhs: FixedVec3) -> FixedVec3 {
        self.rotate(rhs)
    }
}

impl Mul<FixedPoint> for FixedQuat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: FixedPoint) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Add for FixedQuat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for FixedQuat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for FixedQuat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Debug for FixedQuat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quat({:.4}, {:.4}, {:.4}, {:.4})",
            self.x.to_f64(),
            self.y.to_f64(),
            self.z.to_f64(),
            self.w.to_f64()
        )
    }
}

impl fmt::Display for FixedQuat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 2e-3;

    fn fx(v: f64) -> FixedPoint {
        FixedPoint::from_f64(v)
    }

    fn assert_vec_close(actual: FixedVec3, expected: FixedVec3) {
        let (ax, ay, az) = actual.to_f64s();
        let (ex, ey, ez) = expected.to_f64s();
        assert!(
            (ax - ex).abs() <= TOLERANCE && (ay - ey).abs() <= TOLERANCE && (az - ez).abs() <= TOLERANCE,
            "{actual:?} != {expected:?}"
        );
    }

    fn assert_quat_close(actual: FixedQuat, expected: FixedQuat) {
        let diff = actual - expected;
        for c in [diff.x, diff.y, diff.z, diff.w] {
            assert!(c.to_f64().abs() <= TOLERANCE, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_identity_rotation_is_exact() {
        let v = FixedVec3::new(fx(1.5), fx(-2.25), fx(3.0));
        assert_eq!(FixedQuat::IDENTITY * v, v);
        assert_eq!(FixedQuat::IDENTITY * FixedQuat::IDENTITY, FixedQuat::IDENTITY);
        assert_eq!(FixedQuat::default(), FixedQuat::IDENTITY);
    }

    #[test]
    fn test_quarter_turns() {
        let about_y = FixedQuat::from_angle_axis(FixedPoint::HALF_PI, FixedVec3::UP);
        assert_vec_close(about_y * FixedVec3::RIGHT, FixedVec3::BACK);

        let about_z = FixedQuat::from_angle_axis(FixedPoint::HALF_PI, FixedVec3::FORWARD);
        assert_vec_close(about_z * FixedVec3::RIGHT, FixedVec3::UP);

        let about_x = FixedQuat::from_angle_axis(FixedPoint::HALF_PI, FixedVec3::RIGHT);
        assert_vec_close(about_x * FixedVec3::UP, FixedVec3::FORWARD);
    }

    #[test]
    fn test_axis_is_normalized() {
        let unit = FixedQuat::from_angle_axis(fx(0.7), FixedVec3::UP);
        let long = FixedQuat::from_angle_axis(fx(0.7), FixedVec3::UP * fx(5.0));
        assert_eq!(unit, long);
        assert!((unit.magnitude() - FixedPoint::ONE).raw().abs() <= 8);
    }

    #[test]
    fn test_hamilton_product_composes() {
        let eighth = FixedQuat::from_angle_axis(FixedPoint::HALF_PI / 2, FixedVec3::FORWARD);
        let quarter = FixedQuat::from_angle_axis(FixedPoint::HALF_PI, FixedVec3::FORWARD);
        assert_quat_close(eighth * eighth, quarter);
    }

    #[test]
    fn test_conjugate_and_inverse() {
        let q = FixedQuat::from_angle_axis(fx(1.2), FixedVec3::new(fx(1.0), fx(2.0), fx(-1.0)));
        let c = q.conjugate();
        assert_eq!((c.x, c.y, c.z, c.w), (-q.x, -q.y, -q.z, q.w));

        assert_quat_close(q * q.inverse(), FixedQuat::IDENTITY);

        let scaled = q * fx(2.0);
        assert_quat_close(scaled * scaled.inverse(), FixedQuat::IDENTITY);
    }

    #[test]
    fn test_dot_and_normalized() {
        assert_eq!(FixedQuat::IDENTITY.dot(FixedQuat::IDENTITY), FixedPoint::ONE);
        assert_eq!(FixedQuat::IDENTITY.dot(-FixedQuat::IDENTITY), -FixedPoint::ONE);

        let q = FixedQuat::new(fx(0.0), fx(3.0), fx(0.0), fx(4.0)).normalized();
        assert_eq!(q, FixedQuat::new(fx(0.0), fx(0.6), fx(0.0), fx(0.8)));

        let zero = FixedQuat::new(FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ZERO);
        assert_eq!(zero.normalized(), FixedQuat::IDENTITY);
    }

    #[test]
    fn test_angle_between_rotations() {
        let q = FixedQuat::from_angle_axis(FixedPoint::HALF_PI, FixedVec3::UP);
        let angle = FixedQuat::IDENTITY.angle(q);
        assert!((angle.to_f64() - std::f64::consts::FRAC_PI_2).abs() < TOLERANCE);
        assert_eq!(FixedQuat::IDENTITY.angle(FixedQuat::IDENTITY), FixedPoint::ZERO);

        // acos is steep near 1: a one-ulp scalar error costs about 0.01 rad
        assert!(q.angle(q).to_f64() < 0.02);

        // q and -q are the same rotation
        assert_eq!(q.angle(-q), q.angle(q));
    }

    #[test]
    fn test_to_angle_axis() {
        let q = FixedQuat::from_angle_axis(FixedPoint::ONE, FixedVec3::UP);
        let (angle, axis) = q.to_angle_axis();
        assert!((angle.to_f64() - 1.0).abs() < TOLERANCE);
        assert_vec_close(axis, FixedVec3::UP);

        let (angle, axis) = FixedQuat::IDENTITY.to_angle_axis();
        assert_eq!(angle, FixedPoint::ZERO);
        assert_eq!(axis, FixedVec3::ZERO);
    }

    #[test]
    fn test_from_to_rotation() {
        let q = FixedQuat::from_to_rotation(FixedVec3::RIGHT, FixedVec3::UP);
        assert_vec_close(q * FixedVec3::RIGHT, FixedVec3::UP);

        let diagonal = FixedVec3::new(fx(1.0), fx(1.0), fx(1.0));
        let q = FixedQuat::from_to_rotation(FixedVec3::FORWARD, diagonal);
        assert_vec_close(q * FixedVec3::FORWARD, diagonal.normalize());
    }

    #[test]
    fn test_from_to_rotation_degenerate() {
        let same = FixedQuat::from_to_rotation(FixedVec3::UP, FixedVec3::UP * fx(2.0));
        assert_eq!(same, FixedQuat::IDENTITY);

        let opposite = FixedQuat::from_to_rotation(FixedVec3::RIGHT, FixedVec3::LEFT);
        assert_vec_close(opposite * FixedVec3::RIGHT, FixedVec3::LEFT);
    }

    #[test]
    fn test_quat_serde_shape() {
        let json = serde_json::to_string(&FixedQuat::IDENTITY).unwrap();
        assert_eq!(json, r#"{"x":0,"y":0,"z":0,"w":65536}"#);
    }

    #[test]
    fn test_rotation_determinism() {
        let q = FixedQuat::from_angle_axis(fx(0.37), FixedVec3::new(fx(0.2), fx(-1.0), fx(0.5)));
        let v = FixedVec3::from_ints(3, -7, 11);
        let first = q * v;

        for _ in 0..1000 {
            assert_eq!(q * v, first);
        }
    }
}
