//! Arithmetic on raw values.
//!
//! Every operator here acts purely on the underlying `i64`. There is no
//! NaN/Inf propagation and no panicking path:
//!
//! - add/sub/neg wrap on overflow (two's complement)
//! - multiply splits each operand into integer and fractional parts so the
//!   dominant term never needs a 128-bit intermediate
//! - a zero divisor is replaced by raw `1`
//!
//! For hot loops the same algorithms are exposed on bare `i64` as
//! [`raw_mul`] and [`raw_div`].

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::point::{FixedPoint, FRACTION_BITS, FRACTION_FACTOR};

// =============================================================================
// RAW OPERATIONS (All deterministic, wrapping semantics)
// =============================================================================

/// Multiply two raw fixed-point values.
///
/// With `a = i1*F + f1` and `b = i2*F + f2` the exact product over `F` is
/// `a*i2 + i1*f2 + f1*f2/F`. Only the last term is truncated, so the result
/// is at most one unit in the last place away from the true product.
///
/// # Determinism
/// - Wrapping arithmetic, no 128-bit intermediate
/// - `f1*f2/F` truncates toward zero
#[inline]
pub fn raw_mul(a: i64, b: i64) -> i64 {
    let f1 = a % FRACTION_FACTOR;
    let f2 = b % FRACTION_FACTOR;
    let i1 = (a - f1) >> FRACTION_BITS;
    let i2 = (b - f2) >> FRACTION_BITS;

    a.wrapping_mul(i2)
        .wrapping_add(i1.wrapping_mul(f2))
        .wrapping_add((f1 * f2) / FRACTION_FACTOR)
}

/// Divide two raw fixed-point values.
///
/// Pre-shifts the numerator by 16 bits. A zero divisor is replaced by `1`,
/// so `raw_div(a, 0) == a << 16`.
///
/// # Determinism
/// - Truncates toward zero
/// - Divide-by-zero returns a large finite quotient (not panic)
#[inline]
pub fn raw_div(a: i64, b: i64) -> i64 {
    let divisor = if b == 0 { 1 } else { b };
    (a << FRACTION_BITS).wrapping_div(divisor)
}

// =============================================================================
// OPERATOR OVERLOADS
// =============================================================================

impl Add for FixedPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_add(rhs.raw()))
    }
}

impl Sub for FixedPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_sub(rhs.raw()))
    }
}

impl Mul for FixedPoint {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(raw_mul(self.raw(), rhs.raw()))
    }
}

impl Div for FixedPoint {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_raw(raw_div(self.raw(), rhs.raw()))
    }
}

impl Neg for FixedPoint {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(self.raw().wrapping_neg())
    }
}

/// Integer scaling: raw * n, no rescale.
impl Mul<i64> for FixedPoint {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::from_raw(self.raw().wrapping_mul(rhs))
    }
}

impl Mul<FixedPoint> for i64 {
    type Output = FixedPoint;
    #[inline]
    fn mul(self, rhs: FixedPoint) -> FixedPoint {
        rhs * self
    }
}

/// Integer division: raw / n. Zero is replaced by `1` like the fixed divisor.
impl Div<i64> for FixedPoint {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i64) -> Self {
        let divisor = if rhs == 0 { 1 } else { rhs };
        Self::from_raw(self.raw().wrapping_div(divisor))
    }
}

impl AddAssign for FixedPoint {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedPoint {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FixedPoint {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for FixedPoint {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// =============================================================================
// HELPERS
// =============================================================================

impl FixedPoint {
    /// Smaller of two values (`a` on ties).
    #[inline]
    pub fn min(a: Self, b: Self) -> Self {
        if a <= b { a } else { b }
    }

    /// Larger of two values (`b` on ties).
    #[inline]
    pub fn max(a: Self, b: Self) -> Self {
        if a > b { a } else { b }
    }

    /// Clamp to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        Self::max(lo, Self::min(hi, self))
    }

    /// Linear interpolation: `a + (b - a) * t`. `t` is not clamped.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: Self) -> Self {
        a + (b - a) * t
    }

    /// [`Self::lerp`] with `t` clamped to `[0, 1]` first.
    #[inline]
    pub fn lerp_clamped(a: Self, b: Self, t: Self) -> Self {
        Self::lerp(a, b, t.clamp(Self::ZERO, Self::ONE))
    }

    /// Round toward negative infinity.
    ///
    /// `integer_part` truncates toward zero, so negative values with a
    /// non-zero fraction step down by one.
    #[inline]
    pub fn floor(self) -> i64 {
        if self.raw() >= 0 {
            return self.integer_part();
        }

        let (integer, fraction) = self.integer_and_fraction();
        if fraction != 0 {
            integer - 1
        } else {
            integer
        }
    }

    /// Wrap `t` into `[0, length)` for positive `length`:
    /// `t - length * floor(t / length)`.
    #[inline]
    pub fn repeat(t: Self, length: Self) -> Self {
        t - length * (t / length).floor()
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

    #[test]
    fn test_add_sub_exact() {
        let a = fx(3.25);
        let b = fx(-1.125);
        assert_eq!((a + b).raw(), a.raw() + b.raw());
        assert_eq!((a - b).raw(), a.raw() - b.raw());
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        let sum = FixedPoint::POSITIVE_INFINITY + FixedPoint::EPSILON;
        assert_eq!(sum, FixedPoint::NEGATIVE_INFINITY);
    }

    #[test]
    fn test_point_one_plus_point_two() {
        // 6553 + 13107 = 19660, and 0.3 truncates to 19660 as well
        let sum = fx(0.1) + fx(0.2);
        assert_eq!(sum.raw(), 19660);
        assert_eq!(sum, fx(0.3));
    }

    #[test]
    fn test_mul() {
        assert_eq!(fx(2.0) * fx(3.0), fx(6.0));
        assert_eq!(FixedPoint::HALF * FixedPoint::HALF, fx(0.25));
        assert_eq!(fx(-2.0) * fx(3.0), fx(-6.0));
        assert_eq!(fx(-1.5) * fx(-1.5), fx(2.25));
        assert_eq!(fx(1.5) * FixedPoint::ZERO, FixedPoint::ZERO);
    }

    #[test]
    fn test_mul_error_bound() {
        let samples = [0.1, 0.3, -0.7, 1.9, -12.345, 100.001, 0.00003];
        for &a in &samples {
            for &b in &samples {
                let fa = fx(a);
                let fb = fx(b);
                let exact = (fa.raw() as i128 * fb.raw() as i128) / 65536;
                let got = (fa * fb).raw() as i128;
                assert!((got - exact).abs() <= 1, "{a} * {b}: {got} vs {exact}");
            }
        }
    }

    #[test]
    fn test_div() {
        assert_eq!(fx(6.0) / fx(2.0), fx(3.0));
        assert_eq!(FixedPoint::ONE / fx(4.0), fx(0.25));
        assert_eq!(fx(10.0) / fx(4.0), fx(2.5));
        assert_eq!(fx(-9.0) / fx(3.0), fx(-3.0));
    }

    #[test]
    fn test_div_by_zero_substitutes_one() {
        let a = fx(1.5);
        let q = a / FixedPoint::ZERO;
        assert_eq!(q, FixedPoint::from_raw(a.raw() << 16));
        assert!(!q.is_infinite());
        assert_eq!(raw_div(7, 0), 7 << 16);
    }

    #[test]
    fn test_int_scaling() {
        assert_eq!(fx(1.5) * 4, fx(6.0));
        assert_eq!(3 * fx(0.5), fx(1.5));
        assert_eq!(fx(7.0) / 2, fx(3.5));
        assert_eq!(fx(7.0) / 0, fx(7.0));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = fx(1.0);
        v += fx(2.0);
        v *= fx(3.0);
        v -= fx(1.0);
        v /= fx(4.0);
        assert_eq!(v, fx(2.0));
    }

    #[test]
    fn test_comparisons() {
        let a = fx(1.0);
        let b = fx(1.0) + FixedPoint::EPSILON;
        assert!(a < b);
        assert!(b >= a);
        assert!(a != b);
        assert_eq!(a, fx(1.0));
    }

    #[test]
    fn test_min_max_clamp() {
        let a = fx(-3.0);
        let b = fx(2.0);
        assert_eq!(FixedPoint::min(a, b), a);
        assert_eq!(FixedPoint::max(a, b), b);
        assert_eq!(fx(5.0).clamp(a, b), b);
        assert_eq!(fx(-5.0).clamp(a, b), a);
        assert_eq!(fx(0.5).clamp(a, b), fx(0.5));
    }

    #[test]
    fn test_lerp() {
        let a = fx(10.0);
        let b = fx(20.0);
        assert_eq!(FixedPoint::lerp(a, b, FixedPoint::HALF), fx(15.0));
        // Unclamped extrapolates
        assert_eq!(FixedPoint::lerp(a, b, fx(2.0)), fx(30.0));
        assert_eq!(FixedPoint::lerp_clamped(a, b, fx(2.0)), b);
        assert_eq!(FixedPoint::lerp_clamped(a, b, fx(-1.0)), a);
    }

    #[test]
    fn test_floor() {
        assert_eq!(fx(-0.5).floor(), -1);
        assert_eq!(fx(0.5).floor(), 0);
        assert_eq!(fx(-2.0).floor(), -2);
        assert_eq!(fx(-2.25).floor(), -3);
        assert_eq!(fx(7.99).floor(), 7);
        assert_eq!(FixedPoint::ZERO.floor(), 0);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(FixedPoint::repeat(fx(7.5), fx(2.0)), fx(1.5));
        assert_eq!(FixedPoint::repeat(fx(-0.5), fx(2.0)), fx(1.5));
        assert_eq!(FixedPoint::repeat(fx(4.0), fx(2.0)), FixedPoint::ZERO);
    }

    #[test]
    fn test_raw_ops_determinism() {
        for _ in 0..1000 {
            let a = 12_345_678_i64;
            let b = 87_654_321_i64;
            assert_eq!(raw_mul(a, b), raw_mul(a, b), "Multiplication must be deterministic");
            assert_eq!(raw_div(a, b), raw_div(a, b), "Division must be deterministic");
        }
    }
}
