//! Q47.16 Fixed-Point Representation
//!
//! The binary layout, named constants, constructors and conversions of
//! [`FixedPoint`]. Arithmetic lives in [`super::ops`].
//!
//! ## Format: Q47.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q47.16 (64-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIII ... 47 bits ... IIIIIIII][FFFFFFFFFFFFFFFF]   │
//! │   │  └─────────── integer ───────────┘└── 16 bits frac ──┘  │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Usable range: ±2147483647.99998 (MAX / MIN)                │
//! │  Precision: 1/65536 ≈ 0.000015                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! `MAX` and `MIN` stop 16 bits short of the `i64` range so that the
//! `<< 16` performed by division and square root cannot lose bits for
//! in-range values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of fractional bits (16)
pub const FRACTION_BITS: u32 = 16;

/// 1.0 as a raw value (65536)
pub const FRACTION_FACTOR: i64 = 1 << FRACTION_BITS;

/// Signed Q47.16 fixed-point number.
///
/// Equality and ordering are exact comparisons of the raw value; there is
/// no epsilon tolerance inside the type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedPoint(i64);

// =============================================================================
// CONSTANTS (All as raw literals - NO float conversion!)
// =============================================================================

impl FixedPoint {
    /// 0.0
    pub const ZERO: Self = Self(0);

    /// 1.0 = 65536
    pub const ONE: Self = Self(FRACTION_FACTOR);

    /// 0.5 = 32768
    pub const HALF: Self = Self(FRACTION_FACTOR / 2);

    /// Smallest representable step (raw 1)
    pub const EPSILON: Self = Self(1);

    /// Largest value with 16 bits of headroom for rescaling
    pub const MAX: Self = Self(0x0000_7fff_ffff_ffff);

    /// Negation of [`Self::MAX`]
    pub const MIN: Self = Self(-0x0000_7fff_ffff_ffff);

    /// Sentinel for positive overflow (`i64::MAX`). Compares like any other value.
    pub const POSITIVE_INFINITY: Self = Self(i64::MAX);

    /// Sentinel for negative overflow (`i64::MIN`). Compares like any other value.
    pub const NEGATIVE_INFINITY: Self = Self(i64::MIN);

    /// π sampled at 1/65536: 205887
    pub const PI: Self = Self(0x3243f);

    /// π/2 as used by the trig tables: PI.raw / 2 = 102943
    pub const HALF_PI: Self = Self(0x3243f / 2);

    /// 2π as used by angle reduction: PI.raw * 2 = 411774
    pub const TWO_PI: Self = Self(0x3243f * 2);

    /// e sampled at 1/65536: 178145
    pub const E: Self = Self(0x2b7e1);

    /// π/180 sampled at 1/65536: 1143
    pub const DEG_TO_RAD: Self = Self(0x477);

    /// 180/π sampled at 1/65536: 3754943
    pub const RAD_TO_DEG: Self = Self(0x394bbf);

    /// 0.1 (raw 6553)
    pub const EN1: Self = Self(FRACTION_FACTOR / 10);

    /// 0.01 (raw 655)
    pub const EN2: Self = Self(FRACTION_FACTOR / 100);

    /// 0.001 (raw 65)
    pub const EN3: Self = Self(FRACTION_FACTOR / 1_000);

    /// 0.0001 (raw 6)
    pub const EN4: Self = Self(FRACTION_FACTOR / 10_000);

    /// 0.00001, below the resolution of the format: raw 0
    pub const EN5: Self = Self(FRACTION_FACTOR / 100_000);
}

// =============================================================================
// CONSTRUCTION & CONVERSION
// =============================================================================

impl FixedPoint {
    /// Create from a raw bit pattern. No rescaling.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw bit pattern.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Create from an integer: raw = n * 65536 (wrapping).
    #[inline]
    pub const fn from_int(n: i64) -> Self {
        Self(n.wrapping_mul(FRACTION_FACTOR))
    }

    /// Create from an integer part and a raw fractional part.
    #[inline]
    pub const fn from_components(integer: i64, fraction: i64) -> Self {
        Self(integer.wrapping_mul(FRACTION_FACTOR).wrapping_add(fraction))
    }

    /// Create from a double, truncating toward zero.
    ///
    /// Truncation is part of the contract: precomputed tables and
    /// constants were sampled the same way, so `0.99998` maps to raw
    /// 65534 rather than rounding up. Out-of-range inputs saturate and NaN
    /// maps to zero.
    ///
    /// # Example
    /// ```
    /// use fixmath::FixedPoint;
    /// assert_eq!(FixedPoint::from_f64(2.5).raw(), 163840);
    /// assert_eq!(FixedPoint::from_f64(-0.5).raw(), -32768);
    /// ```
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * FRACTION_FACTOR as f64) as i64)
    }

    /// Create from a float, truncating toward zero.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value * FRACTION_FACTOR as f32) as i64)
    }

    /// Integer part, truncated toward zero.
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / FRACTION_FACTOR
    }

    /// Raw fractional part. Carries the sign of the value, so it is
    /// negative for negative non-integers.
    #[inline]
    pub const fn fraction_part(self) -> i64 {
        self.0 % FRACTION_FACTOR
    }

    /// Integer and fractional parts in one step.
    #[inline]
    pub const fn integer_and_fraction(self) -> (i64, i64) {
        let fraction = self.0 % FRACTION_FACTOR;
        ((self.0 - fraction) >> FRACTION_BITS, fraction)
    }

    /// Convert to double for display/rendering.
    ///
    /// # Warning
    /// Only use for visual output. NEVER feed the result back into
    /// simulation state.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.integer_part() as f64 + self.fraction_part() as f64 / FRACTION_FACTOR as f64
    }

    /// Convert to float for display/rendering.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.integer_part() as f32 + self.fraction_part() as f32 / FRACTION_FACTOR as f32
    }

    /// True for either sentinel infinity.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 == i64::MAX || self.0 == i64::MIN
    }

    /// True for [`Self::POSITIVE_INFINITY`].
    #[inline]
    pub const fn is_positive_infinity(self) -> bool {
        self.0 == i64::MAX
    }

    /// True for [`Self::NEGATIVE_INFINITY`].
    #[inline]
    pub const fn is_negative_infinity(self) -> bool {
        self.0 == i64::MIN
    }

    /// -1, 0 or 1.
    #[inline]
    pub const fn sign(self) -> i32 {
        if self.0 == 0 {
            0
        } else if self.0 < 0 {
            -1
        } else {
            1
        }
    }

    /// Absolute value. `i64::MIN` stays `i64::MIN`.
    #[inline]
    pub const fn abs(self) -> Self {
        if self.0 >= 0 {
            self
        } else {
            Self(self.0.wrapping_neg())
        }
    }
}

impl From<i32> for FixedPoint {
    #[inline]
    fn from(n: i32) -> Self {
        Self::from_int(n as i64)
    }
}

impl From<i64> for FixedPoint {
    #[inline]
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<f32> for FixedPoint {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<f64> for FixedPoint {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint({:.6} raw={})", self.to_f64(), self.0)
    }
}

/// Six decimals, like C's `%f`. Diagnostics only; not meant to be parsed.
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(FixedPoint::ONE.raw(), 65536);
        assert_eq!(FixedPoint::HALF.raw(), 32768);
        assert_eq!(FixedPoint::EPSILON.raw(), 1);
        assert_eq!(FixedPoint::MIN.raw(), -FixedPoint::MAX.raw());
        assert_eq!(FixedPoint::PI.raw(), 205887);
        assert_eq!(FixedPoint::HALF_PI.raw(), 102943);
        assert_eq!(FixedPoint::TWO_PI.raw(), 411774);
        assert_eq!(FixedPoint::E.raw(), 178145);
        assert_eq!(FixedPoint::DEG_TO_RAD.raw(), 1143);
        assert_eq!(FixedPoint::RAD_TO_DEG.raw(), 3754943);
        assert_eq!(FixedPoint::EN1.raw(), 6553);
        assert_eq!(FixedPoint::EN4.raw(), 6);
        assert_eq!(FixedPoint::EN5.raw(), 0);
    }

    #[test]
    fn test_constants_match_real_values() {
        assert!((FixedPoint::PI.to_f64() - std::f64::consts::PI).abs() < 1.0 / 65536.0);
        assert!((FixedPoint::E.to_f64() - std::f64::consts::E).abs() < 1.0 / 65536.0);
        assert!((FixedPoint::RAD_TO_DEG.to_f64() - 180.0 / std::f64::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(FixedPoint::from_int(3).raw(), 3 * 65536);
        assert_eq!(FixedPoint::from_int(-2).raw(), -2 * 65536);
        assert_eq!(FixedPoint::from(7i32), FixedPoint::from_int(7));
    }

    #[test]
    fn test_from_f64_truncates() {
        assert_eq!(FixedPoint::from_f64(1.0), FixedPoint::ONE);
        assert_eq!(FixedPoint::from_f64(0.5), FixedPoint::HALF);
        // 0.99998 * 65536 = 65534.69 -> 65534, not 65535
        assert_eq!(FixedPoint::from_f64(0.99998).raw(), 65534);
        // Toward zero for negatives as well
        assert_eq!(FixedPoint::from_f64(-0.99998).raw(), -65534);
        assert_eq!(FixedPoint::from_f64(3.1415926), FixedPoint::PI);
    }

    #[test]
    fn test_from_f32() {
        assert_eq!(FixedPoint::from_f32(0.25).raw(), 16384);
        assert_eq!(FixedPoint::from(-1.5f32).raw(), -98304);
    }

    #[test]
    fn test_parts() {
        let v = FixedPoint::from_f64(-2.25);
        assert_eq!(v.integer_part(), -2);
        assert_eq!(v.fraction_part(), -16384);
        assert_eq!(v.integer_and_fraction(), (-2, -16384));

        let w = FixedPoint::from_components(5, 32768);
        assert_eq!(w, FixedPoint::from_f64(5.5));
    }

    #[test]
    fn test_to_float() {
        assert_eq!(FixedPoint::from_f64(-2.25).to_f64(), -2.25);
        assert_eq!(FixedPoint::from_f64(10.5).to_f32(), 10.5);
        assert_eq!(FixedPoint::from_raw(1).to_f64(), 1.0 / 65536.0);
    }

    #[test]
    fn test_infinity_sentinels() {
        assert!(FixedPoint::POSITIVE_INFINITY.is_infinite());
        assert!(FixedPoint::NEGATIVE_INFINITY.is_infinite());
        assert!(FixedPoint::POSITIVE_INFINITY.is_positive_infinity());
        assert!(!FixedPoint::POSITIVE_INFINITY.is_negative_infinity());
        assert!(!FixedPoint::MAX.is_infinite());
        // Ordinary values under raw comparison
        assert!(FixedPoint::POSITIVE_INFINITY > FixedPoint::MAX);
        assert!(FixedPoint::NEGATIVE_INFINITY < FixedPoint::MIN);
    }

    #[test]
    fn test_sign_and_abs() {
        assert_eq!(FixedPoint::from_f64(-0.1).sign(), -1);
        assert_eq!(FixedPoint::ZERO.sign(), 0);
        assert_eq!(FixedPoint::EPSILON.sign(), 1);
        assert_eq!(FixedPoint::from_int(-4).abs(), FixedPoint::from_int(4));
        assert_eq!(FixedPoint::NEGATIVE_INFINITY.abs(), FixedPoint::NEGATIVE_INFINITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(FixedPoint::from_f64(1.5).to_string(), "1.500000");
        assert_eq!(FixedPoint::from_f64(-0.5).to_string(), "-0.500000");
        assert_eq!(FixedPoint::from_int(42).to_string(), "42.000000");
        assert_eq!(format!("{:?}", FixedPoint::HALF), "FixedPoint(0.500000 raw=32768)");
    }

    #[test]
    fn test_serde_transparent() {
        let v = FixedPoint::from_f64(2.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "163840");
        let back: FixedPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
