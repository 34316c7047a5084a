//! Table-driven trigonometry.
//!
//! ## Pipeline
//!
//! ```text
//!   angle (raw radians)
//!     │
//!     ▼  reduce::clamp_sin_value   mod 2π, fold into [0, π/2] + flags
//!   QuadrantIndex
//!     │
//!     ▼  table lookup               mirror if flip_horizontal, clamp index
//!   sample
//!     │
//!     ▼  sign                       negate if flip_vertical
//!   sin(angle)
//! ```
//!
//! Everything else derives from that lookup or from the inverse tables:
//! `cos(x) = sin(x + π/2)`, `tan = sin/cos`, `cot = cos/sin`,
//! `acos = π/2 - asin`, `acot = π/2 - atan`. Ratios go through the
//! ordinary fixed-point division, so values at the asymptotes are large
//! and finite rather than errors.

mod data;
pub mod reduce;
pub mod table;

pub use reduce::{clamp_sin_value, QuadrantIndex};
pub use table::{install, tables, TableError, TableKind, TrigTables};

use crate::fixed::{raw_div, FixedPoint};

/// Sine of an angle in radians.
pub fn sin(angle: FixedPoint) -> FixedPoint {
    sin_raw(angle.raw())
}

fn sin_raw(radians: i64) -> FixedPoint {
    let quadrant = clamp_sin_value(radians);
    let samples = tables().sin();
    let last = samples.len() as i64 - 1;

    let index = quadrant.index.clamp(0, last);
    // The mirror is `last - index`, one step short of the exact
    // `(PI - HALF_PI) - index`, so sin(PI - x) reads the sample for x - 1.
    let index = if quadrant.flip_horizontal { last - index } else { index };
    let value = samples[index as usize];

    #[cfg(feature = "debug-tracing")]
    tracing::trace!(radians, index, ?quadrant, value, "sin lookup");

    FixedPoint::from_raw(if quadrant.flip_vertical { -value } else { value })
}

/// Cosine of an angle in radians, as a quarter-period shift of [`sin`].
///
/// The angle is reduced before the shift so it cannot wrap near the
/// ends of the `i64` range.
pub fn cos(angle: FixedPoint) -> FixedPoint {
    let reduced = angle.raw().rem_euclid(FixedPoint::TWO_PI.raw());
    sin_raw(reduced + FixedPoint::HALF_PI.raw())
}

/// `sin / cos`. Near ±π/2 the divisor can reach zero and the result
/// falls back to the division's large finite value.
pub fn tan(angle: FixedPoint) -> FixedPoint {
    sin(angle) / cos(angle)
}

/// `cos / sin`. Same asymptote behaviour as [`tan`] near multiples of π.
pub fn cot(angle: FixedPoint) -> FixedPoint {
    cos(angle) / sin(angle)
}

/// Arcsine in `[-π/2, π/2]`. Inputs outside `[-1, 1]` are clamped.
pub fn asin(value: FixedPoint) -> FixedPoint {
    let samples = tables().asin();
    let magnitude = value.raw().unsigned_abs().min(FixedPoint::ONE.raw() as u64);
    let angle = samples[magnitude as usize];
    FixedPoint::from_raw(if value.raw() < 0 { -angle } else { angle })
}

/// Arccosine in `[0, π]`. Inputs outside `[-1, 1]` are clamped.
pub fn acos(value: FixedPoint) -> FixedPoint {
    FixedPoint::HALF_PI - asin(value)
}

/// Arctangent in `(-π/2, π/2)`.
///
/// The table covers `[0, 1]`; larger magnitudes use
/// `atan(x) = π/2 - atan(1/x)`.
pub fn atan(value: FixedPoint) -> FixedPoint {
    let samples = tables().atan();
    let one = FixedPoint::ONE.raw();
    let magnitude = value.raw().unsigned_abs().min(i64::MAX as u64) as i64;

    let angle = if magnitude <= one {
        samples[magnitude as usize]
    } else {
        let reciprocal = raw_div(one, magnitude);
        FixedPoint::HALF_PI.raw() - samples[reciprocal as usize]
    };

    FixedPoint::from_raw(if value.raw() < 0 { -angle } else { angle })
}

/// Arccotangent in `(0, π)`: `π/2 - atan(x)`.
pub fn acot(value: FixedPoint) -> FixedPoint {
    FixedPoint::HALF_PI - atan(value)
}

/// Degrees to radians: `degrees / RAD_TO_DEG`.
#[inline]
pub fn deg_to_rad(degrees: FixedPoint) -> FixedPoint {
    degrees / FixedPoint::RAD_TO_DEG
}

/// Radians to degrees: `radians / DEG_TO_RAD`.
///
/// `DEG_TO_RAD` is raw 1143, whose truncation puts `PI` at about
/// 180.13 degrees. The bits are part of the determinism contract.
#[inline]
pub fn rad_to_deg(radians: FixedPoint) -> FixedPoint {
    radians / FixedPoint::DEG_TO_RAD
}

impl FixedPoint {
    /// See [`sin`].
    #[inline]
    pub fn sin(self) -> Self {
        sin(self)
    }

    /// See [`cos`].
    #[inline]
    pub fn cos(self) -> Self {
        cos(self)
    }

    /// See [`tan`].
    #[inline]
    pub fn tan(self) -> Self {
        tan(self)
    }

    /// See [`cot`].
    #[inline]
    pub fn cot(self) -> Self {
        cot(self)
    }

    /// See [`asin`].
    #[inline]
    pub fn asin(self) -> Self {
        asin(self)
    }

    /// See [`acos`].
    #[inline]
    pub fn acos(self) -> Self {
        acos(self)
    }

    /// See [`atan`].
    #[inline]
    pub fn atan(self) -> Self {
        atan(self)
    }

    /// See [`acot`].
    #[inline]
    pub fn acot(self) -> Self {
        acot(self)
    }

    /// See [`deg_to_rad`].
    #[inline]
    pub fn deg_to_rad(self) -> Self {
        deg_to_rad(self)
    }

    /// See [`rad_to_deg`].
    #[inline]
    pub fn rad_to_deg(self) -> Self {
        rad_to_deg(self)
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

    fn assert_close(got: FixedPoint, expected: f64, what: &str) {
        let diff = (got.to_f64() - expected).abs();
        assert!(diff < TOLERANCE, "{what}: got {}, expected {expected}", got.to_f64());
    }

    #[test]
    fn test_sin_key_angles() {
        assert_eq!(sin(FixedPoint::ZERO), FixedPoint::ZERO);
        assert_eq!(sin(FixedPoint::HALF_PI), FixedPoint::ONE);
        assert_eq!(sin(FixedPoint::PI), FixedPoint::ZERO);
        assert!(sin(-FixedPoint::HALF_PI).raw() <= -65535);
    }

    #[test]
    fn test_sin_matches_reference() {
        let mut x = -20.0;
        while x <= 20.0 {
            let angle = fx(x);
            assert_close(sin(angle), angle.to_f64().sin(), &format!("sin({x})"));
            x += 0.0173;
        }
    }

    #[test]
    fn test_sin_signs_by_quadrant() {
        assert!(sin(fx(0.5)) > FixedPoint::ZERO);
        assert!(sin(fx(2.5)) > FixedPoint::ZERO);
        assert!(sin(fx(3.7)) < FixedPoint::ZERO);
        assert!(sin(fx(5.5)) < FixedPoint::ZERO);
        assert!(sin(fx(-0.5)) < FixedPoint::ZERO);
    }

    #[test]
    fn test_sin_is_odd_and_symmetric() {
        for &x in &[0.1, 0.7, 1.2, 2.9] {
            let a = sin(fx(x));
            let b = sin(fx(-x));
            assert!((a + b).raw().abs() <= 2, "sin({x}) + sin(-{x}) = {}", (a + b).raw());
        }
        // sin(π - x) ≈ sin(x)
        let x = fx(0.4);
        let mirrored = sin(FixedPoint::PI - x);
        assert!((mirrored - sin(x)).raw().abs() <= 2);
    }

    #[test]
    fn test_sin_mirror_is_one_step_coarse() {
        for &x in &[1i64, 2, 500, 26_214, 51_471, 100_000, 102_942] {
            let mirrored = sin(FixedPoint::from_raw(FixedPoint::PI.raw() - x));
            assert_eq!(mirrored, sin(FixedPoint::from_raw(x - 1)), "x = {x}");
        }
    }

    #[test]
    fn test_cos_matches_reference() {
        assert_eq!(cos(FixedPoint::ZERO), FixedPoint::ONE);
        let mut x = -20.0;
        while x <= 20.0 {
            let angle = fx(x);
            assert_close(cos(angle), angle.to_f64().cos(), &format!("cos({x})"));
            x += 0.0191;
        }
    }

    #[test]
    fn test_cos_extreme_angles_do_not_panic() {
        let _ = cos(FixedPoint::POSITIVE_INFINITY);
        let _ = cos(FixedPoint::NEGATIVE_INFINITY);
        let _ = sin(FixedPoint::NEGATIVE_INFINITY);
    }

    #[test]
    fn test_pythagorean_identity() {
        for &x in &[0.0, 0.3, 1.1, 2.0, 3.0, 4.4, -1.7] {
            let s = sin(fx(x));
            let c = cos(fx(x));
            let sum = s * s + c * c;
            assert!((sum - FixedPoint::ONE).raw().abs() <= 16, "x = {x}: {}", sum.raw());
        }
    }

    #[test]
    fn test_tan_cot() {
        assert_close(tan(fx(std::f64::consts::FRAC_PI_4)), 1.0, "tan(π/4)");
        assert_close(tan(fx(0.3)), 0.3f64.tan(), "tan(0.3)");
        assert_close(cot(fx(0.9)), 1.0 / 0.9f64.tan(), "cot(0.9)");
        assert_close(tan(fx(-1.0)), (-1.0f64).tan(), "tan(-1)");
    }

    #[test]
    fn test_tan_at_asymptote_is_finite() {
        // cos(HALF_PI) samples as zero: division falls back, no panic
        let t = tan(FixedPoint::HALF_PI);
        assert!(t.raw().abs() > FixedPoint::from_int(1000).raw());
        let c = cot(FixedPoint::ZERO);
        assert!(c.raw() > FixedPoint::from_int(1000).raw());
    }

    #[test]
    fn test_asin_acos() {
        assert_eq!(asin(FixedPoint::ZERO), FixedPoint::ZERO);
        assert_eq!(asin(FixedPoint::ONE), FixedPoint::HALF_PI);
        assert_eq!(asin(-FixedPoint::ONE), -FixedPoint::HALF_PI);
        assert_eq!(acos(FixedPoint::ONE), FixedPoint::ZERO);
        for &x in &[-0.99, -0.5, -0.1, 0.25, 0.5, 0.8660254, 0.999] {
            assert_close(asin(fx(x)), fx(x).to_f64().asin(), &format!("asin({x})"));
            assert_close(acos(fx(x)), fx(x).to_f64().acos(), &format!("acos({x})"));
        }
    }

    #[test]
    fn test_asin_clamps_domain() {
        assert_eq!(asin(fx(3.0)), asin(FixedPoint::ONE));
        assert_eq!(asin(fx(-3.0)), asin(-FixedPoint::ONE));
        assert_eq!(asin(FixedPoint::NEGATIVE_INFINITY), -FixedPoint::HALF_PI);
    }

    #[test]
    fn test_atan_acot() {
        assert_eq!(atan(FixedPoint::ZERO), FixedPoint::ZERO);
        for &x in &[-50.0, -3.0, -1.0, -0.2, 0.4, 1.0, 1.5, 10.0, 1000.0] {
            assert_close(atan(fx(x)), x.atan(), &format!("atan({x})"));
            assert_close(acot(fx(x)), std::f64::consts::FRAC_PI_2 - x.atan(), &format!("acot({x})"));
        }
    }

    #[test]
    fn test_atan_extremes() {
        let big = atan(FixedPoint::MAX);
        assert!((big - FixedPoint::HALF_PI).raw().abs() <= 1);
        let small = atan(FixedPoint::NEGATIVE_INFINITY);
        assert!((small + FixedPoint::HALF_PI).raw().abs() <= 1);
    }

    #[test]
    fn test_degree_conversion() {
        assert_close(deg_to_rad(FixedPoint::from_int(180)), std::f64::consts::PI, "180°");
        assert_close(rad_to_deg(FixedPoint::HALF_PI / 100), 0.9, "π/200 rad");
        assert_close(FixedPoint::from_int(90).deg_to_rad(), std::f64::consts::FRAC_PI_2, "90°");
    }

    #[test]
    fn test_rad_to_deg_divides_by_deg_to_rad() {
        assert_eq!(rad_to_deg(FixedPoint::PI).raw(), 11_804_908);
        assert_eq!(FixedPoint::PI.rad_to_deg(), FixedPoint::PI / FixedPoint::DEG_TO_RAD);
        assert_eq!(rad_to_deg(FixedPoint::ZERO), FixedPoint::ZERO);
    }

    #[test]
    fn test_method_forms() {
        let x = fx(0.6);
        assert_eq!(x.sin(), sin(x));
        assert_eq!(x.cos(), cos(x));
        assert_eq!(x.tan(), tan(x));
        assert_eq!(x.cot(), cot(x));
        assert_eq!(x.asin(), asin(x));
        assert_eq!(x.acos(), acos(x));
        assert_eq!(x.atan(), atan(x));
        assert_eq!(x.acot(), acot(x));
    }
}
