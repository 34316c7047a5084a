//! Property tests for the fixed-point number type and trig engine.

use fixmath::FixedPoint;
use proptest::prelude::*;

const ONE: i64 = 65536;
const TRIG_TOLERANCE: f64 = 2e-3;

// =============================================================================
// REPRESENTATION
// =============================================================================

proptest! {
    #[test]
    fn prop_raw_round_trip(raw in any::<i64>()) {
        prop_assert_eq!(FixedPoint::from_raw(raw).raw(), raw);
    }

    #[test]
    fn prop_float_quantization_bound(d in -1.0e9..1.0e9f64) {
        let back = FixedPoint::from_f64(d).to_f64();
        prop_assert!((back - d).abs() < 1.0 / 65536.0, "{} -> {}", d, back);
    }

    #[test]
    fn prop_integer_and_fraction_recombine(raw in -(1i64 << 46)..(1i64 << 46)) {
        let x = FixedPoint::from_raw(raw);
        let (integer, fraction) = x.integer_and_fraction();
        prop_assert_eq!(FixedPoint::from_components(integer, fraction), x);
        prop_assert!(fraction.abs() < ONE);
    }
}

// =============================================================================
// ARITHMETIC
// =============================================================================

proptest! {
    #[test]
    fn prop_add_sub_inverse(a in any::<i64>(), b in any::<i64>()) {
        let a = FixedPoint::from_raw(a);
        let b = FixedPoint::from_raw(b);
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!((a - b) + b, a);
    }

    #[test]
    fn prop_reciprocal_within_one_ulp(raw in 1i64..=ONE, negative in any::<bool>()) {
        let a = FixedPoint::from_raw(if negative { -raw } else { raw });
        let product = a * (FixedPoint::ONE / a);
        prop_assert!((product - FixedPoint::ONE).raw().abs() <= 1, "a = {}: {}", a.raw(), product.raw());
    }

    #[test]
    fn prop_div_by_zero_shifts(raw in any::<i64>()) {
        let a = FixedPoint::from_raw(raw);
        prop_assert_eq!(a / FixedPoint::ZERO, FixedPoint::from_raw(raw << 16));
    }

    #[test]
    fn prop_mul_commutes(a in -(1i64 << 40)..(1i64 << 40), b in -(1i64 << 20)..(1i64 << 20)) {
        let a = FixedPoint::from_raw(a);
        let b = FixedPoint::from_raw(b);
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn prop_floor_matches_f64(raw in -(1i64 << 46)..(1i64 << 46)) {
        let x = FixedPoint::from_raw(raw);
        prop_assert_eq!(x.floor() as f64, x.to_f64().floor());
    }

    #[test]
    fn prop_repeat_wraps_into_range(t in 0i64..(1i64 << 40), length in 1i64..(1i64 << 30)) {
        let length = FixedPoint::from_raw(length);
        let wrapped = FixedPoint::repeat(FixedPoint::from_raw(t), length);
        prop_assert!(wrapped >= FixedPoint::ZERO && wrapped < length, "{} mod {} = {}", t, length.raw(), wrapped.raw());
    }
}

#[test]
fn test_pinned_regressions() {
    let sum = FixedPoint::from_f64(0.1) + FixedPoint::from_f64(0.2);
    assert_eq!(sum.raw(), 19660);
    assert_eq!(sum, FixedPoint::from_f64(0.3));

    assert_eq!(FixedPoint::from_f64(-0.5).floor(), -1);
    assert_eq!(FixedPoint::from_f64(0.5).floor(), 0);
    assert_eq!(
        FixedPoint::repeat(FixedPoint::from_f64(7.5), FixedPoint::from_f64(2.0)),
        FixedPoint::from_f64(1.5)
    );
}

// =============================================================================
// SQUARE ROOT
// =============================================================================

proptest! {
    #[test]
    fn prop_sqrt_squares_back(raw in 0i64..=(4 * ONE)) {
        let a = FixedPoint::from_raw(raw);
        let root = a.sqrt();
        prop_assert!((root * root - a).raw().abs() <= 8, "sqrt({})^2 = {}", raw, (root * root).raw());
    }

    #[test]
    fn prop_sqrt_non_positive_is_zero(raw in i64::MIN..=0) {
        prop_assert_eq!(FixedPoint::from_raw(raw).sqrt(), FixedPoint::ZERO);
    }

    #[test]
    fn prop_sqrt_tracks_f64(raw in 2i64..(1i64 << 46)) {
        let a = FixedPoint::from_raw(raw);
        let expected = a.to_f64().sqrt();
        prop_assert!((a.sqrt().to_f64() - expected).abs() < 3.0 / 65536.0);
    }
}

// =============================================================================
// TRIGONOMETRY
// =============================================================================

proptest! {
    #[test]
    fn prop_sin_cos_bounded(raw in any::<i64>()) {
        let x = FixedPoint::from_raw(raw);
        prop_assert!(x.sin().raw().abs() <= ONE);
        prop_assert!(x.cos().raw().abs() <= ONE);
    }

    #[test]
    fn prop_sin_cos_match_f64(x in -20.0..20.0f64) {
        let angle = FixedPoint::from_f64(x);
        let reference = angle.to_f64();
        prop_assert!((angle.sin().to_f64() - reference.sin()).abs() < TRIG_TOLERANCE);
        prop_assert!((angle.cos().to_f64() - reference.cos()).abs() < TRIG_TOLERANCE);
    }

    #[test]
    fn prop_inverse_trig_match_f64(x in -1.0..=1.0f64) {
        let value = FixedPoint::from_f64(x);
        let reference = value.to_f64();
        prop_assert!((value.asin().to_f64() - reference.asin()).abs() < TRIG_TOLERANCE);
        prop_assert!((value.acos().to_f64() - reference.acos()).abs() < TRIG_TOLERANCE);
    }

    #[test]
    fn prop_atan_acot_match_f64(x in -1.0e4..1.0e4f64) {
        let value = FixedPoint::from_f64(x);
        let reference = value.to_f64().atan();
        prop_assert!((value.atan().to_f64() - reference).abs() < TRIG_TOLERANCE);
        prop_assert!((value.acot().to_f64() - (std::f64::consts::FRAC_PI_2 - reference)).abs() < TRIG_TOLERANCE);
    }
}
