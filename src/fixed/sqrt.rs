//! Integer square root on the raw fixed-point domain.
//!
//! The root of a raw value `r` is the integer square root of `r << 16`:
//! scaling the target by one extra factor of 65536 keeps the result in
//! Q47.16. Refinement is Newton-Raphson, `res = (res + y / res) >> 1`,
//! stopping once two successive iterates differ by at most one raw unit.
//!
//! Non-positive inputs return zero instead of signalling an error; this
//! keeps the hot path free of error handling.

use super::point::{FixedPoint, FRACTION_BITS};

/// Square root of a raw value with the default seed `raw >> 1`.
///
/// Returns 0 for `raw <= 0`, and for raw 1 whose seed is already 0.
/// Values above [`FixedPoint::MAX`] are treated as `MAX` so the
/// rescaled target cannot wrap negative.
#[inline]
pub fn sqrt_raw(raw: i64) -> i64 {
    if raw <= 0 {
        return 0;
    }

    let raw = raw.min(FixedPoint::MAX.raw());
    let seed = raw >> 1;
    if seed == 0 {
        return 0;
    }

    newton(raw << FRACTION_BITS, seed).0
}

/// Square root with a caller-supplied initial guess.
///
/// A good seed (for example the previous frame's length) cuts the
/// iteration count. Non-positive seeds are raised to 1.
#[inline]
pub fn sqrt_raw_with_seed(raw: i64, seed: i64) -> i64 {
    sqrt_raw_counted(raw, seed).0
}

/// Square root with a caller-supplied seed, also returning the number of
/// Newton iterations performed. Intended for profiling seeds.
pub fn sqrt_raw_counted(raw: i64, seed: i64) -> (i64, u32) {
    if raw <= 0 {
        return (0, 0);
    }

    let raw = raw.min(FixedPoint::MAX.raw());
    newton(raw << FRACTION_BITS, seed.max(1))
}

fn newton(target: i64, seed: i64) -> (i64, u32) {
    let mut res = seed;
    let mut iterations = 0u32;

    loop {
        iterations += 1;
        let last = res;
        res = res.wrapping_add(target / res) >> 1;

        if (-1..=1).contains(&(last - res)) {
            break;
        }
    }

    #[cfg(feature = "debug-tracing")]
    tracing::trace!(target_raw = target, root = res, iterations, "sqrt converged");

    (res, iterations)
}

impl FixedPoint {
    /// Square root. Zero for non-positive values.
    ///
    /// Values above [`FixedPoint::MAX`], including `POSITIVE_INFINITY`,
    /// are clamped to `MAX` first, so they all return `MAX.sqrt()`.
    /// Use [`FixedPoint::checked_sqrt`] to have them reported as overflow.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_raw(sqrt_raw(self.raw()))
    }

    /// Square root seeded with a known approximation of the result.
    #[inline]
    pub fn sqrt_with_seed(self, seed: Self) -> Self {
        Self::from_raw(sqrt_raw_with_seed(self.raw(), seed.raw()))
    }

    /// `1 / sqrt(x)`. For non-positive `x` the zero root hits the
    /// divide-by-zero fallback and yields `ONE << 16`.
    #[inline]
    pub fn inv_sqrt(self) -> Self {
        Self::ONE / self.sqrt()
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
    fn test_sqrt_exact_squares() {
        assert_eq!(fx(4.0).sqrt(), fx(2.0));
        assert_eq!(FixedPoint::ONE.sqrt(), FixedPoint::ONE);
        assert_eq!(fx(0.25).sqrt(), fx(0.5));
        assert_eq!(fx(10000.0).sqrt(), fx(100.0));
    }

    #[test]
    fn test_sqrt_non_positive_is_zero() {
        assert_eq!(sqrt_raw(0), 0);
        assert_eq!(sqrt_raw(-65536), 0);
        assert_eq!(FixedPoint::NEGATIVE_INFINITY.sqrt(), FixedPoint::ZERO);
        assert_eq!(sqrt_raw_counted(-5, 100), (0, 0));
    }

    #[test]
    fn test_sqrt_tiny_seed_zero() {
        // raw 1 >> 1 == 0: returns zero without dividing
        assert_eq!(sqrt_raw(1), 0);
        // raw 2 iterates from seed 1 towards sqrt(131072) ≈ 362
        let r = sqrt_raw(2);
        assert!((361..=363).contains(&r), "got {r}");
    }

    #[test]
    fn test_sqrt_accuracy() {
        for &v in &[2.0, 3.0, 0.5, 123.456, 99999.0, 0.001] {
            let got = fx(v).sqrt().to_f64();
            let expected = fx(v).to_f64().sqrt();
            assert!((got - expected).abs() < 3.0 / 65536.0, "sqrt({v}) = {got}, expected {expected}");
        }
    }

    #[test]
    fn test_sqrt_max_does_not_wrap() {
        let root = FixedPoint::MAX.sqrt();
        assert!(root > FixedPoint::ZERO);
        // Anything above MAX behaves like MAX
        assert_eq!(FixedPoint::POSITIVE_INFINITY.sqrt(), root);
        assert_eq!(FixedPoint::from_raw(FixedPoint::MAX.raw() + 1).sqrt(), root);
    }

    #[test]
    fn test_seeded_sqrt_matches_default() {
        let v = fx(50.0);
        let default = v.sqrt();
        let seeded = v.sqrt_with_seed(fx(7.0));
        assert!((default.raw() - seeded.raw()).abs() <= 1);
    }

    #[test]
    fn test_good_seed_needs_fewer_iterations() {
        let raw = fx(50.0).raw();
        let (_, cold) = sqrt_raw_counted(raw, raw >> 1);
        let (_, warm) = sqrt_raw_counted(raw, fx(7.07).raw());
        assert!(warm < cold, "warm {warm} should beat cold {cold}");
        assert!(warm >= 1);
    }

    #[test]
    fn test_zero_seed_is_raised() {
        let (root, iterations) = sqrt_raw_counted(fx(9.0).raw(), 0);
        assert!((root - fx(3.0).raw()).abs() <= 1);
        assert!(iterations > 1);
    }

    #[test]
    fn test_inv_sqrt() {
        assert_eq!(fx(4.0).inv_sqrt(), fx(0.5));
        assert_eq!(FixedPoint::ZERO.inv_sqrt(), FixedPoint::from_raw(65536 << 16));
    }

    #[test]
    fn test_sqrt_determinism() {
        let a = 12_345_678_i64;
        for _ in 0..1000 {
            assert_eq!(sqrt_raw(a), sqrt_raw(a), "Square root must be deterministic");
        }
    }
}
