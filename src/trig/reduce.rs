//! Quadrant reduction for the sine table.
//!
//! The sine table only covers `[0, π/2]`. Any other angle is folded onto
//! it with two flags:
//!
//! ```text
//!   quadrant │ angle range    │ flip_horizontal │ flip_vertical
//!   ─────────┼────────────────┼─────────────────┼──────────────
//!       I    │ [0, π/2)       │      no         │     no
//!       II   │ [π/2, π)       │      yes        │     no
//!       III  │ [π, 3π/2)      │      no         │     yes
//!       IV   │ [3π/2, 2π)     │      yes        │     yes
//! ```
//!
//! `flip_horizontal` means "read the table mirrored" (sin(π - x) = sin x),
//! `flip_vertical` means "negate the sample" (sin(x + π) = -sin x).
//! All bounds use the sampled constants `PI`, `HALF_PI` and `TWO_PI`.

use crate::fixed::FixedPoint;

/// An angle folded into the first quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantIndex {
    /// Offset into the quadrant, in `[0, HALF_PI]` raw units.
    pub index: i64,
    /// Second or fourth quadrant: read the table at `len - 1 - index`.
    pub flip_horizontal: bool,
    /// Lower half of the cycle: negate the looked-up value.
    pub flip_vertical: bool,
}

/// Fold a raw angle (radians) into a first-quadrant table index.
///
/// Angles outside `[0, 2π)` are reduced modulo `TWO_PI` first, with
/// negative angles wrapped into the positive range.
pub fn clamp_sin_value(radians: i64) -> QuadrantIndex {
    let pi = FixedPoint::PI.raw();
    let half_pi = FixedPoint::HALF_PI.raw();

    let mut clamped = radians.rem_euclid(FixedPoint::TWO_PI.raw());

    let flip_vertical = clamped >= pi;
    if flip_vertical {
        clamped -= pi;
    }

    let flip_horizontal = clamped >= half_pi;
    if flip_horizontal {
        clamped -= half_pi;
    }

    QuadrantIndex {
        index: clamped,
        flip_horizontal,
        flip_vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_PI: i64 = FixedPoint::HALF_PI.raw();
    const PI: i64 = FixedPoint::PI.raw();
    const TWO_PI: i64 = FixedPoint::TWO_PI.raw();

    #[test]
    fn test_first_quadrant_passthrough() {
        let q = clamp_sin_value(1000);
        assert_eq!(q, QuadrantIndex { index: 1000, flip_horizontal: false, flip_vertical: false });
        assert_eq!(clamp_sin_value(0).index, 0);
    }

    #[test]
    fn test_quadrant_flags() {
        let second = clamp_sin_value(HALF_PI + 10);
        assert!(second.flip_horizontal && !second.flip_vertical);
        assert_eq!(second.index, 10);

        let third = clamp_sin_value(PI + 10);
        assert!(!third.flip_horizontal && third.flip_vertical);
        assert_eq!(third.index, 10);

        let fourth = clamp_sin_value(PI + HALF_PI + 10);
        assert!(fourth.flip_horizontal && fourth.flip_vertical);
        assert_eq!(fourth.index, 10);
    }

    #[test]
    fn test_full_period_reduction() {
        assert_eq!(clamp_sin_value(TWO_PI + 1000), clamp_sin_value(1000));
        assert_eq!(clamp_sin_value(5 * TWO_PI + PI + 7), clamp_sin_value(PI + 7));
    }

    #[test]
    fn test_negative_angles_wrap() {
        // -10 ≡ 2π - 10: fourth quadrant
        let q = clamp_sin_value(-10);
        assert!(q.flip_horizontal && q.flip_vertical);
        assert_eq!(q, clamp_sin_value(TWO_PI - 10));
    }

    #[test]
    fn test_index_stays_in_quadrant() {
        for raw in [i64::MIN, i64::MAX, -1, PI - 1, TWO_PI - 1, 123_456_789] {
            let q = clamp_sin_value(raw);
            assert!((0..=HALF_PI).contains(&q.index), "raw {raw} -> {}", q.index);
        }
    }
}
