//! Opt-in checked arithmetic.
//!
//! The operators on [`FixedPoint`] never fail: they wrap, substitute a
//! divisor of one, or floor square roots at zero. Callers that would
//! rather detect those cases use the `checked_*` methods here, which run
//! the same algorithms and report the condition instead.

use thiserror::Error;

use super::ops::raw_mul;
use super::point::{FixedPoint, FRACTION_BITS, FRACTION_FACTOR};
use super::sqrt::sqrt_raw;

/// Conditions the default operators silently absorb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Result does not fit in 64 bits.
    #[error("fixed-point overflow in {0}")]
    Overflow(&'static str),
    /// Divisor raw value is zero.
    #[error("division by zero")]
    DivideByZero,
    /// Square root of a negative value.
    #[error("square root of negative value (raw {0})")]
    NegativeSqrt(i64),
}

impl FixedPoint {
    /// Addition that reports overflow instead of wrapping.
    pub fn checked_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.raw()
            .checked_add(rhs.raw())
            .map(Self::from_raw)
            .ok_or(ArithmeticError::Overflow("add"))
    }

    /// Subtraction that reports overflow instead of wrapping.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.raw()
            .checked_sub(rhs.raw())
            .map(Self::from_raw)
            .ok_or(ArithmeticError::Overflow("sub"))
    }

    /// Multiplication that reports overflow of any partial product.
    ///
    /// On success the result is bit-identical to `self * rhs`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
        let overflow = ArithmeticError::Overflow("mul");
        let (a, b) = (self.raw(), rhs.raw());
        let f1 = a % FRACTION_FACTOR;
        let f2 = b % FRACTION_FACTOR;
        let i1 = (a - f1) >> FRACTION_BITS;
        let i2 = (b - f2) >> FRACTION_BITS;

        let raw = a
            .checked_mul(i2)
            .and_then(|r| i1.checked_mul(f2).and_then(|t| r.checked_add(t)))
            .and_then(|r| r.checked_add((f1 * f2) / FRACTION_FACTOR))
            .ok_or(overflow)?;

        debug_assert_eq!(raw, raw_mul(a, b));
        Ok(Self::from_raw(raw))
    }

    /// Division that rejects a zero divisor and a numerator too large to
    /// pre-shift.
    pub fn checked_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
        if rhs.raw() == 0 {
            return Err(ArithmeticError::DivideByZero);
        }

        let shifted = self.raw() << FRACTION_BITS;
        if shifted >> FRACTION_BITS != self.raw() {
            return Err(ArithmeticError::Overflow("div"));
        }

        shifted
            .checked_div(rhs.raw())
            .map(Self::from_raw)
            .ok_or(ArithmeticError::Overflow("div"))
    }

    /// Square root that rejects negative input and values above `MAX`.
    pub fn checked_sqrt(self) -> Result<Self, ArithmeticError> {
        if self.raw() < 0 {
            return Err(ArithmeticError::NegativeSqrt(self.raw()));
        }
        if self > Self::MAX {
            return Err(ArithmeticError::Overflow("sqrt"));
        }
        Ok(Self::from_raw(sqrt_raw(self.raw())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_matches_default_in_range() {
        let a = FixedPoint::from_f64(12.75);
        let b = FixedPoint::from_f64(-3.5);
        assert_eq!(a.checked_add(b), Ok(a + b));
        assert_eq!(a.checked_sub(b), Ok(a - b));
        assert_eq!(a.checked_mul(b), Ok(a * b));
        assert_eq!(a.checked_div(b), Ok(a / b));
        assert_eq!(a.checked_sqrt(), Ok(a.sqrt()));
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(
            FixedPoint::POSITIVE_INFINITY.checked_add(FixedPoint::EPSILON),
            Err(ArithmeticError::Overflow("add"))
        );
        assert_eq!(
            FixedPoint::NEGATIVE_INFINITY.checked_sub(FixedPoint::EPSILON),
            Err(ArithmeticError::Overflow("sub"))
        );
        assert_eq!(
            FixedPoint::MAX.checked_mul(FixedPoint::from_int(1 << 20)),
            Err(ArithmeticError::Overflow("mul"))
        );
        assert_eq!(
            FixedPoint::POSITIVE_INFINITY.checked_div(FixedPoint::ONE),
            Err(ArithmeticError::Overflow("div"))
        );
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(
            FixedPoint::ONE.checked_div(FixedPoint::ZERO),
            Err(ArithmeticError::DivideByZero)
        );
        // The default operator still falls back
        assert_eq!(FixedPoint::ONE / FixedPoint::ZERO, FixedPoint::from_raw(1 << 32));
    }

    #[test]
    fn test_checked_sqrt() {
        let neg = FixedPoint::from_int(-4);
        assert_eq!(neg.checked_sqrt(), Err(ArithmeticError::NegativeSqrt(-4 * 65536)));
        assert_eq!(FixedPoint::ZERO.checked_sqrt(), Ok(FixedPoint::ZERO));
        assert_eq!(
            FixedPoint::POSITIVE_INFINITY.checked_sqrt(),
            Err(ArithmeticError::Overflow("sqrt"))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ArithmeticError::DivideByZero.to_string(), "division by zero");
        assert_eq!(ArithmeticError::Overflow("mul").to_string(), "fixed-point overflow in mul");
    }
}
