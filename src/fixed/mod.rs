//! Deterministic fixed-point number type.
//!
//! Everything in this module is integer-only once a value exists: the
//! float constructors are the sole entry point for floating-point input,
//! and `to_f64`/`to_f32` exist for display.

pub mod point;
pub mod ops;
pub mod sqrt;
pub mod checked;

pub use point::{FixedPoint, FRACTION_BITS, FRACTION_FACTOR};
pub use ops::{raw_mul, raw_div};
pub use sqrt::{sqrt_raw, sqrt_raw_with_seed, sqrt_raw_counted};
pub use checked::ArithmeticError;
