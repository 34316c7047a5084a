//! # fixmath
//!
//! Deterministic Q47.16 fixed-point arithmetic for simulations that must
//! produce bit-identical results on every platform.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FIXMATH                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  fixed/          - The number type                           │
//! │  ├── point.rs    - Q47.16 representation, constants          │
//! │  ├── ops.rs      - Operators, min/max, lerp, floor, repeat   │
//! │  ├── sqrt.rs     - Newton-Raphson square root                │
//! │  └── checked.rs  - Opt-in overflow-checked arithmetic        │
//! │                                                              │
//! │  trig/           - Table-driven trigonometry                 │
//! │  ├── reduce.rs   - Quadrant folding for the sine table       │
//! │  ├── table.rs    - Table storage, install, artifacts         │
//! │  ├── data/       - Built-in pre-generated tables             │
//! │  └── mod.rs      - sin/cos/tan/cot, inverses, degrees        │
//! │                                                              │
//! │  geom/           - Vectors and quaternions                   │
//! │  hash.rs         - SHA-256 fingerprints of raw values        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Every operation works on the raw `i64`:
//! - No floating-point arithmetic outside explicit conversions and
//!   table generation
//! - Overflow wraps, division by zero substitutes a divisor of one,
//!   square roots of non-positive values are zero. Nothing panics.
//! - Trig reads lookup tables compiled into the crate, or an artifact
//!   installed before the first call
//!
//! ```
//! use fixmath::FixedPoint;
//!
//! let sum = FixedPoint::from_f64(0.1) + FixedPoint::from_f64(0.2);
//! assert_eq!(sum.raw(), 19660);
//! assert_eq!(FixedPoint::from_int(9).sqrt(), FixedPoint::from_int(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod fixed;
pub mod geom;
pub mod hash;
pub mod trig;

// Re-export commonly used types
pub use fixed::{ArithmeticError, FixedPoint, FRACTION_BITS, FRACTION_FACTOR};
pub use geom::{FixedQuat, FixedVec2, FixedVec3};
pub use hash::{DeterminismHasher, Fingerprint, StateDigest};
pub use trig::{TableError, TableKind, TrigTables};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
