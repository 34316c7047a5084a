//! Deterministic geometry on top of [`FixedPoint`](crate::FixedPoint).
//!
//! Vectors and quaternions here use only fixed-point operators and the
//! lookup-table trig, so results are bit-identical across platforms.

mod quat;
mod vec2;
mod vec3;

pub use quat::FixedQuat;
pub use vec2::FixedVec2;
pub use vec3::FixedVec3;
