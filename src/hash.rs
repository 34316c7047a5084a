//! Determinism Hashing
//!
//! SHA-256 fingerprints over raw fixed-point values. Two machines that
//! agree on a digest agree on every bit that went into it, which makes
//! digests the unit of comparison for:
//! - generated trig tables across platforms
//! - lockstep simulation state between peers
//! - recorded replays
//!
//! Only raw `i64` bit patterns are hashed (little-endian), never floats.
//!
//! ```
//! use fixmath::{DeterminismHasher, FixedPoint, FixedVec2};
//!
//! let mut hasher = DeterminismHasher::for_state();
//! hasher.update(&FixedPoint::ONE);
//! hasher.update(&FixedVec2::from_ints(3, 4));
//! let digest = hasher.finalize();
//! assert_eq!(digest.len(), 32);
//! ```

use sha2::{Digest, Sha256};

use crate::fixed::FixedPoint;
use crate::geom::{FixedQuat, FixedVec2, FixedVec3};

/// 256-bit digest.
pub type StateDigest = [u8; 32];

/// Domain separator for trig table digests.
pub const TRIG_TABLE_DOMAIN: &[u8] = b"FIXMATH_TRIG_TABLES_V1";

/// Domain separator for caller simulation state.
pub const STATE_DOMAIN: &[u8] = b"FIXMATH_STATE_V1";

/// Values with a canonical byte encoding for [`DeterminismHasher`].
pub trait Fingerprint {
    /// Feed this value's raw components into `hasher`, in a fixed order.
    fn fingerprint(&self, hasher: &mut DeterminismHasher);
}

/// SHA-256 with a domain prefix.
///
/// Update order is part of the digest.
pub struct DeterminismHasher {
    inner: Sha256,
}

impl DeterminismHasher {
    /// Start a digest under `domain`.
    pub fn new(domain: &[u8]) -> Self {
        let mut inner = Sha256::new();
        inner.update(domain);
        Self { inner }
    }

    /// Hasher for lookup table digests.
    pub fn for_trig_tables() -> Self {
        Self::new(TRIG_TABLE_DOMAIN)
    }

    /// Hasher for caller simulation state.
    pub fn for_state() -> Self {
        Self::new(STATE_DOMAIN)
    }

    /// Feed any [`Fingerprint`] value.
    #[inline]
    pub fn update<T: Fingerprint + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.fingerprint(self);
        self
    }

    /// Feed raw bytes, unframed.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.inner.update(bytes);
        self
    }

    /// Feed one raw value.
    #[inline]
    pub fn update_i64(&mut self, value: i64) -> &mut Self {
        self.inner.update(value.to_le_bytes());
        self
    }

    /// Feed a slice of raw values, prefixed with its length so adjacent
    /// slices cannot alias.
    pub fn update_raw_slice(&mut self, values: &[i64]) -> &mut Self {
        self.inner.update((values.len() as u64).to_le_bytes());
        for &value in values {
            self.update_i64(value);
        }
        self
    }

    /// Consume the hasher.
    pub fn finalize(self) -> StateDigest {
        self.inner.finalize().into()
    }
}

impl Fingerprint for FixedPoint {
    fn fingerprint(&self, hasher: &mut DeterminismHasher) {
        hasher.update_i64(self.raw());
    }
}

impl Fingerprint for FixedVec2 {
    fn fingerprint(&self, hasher: &mut DeterminismHasher) {
        hasher.update(&self.x).update(&self.y);
    }
}

impl Fingerprint for FixedVec3 {
    fn fingerprint(&self, hasher: &mut DeterminismHasher) {
        hasher.update(&self.x).update(&self.y).update(&self.z);
    }
}

/// `x, y, z, w` order.
impl Fingerprint for FixedQuat {
    fn fingerprint(&self, hasher: &mut DeterminismHasher) {
        hasher.update(&self.x).update(&self.y).update(&self.z).update(&self.w);
    }
}

/// Length-prefixed, like [`DeterminismHasher::update_raw_slice`].
impl<T: Fingerprint> Fingerprint for [T] {
    fn fingerprint(&self, hasher: &mut DeterminismHasher) {
        hasher.update_bytes(&(self.len() as u64).to_le_bytes());
        for item in self {
            item.fingerprint(hasher);
        }
    }
}

/// One-shot digest of `data` under `domain`.
pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> StateDigest {
    let mut hasher = DeterminismHasher::new(domain);
    hasher.update_bytes(data);
    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_of<T: Fingerprint + ?Sized>(value: &T) -> StateDigest {
        let mut hasher = DeterminismHasher::new(b"test");
        hasher.update(value);
        hasher.finalize()
    }

    #[test]
    fn test_hasher_determinism() {
        let make_hash = || {
            let mut hasher = DeterminismHasher::for_state();
            hasher
                .update(&FixedPoint::from_f64(5.5))
                .update(&FixedVec2::from_ints(1, 2))
                .update(&FixedVec3::from_ints(1, 2, 3))
                .update(&FixedQuat::IDENTITY);
            hasher.finalize()
        };

        assert_eq!(make_hash(), make_hash());
    }

    #[test]
    fn test_fixed_hashes_raw_bits() {
        let mut by_raw = DeterminismHasher::new(b"test");
        by_raw.update_i64(FixedPoint::HALF.raw());
        assert_eq!(digest_of(&FixedPoint::HALF), by_raw.finalize());
    }

    #[test]
    fn test_vector_is_its_components() {
        let v = FixedVec3::from_ints(4, -5, 6);
        let mut by_parts = DeterminismHasher::new(b"test");
        by_parts.update(&v.x).update(&v.y).update(&v.z);
        assert_eq!(digest_of(&v), by_parts.finalize());
    }

    #[test]
    fn test_hash_order_matters() {
        let mut first = DeterminismHasher::new(b"test");
        first.update(&FixedPoint::ONE).update(&FixedPoint::HALF);

        let mut second = DeterminismHasher::new(b"test");
        second.update(&FixedPoint::HALF).update(&FixedPoint::ONE);

        assert_ne!(first.finalize(), second.finalize());
    }

    #[test]
    fn test_slice_length_prefix() {
        // [1, 2] + [3] must not collide with [1] + [2, 3]
        let mut split_late = DeterminismHasher::new(b"test");
        split_late.update_raw_slice(&[1, 2]).update_raw_slice(&[3]);

        let mut split_early = DeterminismHasher::new(b"test");
        split_early.update_raw_slice(&[1]).update_raw_slice(&[2, 3]);

        assert_ne!(split_late.finalize(), split_early.finalize());
    }

    #[test]
    fn test_fixed_slice_matches_raw_slice() {
        let values = [FixedPoint::ONE, FixedPoint::PI, -FixedPoint::E];
        let raws: Vec<i64> = values.iter().map(|v| v.raw()).collect();

        let mut by_raw = DeterminismHasher::new(b"test");
        by_raw.update_raw_slice(&raws);
        assert_eq!(digest_of(&values[..]), by_raw.finalize());
    }

    #[test]
    fn test_domain_separation() {
        let data = [1u8, 2, 3, 4];
        assert_ne!(hash_with_domain(b"DOMAIN_A", &data), hash_with_domain(b"DOMAIN_B", &data));
        assert_ne!(
            DeterminismHasher::for_state().finalize(),
            DeterminismHasher::for_trig_tables().finalize()
        );
    }
}
