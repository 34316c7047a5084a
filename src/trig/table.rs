//! Trigonometric lookup tables.
//!
//! Three tables, each one sample per raw step, in increasing-angle order:
//!
//! ```text
//! ┌────────┬─────────────────────────────┬──────────────────────────┐
//! │ table  │ sample i                    │ length                   │
//! ├────────┼─────────────────────────────┼──────────────────────────┤
//! │ sin    │ sin(i / range_max * π/2)    │ range_max + 1 = 102944   │
//! │ asin   │ asin(i / 65536)             │ 65537                    │
//! │ atan   │ atan(i / 65536)             │ 65537                    │
//! └────────┴─────────────────────────────┴──────────────────────────┘
//!   range_max = PI.raw / 2
//! ```
//!
//! Samples are computed offline in f64 and truncated through
//! [`FixedPoint::from_f64`]. The crate ships them as constants in
//! `trig/data/`, so the runtime never calls the platform libm. The
//! process-wide copy lives in a `OnceLock`: the built-in tables by
//! default, or an artifact installed before the first trig call.

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::data::{ASIN_TABLE, ATAN_TABLE, SIN_TABLE};
use crate::fixed::FixedPoint;
use crate::hash::{DeterminismHasher, StateDigest};

/// Table errors (installation and artifact decoding).
#[derive(Debug, Error)]
pub enum TableError {
    /// Tables were already generated or installed.
    #[error("trig tables already initialized")]
    AlreadyInitialized,
    /// Sample count does not match the table layout.
    #[error("{table} table has {actual} samples, expected {expected}")]
    BadLength {
        /// Table name
        table: &'static str,
        /// Required sample count
        expected: usize,
        /// Sample count found
        actual: usize,
    },
    /// Samples violate a structural invariant.
    #[error("{table} table is corrupt: {reason}")]
    Corrupt {
        /// Table name
        table: &'static str,
        /// What was violated
        reason: String,
    },
    /// JSON artifact error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Binary artifact error.
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// Output error while writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which table to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    /// First-quadrant sine
    Sin,
    /// Arcsine over `[0, 1]`
    Asin,
    /// Arctangent over `[0, 1]`
    Atan,
}

impl TableKind {
    /// All tables, in artifact order.
    pub const ALL: [TableKind; 3] = [TableKind::Sin, TableKind::Asin, TableKind::Atan];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Sin => "sin",
            TableKind::Asin => "asin",
            TableKind::Atan => "atan",
        }
    }

    /// Identifier of the static emitted in Rust source artifacts.
    pub fn static_name(self) -> &'static str {
        match self {
            TableKind::Sin => "SIN_TABLE",
            TableKind::Asin => "ASIN_TABLE",
            TableKind::Atan => "ATAN_TABLE",
        }
    }

    /// Required sample count.
    pub fn sample_count(self) -> usize {
        match self {
            TableKind::Sin => sin_table_len(),
            TableKind::Asin | TableKind::Atan => inverse_table_len(),
        }
    }

    /// Generate this table.
    pub fn generate(self) -> Vec<i64> {
        match self {
            TableKind::Sin => generate_sin_table(),
            TableKind::Asin => generate_inverse_table(f64::asin),
            TableKind::Atan => generate_inverse_table(f64::atan),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(TableKind::Sin),
            "asin" => Ok(TableKind::Asin),
            "atan" => Ok(TableKind::Atan),
            other => Err(format!("unknown table '{other}' (expected sin, asin or atan)")),
        }
    }
}

/// Number format for Rust source artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    /// `65536`
    #[default]
    Decimal,
    /// `0x10000`
    Hex,
}

/// Values per line in Rust source artifacts.
pub const SAMPLES_PER_LINE: usize = 8;

// =============================================================================
// GENERATION
// =============================================================================

/// Sine table length: `PI.raw / 2 + 1`.
pub fn sin_table_len() -> usize {
    (FixedPoint::HALF_PI.raw() + 1) as usize
}

/// Inverse table length: `ONE.raw + 1`.
pub fn inverse_table_len() -> usize {
    (FixedPoint::ONE.raw() + 1) as usize
}

/// One sample of `sin` per raw step over `[0, π/2]`.
///
/// Sample `i` is `sin(i / range_max * π/2)`, so the last sample lands
/// exactly on π/2 even though `HALF_PI` is itself truncated.
pub fn generate_sin_table() -> Vec<i64> {
    let range_max = FixedPoint::PI.raw() / 2;
    (0..=range_max)
        .map(|i| {
            let angle = i as f64 / range_max as f64 * std::f64::consts::PI / 2.0;
            FixedPoint::from_f64(angle.sin()).raw()
        })
        .collect()
}

/// One sample of `f(x)` per raw step of `x` over `[0, 1]`.
fn generate_inverse_table(f: fn(f64) -> f64) -> Vec<i64> {
    let one = FixedPoint::ONE.raw();
    (0..=one)
        .map(|i| FixedPoint::from_f64(f(i as f64 / one as f64)).raw())
        .collect()
}

// =============================================================================
// TABLE SET
// =============================================================================

/// The complete set of lookup tables read by the trig engine.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigTables {
    sin: Vec<i64>,
    asin: Vec<i64>,
    atan: Vec<i64>,
}

impl TrigTables {
    /// The tables compiled into the crate.
    pub fn embedded() -> Self {
        Self {
            sin: SIN_TABLE.to_vec(),
            asin: ASIN_TABLE.to_vec(),
            atan: ATAN_TABLE.to_vec(),
        }
    }

    /// Generate all tables with the host's floating-point library.
    pub fn generate() -> Self {
        Self {
            sin: TableKind::Sin.generate(),
            asin: TableKind::Asin.generate(),
            atan: TableKind::Atan.generate(),
        }
    }

    /// Build from explicit samples, validating the layout.
    pub fn from_samples(sin: Vec<i64>, asin: Vec<i64>, atan: Vec<i64>) -> Result<Self, TableError> {
        let tables = Self { sin, asin, atan };
        tables.validate()?;
        Ok(tables)
    }

    /// Samples of one table.
    pub fn get(&self, kind: TableKind) -> &[i64] {
        match kind {
            TableKind::Sin => &self.sin,
            TableKind::Asin => &self.asin,
            TableKind::Atan => &self.atan,
        }
    }

    /// Sine samples over `[0, π/2]`.
    #[inline]
    pub fn sin(&self) -> &[i64] {
        &self.sin
    }

    /// Arcsine samples over `[0, 1]`.
    #[inline]
    pub fn asin(&self) -> &[i64] {
        &self.asin
    }

    /// Arctangent samples over `[0, 1]`.
    #[inline]
    pub fn atan(&self) -> &[i64] {
        &self.atan
    }

    /// Check lengths and structural invariants: every table starts at 0,
    /// never decreases, and stays within `[0, ONE]` (sin) or `[0, HALF_PI]`
    /// (inverse tables, whose range includes the truncated π/2 sample).
    pub fn validate(&self) -> Result<(), TableError> {
        for kind in TableKind::ALL {
            let samples = self.get(kind);
            let table = kind.name();

            if samples.len() != kind.sample_count() {
                return Err(TableError::BadLength {
                    table,
                    expected: kind.sample_count(),
                    actual: samples.len(),
                });
            }

            if samples[0] != 0 {
                return Err(TableError::Corrupt {
                    table,
                    reason: format!("first sample is {}, expected 0", samples[0]),
                });
            }

            if let Some(i) = samples.windows(2).position(|w| w[1] < w[0]) {
                return Err(TableError::Corrupt {
                    table,
                    reason: format!("sample {} decreases", i + 1),
                });
            }

            let ceiling = match kind {
                TableKind::Sin => FixedPoint::ONE.raw(),
                TableKind::Asin | TableKind::Atan => FixedPoint::HALF_PI.raw(),
            };
            let last = samples[samples.len() - 1];
            if last > ceiling {
                return Err(TableError::Corrupt {
                    table,
                    reason: format!("last sample {last} exceeds {ceiling}"),
                });
            }
        }
        Ok(())
    }

    /// SHA-256 over all samples, for comparing tables across platforms.
    pub fn digest(&self) -> StateDigest {
        let mut hasher = DeterminismHasher::for_trig_tables();
        for kind in TableKind::ALL {
            hasher.update_raw_slice(self.get(kind));
        }
        hasher.finalize()
    }

    /// Encode as a JSON artifact.
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate a JSON artifact.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Encode as a bincode artifact.
    pub fn to_bincode(&self) -> Result<Vec<u8>, TableError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a bincode artifact.
    pub fn from_bincode(bytes: &[u8]) -> Result<Self, TableError> {
        let tables: Self = bincode::deserialize(bytes)?;
        tables.validate()?;
        Ok(tables)
    }
}

impl fmt::Debug for TrigTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrigTables")
            .field("sin_len", &self.sin.len())
            .field("asin_len", &self.asin.len())
            .field("atan_len", &self.atan.len())
            .finish()
    }
}

// =============================================================================
// PROCESS-WIDE STORAGE
// =============================================================================

static TABLES: OnceLock<TrigTables> = OnceLock::new();

/// Process-wide tables. The built-in set unless [`install`] ran first.
pub fn tables() -> &'static TrigTables {
    TABLES.get_or_init(|| {
        let tables = TrigTables::embedded();
        debug!(
            sin_len = tables.sin.len(),
            asin_len = tables.asin.len(),
            atan_len = tables.atan.len(),
            "trig tables loaded"
        );
        tables
    })
}

/// Install pre-generated tables. Must happen before the first trig call.
pub fn install(tables: TrigTables) -> Result<(), TableError> {
    tables.validate()?;
    let digest = hex::encode(tables.digest());
    TABLES.set(tables).map_err(|_| TableError::AlreadyInitialized)?;
    info!(%digest, "trig tables installed");
    Ok(())
}

/// Whether the tables have been loaded or installed.
pub fn is_initialized() -> bool {
    TABLES.get().is_some()
}

// =============================================================================
// ARTIFACTS
// =============================================================================

/// Emit one table as Rust source:
///
/// ```text
/// pub static SIN_TABLE: [i64; 102944] = [
///     0, 1, 2, 3, 4, 5, 6, 7,
///     ...
/// ];
/// ```
pub fn write_rust_source<W: Write>(
    out: &mut W,
    kind: TableKind,
    samples: &[i64],
    radix: Radix,
) -> Result<(), TableError> {
    writeln!(out, "// {} lookup table: one sample per raw step, increasing angle.", kind)?;
    writeln!(out, "pub static {}: [i64; {}] = [", kind.static_name(), samples.len())?;
    for chunk in samples.chunks(SAMPLES_PER_LINE) {
        let line: Vec<String> = chunk
            .iter()
            .map(|v| match radix {
                Radix::Decimal => v.to_string(),
                Radix::Hex => format!("{v:#x}"),
            })
            .collect();
        writeln!(out, "    {},", line.join(", "))?;
    }
    writeln!(out, "];")?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(sin_table_len(), 102944);
        assert_eq!(inverse_table_len(), 65537);
        let t = tables();
        assert_eq!(t.sin().len(), sin_table_len());
        assert_eq!(t.asin().len(), inverse_table_len());
        assert_eq!(t.atan().len(), inverse_table_len());
    }

    #[test]
    fn test_sin_table_endpoints() {
        let sin = tables().sin();
        assert_eq!(sin[0], 0);
        assert_eq!(sin[sin.len() - 1], FixedPoint::ONE.raw());
        // sin(π/6) = 0.5 at i = range_max / 3
        let i = (sin.len() - 1) / 3;
        assert!((sin[i] - 32768).abs() <= 2);
    }

    #[test]
    fn test_inverse_table_endpoints() {
        let t = tables();
        // asin(1) = π/2, truncated
        assert_eq!(t.asin()[65536], 102943);
        // atan(1) = π/4, truncated
        assert_eq!(t.atan()[65536], 51471);
        assert_eq!(t.asin()[0], 0);
        assert_eq!(t.atan()[0], 0);
    }

    #[test]
    fn test_generated_tables_validate() {
        assert!(tables().validate().is_ok());
    }

    #[test]
    fn test_embedded_tables_are_active() {
        assert_eq!(tables(), &TrigTables::embedded());
    }

    #[test]
    fn test_embedded_tables_match_generation() {
        // Holds on hosts whose libm agrees with the one that produced trig/data/
        let generated = TrigTables::generate();
        let embedded = TrigTables::embedded();
        for kind in TableKind::ALL {
            let mismatch = embedded
                .get(kind)
                .iter()
                .zip(generated.get(kind))
                .position(|(a, b)| a != b);
            assert_eq!(mismatch, None, "{kind} table differs from local generation");
        }
        assert_eq!(embedded.digest(), generated.digest());
    }

    #[test]
    fn test_embedded_source_is_reproducible() {
        let files = [
            (TableKind::Sin, include_str!("data/sin.rs")),
            (TableKind::Asin, include_str!("data/asin.rs")),
            (TableKind::Atan, include_str!("data/atan.rs")),
        ];
        let embedded = TrigTables::embedded();
        for (kind, checked_in) in files {
            let mut out = Vec::new();
            write_rust_source(&mut out, kind, embedded.get(kind), Radix::Decimal).unwrap();
            assert!(String::from_utf8(out).unwrap() == checked_in, "{kind} source drifted");
        }
    }

    #[test]
    fn test_install_after_init_fails() {
        let _ = tables();
        assert!(is_initialized());
        let result = install(TrigTables::embedded());
        assert!(matches!(result, Err(TableError::AlreadyInitialized)));
    }

    #[test]
    fn test_validate_rejects_bad_length() {
        let t = tables();
        let result = TrigTables::from_samples(vec![0; 10], t.asin().to_vec(), t.atan().to_vec());
        assert!(matches!(
            result,
            Err(TableError::BadLength { table: "sin", expected: 102944, actual: 10 })
        ));
    }

    #[test]
    fn test_validate_rejects_decreasing() {
        let t = tables();
        let mut atan = t.atan().to_vec();
        atan[100] = atan[99] - 1;
        let result = TrigTables::from_samples(t.sin().to_vec(), t.asin().to_vec(), atan);
        assert!(matches!(result, Err(TableError::Corrupt { table: "atan", .. })));
    }

    #[test]
    fn test_json_artifact() {
        let json = tables().to_json().unwrap();
        let back = TrigTables::from_json(&json).unwrap();
        assert_eq!(&back, tables());
    }

    #[test]
    fn test_bincode_artifact() {
        let bytes = tables().to_bincode().unwrap();
        let back = TrigTables::from_bincode(&bytes).unwrap();
        assert_eq!(back.digest(), tables().digest());
    }

    #[test]
    fn test_bincode_rejects_garbage() {
        assert!(TrigTables::from_bincode(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_rust_source_format() {
        let mut out = Vec::new();
        write_rust_source(&mut out, TableKind::Sin, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 65536], Radix::Decimal)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "pub static SIN_TABLE: [i64; 10] = [");
        assert_eq!(lines[2], "    0, 1, 2, 3, 4, 5, 6, 7,");
        assert_eq!(lines[3], "    8, 65536,");
        assert_eq!(lines[4], "];");
    }

    #[test]
    fn test_rust_source_hex() {
        let mut out = Vec::new();
        write_rust_source(&mut out, TableKind::Atan, &[0, 65536], Radix::Hex).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("pub static ATAN_TABLE: [i64; 2] = ["));
        assert!(text.contains("    0x0, 0x10000,"));
    }

    #[test]
    fn test_table_kind_parse() {
        assert_eq!("asin".parse::<TableKind>(), Ok(TableKind::Asin));
        assert!("cos".parse::<TableKind>().is_err());
        assert_eq!(TableKind::Atan.to_string(), "atan");
    }
}
