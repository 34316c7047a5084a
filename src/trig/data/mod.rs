//! Built-in lookup tables, emitted by `fixmath gen-table <kind>`.
//!
//! Regenerate with the CLI and compare digests before replacing a file.

#[rustfmt::skip]
mod asin;
#[rustfmt::skip]
mod atan;
#[rustfmt::skip]
mod sin;

pub(crate) use asin::ASIN_TABLE;
pub(crate) use atan::ATAN_TABLE;
pub(crate) use sin::SIN_TABLE;
