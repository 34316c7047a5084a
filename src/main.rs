//! fixmath CLI
//!
//! Generates and fingerprints the trig lookup tables so they can be
//! shipped as artifacts and compared across platforms.
//!
//! ```text
//! fixmath gen-table <sin|asin|atan> [--hex] [--out PATH]
//! fixmath export <json|bincode> --out PATH
//! fixmath digest [--from PATH]
//! fixmath demo
//! ```
//!
//! `FIXMATH_TABLE_OUT` and `FIXMATH_TABLE_HEX` stand in for `--out` and
//! `--hex` when the flags are absent. Log verbosity follows `RUST_LOG`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{builder::BoolishValueParser, ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fixmath::{
    trig::{self, table::Radix},
    FixedPoint, FixedQuat, FixedVec3, TableKind, TrigTables, VERSION,
};

#[derive(Debug, Parser)]
#[command(name = "fixmath", version, about = "Deterministic fixed-point table tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit one lookup table as Rust source
    GenTable {
        #[arg(value_enum)]
        kind: TableKind,
        /// Write samples as hexadecimal literals
        #[arg(
            long,
            env = "FIXMATH_TABLE_HEX",
            action = ArgAction::SetTrue,
            value_parser = BoolishValueParser::new()
        )]
        hex: bool,
        /// Output file (stdout when absent)
        #[arg(long, env = "FIXMATH_TABLE_OUT")]
        out: Option<PathBuf>,
    },
    /// Write all tables as a JSON or bincode artifact
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        #[arg(long, env = "FIXMATH_TABLE_OUT")]
        out: PathBuf,
    },
    /// Print the SHA-256 digest of the active tables
    Digest {
        /// Install this artifact first (.json is JSON, anything else bincode)
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Log a short tour of the arithmetic
    Demo,
}

/// Artifact encodings for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Bincode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so generated tables can be piped from stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;

    info!("fixmath v{}", VERSION);

    match cli.command {
        Command::GenTable { kind, hex, out } => {
            let radix = if hex { Radix::Hex } else { Radix::Decimal };
            gen_table(kind, radix, out.as_deref())
        }
        Command::Export { format, out } => export(format, &out),
        Command::Digest { from } => digest(from.as_deref()),
        Command::Demo => {
            demo();
            Ok(())
        }
    }
}

fn gen_table(kind: TableKind, radix: Radix, out: Option<&Path>) -> Result<()> {
    let samples = kind.generate();
    info!(table = %kind, samples = samples.len(), ?radix, "generating table source");

    match out {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            trig::table::write_rust_source(&mut writer, kind, &samples, radix)?;
            writer.flush()?;
            info!(path = %path.display(), "table written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            trig::table::write_rust_source(&mut writer, kind, &samples, radix)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn export(format: ExportFormat, out: &Path) -> Result<()> {
    let tables = trig::tables();
    let bytes = match format {
        ExportFormat::Json => tables.to_json()?.into_bytes(),
        ExportFormat::Bincode => tables.to_bincode()?,
    };
    fs::write(out, &bytes).with_context(|| format!("writing {}", out.display()))?;

    info!(
        path = %out.display(),
        ?format,
        bytes = bytes.len(),
        digest = %hex::encode(tables.digest()),
        "tables exported"
    );
    Ok(())
}

/// Load an artifact by extension: `.json` is JSON, anything else bincode.
fn load_artifact(path: &Path) -> Result<TrigTables> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let is_json = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let tables = if is_json {
        let text = String::from_utf8(bytes).context("artifact is not UTF-8")?;
        TrigTables::from_json(&text)?
    } else {
        TrigTables::from_bincode(&bytes)?
    };
    Ok(tables)
}

fn digest(from: Option<&Path>) -> Result<()> {
    if let Some(path) = from {
        let loaded = load_artifact(path)?;
        if loaded.digest() != TrigTables::embedded().digest() {
            warn!(path = %path.display(), "artifact differs from the built-in tables");
        }
        trig::install(loaded)?;
    }

    let digest = hex::encode(trig::tables().digest());
    println!("{digest}");
    Ok(())
}

fn demo() {
    info!("=== Fixed-Point Demo ===");

    let sum = FixedPoint::from_f64(0.1) + FixedPoint::from_f64(0.2);
    info!("0.1 + 0.2 = {} (raw {})", sum, sum.raw());
    info!("PI = {} (raw {:#x})", FixedPoint::PI, FixedPoint::PI.raw());

    let two = FixedPoint::from_int(2);
    info!("sqrt(2) = {} (raw {})", two.sqrt(), two.sqrt().raw());

    let sixth = FixedPoint::PI / 6;
    info!("sin(pi/6) = {}", sixth.sin());
    info!("cos(pi/6) = {}", sixth.cos());
    info!("atan(1) = {}", FixedPoint::ONE.atan());
    info!("180 deg = {} rad", FixedPoint::from_int(180).deg_to_rad());

    let q = FixedQuat::from_angle_axis(FixedPoint::HALF_PI, FixedVec3::UP);
    info!("rotate {:?} by {:?} -> {:?}", FixedVec3::RIGHT, q, q * FixedVec3::RIGHT);

    info!("table digest = {}", hex::encode(trig::tables().digest()));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("fixmath").chain(args.iter().copied())).map(|cli| cli.command)
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_gen_table() {
        let cmd = parse(&["gen-table", "asin", "--hex", "--out", "asin.rs"]).unwrap();
        assert!(matches!(
            cmd,
            Command::GenTable { kind: TableKind::Asin, hex: true, out: Some(ref p) } if p == Path::new("asin.rs")
        ));
    }

    #[test]
    fn test_env_fallbacks_are_declared() {
        let cli = Cli::command();
        let env_of = |sub: &str, arg: &str| {
            cli.find_subcommand(sub)
                .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
                .and_then(|a| a.get_env())
                .map(OsStr::to_owned)
        };
        assert_eq!(env_of("gen-table", "out").as_deref(), Some(OsStr::new("FIXMATH_TABLE_OUT")));
        assert_eq!(env_of("gen-table", "hex").as_deref(), Some(OsStr::new("FIXMATH_TABLE_HEX")));
        assert_eq!(env_of("export", "out").as_deref(), Some(OsStr::new("FIXMATH_TABLE_OUT")));
        assert_eq!(env_of("digest", "from"), None);
    }

    #[test]
    fn test_parse_export() {
        let cmd = parse(&["export", "bincode", "--out", "t.bin"]).unwrap();
        assert!(matches!(
            cmd,
            Command::Export { format: ExportFormat::Bincode, ref out } if out == Path::new("t.bin")
        ));
        assert!(parse(&["export", "yaml", "--out", "x"]).is_err());
    }

    #[test]
    fn test_parse_digest_and_demo() {
        assert!(matches!(parse(&["digest"]).unwrap(), Command::Digest { from: None }));
        assert!(matches!(
            parse(&["digest", "--from", "t.json"]).unwrap(),
            Command::Digest { from: Some(ref p) } if p == Path::new("t.json")
        ));
        assert!(matches!(parse(&["demo"]).unwrap(), Command::Demo));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["gen-table"]).is_err());
        assert!(parse(&["gen-table", "tan"]).is_err());
        assert!(parse(&["gen-table", "sin", "--verbose"]).is_err());
        assert!(parse(&["gen-table", "sin", "--out"]).is_err());
        assert!(parse(&["frobnicate"]).is_err());
    }
}
