use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use lspf::verify::mismatches;
use lspf::{Factors, Lspf, Mode};

/// Which arrays to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Selection {
    Both,
    Only(Mode),
}

impl FromStr for Selection {
    type Err = lspf::Error;

    fn from_str(s: &str) -> lspf::Result<Self> {
        if s.eq_ignore_ascii_case("BOTH") {
            Ok(Selection::Both)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "lspf",
    about = "Compute the longest previous factor (LPF) and/or longest successor factor (LSF) arrays of a file."
)]
struct Args {
    /// An input file. Arrays are written to <input-file>.LPF and <input-file>.LSF.
    #[clap(short = 'i', long)]
    input_file: String,

    /// BOTH, PREV (LPF only) or SUCC (LSF only).
    #[clap(short = 'm', long, default_value = "BOTH")]
    mode: Selection,

    /// Verify the result against the brute-force method (quadratic time).
    #[clap(short = 'v', long)]
    verify: bool,
}

fn write_factors(path: &str, factors: &Factors) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
    let mut out = BufWriter::new(file);
    for (len, src) in factors.pairs() {
        writeln!(out, "{} {}", len, src)?;
    }
    out.flush()
        .with_context(|| format!("Failed to write {}", path))?;
    Ok(())
}

fn verify(lspf: &Lspf, mode: Mode, factors: &Factors) -> Result<()> {
    log::info!("verifying {} against the brute-force method", mode);
    let errors = mismatches(factors, &lspf.naive_factors(mode));
    if !errors.is_empty() {
        bail!("{} array differs from the brute-force one at {} places", mode, errors.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    let args = Args::parse();

    let text = fs::read(&args.input_file)
        .with_context(|| format!("Failed to read the input file {}", &args.input_file))?;
    log::info!("read {} symbols from {}", text.len(), args.input_file);

    let start = Instant::now();
    let lspf = Lspf::new(&text)?;
    let results: Vec<(Mode, Factors)> = match args.mode {
        Selection::Both => {
            let (prev, succ) = lspf.factors_both();
            vec![(Mode::Prev, prev), (Mode::Succ, succ)]
        }
        Selection::Only(mode) => vec![(mode, lspf.factors(mode))],
    };
    log::info!("computed in {} sec", start.elapsed().as_secs_f64());

    for (mode, factors) in results.iter() {
        if args.verify {
            verify(&lspf, *mode, factors)?;
        }
        let path = match mode {
            Mode::Prev => format!("{}.LPF", args.input_file),
            Mode::Succ => format!("{}.LSF", args.input_file),
        };
        write_factors(&path, factors)?;
        log::info!("wrote {}", path);
    }
    Ok(())
}
