// check LPF / LSF arrays against the brute-force method on many texts
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use lspf::verify::{CheckConfig, RandomConfig};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lspf_check",
    about = "compare the LPF/LSF arrays with the brute-force ones"
)]
struct Opt {
    /// Texts to check; the built-in samples if none are given
    #[structopt(long = "text")]
    texts: Vec<String>,

    /// Number of random texts to check
    #[structopt(long)]
    random: Option<usize>,

    #[structopt(long, default_value = "abc")]
    alphabet: String,

    #[structopt(long = "max-len", default_value = "20")]
    max_len: usize,

    #[structopt(long, default_value = "24301")]
    seed: u64,

    /// Check every binary text up to this length
    #[structopt(long)]
    exhaustive: Option<usize>,

    /// Keep going after a text with errors
    #[structopt(long = "keep-going")]
    keep_going: bool,

    /// Write per-text timings (TSV) here
    #[structopt(long, parse(from_os_str))]
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    let opt = Opt::from_args();

    let mut config = CheckConfig {
        random: opt.random.map(|count| RandomConfig {
            count,
            alphabet: opt.alphabet.as_bytes().to_vec(),
            max_len: opt.max_len,
            seed: opt.seed,
        }),
        exhaustive: opt.exhaustive,
        stop_on_error: !opt.keep_going,
        ..CheckConfig::default()
    };
    if !opt.texts.is_empty() || config.random.is_some() || config.exhaustive.is_some() {
        config.texts = opt.texts.iter().map(|t| t.as_bytes().to_vec()).collect();
    }

    let stats = match &opt.stats {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {:?}", path))?,
        )),
        None => None,
    };
    let report = lspf::verify::run(&config, stats)?;
    if report.failed > 0 {
        bail!("{} of {} texts failed", report.failed, report.texts);
    }
    log::info!("all {} texts successful", report.texts);
    Ok(())
}
