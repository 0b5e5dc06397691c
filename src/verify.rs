// checking the linear-time arrays against the naive ones
use std::io::Write;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::lspf::{Factors, Lspf, Mode};

/// `count` random texts over `alphabet` with lengths in `2..=max_len`
#[derive(Clone, Debug)]
pub struct RandomConfig {
    pub count: usize,
    pub alphabet: Vec<u8>,
    pub max_len: usize,
    pub seed: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig {
            count: 10,
            alphabet: b"abc".to_vec(),
            max_len: 20,
            seed: 0x5eed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckConfig {
    /// texts checked as given
    pub texts: Vec<Vec<u8>>,
    pub random: Option<RandomConfig>,
    /// check every word over {a, b} up to this length
    pub exhaustive: Option<usize>,
    /// stop at the first text with a mismatch
    pub stop_on_error: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            texts: ["abbaabbbaaabab", "ananas", "aabbabaabbaababbabab"]
                .iter()
                .map(|t| t.as_bytes().to_vec())
                .collect(),
            random: None,
            exhaustive: None,
            stop_on_error: true,
        }
    }
}

impl CheckConfig {
    /// every text the configuration asks for, in checking order
    pub fn texts(&self) -> Result<Vec<Vec<u8>>> {
        let mut res = self.texts.clone();
        if let Some(r) = &self.random {
            if r.alphabet.is_empty() {
                return Err(Error::InvalidArgument("empty alphabet".to_string()));
            }
            if r.max_len < 2 {
                return Err(Error::InvalidArgument(format!(
                    "maximum length {} is below 2",
                    r.max_len
                )));
            }
            let mut rng = StdRng::seed_from_u64(r.seed);
            for _ in 0..r.count {
                let len = rng.gen_range(2..=r.max_len);
                res.push(crate::words::random_word(&mut rng, &r.alphabet, len));
            }
        }
        if let Some(max_len) = self.exhaustive {
            for len in 1..=max_len {
                res.extend(crate::words::all_words(b"ab", len));
            }
        }
        Ok(res)
    }
}

/// A position where the fast and naive arrays disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    Len { pos: usize, fast: usize, naive: usize },
    Src { pos: usize, fast: i64, naive: i64 },
}

pub fn mismatches(fast: &Factors, naive: &Factors) -> Vec<Mismatch> {
    let mut res = Vec::new();
    for (pos, ((fl, fs), (nl, ns))) in fast.pairs().zip(naive.pairs()).enumerate() {
        if fl != nl {
            res.push(Mismatch::Len {
                pos,
                fast: fl,
                naive: nl,
            });
        }
        if fs != ns {
            res.push(Mismatch::Src {
                pos,
                fast: fs,
                naive: ns,
            });
        }
    }
    res
}

/// Outcome of checking one text in one mode.
#[derive(Clone, Debug)]
pub struct ModeCheck {
    pub mode: Mode,
    pub elapsed: Duration,
    pub mismatches: Vec<Mismatch>,
}

pub fn check_mode(lspf: &Lspf, mode: Mode) -> ModeCheck {
    let start = Instant::now();
    let fast = lspf.factors(mode);
    let elapsed = start.elapsed();
    let naive = lspf.naive_factors(mode);
    let mismatches = mismatches(&fast, &naive);
    for m in mismatches.iter() {
        match m {
            Mismatch::Len { pos, fast, naive } => {
                log::warn!("{} LEN ERROR (i, calc, naive): {} {} {}", mode, pos, fast, naive)
            }
            Mismatch::Src { pos, fast, naive } => {
                log::warn!("{} REF ERROR (i, calc, naive): {} {} {}", mode, pos, fast, naive)
            }
        }
    }
    ModeCheck {
        mode,
        elapsed,
        mismatches,
    }
}

/// checks LPF, then LSF (only if LPF was correct) of `text`
pub fn check_text(text: &[u8]) -> Result<Vec<ModeCheck>> {
    let lspf = Lspf::new(text)?;
    let prev = check_mode(&lspf, Mode::Prev);
    if !prev.mismatches.is_empty() {
        return Ok(vec![prev]);
    }
    let succ = check_mode(&lspf, Mode::Succ);
    Ok(vec![prev, succ])
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub texts: usize,
    pub failed: usize,
}

/// Checks every text of `config`. When `stats` is given, a line
/// `n <tab> LPF µs <tab> LSF µs` is written to it per text.
pub fn run<W: Write>(config: &CheckConfig, mut stats: Option<W>) -> anyhow::Result<Report> {
    if let Some(w) = stats.as_mut() {
        writeln!(w, "n\tlpf-time (in microsec)\tlsf_time (in microsec)")?;
    }
    let mut report = Report::default();
    for text in config.texts()? {
        let checks = check_text(&text)?;
        report.texts += 1;
        let errors: usize = checks.iter().map(|c| c.mismatches.len()).sum();
        log::info!(
            "{:?}: {} errors",
            String::from_utf8_lossy(&text),
            errors
        );
        if let Some(w) = stats.as_mut() {
            let times: Vec<String> = checks
                .iter()
                .map(|c| c.elapsed.as_micros().to_string())
                .collect();
            writeln!(w, "{}\t{}", text.len(), times.join("\t"))?;
        }
        if errors > 0 {
            report.failed += 1;
            if config.stop_on_error {
                break;
            }
        }
    }
    Ok(report)
}

#[test]
fn test_default_config() {
    let report = run(&CheckConfig::default(), None::<Vec<u8>>).unwrap();
    assert_eq!(report, Report { texts: 3, failed: 0 });
}

#[test]
fn test_random_and_exhaustive() {
    let config = CheckConfig {
        texts: Vec::new(),
        random: Some(RandomConfig {
            count: 50,
            max_len: 30,
            ..RandomConfig::default()
        }),
        exhaustive: Some(8),
        stop_on_error: false,
    };
    // 2 + 4 + ... + 256 exhaustive words
    assert_eq!(config.texts().unwrap().len(), 50 + 510);
    let mut stats = Vec::new();
    let report = run(&config, Some(&mut stats)).unwrap();
    assert_eq!(report, Report { texts: 560, failed: 0 });
    let stats = String::from_utf8(stats).unwrap();
    assert_eq!(stats.lines().count(), 561);
}

#[test]
fn test_random_texts_are_reproducible() {
    let config = CheckConfig {
        texts: Vec::new(),
        random: Some(RandomConfig::default()),
        exhaustive: None,
        stop_on_error: true,
    };
    let a = config.texts().unwrap();
    assert_eq!(a, config.texts().unwrap());
    assert!(a.iter().all(|t| (2..=20).contains(&t.len())));
}

#[test]
fn test_mismatches() {
    let fast = Factors {
        len: vec![0, 1, 2],
        src: vec![None, Some(0), Some(0)],
    };
    let naive = Factors {
        len: vec![0, 1, 3],
        src: vec![None, Some(0), Some(1)],
    };
    assert_eq!(
        mismatches(&fast, &naive),
        vec![
            Mismatch::Len {
                pos: 2,
                fast: 2,
                naive: 3
            },
            Mismatch::Src {
                pos: 2,
                fast: 0,
                naive: 1
            }
        ]
    );
}

#[test]
fn test_bad_random_config() {
    let config = CheckConfig {
        random: Some(RandomConfig {
            alphabet: Vec::new(),
            ..RandomConfig::default()
        }),
        ..CheckConfig::default()
    };
    assert!(matches!(config.texts(), Err(Error::InvalidArgument(_))));
}
