// longest previous factor (LPF) and longest successor factor (LSF) arrays
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::range::RangeIndex;
use crate::sweep::neighbors;

/// Which side of a position its factor occurrences are taken from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// occurrences at smaller positions (LPF)
    Prev,
    /// occurrences at larger positions (LSF)
    Succ,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PREV" => Ok(Mode::Prev),
            "SUCC" => Ok(Mode::Succ),
            _ => Err(Error::InvalidArgument(format!("unknown mode {:?}", s))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Prev => write!(f, "PREV"),
            Mode::Succ => write!(f, "SUCC"),
        }
    }
}

/// `len[i]` is the length of the longest factor starting at `i` that also
/// starts on the mode's side of `i`, and `src[i]` the leftmost (`Prev`) or
/// rightmost (`Succ`) such start. `src[i]` is `None` iff `len[i] == 0`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Factors {
    pub len: Vec<usize>,
    pub src: Vec<Option<usize>>,
}

impl Factors {
    pub fn with_len(n: usize) -> Self {
        Factors {
            len: vec![0; n],
            src: vec![None; n],
        }
    }

    pub fn size(&self) -> usize {
        self.len.len()
    }

    /// `(len, src)` pairs with `-1` standing for a missing source
    pub fn pairs(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.len
            .iter()
            .zip(self.src.iter())
            .map(|(&l, s)| (l, s.map_or(-1, |p| p as i64)))
    }
}

fn common_prefix(s: &[u8], i: usize, j: usize, from: usize) -> usize {
    let mut l = from;
    while i + l < s.len() && j + l < s.len() && s[i + l] == s[j + l] {
        l += 1;
    }
    l
}

/// LPF / LSF computation over a text, reusable for both modes.
pub struct Lspf<'a> {
    index: RangeIndex<'a>,
}

impl<'a> Lspf<'a> {
    pub fn new(text: &'a [u8]) -> Result<Self> {
        let start = Instant::now();
        let index = RangeIndex::new(text)?;
        log::debug!(
            "index over {} symbols built in {:?}",
            text.len(),
            start.elapsed()
        );
        Ok(Lspf { index })
    }

    pub fn index(&self) -> &RangeIndex<'a> {
        &self.index
    }

    pub fn text(&self) -> &'a [u8] {
        self.index.esa.text
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// factor arrays for `mode` in freshly allocated storage
    pub fn factors(&self, mode: Mode) -> Factors {
        let mut res = Factors::with_len(self.len());
        self.fill(mode, &mut res.len, &mut res.src);
        res
    }

    /// factor arrays for `mode` written into caller storage of the text's length
    pub fn factors_into(
        &self,
        mode: Mode,
        len_array: &mut [usize],
        src_array: &mut [Option<usize>],
    ) -> Result<()> {
        if len_array.len() != self.len() || src_array.len() != self.len() {
            return Err(Error::OutputSize {
                expected: self.len(),
                len: len_array.len(),
                src: src_array.len(),
            });
        }
        self.fill(mode, len_array, src_array);
        Ok(())
    }

    /// LPF and LSF arrays, computed in parallel over the shared index
    pub fn factors_both(&self) -> (Factors, Factors) {
        rayon::join(|| self.factors(Mode::Prev), || self.factors(Mode::Succ))
    }

    /// naive quadratic computation of the same arrays, for verification
    pub fn naive_factors(&self, mode: Mode) -> Factors {
        crate::naive::naive_factors(&self.index, mode)
    }

    fn fill(&self, mode: Mode, len_array: &mut [usize], src_array: &mut [Option<usize>]) {
        let n = self.len();
        len_array.fill(0);
        src_array.fill(None);
        if n == 0 {
            return;
        }
        let start = Instant::now();
        let s = self.text();
        let nb = neighbors(&self.index.esa, mode);

        // the first (Prev) or last (Succ) position has nothing on its side
        let range = match mode {
            Mode::Prev => 1..n,
            Mode::Succ => 0..n - 1,
        };
        // lcp with the before / after neighbor drops by at most one per step
        let (mut lcp_before, mut lcp_after) = (0_usize, 0_usize);
        for i in range {
            let lb = lcp_before.saturating_sub(1);
            let la = lcp_after.saturating_sub(1);
            lcp_before = match nb.before[i] {
                -1 => 0,
                j => common_prefix(s, i, j as usize, lb),
            };
            lcp_after = match nb.after[i] {
                -1 => 0,
                j => common_prefix(s, i, j as usize, la),
            };
            let l = lcp_before.max(lcp_after);
            len_array[i] = l;
            if l == 0 {
                continue;
            }
            let occ = if lcp_before >= lcp_after {
                nb.before[i] as usize
            } else {
                nb.after[i] as usize
            };
            debug_assert_eq!(l, self.index.lcp(i, occ));

            // every suffix in the lca's subtree shares l symbols with i
            let (leftmost, rightmost) = self.index.subtree_extremes(i, occ);
            src_array[i] = Some(match mode {
                Mode::Prev => leftmost,
                Mode::Succ => rightmost,
            });
        }
        log::debug!(
            "{} factors of {} positions computed in {:?}",
            mode,
            n,
            start.elapsed()
        );
    }
}

#[cfg(test)]
fn check_against_naive(s: &[u8]) {
    let lspf = Lspf::new(s).unwrap();
    for mode in [Mode::Prev, Mode::Succ] {
        assert_eq!(
            lspf.factors(mode),
            lspf.naive_factors(mode),
            "{} on {:?}",
            mode,
            String::from_utf8_lossy(s)
        );
    }
}

#[test]
fn test_small_texts() {
    for s in ["abbaabbbaaabab", "ananas", "aabbabaabbaababbabab", "a", "aa", "ab"] {
        check_against_naive(s.as_bytes());
    }
}

#[test]
fn test_word_families() {
    for i in 0..10 {
        check_against_naive(&crate::words::fibonacci(i));
        check_against_naive(&crate::words::period_doubling(i));
    }
    for i in 0..7 {
        check_against_naive(&crate::words::thue_morse(i));
    }
}

#[test]
fn test_ananas() {
    let lspf = Lspf::new(b"ananas").unwrap();
    let f = lspf.factors(Mode::Prev);
    assert_eq!(f.len, vec![0, 0, 3, 2, 1, 0]);
    assert_eq!(f.src, vec![None, None, Some(0), Some(1), Some(0), None]);
    let f = lspf.factors(Mode::Succ);
    assert_eq!(f.len, vec![3, 2, 1, 0, 0, 0]);
    assert_eq!(f.src, vec![Some(2), Some(3), Some(4), None, None, None]);
}

#[test]
fn test_tie_break() {
    // "ab" occurs at 0, 2 and 4
    let lspf = Lspf::new(b"ababab").unwrap();
    let f = lspf.factors(Mode::Prev);
    assert_eq!(f.len, vec![0, 0, 4, 3, 2, 1]);
    assert_eq!(f.src, vec![None, None, Some(0), Some(1), Some(0), Some(1)]);
    let f = lspf.factors(Mode::Succ);
    assert_eq!(f.len, vec![4, 3, 2, 1, 0, 0]);
    assert_eq!(f.src, vec![Some(2), Some(3), Some(4), Some(5), None, None]);

    let lspf = Lspf::new(b"abcabxab").unwrap();
    let f = lspf.factors(Mode::Prev);
    assert_eq!((f.len[6], f.src[6]), (2, Some(0)));
    let f = lspf.factors(Mode::Succ);
    assert_eq!((f.len[0], f.src[0]), (2, Some(6)));
}

#[test]
fn test_two_symbols() {
    let lspf = Lspf::new(b"aa").unwrap();
    let f = lspf.factors(Mode::Prev);
    assert_eq!((f.len, f.src), (vec![0, 1], vec![None, Some(0)]));
    let f = lspf.factors(Mode::Succ);
    assert_eq!((f.len, f.src), (vec![1, 0], vec![Some(1), None]));
}

#[test]
fn test_factors_into() {
    let lspf = Lspf::new(b"abab").unwrap();
    let mut len = vec![7; 4];
    let mut src = vec![Some(7); 4];
    lspf.factors_into(Mode::Prev, &mut len, &mut src).unwrap();
    assert_eq!(len, vec![0, 0, 2, 1]);
    assert_eq!(src, vec![None, None, Some(0), Some(1)]);

    let mut short = vec![0; 3];
    assert_eq!(
        lspf.factors_into(Mode::Prev, &mut short, &mut src),
        Err(Error::OutputSize {
            expected: 4,
            len: 3,
            src: 4
        })
    );
}

#[test]
fn test_empty_and_idempotent() {
    let lspf = Lspf::new(b"").unwrap();
    assert_eq!(lspf.factors(Mode::Prev), Factors::default());
    assert_eq!(lspf.factors(Mode::Succ), Factors::default());

    let lspf = Lspf::new(b"aabbabaabbaababbabab").unwrap();
    let (p, s) = lspf.factors_both();
    assert_eq!(p, lspf.factors(Mode::Prev));
    assert_eq!(s, lspf.factors(Mode::Succ));
    assert_eq!(p.len[0], 0);
    assert_eq!(s.src[19], None);
}

#[test]
fn test_mode_parsing() {
    assert_eq!("PREV".parse::<Mode>(), Ok(Mode::Prev));
    assert_eq!("succ".parse::<Mode>(), Ok(Mode::Succ));
    assert!(matches!(
        "BOTH".parse::<Mode>(),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(Mode::Succ.to_string(), "SUCC");
}
