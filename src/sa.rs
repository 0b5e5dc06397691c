// routines related to suffix arrays
use cdivsufsort::sort_in_place;

use crate::error::{Error, Result};

/// longest text we can index: positions and the sentinel must fit in an i32
pub const MAX_LEN: usize = i32::MAX as usize - 1;

/// Enhanced suffix array of a text, with the empty (sentinel) suffix at rank 0.
///
/// `sa`, `rank` and `lcp` all have length `n + 1`. `sa[0] == n`,
/// `rank[n] == 0`, and `lcp[r]` is the length of the longest common prefix
/// of the suffixes at ranks `r - 1` and `r` (`lcp[0] == 0`).
#[derive(Debug, Clone)]
pub struct SuffixIndex<'a> {
    pub text: &'a [u8],
    pub sa: Vec<i32>,
    pub rank: Vec<i32>,
    pub lcp: Vec<i32>,
}

impl<'a> SuffixIndex<'a> {
    pub fn new(text: &'a [u8]) -> Result<Self> {
        if text.len() > MAX_LEN {
            return Err(Error::CapacityExceeded {
                len: text.len(),
                max: MAX_LEN,
            });
        }
        let n = text.len();
        let sa = {
            let mut sa = vec![0_i32; n + 1];
            sa[0] = n as i32;
            if n > 0 {
                sort_in_place(text, &mut sa[1..]);
            }
            sa
        };
        let rank = rank_array(&sa);
        let lcp = lcp_array(text, &sa, &rank);
        log::debug!("built suffix index over {} symbols", n);
        Ok(SuffixIndex {
            text,
            sa,
            rank,
            lcp,
        })
    }

    /// number of real positions (the sentinel excluded)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn rank_of(&self, pos: usize) -> usize {
        self.rank[pos] as usize
    }

    pub fn pos_at(&self, rank: usize) -> usize {
        self.sa[rank] as usize
    }
}

/// compute rank array, given suffix array
pub fn rank_array(sa: &[i32]) -> Vec<i32> {
    let mut res = vec![0_i32; sa.len()];
    for (r, &p) in sa.iter().enumerate() {
        res[p as usize] = r as i32;
    }
    res
}

/// compute lcp array given suffix and rank arrays via Kasai's algorithm.
/// `sa` may hold the sentinel suffix `s.len()`, which shares nothing with anyone.
pub fn lcp_array(s: &[u8], sa: &[i32], rank: &[i32]) -> Vec<i32> {
    let n = s.len();
    let mut lcp = vec![0; sa.len()];
    let mut k = 0;
    for i in 0..n {
        let x = rank[i] as usize;
        if x > 0 {
            let y = sa[x - 1] as usize;
            while i + k < n && y + k < n && s[i + k] == s[y + k] {
                k += 1;
            }
            lcp[x] = k as i32;
        }
        k = k.saturating_sub(1);
    }
    lcp
}

#[test]
fn test_lcp_array() {
    let s = crate::words::thue_morse(3);
    let esa = SuffixIndex::new(&s).unwrap();
    // abbabaab$ : sentinel first, then the sorted suffixes
    assert_eq!(esa.sa, vec![8, 5, 6, 3, 0, 7, 4, 2, 1]);
    assert_eq!(esa.lcp, vec![0, 0, 1, 2, 2, 0, 1, 2, 1]);
    for (r, &p) in esa.sa.iter().enumerate() {
        assert_eq!(esa.rank_of(p as usize), r);
    }
}

#[test]
fn test_empty_index() {
    let esa = SuffixIndex::new(b"").unwrap();
    assert!(esa.is_empty());
    assert_eq!(esa.sa, vec![0]);
    assert_eq!(esa.rank, vec![0]);
    assert_eq!(esa.lcp, vec![0]);
}

#[test]
fn test_lcp_against_direct_comparison() {
    let s = b"mississippi";
    let esa = SuffixIndex::new(s).unwrap();
    for r in 1..esa.sa.len() {
        let a = &s[esa.pos_at(r - 1)..];
        let b = &s[esa.pos_at(r)..];
        assert!(a < b);
        let l = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        assert_eq!(esa.lcp[r] as usize, l);
    }
}
