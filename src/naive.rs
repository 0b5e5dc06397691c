// brute-force factor arrays, used to check the linear-time ones
use crate::lspf::{Factors, Mode};
use crate::range::RangeIndex;

/// Scans every candidate on the mode's side of each position, nearest to the
/// far end first, keeping the first candidate with a strictly longer lcp.
/// O(n^2 log n) because of the lcp query per pair.
pub fn naive_factors(index: &RangeIndex, mode: Mode) -> Factors {
    let n = index.len();
    let mut res = Factors::with_len(n);
    for i in 0..n {
        let candidates: Box<dyn Iterator<Item = usize>> = match mode {
            Mode::Prev => Box::new(0..i),
            Mode::Succ => Box::new((i + 1..n).rev()),
        };
        for j in candidates {
            let l = index.lcp(i, j);
            if l > res.len[i] {
                res.len[i] = l;
                res.src[i] = Some(j);
            }
        }
    }
    res
}

#[test]
fn test_naive_factors() {
    let index = RangeIndex::new(b"abbaabbbaaabab").unwrap();
    let f = naive_factors(&index, Mode::Prev);
    assert_eq!(f.len, vec![0, 0, 1, 1, 3, 2, 4, 3, 2, 3, 2, 2, 2, 1]);
    let src: Vec<i64> = f.pairs().map(|(_, p)| p).collect();
    assert_eq!(src, vec![-1, -1, 1, 0, 0, 1, 1, 2, 3, 3, 0, 2, 0, 1]);
}

#[test]
fn test_naive_succ_boundary() {
    let index = RangeIndex::new(b"aa").unwrap();
    let f = naive_factors(&index, Mode::Succ);
    assert_eq!(f.len, vec![1, 0]);
    assert_eq!(f.src, vec![Some(1), None]);
}
