// lcp and subtree queries on the virtual suffix tree of an enhanced suffix array
use crate::error::Result;
use crate::rmq::SparseTable;
use crate::sa::SuffixIndex;

/// Suffix index prepared for lowest-common-ancestor style queries.
///
/// A node of the (virtual) suffix tree at string depth `d` is a maximal rank
/// interval `[lb, rb]` with `lcp[r] >= d` for all `lb < r <= rb`. The lca of
/// two leaves is the smallest such interval containing both ranks, and its
/// depth is the minimum lcp value strictly between them.
pub struct RangeIndex<'a> {
    pub esa: SuffixIndex<'a>,
    lcp_min: SparseTable,
    sa_min: SparseTable,
    sa_max: SparseTable,
}

impl<'a> RangeIndex<'a> {
    pub fn new(text: &'a [u8]) -> Result<Self> {
        Ok(Self::from_esa(SuffixIndex::new(text)?))
    }

    pub fn from_esa(esa: SuffixIndex<'a>) -> Self {
        let lcp_min = SparseTable::min(&esa.lcp);
        let sa_min = SparseTable::min(&esa.sa);
        let sa_max = SparseTable::max(&esa.sa);
        RangeIndex {
            esa,
            lcp_min,
            sa_min,
            sa_max,
        }
    }

    pub fn len(&self) -> usize {
        self.esa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.esa.is_empty()
    }

    /// ranks of `i` and `j`, smaller first
    fn ranks(&self, i: usize, j: usize) -> (usize, usize) {
        debug_assert!(i != j && i < self.len() && j < self.len());
        let (ri, rj) = (self.esa.rank_of(i), self.esa.rank_of(j));
        (ri.min(rj), ri.max(rj))
    }

    /// length of the longest common prefix of the suffixes at `i` and `j` (i != j)
    pub fn lcp(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = self.ranks(i, j);
        self.lcp_min.query(lo + 1, hi) as usize
    }

    /// rank interval `[lb, rb]` of the lca of the leaves `i` and `j`, with its depth
    pub fn interval(&self, i: usize, j: usize) -> (usize, usize, usize) {
        let (lo, hi) = self.ranks(i, j);
        let d = self.lcp_min.query(lo + 1, hi);

        // lcp values stay >= d on a contiguous run around [lo, hi]; find its ends
        let (mut a, mut b) = (0, lo);
        while a < b {
            let m = (a + b) / 2;
            if self.lcp_min.query(m + 1, lo) >= d {
                b = m;
            } else {
                a = m + 1;
            }
        }
        let lb = a;

        let last = self.esa.sa.len() - 1;
        let (mut a, mut b) = (hi, last);
        while a < b {
            let m = (a + b + 1) / 2;
            if self.lcp_min.query(hi + 1, m) >= d {
                a = m;
            } else {
                b = m - 1;
            }
        }
        (lb, a, d as usize)
    }

    /// Smallest and largest text position among all suffixes in the subtree of
    /// the lca of `i` and `j`, i.e. among all suffixes sharing at least
    /// `lcp(i, j)` symbols with both.
    pub fn subtree_extremes(&self, i: usize, j: usize) -> (usize, usize) {
        let (lb, rb, _) = self.interval(i, j);
        // the sentinel only joins the root, where it must not count
        let lb = lb.max(1);
        (
            self.sa_min.query(lb, rb) as usize,
            self.sa_max.query(lb, rb) as usize,
        )
    }
}

#[test]
fn test_lcp_queries() {
    let s = b"aabbabaabbaababbabab";
    let index = RangeIndex::new(s).unwrap();
    for i in 0..s.len() {
        for j in 0..s.len() {
            if i == j {
                continue;
            }
            let l = s[i..].iter().zip(&s[j..]).take_while(|(x, y)| x == y).count();
            assert_eq!(index.lcp(i, j), l, "lcp({}, {})", i, j);
        }
    }
}

#[test]
fn test_subtree_extremes() {
    let s = b"abcabxabcd";
    let index = RangeIndex::new(s).unwrap();
    for i in 0..s.len() {
        for j in 0..s.len() {
            if i == j {
                continue;
            }
            let d = index.lcp(i, j);
            // everything sharing d symbols with i
            let sharing: Vec<usize> = (0..s.len())
                .filter(|&k| s[k..].len() >= d && s[k..k + d] == s[i..i + d])
                .collect();
            let expected = (sharing[0], sharing[sharing.len() - 1]);
            assert_eq!(index.subtree_extremes(i, j), expected, "({}, {})", i, j);
        }
    }
}

#[test]
fn test_interval_at_root() {
    let s = b"ab";
    let index = RangeIndex::new(s).unwrap();
    // "a" and "b" only meet at the root, which spans every rank
    assert_eq!(index.interval(0, 1), (0, 2, 0));
    assert_eq!(index.subtree_extremes(0, 1), (0, 1));
}
