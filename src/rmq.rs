// sparse tables for idempotent range queries (min / max)

/// Answers `pick` over any inclusive range of a fixed array in constant time,
/// after O(n log n) preprocessing. `pick` must be idempotent (min, max).
pub struct SparseTable {
    table: Vec<Vec<i32>>,
    pick: fn(i32, i32) -> i32,
}

impl SparseTable {
    pub fn new(a: &[i32], pick: fn(i32, i32) -> i32) -> Self {
        let mut table = vec![a.to_vec()];
        let mut w = 1;
        while 2 * w <= a.len() {
            let prev = &table[table.len() - 1];
            let level: Vec<i32> = (0..=a.len() - 2 * w)
                .map(|i| pick(prev[i], prev[i + w]))
                .collect();
            table.push(level);
            w *= 2;
        }
        SparseTable { table, pick }
    }

    pub fn min(a: &[i32]) -> Self {
        Self::new(a, std::cmp::min)
    }

    pub fn max(a: &[i32]) -> Self {
        Self::new(a, std::cmp::max)
    }

    pub fn len(&self) -> usize {
        self.table[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.table[0].is_empty()
    }

    /// value of `pick` over `a[l..=r]`; requires `l <= r < len`
    pub fn query(&self, l: usize, r: usize) -> i32 {
        debug_assert!(l <= r && r < self.len());
        let k = (usize::BITS - 1 - (r - l + 1).leading_zeros()) as usize;
        let level = &self.table[k];
        (self.pick)(level[l], level[r + 1 - (1 << k)])
    }
}

#[test]
fn test_sparse_table() {
    let a = vec![5, 2, 7, 7, 1, 9, 3, 3, 8, 0, 4];
    let mn = SparseTable::min(&a);
    let mx = SparseTable::max(&a);
    for l in 0..a.len() {
        for r in l..a.len() {
            assert_eq!(mn.query(l, r), *a[l..=r].iter().min().unwrap());
            assert_eq!(mx.query(l, r), *a[l..=r].iter().max().unwrap());
        }
    }
}

#[test]
fn test_single_element() {
    let t = SparseTable::min(&[42]);
    assert_eq!(t.len(), 1);
    assert_eq!(t.query(0, 0), 42);
}
