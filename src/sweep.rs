// nearest smaller / larger positions in suffix array order
use crate::lspf::Mode;
use crate::sa::SuffixIndex;

/// For each text position `i`, its closest neighbors in suffix array order
/// among the positions on the side of `i` selected by the mode:
/// `{0..i-1}` for `Mode::Prev`, `{i+1..n-1}` for `Mode::Succ`.
/// `-1` when there is no such neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    /// nearest qualifying position with a smaller rank
    pub before: Vec<i32>,
    /// nearest qualifying position with a larger rank
    pub after: Vec<i32>,
}

/// Computes the neighbors in a single pass by deleting positions from a
/// doubly linked list over the suffix array (sentinel excluded).
/// Positions are visited from the far end of the qualifying side, so when `i`
/// is visited the list holds exactly `i` and the positions on its side.
pub fn neighbors(esa: &SuffixIndex, mode: Mode) -> Neighbors {
    let len = esa.len();
    let mut before = vec![-1_i32; len];
    let mut after = vec![-1_i32; len];

    // slot r of the list holds the suffix of rank r + 1
    let list = &esa.sa[1..];
    let mut next: Vec<i32> = (1..=len as i32).collect();
    let mut prev: Vec<i32> = (-1..len as i32 - 1).collect();

    let order: Box<dyn Iterator<Item = usize>> = match mode {
        Mode::Prev => Box::new((0..len).rev()),
        Mode::Succ => Box::new(0..len),
    };
    for i in order {
        let r = esa.rank_of(i) - 1;
        let (p, n) = (prev[r], next[r]);
        if p >= 0 {
            before[i] = list[p as usize];
        }
        if (n as usize) < len {
            after[i] = list[n as usize];
        }

        // unlink i only after its neighbors are read
        if p >= 0 {
            next[p as usize] = n;
        }
        if (n as usize) < len {
            prev[n as usize] = p;
        }
    }
    log::trace!("{:?} neighbors: {:?} / {:?}", mode, before, after);
    Neighbors { before, after }
}

#[cfg(test)]
fn naive_neighbors(esa: &SuffixIndex, mode: Mode) -> Neighbors {
    let len = esa.len();
    let mut res = Neighbors {
        before: vec![-1; len],
        after: vec![-1; len],
    };
    for i in 0..len {
        let side = |j: usize| match mode {
            Mode::Prev => j < i,
            Mode::Succ => j > i,
        };
        let r = esa.rank_of(i);
        res.before[i] = (1..r)
            .rev()
            .map(|q| esa.pos_at(q))
            .find(|&j| side(j))
            .map_or(-1, |j| j as i32);
        res.after[i] = (r + 1..=len)
            .map(|q| esa.pos_at(q))
            .find(|&j| side(j))
            .map_or(-1, |j| j as i32);
    }
    res
}

#[test]
fn test_neighbors() {
    for s in ["abbaabbbaaabab", "ananas", "aabbabaabbaababbabab", "a", "aa"] {
        let esa = SuffixIndex::new(s.as_bytes()).unwrap();
        for mode in [Mode::Prev, Mode::Succ] {
            assert_eq!(neighbors(&esa, mode), naive_neighbors(&esa, mode));
        }
    }
}

#[test]
fn test_neighbors_boundaries() {
    let s = crate::words::fibonacci(8);
    let esa = SuffixIndex::new(&s).unwrap();
    let n = s.len();
    let prev = neighbors(&esa, Mode::Prev);
    assert_eq!((prev.before[0], prev.after[0]), (-1, -1));
    let succ = neighbors(&esa, Mode::Succ);
    assert_eq!((succ.before[n - 1], succ.after[n - 1]), (-1, -1));
    for i in 0..n {
        assert!(prev.before[i] < i as i32 && prev.after[i] < i as i32);
        assert!(succ.before[i] == -1 || succ.before[i] > i as i32);
        assert!(succ.after[i] == -1 || succ.after[i] > i as i32);
    }
}

#[test]
fn test_neighbors_empty() {
    let esa = SuffixIndex::new(b"").unwrap();
    let nb = neighbors(&esa, Mode::Prev);
    assert!(nb.before.is_empty() && nb.after.is_empty());
}
