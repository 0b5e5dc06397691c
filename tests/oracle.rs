use rand::rngs::StdRng;
use rand::SeedableRng;

use lspf::words::{all_words, fibonacci, period_doubling, random_word, thue_morse};
use lspf::{Factors, Lspf, Mode};

fn common_prefix(s: &[u8], i: usize, j: usize) -> usize {
    s[i..].iter().zip(&s[j..]).take_while(|(a, b)| a == b).count()
}

/// checks the arrays directly against their definition
fn assert_definition(s: &[u8], mode: Mode, f: &Factors) {
    let n = s.len();
    assert_eq!(f.size(), n);
    for i in 0..n {
        let side: Vec<usize> = match mode {
            Mode::Prev => (0..i).collect(),
            Mode::Succ => (i + 1..n).collect(),
        };
        let best = side.iter().map(|&j| common_prefix(s, i, j)).max().unwrap_or(0);
        assert_eq!(f.len[i], best, "{} len at {}", mode, i);
        assert_eq!(f.len[i] == 0, f.src[i].is_none());
        if let Some(p) = f.src[i] {
            let l = f.len[i];
            assert_eq!(s[p..p + l], s[i..i + l]);
            let witnesses = side.iter().copied().filter(|&j| common_prefix(s, i, j) == l);
            let expected = match mode {
                Mode::Prev => witnesses.min(),
                Mode::Succ => witnesses.max(),
            };
            assert_eq!(Some(p), expected, "{} src at {}", mode, i);
        }
    }
}

fn check(s: &[u8]) {
    let lspf = Lspf::new(s).unwrap();
    for mode in [Mode::Prev, Mode::Succ] {
        let f = lspf.factors(mode);
        assert_eq!(f, lspf.naive_factors(mode));
        assert_definition(s, mode, &f);
    }
}

#[test]
fn sample_texts() {
    for s in ["abbaabbbaaabab", "ananas", "aabbabaabbaababbabab", "mississippi"] {
        check(s.as_bytes());
    }
}

#[test]
fn lpf_of_sample() {
    let lspf = Lspf::new(b"aabbabaabbaababbabab").unwrap();
    let f = lspf.factors(Mode::Prev);
    assert_eq!(
        f.len,
        vec![0, 1, 0, 1, 2, 2, 5, 4, 3, 4, 3, 3, 3, 6, 5, 4, 4, 3, 2, 1]
    );
    let src: Vec<i64> = f.pairs().map(|(_, p)| p).collect();
    assert_eq!(
        src,
        vec![-1, 0, -1, 2, 1, 3, 0, 1, 2, 5, 0, 4, 3, 1, 2, 3, 11, 3, 1, 2]
    );
}

#[test]
fn single_and_double_symbol() {
    let lspf = Lspf::new(b"a").unwrap();
    for mode in [Mode::Prev, Mode::Succ] {
        let f = lspf.factors(mode);
        assert_eq!((f.len, f.src), (vec![0], vec![None]));
    }
    let lspf = Lspf::new(b"aa").unwrap();
    let f = lspf.factors(Mode::Prev);
    assert_eq!((f.len[1], f.src[1]), (1, Some(0)));
    let f = lspf.factors(Mode::Succ);
    assert_eq!((f.len[0], f.src[0]), (1, Some(1)));
}

#[test]
fn empty_text() {
    let lspf = Lspf::new(b"").unwrap();
    assert!(lspf.is_empty());
    let (p, s) = lspf.factors_both();
    assert!(p.len.is_empty() && s.src.is_empty());
}

#[test]
fn unusual_symbols() {
    check(&[0, 0, 255, 0, 0, 255, 0]);
    check(&[255; 9]);
}

#[test]
fn word_families() {
    for i in 0..12 {
        check(&fibonacci(i));
    }
    for i in 0..7 {
        check(&thue_morse(i));
        check(&period_doubling(i));
    }
}

#[test]
fn exhaustive_binary() {
    for len in 1..=10 {
        for w in all_words(b"ab", len) {
            check(&w);
        }
    }
}

#[test]
fn random_texts() {
    let mut rng = StdRng::seed_from_u64(42);
    for (alphabet, len) in [(&b"ab"[..], 40), (&b"abc"[..], 60), (&b"acgt"[..], 100)] {
        for _ in 0..20 {
            check(&random_word(&mut rng, alphabet, len));
        }
    }
}

#[test]
fn repeated_calls_agree() {
    let s = fibonacci(10);
    let lspf = Lspf::new(&s).unwrap();
    let first = lspf.factors(Mode::Succ);
    for _ in 0..3 {
        assert_eq!(lspf.factors(Mode::Succ), first);
    }
}
