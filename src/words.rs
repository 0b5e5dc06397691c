// word families used as test texts
use rand::Rng;

/// apply the morphism `image` to `seed` `k` times
fn iterate_morphism(seed: &[u8], image: impl Fn(u8) -> &'static [u8], k: usize) -> Vec<u8> {
    let mut w = seed.to_vec();
    for _ in 0..k {
        w = w.iter().flat_map(|&c| image(c).iter().copied()).collect();
    }
    w
}

// Fibonacci words
// 0 : b
// 1 : a
// 2 : ab
// 3 : aba
// i : f(i-1) f(i-2)
pub fn fibonacci(i: usize) -> Vec<u8> {
    if i == 0 {
        return b"b".to_vec();
    }
    iterate_morphism(b"a", |c| if c == b'a' { &b"ab"[..] } else { &b"a"[..] }, i - 1)
}

// Thue-Morse words
// 0: a, 1: ab, 2: abba
pub fn thue_morse(i: usize) -> Vec<u8> {
    iterate_morphism(b"a", |c| if c == b'a' { &b"ab"[..] } else { &b"ba"[..] }, i)
}

// period-doubling words
// 0: a, 1: ab, 2: abaa
pub fn period_doubling(i: usize) -> Vec<u8> {
    iterate_morphism(b"a", |c| if c == b'a' { &b"ab"[..] } else { &b"aa"[..] }, i)
}

/// all words of length `len` over `alphabet`, in lexicographic order of the alphabet
pub fn all_words(alphabet: &[u8], len: usize) -> Vec<Vec<u8>> {
    let mut res = vec![Vec::with_capacity(len)];
    for _ in 0..len {
        res = res
            .into_iter()
            .flat_map(|w| {
                alphabet.iter().map(move |&c| {
                    let mut v = w.clone();
                    v.push(c);
                    v
                })
            })
            .collect();
    }
    res
}

pub fn random_word<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn test_fibonacci() {
    assert_eq!(fibonacci(0), b"b");
    assert_eq!(fibonacci(1), b"a");
    assert_eq!(fibonacci(2), b"ab");
    assert_eq!(fibonacci(3), b"aba");
    assert_eq!(fibonacci(8), b"abaababaabaababaababaabaababaabaab");
}

#[test]
fn test_thue_morse() {
    assert_eq!(thue_morse(0), b"a");
    assert_eq!(thue_morse(5), b"abbabaabbaababbabaababbaabbabaab");
}

#[test]
fn test_period_doubling() {
    assert_eq!(period_doubling(3), b"abaaabab");
    assert_eq!(period_doubling(4), b"abaaabababaaabaa");
}

#[test]
fn test_all_words() {
    let w = all_words(b"ab", 2);
    assert_eq!(w, vec![b"aa".to_vec(), b"ab".to_vec(), b"ba".to_vec(), b"bb".to_vec()]);
    assert_eq!(all_words(b"abc", 0), vec![Vec::<u8>::new()]);
    assert_eq!(all_words(b"abc", 4).len(), 81);
}

#[test]
fn test_random_word() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let w = random_word(&mut rng, b"xyz", 50);
    assert_eq!(w.len(), 50);
    assert!(w.iter().all(|c| b"xyz".contains(c)));
}
