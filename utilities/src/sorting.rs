use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smolsort_core::{Algorithm, Sorter};

/// Lengths every algorithm is tested with.
pub const TEST_SIZES: [usize; 24] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 20, 24, 33, 50, 100, 500, 2_048,
];

/// An element that only compares on `key`, remembering where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i32,
    pub origin: usize,
}

impl Tagged {
    /// Tags `keys` with their index.
    pub fn tag(keys: &[i32]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(origin, &key)| Tagged { key, origin })
            .collect()
    }

    pub fn is_less(a: &Tagged, b: &Tagged) -> bool {
        a.key < b.key
    }
}

/// Test inputs, all deterministic for a given `seed`.
pub struct Patterns {
    rng: StdRng,
}

impl Patterns {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn random(&mut self, len: usize) -> Vec<i32> {
        (0..len).map(|_| self.rng.gen()).collect()
    }

    /// Random values drawn from `0..distinct`, so most keys repeat.
    pub fn few_unique(&mut self, len: usize, distinct: i32) -> Vec<i32> {
        (0..len).map(|_| self.rng.gen_range(0..distinct)).collect()
    }

    /// Every named pattern of length `len`.
    pub fn all(&mut self, len: usize) -> Vec<(&'static str, Vec<i32>)> {
        let n = len as i32;
        vec![
            ("random", self.random(len)),
            ("few_unique", self.few_unique(len, 4)),
            ("binary", self.few_unique(len, 2)),
            ("ascending", (0..n).collect()),
            ("descending", (0..n).rev().collect()),
            ("all_equal", vec![42; len]),
            ("organ_pipe", (0..n / 2).chain((0..n - n / 2).rev()).collect()),
            ("saw", (0..n).map(|i| i % 17).collect()),
        ]
    }
}

/// Sorts a copy of `input` with `algorithm` and checks the result against the standard library.
pub fn assert_sorts<T>(algorithm: Algorithm, pattern: &str, input: &[T])
where
    T: Ord + Clone + Debug,
{
    let mut expected = input.to_vec();
    expected.sort();

    let mut actual = input.to_vec();
    algorithm.sort(&mut actual);

    if actual != expected {
        if input.len() <= 100 {
            eprintln!("Original: {input:?}");
            eprintln!("Expected: {expected:?}");
            eprintln!("Got:      {actual:?}");
        }
        panic!("{algorithm} failed on {} {pattern} elements", input.len());
    }
}

/// Whether no adjacent pair of `slice` is out of order under `is_less`.
pub fn is_sorted_by<T>(slice: &[T], mut is_less: impl FnMut(&T, &T) -> bool) -> bool {
    slice.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// Whether elements with equal keys appear in order of origin.
pub fn is_stable(sorted: &[Tagged]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].key != w[1].key || w[0].origin < w[1].origin)
}

/// Runs `algorithm` with a comparator that counts its calls and returns the count.
pub fn count_comparisons<T: Ord>(algorithm: Algorithm, slice: &mut [T]) -> usize {
    let mut calls = 0;
    algorithm.sort_by(slice, |a, b| {
        calls += 1;
        a < b
    });
    calls
}
