//! Seeded input generators.
//!
//! Every generator draws from the same [`StdRng`], so a run is fully reproduced by its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smolsort_core::{ShellSorter, Sorter};

/// Number of distinct values in [`Pattern::FewUnique`] inputs.
const FEW_UNIQUE_VALUES: u16 = 8;

/// Shape of a benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Pattern {
    /// Uniform random values.
    //     .
    // : . : :
    // :.:::.::
    Random,

    /// Random values, already sorted.
    //     .:
    //   .:::
    // .:::::
    Ascending,

    /// Random values, sorted in reverse.
    // :.
    // :::.
    // :::::.
    Descending,

    /// One value repeated.
    AllEqual,

    /// Random values drawn from a handful of keys.
    FewUnique,

    /// Ascending first half, descending second half.
    //   .:.
    // .:::::.
    OrganPipe,
}

impl Pattern {
    /// Inputs the worst case benchmark compares side by side.
    pub const WORST_CASE: [Pattern; 3] = [Pattern::Random, Pattern::Ascending, Pattern::Descending];

    pub const fn label(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Ascending => "sorted",
            Pattern::Descending => "reversed",
            Pattern::AllEqual => "all equal",
            Pattern::FewUnique => "few unique",
            Pattern::OrganPipe => "organ pipe",
        }
    }
}

/// Produces inputs for the benchmarks.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, pattern: Pattern, len: usize) -> Vec<u16> {
        match pattern {
            Pattern::Random => self.random(len),
            Pattern::Ascending => self.sorted(len),
            Pattern::Descending => {
                let mut values = self.sorted(len);
                values.reverse();
                values
            }
            Pattern::AllEqual => vec![self.rng.gen(); len],
            Pattern::FewUnique => (0..len)
                .map(|_| self.rng.gen_range(0..FEW_UNIQUE_VALUES))
                .collect(),
            Pattern::OrganPipe => {
                let mut values = self.sorted(len / 2);
                let mut tail = self.sorted(len - len / 2);
                tail.reverse();
                values.append(&mut tail);
                values
            }
        }
    }

    fn random(&mut self, len: usize) -> Vec<u16> {
        (0..len).map(|_| self.rng.gen::<u16>()).collect()
    }

    // Sorted with one of our own sorters so the harness needs nothing else to build its inputs.
    fn sorted(&mut self, len: usize) -> Vec<u16> {
        let mut values = self.random(len);
        ShellSorter::KNUTH.sort(&mut values);
        values
    }
}

/// A seed from the thread local generator, for runs that were not given one.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}
