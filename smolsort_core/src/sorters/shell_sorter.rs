use super::insertion_sorter::insertion_pass;
use crate::Sorter;

/// Gaps found experimentally by Tokuda, see <https://oeis.org/A108870>.
pub const TOKUDA_GAPS: [usize; 13] = [
    1, 4, 9, 20, 46, 103, 233, 525, 1182, 2660, 5985, 13467, 30301,
];

/// The gap sequence a [`ShellSorter`] walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellGaps {
    /// Halve the gap every round: `n/2, n/4, ..., 1`.
    Classic,

    /// Knuth's `(3^k - 1) / 2` sequence: `..., 40, 13, 4, 1`, starting from the largest value
    /// below `n / 3`.
    Knuth,

    /// [`TOKUDA_GAPS`], starting from the largest entry below `n`.
    Tokuda,
}

impl ShellGaps {
    /// The gaps used to sort a slice of `len` elements, largest first. The last gap is always 1
    /// when `len > 1`.
    ///
    /// ```
    /// use smolsort_core::ShellGaps;
    ///
    /// assert_eq!(ShellGaps::Classic.sequence(10).collect::<Vec<_>>(), [5, 2, 1]);
    /// assert_eq!(ShellGaps::Knuth.sequence(100).collect::<Vec<_>>(), [40, 13, 4, 1]);
    /// assert_eq!(ShellGaps::Tokuda.sequence(100).collect::<Vec<_>>(), [46, 20, 9, 4, 1]);
    /// ```
    pub fn sequence(self, len: usize) -> GapSequence {
        let next = match self {
            ShellGaps::Classic => len,
            ShellGaps::Knuth => {
                let mut gap = 1;
                while gap < len / 3 {
                    gap = gap * 3 + 1;
                }
                gap
            }
            // Index of the first gap that is not below `len`; the sequence starts one before it.
            ShellGaps::Tokuda => TOKUDA_GAPS
                .iter()
                .position(|&gap| gap >= len)
                .unwrap_or(TOKUDA_GAPS.len())
                .max(1),
        };

        GapSequence { gaps: self, next }
    }
}

/// Iterator over the gaps of a [`ShellGaps`] sequence. Created by [`ShellGaps::sequence`].
#[derive(Debug, Clone)]
pub struct GapSequence {
    gaps: ShellGaps,
    // Classic: the previous gap. Knuth: the next gap, 0 when done. Tokuda: one past the index of
    // the next gap, 0 when done.
    next: usize,
}

impl Iterator for GapSequence {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self.gaps {
            ShellGaps::Classic => {
                if self.next <= 1 {
                    return None;
                }
                self.next /= 2;
                Some(self.next)
            }
            ShellGaps::Knuth => {
                let gap = self.next;
                if gap == 0 {
                    return None;
                }
                self.next = (gap - 1) / 3;
                Some(gap)
            }
            ShellGaps::Tokuda => {
                if self.next == 0 {
                    return None;
                }
                self.next -= 1;
                Some(TOKUDA_GAPS[self.next])
            }
        }
    }
}

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
///
/// # Usage
///```
/// use smolsort_core::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter::KNUTH.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Shell sort is insertion sort over a shrinking gap. For each gap of the sequence, every run of
/// elements `gap` apart is insertion sorted, which moves far-away elements close to their final
/// position in few steps. The last gap is 1, a plain insertion sort over an almost sorted slice.
///
/// Average complexity is between O(n^1.3) and O(n^1.5) depending on the gap sequence. Elements
/// move across other elements in passes with a gap above 1, so the sort is not stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellSorter {
    pub gaps: ShellGaps,
}

impl ShellSorter {
    pub const CLASSIC: Self = Self {
        gaps: ShellGaps::Classic,
    };
    pub const KNUTH: Self = Self {
        gaps: ShellGaps::Knuth,
    };
    pub const TOKUDA: Self = Self {
        gaps: ShellGaps::Tokuda,
    };
}

impl Sorter for ShellSorter {
    #[inline]
    fn sort_by<T, F>(&self, slice: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        for gap in self.gaps.sequence(slice.len()) {
            insertion_pass(slice, gap, &mut is_less);
        }
    }
}
