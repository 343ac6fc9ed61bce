use crate::Sorter;

/// The gap a "m" comb sort variant uses in place of a computed gap of 9 or 10.
///
/// Turns the tail of the gap sequence into `11, 8, 6, 4, 3, 2, 1`, which in practice leaves fewer
/// small values stranded near the end of the slice. The value is empirical and only applies to
/// the two factors it was measured with.
pub const RULE_OF_ELEVEN: usize = 11;

/// Gap shrink rule of a [`CombSorter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombGap {
    /// Multiply the gap by 10/13 (shrink factor 1.3).
    Thirteen,

    /// As [`CombGap::Thirteen`], with a computed gap of 9 or 10 raised to [`RULE_OF_ELEVEN`].
    ThirteenM,

    /// Multiply the gap by 3/4 (shrink factor 1.33). The division is a shift, which is what makes
    /// it attractive on cores without a hardware divider.
    ThreeQuarters,

    /// As [`CombGap::ThreeQuarters`], with a computed gap of 9 or 10 raised to
    /// [`RULE_OF_ELEVEN`].
    ThreeQuartersM,
}

impl CombGap {
    /// `(numerator, denominator)` of the shrink factor.
    const fn ratio(self) -> (usize, usize) {
        match self {
            CombGap::Thirteen | CombGap::ThirteenM => (10, 13),
            CombGap::ThreeQuarters | CombGap::ThreeQuartersM => (3, 4),
        }
    }

    const fn rule_of_eleven(self) -> bool {
        matches!(self, CombGap::ThirteenM | CombGap::ThreeQuartersM)
    }

    /// The gap of the pass that follows a pass with `gap`. Never returns 0.
    ///
    /// Computes `gap * numerator / denominator` as `(gap / d) * n + (gap % d) * n / d`, which is
    /// the same value for every `gap` but cannot overflow.
    ///
    /// ```
    /// use smolsort_core::CombGap;
    ///
    /// assert_eq!(CombGap::Thirteen.next_gap(100), 76);
    /// assert_eq!(CombGap::Thirteen.next_gap(12), 9);
    /// assert_eq!(CombGap::ThirteenM.next_gap(12), 11);
    /// assert_eq!(CombGap::ThreeQuarters.next_gap(1), 1);
    /// assert_eq!(CombGap::ThreeQuarters.next_gap(usize::MAX), usize::MAX / 4 * 3 + 2);
    /// ```
    pub const fn next_gap(self, gap: usize) -> usize {
        let (numerator, denominator) = self.ratio();
        let gap = (gap / denominator) * numerator + (gap % denominator) * numerator / denominator;

        if self.rule_of_eleven() && (gap == 9 || gap == 10) {
            RULE_OF_ELEVEN
        } else if gap == 0 {
            1
        } else {
            gap
        }
    }

    /// Longest slice a port that computes the gap as a plain `gap * numerator / denominator` in
    /// an index type with maximum `index_max` can sort before the product overflows.
    ///
    /// [`CombGap::next_gap`] has no such limit. This is for sizing buffers on targets where the
    /// shrink is written the short way, e.g. a 16-bit index:
    ///
    /// ```
    /// use smolsort_core::CombGap;
    ///
    /// assert_eq!(CombGap::Thirteen.naive_len_limit(u16::MAX as usize), 6553);
    /// assert_eq!(CombGap::ThreeQuartersM.naive_len_limit(u16::MAX as usize), 21845);
    /// ```
    pub const fn naive_len_limit(self, index_max: usize) -> usize {
        index_max / self.ratio().0
    }
}

/// An implementation of [Comb Sort](https://en.wikipedia.org/wiki/Comb_sort)
///
/// # Usage
///```
/// use smolsort_core::{CombSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// CombSorter::COMB_133.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Comb sort is bubble sort over a shrinking gap. Each pass compares elements `gap` apart and
/// swaps them when out of order, so small values near the end ("turtles") travel far in a single
/// swap. The gap starts at the slice length and shrinks by a constant factor every pass down to
/// 1. The sort is finished after a pass with gap 1 that makes no swap.
///
/// Average complexity: O(n^2 / 2^p) for `p` passes. Not stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombSorter {
    pub gap: CombGap,
}

impl CombSorter {
    pub const COMB_13: Self = Self {
        gap: CombGap::Thirteen,
    };
    pub const COMB_13M: Self = Self {
        gap: CombGap::ThirteenM,
    };
    pub const COMB_133: Self = Self {
        gap: CombGap::ThreeQuarters,
    };
    pub const COMB_133M: Self = Self {
        gap: CombGap::ThreeQuartersM,
    };
}

impl Sorter for CombSorter {
    #[inline]
    fn sort_by<T, F>(&self, slice: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = slice.len();
        let mut gap = len;
        let mut swapped = true;

        while swapped || gap > 1 {
            gap = self.gap.next_gap(gap);
            swapped = false;
            for i in 0..len.saturating_sub(gap) {
                if is_less(&slice[i + gap], &slice[i]) {
                    slice.swap(i, i + gap);
                    swapped = true;
                }
            }
        }
    }
}
