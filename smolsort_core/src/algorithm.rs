use core::fmt;

use crate::{
    BubbleSorter, CombSorter, InsertionSorter, QuickSorter, SelectionSorter, ShellSorter, Sorter,
};

/// Every sorting routine in the crate, for picking one at runtime.
///
/// ```
/// use smolsort_core::{Algorithm, Sorter};
///
/// let mut slice = [3, 1, 2];
/// Algorithm::CombThirteenM.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3]);
/// assert_eq!(Algorithm::CombThirteenM.name(), "combSort13m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    ShellClassic,
    ShellKnuth,
    ShellTokuda,
    CombThirteen,
    CombThirteenM,
    CombThreeQuarters,
    CombThreeQuartersM,
    QuickMiddle,
    QuickMedian,
    QuickMedianSwapped,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::ShellClassic,
        Algorithm::ShellKnuth,
        Algorithm::ShellTokuda,
        Algorithm::CombThirteen,
        Algorithm::CombThirteenM,
        Algorithm::CombThreeQuarters,
        Algorithm::CombThreeQuartersM,
        Algorithm::QuickMiddle,
        Algorithm::QuickMedian,
        Algorithm::QuickMedianSwapped,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubbleSort",
            Algorithm::Insertion => "insertionSort",
            Algorithm::Selection => "selectionSort",
            Algorithm::ShellClassic => "shellSortClassic",
            Algorithm::ShellKnuth => "shellSortKnuth",
            Algorithm::ShellTokuda => "shellSortTokuda",
            Algorithm::CombThirteen => "combSort13",
            Algorithm::CombThirteenM => "combSort13m",
            Algorithm::CombThreeQuarters => "combSort133",
            Algorithm::CombThreeQuartersM => "combSort133m",
            Algorithm::QuickMiddle => "quickSortMiddle",
            Algorithm::QuickMedian => "quickSortMedian",
            Algorithm::QuickMedianSwapped => "quickSortMedianSwapped",
        }
    }

    /// Whether equal elements always keep their relative order.
    pub const fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion)
    }

    /// Whether the average case is O(n^2).
    pub const fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection
        )
    }

    /// Average time complexity, for display.
    pub const fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection => "O(n^2)",
            Algorithm::ShellClassic | Algorithm::ShellKnuth | Algorithm::ShellTokuda => {
                "O(n^1.3) - O(n^1.5)"
            }
            Algorithm::CombThirteen
            | Algorithm::CombThirteenM
            | Algorithm::CombThreeQuarters
            | Algorithm::CombThreeQuartersM => "O(n^2 / 2^p)",
            Algorithm::QuickMiddle | Algorithm::QuickMedian | Algorithm::QuickMedianSwapped => {
                "O(n log n)"
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Sorter for Algorithm {
    fn sort_by<T, F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Algorithm::Bubble => BubbleSorter.sort_by(slice, is_less),
            Algorithm::Insertion => InsertionSorter.sort_by(slice, is_less),
            Algorithm::Selection => SelectionSorter.sort_by(slice, is_less),
            Algorithm::ShellClassic => ShellSorter::CLASSIC.sort_by(slice, is_less),
            Algorithm::ShellKnuth => ShellSorter::KNUTH.sort_by(slice, is_less),
            Algorithm::ShellTokuda => ShellSorter::TOKUDA.sort_by(slice, is_less),
            Algorithm::CombThirteen => CombSorter::COMB_13.sort_by(slice, is_less),
            Algorithm::CombThirteenM => CombSorter::COMB_13M.sort_by(slice, is_less),
            Algorithm::CombThreeQuarters => CombSorter::COMB_133.sort_by(slice, is_less),
            Algorithm::CombThreeQuartersM => CombSorter::COMB_133M.sort_by(slice, is_less),
            Algorithm::QuickMiddle => QuickSorter::MIDDLE.sort_by(slice, is_less),
            Algorithm::QuickMedian => QuickSorter::MEDIAN.sort_by(slice, is_less),
            Algorithm::QuickMedianSwapped => QuickSorter::MEDIAN_SWAPPED.sort_by(slice, is_less),
        }
    }
}
