//! In-place sorting algorithms for targets where RAM, flash and stack are all scarce.
//!
//! Every sorter works on a mutable slice, allocates nothing and keeps no state between calls.
//! Each one can be driven by the natural ordering of the element type, or by any caller supplied
//! `is_less` predicate that forms a strict weak ordering.
//!
//! # Example
//!
//! ```
//! use smolsort_core::{CombSorter, ShellSorter, Sorter};
//!
//! let mut slice = [5, 3, 8, 1, 9, 2];
//! ShellSorter::TOKUDA.sort(&mut slice);
//! assert_eq!(slice, [1, 2, 3, 5, 8, 9]);
//!
//! // Descending, through a custom comparator.
//! CombSorter::COMB_13M.sort_by(&mut slice, |a, b| b < a);
//! assert_eq!(slice, [9, 8, 5, 3, 2, 1]);
//! ```
//!
//! When the algorithm is picked at runtime, use [`Algorithm`]:
//!
//! ```
//! use smolsort_core::{Algorithm, Sorter};
//!
//! for algorithm in Algorithm::ALL {
//!     let mut slice = [4, 2, 3, 5, 1];
//!     algorithm.sort(&mut slice);
//!     assert_eq!(slice, [1, 2, 3, 4, 5], "{algorithm}");
//! }
//! ```

// clap's derive output names `::std` paths.
#![cfg_attr(not(any(test, feature = "clap")), no_std)]

mod algorithm;
mod sorters;

pub use algorithm::Algorithm;
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::comb_sorter::{CombGap, CombSorter, RULE_OF_ELEVEN};
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::quick_sorter::{Pivot, QuickSorter};
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::shell_sorter::{GapSequence, ShellGaps, ShellSorter, TOKUDA_GAPS};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Implementors provide [`Sorter::sort_by`]. The ascending [`Sorter::sort`] is always that same
/// routine driven by `T::lt`, so the two call shapes cannot drift apart.
pub trait Sorter {
    /// Sorts `slice` in place so that `is_less(&slice[i + 1], &slice[i])` is false for every
    /// adjacent pair.
    ///
    /// `is_less` must be a strict weak ordering. If it is not, the result is some permutation of
    /// the input in an unspecified order.
    fn sort_by<T, F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Sorts `slice` in ascending order.
    #[inline]
    fn sort<T>(&self, slice: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(slice, T::lt);
    }
}
