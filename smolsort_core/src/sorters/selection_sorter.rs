use crate::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use smolsort_core::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// The slice is split into a sorted prefix and an unsorted rest. Each round finds the smallest
/// element of the rest and exchanges it with the first element of the rest, growing the prefix by
/// one.
///
/// It always makes O(n^2) comparisons, but never more than `n - 1` swaps, and skips the swap when
/// the smallest element is already in place. That makes it the one to reach for when writes cost
/// far more than reads.
///
/// The long-distance exchange can carry an element past an equal one, so the sort is not stable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    fn sort_by<T, F>(&self, slice: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        for unsorted in 0..slice.len() {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..slice.len() {
                if is_less(&slice[i], &slice[smallest_in_rest]) {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                slice.swap(unsorted, smallest_in_rest);
            }
        }
    }
}
