use crate::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use smolsort_core::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort repeatedly steps through the slice, compares adjacent elements and swaps them if
/// they are in the wrong order. The pass through the slice is repeated until a pass makes no
/// swaps.
///
/// Elements are only swapped when the right one is strictly less than the left one, so equal
/// elements never pass each other and the sort is stable.
///
/// Average and worst case: O(n^2) comparisons. Best case (already sorted): a single pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    #[inline]
    fn sort_by<T, F>(&self, slice: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut swapped = true;

        while swapped {
            swapped = false;
            for i in 1..slice.len() {
                if is_less(&slice[i], &slice[i - 1]) {
                    slice.swap(i - 1, i);
                    swapped = true;
                }
            }
        }
    }
}
