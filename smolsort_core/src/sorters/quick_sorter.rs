use super::heapsort::heapsort;
use crate::Sorter;

/// How a [`QuickSorter`] picks the pivot of each partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pivot {
    /// The middle element. Fast on sorted and reverse sorted input.
    Middle,

    /// Median of the first, middle and last elements. Only the first and last are put in
    /// order; the pivot is picked among the three without moving the middle one.
    Median,

    /// Median of the first, middle and last elements, with all three swapped into order. The
    /// first and last elements are then already on the correct side and are left out of the
    /// partition scan.
    MedianSwapped,
}

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use smolsort_core::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter::MEDIAN_SWAPPED.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort picks a pivot element and partitions the slice with Hoare's two pointer scheme: the
/// left pointer skips elements ordered before the pivot, the right pointer skips elements the
/// pivot is ordered before, and the pair they stop on is swapped. Once the pointers cross, both
/// sides are sorted the same way.
///
/// Average complexity O(n log n). The smaller side is always sorted first by recursion and the
/// larger one by looping, so the stack never grows past `log2(n)` frames. Inputs that keep
/// producing lopsided partitions run out of a `2 * log2(n)` partition budget and the remaining
/// part is finished with heapsort, which keeps the worst case at O(n log n).
///
/// Not stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuickSorter {
    pub pivot: Pivot,
}

impl QuickSorter {
    pub const MIDDLE: Self = Self {
        pivot: Pivot::Middle,
    };
    pub const MEDIAN: Self = Self {
        pivot: Pivot::Median,
    };
    pub const MEDIAN_SWAPPED: Self = Self {
        pivot: Pivot::MedianSwapped,
    };
}

impl Sorter for QuickSorter {
    #[inline]
    fn sort_by<T, F>(&self, slice: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let limit = 2 * slice.len().checked_ilog2().unwrap_or(0) as usize;
        quicksort(slice, self.pivot, limit, &mut is_less);
    }
}

fn quicksort<T, F>(mut slice: &mut [T], pivot: Pivot, mut limit: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while slice.len() > 1 {
        if limit == 0 {
            heapsort(slice, is_less);
            return;
        }
        limit -= 1;

        let (end, start) = partition(slice, pivot, is_less);
        debug_assert!(end <= start);

        let (left, rest) = slice.split_at_mut(end);
        let right = &mut rest[start - end..];

        if left.len() < right.len() {
            quicksort(left, pivot, limit, is_less);
            slice = right;
        } else {
            quicksort(right, pivot, limit, is_less);
            slice = left;
        }
    }
}

/// Partitions `slice` (at least two elements) around a pivot chosen by `pivot`.
///
/// Returns `(end, start)`: `slice[..end]` and `slice[start..]` still need sorting, anything in
/// between is equal to the pivot and already in place.
fn partition<T, F>(slice: &mut [T], pivot: Pivot, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    let mid = len / 2;

    // The pivot is followed by position so it never needs to be copied out. `right` is one past
    // the right pointer.
    let (mut pivot_at, mut left, mut right) = match pivot {
        Pivot::Middle => (mid, 0, len),
        Pivot::Median => {
            let mut pivot_at = order_ends(slice, mid, is_less);
            if is_less(&slice[pivot_at], &slice[0]) {
                pivot_at = 0;
            } else if is_less(&slice[len - 1], &slice[pivot_at]) {
                pivot_at = len - 1;
            }
            (pivot_at, 0, len)
        }
        Pivot::MedianSwapped => {
            let pivot_at = order_ends(slice, mid, is_less);
            if is_less(&slice[pivot_at], &slice[0]) {
                slice.swap(0, mid);
            } else if is_less(&slice[len - 1], &slice[pivot_at]) {
                slice.swap(mid, len - 1);
            }
            (mid, 1, len - 1)
        }
    };

    while left < right {
        if is_less(&slice[left], &slice[pivot_at]) {
            left += 1;
        } else if is_less(&slice[pivot_at], &slice[right - 1]) {
            right -= 1;
        } else {
            slice.swap(left, right - 1);
            if pivot_at == left {
                pivot_at = right - 1;
            } else if pivot_at == right - 1 {
                pivot_at = left;
            }
            left += 1;
            right -= 1;
        }
    }

    (right, left)
}

/// Swaps the first and last elements into order and returns where the element that was at `mid`
/// is now. That is `mid` itself unless the slice has two elements.
fn order_ends<T, F>(slice: &mut [T], mid: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = slice.len() - 1;
    if is_less(&slice[last], &slice[0]) {
        slice.swap(0, last);
        if mid == last {
            return 0;
        }
    }
    mid
}

#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck_macros::quickcheck;

    const ALL: [QuickSorter; 3] = [
        QuickSorter::MIDDLE,
        QuickSorter::MEDIAN,
        QuickSorter::MEDIAN_SWAPPED,
    ];

    fn check(sorter: QuickSorter, mut slice: Vec<i32>) {
        let mut expected = slice.clone();
        expected.sort_unstable();
        sorter.sort(&mut slice);
        assert_eq!(slice, expected, "{sorter:?}");
    }

    #[test]
    fn arbitrary_array() {
        for sorter in ALL {
            let mut slice = [1, 5, 4, 2, 3];
            sorter.sort(&mut slice);
            assert_eq!(slice, [1, 2, 3, 4, 5], "{sorter:?}");
        }
    }

    #[test]
    fn sorted_array() {
        for sorter in ALL {
            check(sorter, (1..10).collect());
        }
    }

    #[test]
    fn very_unsorted() {
        for sorter in ALL {
            check(sorter, (1..1000).rev().collect());
        }
    }

    #[test]
    fn simple_edge_cases() {
        for sorter in ALL {
            check(sorter, vec![]);
            check(sorter, vec![1]);
            check(sorter, vec![1, 2]);
            check(sorter, vec![2, 1]);
            check(sorter, vec![3, 1, 2]);
            check(sorter, vec![2, 2]);
            check(sorter, vec![2, 1, 2]);
        }
    }

    #[test]
    fn every_permutation_of_four() {
        let mut base = [0, 1, 2, 3];
        // Heap's algorithm, iterative.
        let mut c = [0; 4];
        let mut permutations = vec![base];
        let mut i = 1;
        while i < 4 {
            if c[i] < i {
                if i % 2 == 0 {
                    base.swap(0, i);
                } else {
                    base.swap(c[i], i);
                }
                permutations.push(base);
                c[i] += 1;
                i = 1;
            } else {
                c[i] = 0;
                i += 1;
            }
        }
        assert_eq!(permutations.len(), 24);

        for sorter in ALL {
            for permutation in &permutations {
                check(sorter, permutation.to_vec());
            }
        }
    }

    #[test]
    fn adversarial_inputs() {
        let len = 10_000;
        for sorter in ALL {
            check(sorter, (0..len).collect());
            check(sorter, (0..len).rev().collect());
            check(sorter, vec![7; len as usize]);
            check(sorter, (0..len).map(|i| i % 3).collect());
            // Organ pipe: up then down.
            check(sorter, (0..len / 2).chain((0..len / 2).rev()).collect());
            // Saw tooth.
            check(sorter, (0..len).map(|i| i % 64).collect());
        }
    }

    /// Builds an input on which the middle pivot is always the largest remaining element: each
    /// partition then peels off a single element.
    fn middle_pivot_killer(len: usize) -> Vec<usize> {
        // Fill positions in the order the sort visits their middles, handing out the largest
        // remaining key each time.
        let mut slots = (0..len).collect::<Vec<_>>();
        let mut keys = vec![0; len];
        let mut next_key = len;
        while !slots.is_empty() {
            let mid = slots.len() / 2;
            next_key -= 1;
            keys[slots[mid]] = next_key;
            // The pivot swaps with the last element and everything else stays to its left.
            let last = slots.len() - 1;
            slots.swap(mid, last);
            slots.pop();
        }
        keys
    }

    #[test]
    fn lopsided_partitions_fall_back_to_heapsort() {
        let mut slice = middle_pivot_killer(5_000);
        let mut calls = 0usize;
        QuickSorter::MIDDLE.sort_by(&mut slice, |a, b| {
            calls += 1;
            a < b
        });
        assert_eq!(slice, (0..5_000).collect::<Vec<_>>());
        // An unguarded quicksort spends about n^2 / 2 comparisons here.
        assert!(calls < 5_000 * 100, "{calls} comparisons");
    }

    #[test]
    fn median_pivot_ends_may_move_pivot_position() {
        // Two elements where the pivot (the last one) is swapped to the front.
        for sorter in [QuickSorter::MEDIAN, QuickSorter::MEDIAN_SWAPPED] {
            let mut slice = [9, 3];
            sorter.sort(&mut slice);
            assert_eq!(slice, [3, 9]);
        }
    }

    #[test]
    fn custom_comparator() {
        for sorter in ALL {
            let mut slice = [5, 3, 8, 1, 9, 2];
            sorter.sort_by(&mut slice, |a, b| b < a);
            assert_eq!(slice, [9, 8, 5, 3, 2, 1]);
        }
    }

    #[quickcheck]
    fn matches_std_sort(v: Vec<i32>) -> bool {
        let mut expected = v.clone();
        expected.sort_unstable();
        ALL.into_iter().all(|sorter| {
            let mut v = v.clone();
            sorter.sort(&mut v);
            v == expected
        })
    }

    #[quickcheck]
    fn matches_std_sort_with_duplicates(v: Vec<u8>) -> bool {
        let v = v.into_iter().map(|x| x % 4).collect::<Vec<_>>();
        let mut expected = v.clone();
        expected.sort_unstable();
        ALL.into_iter().all(|sorter| {
            let mut v = v.clone();
            sorter.sort(&mut v);
            v == expected
        })
    }
}
