use crate::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort builds the sorted output one element at a time. For every position `i` it takes
/// the element there and moves it left past each predecessor that is strictly greater than it,
/// stopping at the first predecessor that is less than or equal to it.
///
/// Because the scan stops at an equal predecessor, equal elements never pass each other and the
/// sort is stable. Already sorted input costs one comparison per element.
///
/// Average and worst case: O(n^2). Best case: O(n).
///
/// # Usage
///```
/// use smolsort_core::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    #[inline]
    fn sort_by<T, F>(&self, slice: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        insertion_pass(slice, 1, &mut is_less);
    }
}

/// Insertion sorts each of the `gap` interleaved subsequences of `slice`.
///
/// With `gap == 1` this is a complete insertion sort. Shell sort runs it once per gap.
pub(crate) fn insertion_pass<T, F>(slice: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap > 0);

    for unsorted in gap..slice.len() {
        // `slice[i]` is always the element being inserted.
        let mut i = unsorted;
        while i >= gap && is_less(&slice[i], &slice[i - gap]) {
            slice.swap(i - gap, i);
            i -= gap;
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        InsertionSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn sorted_input_is_linear() {
        let mut calls = 0;
        let mut slice = (0..100).collect::<Vec<_>>();
        InsertionSorter.sort_by(&mut slice, |a, b| {
            calls += 1;
            a < b
        });
        assert_eq!(calls, 99);
    }

    #[test]
    fn gapped_pass_sorts_each_subsequence() {
        let mut slice = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        insertion_pass(&mut slice, 3, &mut |a: &i32, b: &i32| a < b);
        // Positions 0, 3, 6, 9 | 1, 4, 7 | 2, 5, 8
        assert_eq!(slice, [0, 2, 1, 3, 5, 4, 6, 8, 7, 9]);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        let mut slice = [(3, 'a'), (1, 'a'), (3, 'b'), (2, 'a'), (1, 'b'), (3, 'c')];
        InsertionSorter.sort_by(&mut slice, |a, b| a.0 < b.0);
        assert_eq!(
            slice,
            [(1, 'a'), (1, 'b'), (2, 'a'), (3, 'a'), (3, 'b'), (3, 'c')]
        );
    }

    #[quickcheck]
    fn matches_std_stable_sort(mut v: Vec<(u8, u16)>) -> bool {
        let mut expected = v.clone();
        expected.sort_by_key(|e| e.0);
        InsertionSorter.sort_by(&mut v, |a, b| a.0 < b.0);
        v == expected
    }
}
