//! Heapsort, the O(n log n) fallback for quicksort partitions that keep going badly.

pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // This binary heap respects the invariant `parent >= child`.
    let mut sift_down = |v: &mut [T], mut node: usize| loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Choose the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    };

    // Build the heap in linear time.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i);
    }

    // Pop maximal elements from the heap.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0);
    }
}

#[cfg(test)]
mod tests {
    use super::heapsort;
    use quickcheck_macros::quickcheck;

    #[test]
    fn sorts() {
        let mut slice = [5, 3, 8, 1, 9, 2, 2, 7];
        heapsort(&mut slice, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(slice, [1, 2, 2, 3, 5, 7, 8, 9]);
    }

    #[quickcheck]
    fn matches_std_sort(mut v: Vec<i16>) -> bool {
        let mut expected = v.clone();
        expected.sort_unstable();
        heapsort(&mut v, &mut |a: &i16, b: &i16| a < b);
        v == expected
    }
}
