use std::{cell::Cell, cmp::Ordering, rc::Rc};

/// Wraps an element so that every comparison made on it is counted.
///
/// Only `elem` takes part in comparisons. All wrappers of one run share `comparisons`, so the
/// counter ends up holding the total for the whole sort, whichever comparison trait the sorter
/// goes through.
#[derive(Debug, Clone)]
pub struct SortEvaluator<T> {
    elem: T,
    // Shared and mutated through `&self`, hence the cell.
    comparisons: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    pub fn new(elem: T, comparisons: Rc<Cell<usize>>) -> Self {
        Self { elem, comparisons }
    }

    pub fn elem(&self) -> &T {
        &self.elem
    }

    pub fn into_inner(self) -> T {
        self.elem
    }

    fn count(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }
}

impl<T: Clone> SortEvaluator<T> {
    /// Wraps a copy of every element of `values`, all counting into `comparisons`.
    pub fn wrap_all(values: &[T], comparisons: &Rc<Cell<usize>>) -> Vec<Self> {
        values
            .iter()
            .map(|elem| Self::new(elem.clone(), Rc::clone(comparisons)))
            .collect()
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smolsort_core::{Algorithm, Sorter};

    #[test]
    fn counts_each_operator_once() {
        let counter = Rc::new(Cell::new(0));
        let a = SortEvaluator::new(1, Rc::clone(&counter));
        let b = SortEvaluator::new(2, Rc::clone(&counter));

        assert!(a < b);
        assert!(a != b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn agrees_with_a_counting_comparator() {
        let input = [9u16, 4, 7, 1, 1, 8, 3, 0, 5, 2, 6];
        let counter = Rc::new(Cell::new(0));

        for algorithm in Algorithm::ALL {
            counter.set(0);
            let mut wrapped = SortEvaluator::wrap_all(&input, &counter);
            algorithm.sort(&mut wrapped);

            let mut calls = 0;
            let mut plain = input;
            algorithm.sort_by(&mut plain, |a, b| {
                calls += 1;
                a < b
            });

            assert_eq!(counter.get(), calls, "{algorithm}");
            let unwrapped = wrapped
                .into_iter()
                .map(SortEvaluator::into_inner)
                .collect::<Vec<_>>();
            assert_eq!(unwrapped, plain, "{algorithm}");
        }
    }
}
