//! Bubble sort. Every variant returns a sorted copy and leaves its input
//! untouched.

/// Sorts a copy of `items`, swapping adjacent elements whenever
/// `should_swap(left, right)` holds. Stops after the first pass without a
/// swap.
pub fn bubble_sort_by<T: Clone>(items: &[T], should_swap: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut result = items.to_vec();
    passes(&mut result, should_swap, |_, _, _| {});
    result
}

pub fn bubble_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    bubble_sort_by(items, |a, b| a > b)
}

pub fn bubble_sort_descending<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    bubble_sort_by(items, |a, b| a < b)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted<T> {
    pub items: Vec<T>,
    pub comparisons: usize,
}

pub fn bubble_sort_verbose<T: Ord + Clone>(items: &[T]) -> Sorted<T> {
    let mut result = items.to_vec();
    let comparisons = passes(&mut result, |a, b| a > b, |_, _, _| {});
    Sorted {
        items: result,
        comparisons,
    }
}

/// Ascending sort that hands `on_swap` a snapshot after every swap, along
/// with the pass number and the index of the left element swapped.
pub fn bubble_sort_observed<T: Ord + Clone>(
    items: &[T],
    on_swap: impl FnMut(&[T], usize, usize),
) -> Vec<T> {
    let mut result = items.to_vec();
    passes(&mut result, |a, b| a > b, on_swap);
    result
}

fn passes<T>(
    items: &mut [T],
    should_swap: impl Fn(&T, &T) -> bool,
    mut on_swap: impl FnMut(&[T], usize, usize),
) -> usize {
    let n = items.len();
    let mut comparisons = 0;
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            comparisons += 1;
            if should_swap(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
                on_swap(items, pass, j);
            }
        }
        if !swapped {
            break;
        }
    }
    comparisons
}

#[cfg(test)]
#[path = "bubble_sort_tests.rs"]
mod tests;
