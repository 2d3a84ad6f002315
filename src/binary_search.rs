//! Binary search variants over slices sorted in ascending order.

use std::cmp::Ordering;

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    binary_search_observed(arr, target, |_: &Probe| {})
}

pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    fn go<T: Ord>(arr: &[T], target: &T, left: usize, right: usize) -> Option<usize> {
        if left >= right {
            return None;
        }
        let mid = left + (right - 1 - left) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => Some(mid),
            Ordering::Less => go(arr, target, mid + 1, right),
            Ordering::Greater => go(arr, target, left, mid),
        }
    }
    go(arr, target, 0, arr.len())
}

/// Index of the leftmost element equal to `target`.
pub fn first_occurrence<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let idx = insertion_point(arr, target);
    (idx < arr.len() && arr[idx] == *target).then_some(idx)
}

/// Index of the rightmost element equal to `target`.
pub fn last_occurrence<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut left, mut right) = (0, arr.len());
    while left < right {
        let mid = left + (right - left) / 2;
        if arr[mid] <= *target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    (left > 0 && arr[left - 1] == *target).then(|| left - 1)
}

/// Inclusive bounds of the run of elements equal to `target`.
pub fn occurrence_range<T: Ord>(arr: &[T], target: &T) -> Option<(usize, usize)> {
    let first = first_occurrence(arr, target)?;
    let last = last_occurrence(arr, target)?;
    Some((first, last))
}

/// Lower bound: the first index whose element is not less than `target`.
pub fn insertion_point<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut left, mut right) = (0, arr.len());
    while left < right {
        let mid = left + (right - left) / 2;
        if arr[mid] < *target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verbose {
    pub index: Option<usize>,
    /// Number of probes made.
    pub steps: usize,
}

pub fn binary_search_verbose<T: Ord>(arr: &[T], target: &T) -> Verbose {
    let mut steps = 0;
    let index = binary_search_observed(arr, target, |probe: &Probe| steps = probe.step);
    Verbose { index, steps }
}

/// One probe of [`binary_search_observed`]. `left..=right` is the window
/// still under consideration and `ordering` compares `arr[mid]` to the
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub step: usize,
    pub left: usize,
    pub right: usize,
    pub mid: usize,
    pub ordering: Ordering,
}

pub fn binary_search_observed<T: Ord>(
    arr: &[T],
    target: &T,
    mut on_probe: impl FnMut(&Probe),
) -> Option<usize> {
    let (mut left, mut right) = (0, arr.len());
    let mut step = 0;
    while left < right {
        step += 1;
        let mid = left + (right - 1 - left) / 2;
        let ordering = arr[mid].cmp(target);
        on_probe(&Probe {
            step,
            left,
            right: right - 1,
            mid,
            ordering,
        });
        match ordering {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    None
}

#[cfg(test)]
#[path = "binary_search_tests.rs"]
mod tests;
