//! Partition sweeps shared by the value-pivot quicksorts.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

/// Hoare-style bidirectional partition of `[left, right)` around a pivot
/// value: elements strictly less than the pivot end up in front.
///
/// Returns the split index (the first not-less position) and the number of
/// swaps performed. Zero swaps means the range was already partitioned,
/// which the hybrids use as a nearly-sorted signal.
pub(crate) fn partition_less<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    left: usize,
    right: usize,
    pivot: &T,
) -> (usize, usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let mut i = left;
    let mut j = right;
    let mut swaps = 0;

    loop {
        // First element >= pivot from the left...
        while i < j && span.compare_value(i, pivot) == Ordering::Less {
            i += 1;
        }
        // ...last element < pivot from the right.
        while i < j && span.compare_value(j - 1, pivot) != Ordering::Less {
            j -= 1;
        }
        if i >= j {
            return (i, swaps);
        }
        span.swap(i, j - 1);
        swaps += 1;
        i += 1;
        j -= 1;
    }
}

/// Moves every element not greater than the pivot to the front of
/// `[left, right)`, keeping self-swaps free. Returns the first index of the
/// strictly-greater suffix.
///
/// Ranges known to contain nothing strictly less than the pivot use this as
/// the all-equal sweep: if the returned index is `right`, the whole range
/// equals the pivot and is done.
pub(crate) fn partition_equal<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    left: usize,
    right: usize,
    pivot: &T,
) -> usize
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let mut store = left;
    for k in left..right {
        if span.compare_value(k, pivot) != Ordering::Greater {
            span.swap(store, k);
            store += 1;
        }
    }
    store
}
