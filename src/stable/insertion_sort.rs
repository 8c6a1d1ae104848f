//! Insertion sort, the small-range workhorse every hybrid in this crate
//! falls back to.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

sort_impl!("insertion_sort_stable", 2_000);

fn sort_span<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    insertion_sort(span, left, right);
}

/// Guarded insertion sort over `[left, right)`.
///
/// Shifting is done with adjacent swaps so a panicking comparator can never
/// leave a duplicated element behind.
pub(crate) fn insertion_sort<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    for i in left + 1..right {
        let mut j = i;
        while j > left && span.compare(j - 1, j) == Ordering::Greater {
            span.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Unguarded insertion sort over `[left, right)`.
///
/// The caller guarantees that `span[left - 1]` precedes every element of
/// the range; that sentinel is what makes the left bound check in the inner
/// loop unnecessary.
pub(crate) fn insertion_sort_unguarded<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    left: usize,
    right: usize,
) where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    for i in left + 1..right {
        let mut j = i;
        while span.compare(j - 1, j) == Ordering::Greater {
            span.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Budget for [`partial_insertion_sort`]: give up once more than this many
/// elements had to move.
pub(crate) const MAX_PARTIAL_MOVES: usize = 8;

/// Bounded insertion sort over `[left, right)`.
///
/// Aborts once more than [`MAX_PARTIAL_MOVES`] elements were displaced,
/// which signals the range is not nearly sorted. Returns whether the range
/// ended up fully sorted.
pub(crate) fn partial_insertion_sort<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    left: usize,
    right: usize,
) -> bool
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let mut moves = 0;
    for i in left + 1..right {
        let mut j = i;
        while j > left && span.compare(j - 1, j) == Ordering::Greater {
            span.swap(j - 1, j);
            j -= 1;
        }
        if j != i {
            moves += 1;
            if moves > MAX_PARTIAL_MOVES {
                return false;
            }
        }
    }
    true
}
