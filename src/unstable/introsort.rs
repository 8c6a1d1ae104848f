//! Introsort: median-of-3 quicksort with a depth budget that falls back to
//! heapsort, bounding the worst case at O(n log n).

use std::cmp::Ordering;

use crate::stable::insertion_sort::{insertion_sort, partial_insertion_sort};
use crate::unstable::heap_sort::heap_sort;
use crate::unstable::partition::{partition_equal, partition_less};
use crate::unstable::pivot::median3;
use crate::{Context, SortSpan};

sort_impl!("introsort_unstable");

const MAX_INSERTION: usize = 16;

fn sort_span<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let len = right - left;
    if len < 2 {
        return;
    }

    // Allow `2 * floor(log2(len))` splits before giving up on quicksort.
    // The binary OR by one eliminates the zero check in the logarithm.
    let limit = 2 * (len | 1).ilog2();
    sort_loop(span, left, right, limit);
}

fn sort_loop<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    mut left: usize,
    mut right: usize,
    mut limit: u32,
) where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    loop {
        let len = right - left;
        if len <= MAX_INSERTION {
            insertion_sort(span, left, right);
            return;
        }
        if limit == 0 {
            heap_sort(span, left, right);
            return;
        }
        limit -= 1;

        let q = len / 4;
        let mid = median3(span, left + q, left + 2 * q, left + 3 * q);
        let pivot = span.read(mid);

        let (split, swaps) = partition_less(span, left, right, &pivot);

        if split == left {
            // The pivot was minimal. Either the whole range equals it, or
            // only a strictly greater suffix is left. The O(n) sweep runs
            // only in this fully unbalanced case, so it amortizes away.
            let m = partition_equal(span, left, right, &pivot);
            if m == right {
                return;
            }
            left = m.max(left + 1);
            continue;
        }

        if swaps == 0 {
            // Nothing moved during partitioning: both sides may already be
            // nearly sorted.
            let left_done = partial_insertion_sort(span, left, split);
            let right_done = partial_insertion_sort(span, split, right);
            match (left_done, right_done) {
                (true, true) => return,
                (true, false) => {
                    left = split;
                    continue;
                }
                (false, true) => {
                    right = split;
                    continue;
                }
                (false, false) => {}
            }
        }

        // Recurse into the smaller side, iterate on the larger one.
        if split - left < right - split {
            sort_loop(span, left, split, limit);
            left = split;
        } else {
            sort_loop(span, split, right, limit);
            right = split;
        }
    }
}
