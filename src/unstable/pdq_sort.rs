//! Pattern-defeating quicksort after Orson Peters' pdqsort: introsort with
//! a bad-partition budget, deterministic shuffles that break adversarial
//! orderings, and a left-leaning duplicate sweep that collapses runs of
//! equal elements in linear time.

use std::cmp::Ordering;

use crate::stable::insertion_sort::{
    insertion_sort, insertion_sort_unguarded, partial_insertion_sort,
};
use crate::unstable::heap_sort::heap_sort;
use crate::unstable::partition::{partition_equal, partition_less};
use crate::unstable::pivot::{median3, ninther};
use crate::{Context, SortSpan};

sort_impl!("pdqsort_unstable");

const MAX_INSERTION: usize = 24;
// Above this size pivots come from a nine-sample median of medians.
const NINTHER_THRESHOLD: usize = 128;

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

    // Number of bad splits tolerated before switching to heapsort.
    let limit = (len | 1).ilog2();
    sort_loop(span, left, right, None, limit, true);
}

fn sort_loop<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    mut left: usize,
    mut right: usize,
    mut pred: Option<T>,
    mut limit: u32,
    mut leftmost: bool,
) where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    loop {
        let len = right - left;
        if len <= MAX_INSERTION {
            if leftmost {
                insertion_sort(span, left, right);
            } else {
                insertion_sort_unguarded(span, left, right);
            }
            return;
        }
        if limit == 0 {
            heap_sort(span, left, right);
            return;
        }

        let mid = if len > NINTHER_THRESHOLD {
            ninther(span, left, right)
        } else {
            let q = len / 4;
            median3(span, left + q, left + 2 * q, left + 3 * q)
        };

        // If the candidate pivot equals the ancestor pivot bounding this
        // range on the left, everything equal to it is minimal here. Sweep
        // those to the front and drop them; duplicate runs collapse in
        // O(n) this way.
        if let Some(p) = &pred {
            if span.compare_value(mid, p) != Ordering::Greater {
                let m = partition_equal(span, left, right, p);
                left = m.max(left + 1);
                pred = None;
                leftmost = false;
                continue;
            }
        }

        // Park the pivot at `left`, partition the remainder, then move it
        // into its final slot.
        span.swap(left, mid);
        let pivot = span.read(left);
        let (split, swaps) = partition_less(span, left + 1, right, &pivot);
        span.swap(left, split - 1);
        let p_idx = split - 1;

        let l_len = p_idx - left;
        let r_len = right - split;
        let balanced = l_len.min(r_len) >= len / 8;
        let already_partitioned = swaps == 0;

        if !balanced {
            limit -= 1;
            break_pattern(span, left, p_idx);
            break_pattern(span, split, right);
        } else if already_partitioned {
            let left_done = partial_insertion_sort(span, left, p_idx);
            let right_done = partial_insertion_sort(span, split, right);
            match (left_done, right_done) {
                (true, true) => return,
                (true, false) => {
                    left = split;
                    pred = Some(pivot);
                    leftmost = false;
                    continue;
                }
                (false, true) => {
                    right = p_idx;
                    continue;
                }
                (false, false) => {}
            }
        }

        // Recurse into the smaller side first, iterate on the larger one.
        if l_len < r_len {
            sort_loop(span, left, p_idx, pred.take(), limit, leftmost);
            left = split;
            pred = Some(pivot);
            leftmost = false;
        } else {
            sort_loop(span, split, right, Some(pivot), limit, false);
            right = p_idx;
        }
    }
}

/// Swaps a few elements at quarter offsets to disturb orderings that keep
/// producing bad splits. Purely a disturbance; the following partition
/// re-establishes every invariant.
fn break_pattern<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let len = right - left;
    if len < MAX_INSERTION {
        return;
    }

    let quarter = len / 4;
    span.swap(left, left + quarter);
    span.swap(right - 1, right - quarter);

    if len > NINTHER_THRESHOLD {
        span.swap(left + 1, left + quarter + 1);
        span.swap(left + 2, left + quarter + 2);
        span.swap(right - 2, right - (quarter + 1));
        span.swap(right - 3, right - (quarter + 2));
    }
}
