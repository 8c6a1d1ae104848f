//! Quicksort with a quartile-sampled median-of-three pivot value and
//! tail-call elimination. No heapsort fallback; resistance to bad splits
//! comes from the pivot choice alone.

use std::cmp::Ordering;

use crate::unstable::partition::{partition_equal, partition_less};
use crate::unstable::pivot::median3;
use crate::{Context, SortSpan};

sort_impl!("quicksort_median3_unstable", 5_000);

fn sort_span<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    sort_loop(span, left, right);
}

fn sort_loop<T, F, X>(span: &mut SortSpan<'_, T, F, X>, mut left: usize, mut right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    loop {
        let len = right - left;
        if len < 2 {
            return;
        }

        let q = len / 4;
        let mid = if q == 0 {
            left + len / 2
        } else {
            median3(span, left + q, left + 2 * q, left + 3 * q)
        };
        let pivot = span.read(mid);

        let (split, _swaps) = partition_less(span, left, right, &pivot);

        if split == left {
            // The pivot was minimal: sweep off everything equal to it. An
            // all-equal range terminates here without a single real swap.
            let m = partition_equal(span, left, right, &pivot);
            if m == right {
                return;
            }
            left = m.max(left + 1);
            continue;
        }
        if split == right {
            // Only an inconsistent comparator can claim everything is
            // less; shrink by hand to keep the loop advancing.
            right -= 1;
            continue;
        }

        if split - left < right - split {
            sort_loop(span, left, split);
            left = split;
        } else {
            sort_loop(span, split, right);
            right = split;
        }
    }
}
