//! Introsort the way managed runtime class libraries ship it: insertion
//! sort below 16 elements, a median-of-three pivot parked next to the right
//! boundary so both scans run against sentinels, and a depth-limited
//! heapsort fallback.

use std::cmp::Ordering;

use crate::stable::insertion_sort::insertion_sort;
use crate::unstable::heap_sort::heap_sort;
use crate::unstable::small_sort::{sort2, sort3};
use crate::{Context, SortSpan};

sort_impl!("runtime_sort_unstable");

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
        if len < 2 {
            return;
        }
        if len == 2 {
            sort2(span, left, left + 1);
            return;
        }
        if len == 3 {
            sort3(span, left, left + 1, left + 2);
            return;
        }
        if len <= MAX_INSERTION {
            insertion_sort(span, left, right);
            return;
        }
        if limit == 0 {
            heap_sort(span, left, right);
            return;
        }
        limit -= 1;

        // Median of first/middle/last, then park the pivot next to the
        // right boundary. `span[left]` and the parked pivot bound both
        // scans, so neither needs an index check.
        let mid = left + len / 2;
        sort3(span, left, mid, right - 1);
        span.swap(mid, right - 2);
        let pivot = span.read(right - 2);

        let mut i = left;
        let mut j = right - 2;
        loop {
            loop {
                i += 1;
                if span.compare_value(i, &pivot) != Ordering::Less {
                    break;
                }
            }
            loop {
                j -= 1;
                if span.compare_value(j, &pivot) != Ordering::Greater {
                    break;
                }
            }
            if i >= j {
                break;
            }
            span.swap(i, j);
        }
        span.swap(i, right - 2);

        // The pivot at `i` is final. Recurse into the smaller side,
        // iterate on the larger one.
        if i - left < right - (i + 1) {
            sort_loop(span, left, i, limit);
            left = i + 1;
        } else {
            sort_loop(span, i + 1, right, limit);
            right = i;
        }
    }
}
