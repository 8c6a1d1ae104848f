//! Introsort the way libc++ ships `std::sort`: compare/exchange chains for
//! tiny ranges, sentinel-unguarded insertion sort off the leftmost path,
//! size-adaptive pivot sampling and an already-partitioned shortcut.

use std::cmp::Ordering;

use crate::stable::insertion_sort::{
    insertion_sort, insertion_sort_unguarded, partial_insertion_sort,
};
use crate::unstable::heap_sort::heap_sort;
use crate::unstable::partition::{partition_equal, partition_less};
use crate::unstable::pivot::median3;
use crate::unstable::small_sort::{sort2, sort3, sort4, sort5};
use crate::{Context, SortSpan};

sort_impl!("std_sort_unstable");

const MAX_SMALL: usize = 24;
// Ranges at least this long order five spread samples instead of taking a
// median of three.
const FIVE_SAMPLE: usize = 1000;

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
    sort_loop(span, left, right, limit, true);
}

fn sort_loop<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    mut left: usize,
    mut right: usize,
    mut limit: u32,
    mut leftmost: bool,
) where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    loop {
        let len = right - left;
        if len <= MAX_SMALL {
            sort_small(span, left, right, leftmost);
            return;
        }
        if limit == 0 {
            heap_sort(span, left, right);
            return;
        }
        limit -= 1;

        let q = len / 4;
        let mid = if len < FIVE_SAMPLE {
            median3(span, left + q, left + 2 * q, left + 3 * q)
        } else {
            // Fully order five spread samples; the middle one is the pivot.
            sort5(span, left, left + q, left + 2 * q, left + 3 * q, right - 1);
            left + 2 * q
        };
        let pivot = span.read(mid);

        let (split, swaps) = partition_less(span, left, right, &pivot);

        if split == left {
            // Pivot was minimal: confirm or refute "all equal" with one
            // sweep. Refutation leaves only a strictly greater suffix.
            let m = partition_equal(span, left, right, &pivot);
            if m == right {
                return;
            }
            left = m.max(left + 1);
            leftmost = false;
            continue;
        }

        if swaps == 0 {
            let left_done = partial_insertion_sort(span, left, split);
            let right_done = partial_insertion_sort(span, split, right);
            match (left_done, right_done) {
                (true, true) => return,
                (true, false) => {
                    left = split;
                    leftmost = false;
                    continue;
                }
                (false, true) => {
                    right = split;
                    continue;
                }
                (false, false) => {}
            }
        }

        if split - left < right - split {
            sort_loop(span, left, split, limit, leftmost);
            left = split;
            leftmost = false;
        } else {
            sort_loop(span, split, right, limit, false);
            right = split;
        }
    }
}

fn sort_small<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize, leftmost: bool)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    match right - left {
        0 | 1 => {}
        2 => sort2(span, left, left + 1),
        3 => sort3(span, left, left + 1, left + 2),
        4 => sort4(span, left, left + 1, left + 2, left + 3),
        5 => sort5(span, left, left + 1, left + 2, left + 3, left + 4),
        _ => {
            // Only the leftmost partition lacks a known smaller element to
            // its left to serve as a sentinel.
            if leftmost {
                insertion_sort(span, left, right);
            } else {
                insertion_sort_unguarded(span, left, right);
            }
        }
    }
}
