//! Plain quicksort: middle-element pivot, no small-range fallback, no depth
//! guard. Crafted inputs degrade it to quadratic time; that is the point of
//! keeping it. The larger side is still iterated instead of recursed, so
//! the stack stays logarithmic regardless.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

sort_impl!("quicksort_unstable", 5_000);

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

        let pivot = span.read(left + len / 2);
        let mut i = left;
        let mut j = right - 1;
        loop {
            while span.compare_value(i, &pivot) == Ordering::Less {
                i += 1;
            }
            while span.compare_value(j, &pivot) == Ordering::Greater {
                j -= 1;
            }
            if i > j {
                break;
            }
            span.swap(i, j);
            i += 1;
            if j == 0 {
                break;
            }
            j -= 1;
        }

        // [left, j + 1) and [i, right) remain; anything between the
        // cursors equals the pivot and is final.
        if j + 1 - left < right - i {
            sort_loop(span, left, j + 1);
            left = i;
        } else {
            sort_loop(span, i, right);
            right = j + 1;
        }
    }
}
