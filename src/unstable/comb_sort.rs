//! Comb sort: gapped bubble passes with the classic 10/13 shrink factor and
//! the Comb11 correction, finished by a last-swap-bounded bubble loop.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

sort_impl!("comb_sort_unstable");

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

    let mut gap = len * 10 / 13;
    while gap > 1 {
        // Gaps of 9 and 10 are known to leave turtles behind; 11 is not.
        if gap == 9 || gap == 10 {
            gap = 11;
        }
        for i in left..right - gap {
            if span.compare(i, i + gap) == Ordering::Greater {
                span.swap(i, i + gap);
            }
        }
        gap = gap * 10 / 13;
    }

    // Final bubble passes, shrinking to the last swap position.
    let mut end = right;
    while end - left > 1 {
        let mut last = left;
        for i in left..end - 1 {
            if span.compare(i, i + 1) == Ordering::Greater {
                span.swap(i, i + 1);
                last = i + 1;
            }
        }
        end = last;
    }
}
