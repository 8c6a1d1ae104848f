//! Cocktail shaker sort, the bidirectional bubble sort, with the active
//! window shrinking to the position of the last swap of each pass.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

sort_impl!("cocktail_sort_stable", 2_000);

fn sort_span<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    if right - left < 2 {
        return;
    }

    let mut lo = left;
    let mut hi = right;
    loop {
        // Forward pass bubbles the running maximum to the top; everything
        // at or past the last swap is final.
        let mut last = lo;
        for i in lo..hi - 1 {
            if span.compare(i, i + 1) == Ordering::Greater {
                span.swap(i, i + 1);
                last = i + 1;
            }
        }
        if last == lo {
            return;
        }
        hi = last;
        if hi - lo < 2 {
            return;
        }

        // Backward pass mirrors it for the running minimum.
        let mut first = hi;
        for i in (lo..hi - 1).rev() {
            if span.compare(i, i + 1) == Ordering::Greater {
                span.swap(i, i + 1);
                first = i + 1;
            }
        }
        if first == hi {
            return;
        }
        lo = first;
        if hi - lo < 2 {
            return;
        }
    }
}
