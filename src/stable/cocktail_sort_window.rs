//! Cocktail shaker sort with the fixed window shrink: one slot off the top
//! after every forward pass, one off the bottom after every backward pass.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

sort_impl!("cocktail_sort_window_stable", 2_000);

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
    let mut swapped = true;
    while swapped && hi - lo > 1 {
        swapped = false;

        for i in lo..hi - 1 {
            if span.compare(i, i + 1) == Ordering::Greater {
                span.swap(i, i + 1);
                swapped = true;
            }
        }
        hi -= 1;
        if hi - lo < 2 {
            return;
        }

        for i in (lo..hi - 1).rev() {
            if span.compare(i, i + 1) == Ordering::Greater {
                span.swap(i, i + 1);
                swapped = true;
            }
        }
        lo += 1;
    }
}
