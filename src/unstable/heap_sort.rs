//! Heapsort, the worst-case fallback of every hybrid in this crate.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

sort_impl!("heapsort_unstable");

fn sort_span<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    heap_sort(span, left, right);
}

/// Sorts `[left, right)` with a binary max-heap built in place.
pub(crate) fn heap_sort<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let len = right - left;
    if len < 2 {
        return;
    }

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(span, left, node, len);
    }

    // Pop maximal elements off the heap.
    for end in (1..len).rev() {
        span.swap(left, left + end);
        sift_down(span, left, 0, end);
    }
}

// The heap respects `parent >= child`; `base` offsets heap indices into the
// span.
fn sift_down<T, F, X>(span: &mut SortSpan<'_, T, F, X>, base: usize, mut node: usize, len: usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Pick the greater child.
        if child + 1 < len && span.compare(base + child, base + child + 1) == Ordering::Less {
            child += 1;
        }

        // Stop once the invariant holds at `node`.
        if span.compare(base + node, base + child) != Ordering::Less {
            break;
        }

        span.swap(base + node, base + child);
        node = child;
    }
}
