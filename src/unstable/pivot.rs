//! Pivot selection: index-based medians that compare but never move
//! elements.

use std::cmp::Ordering;
use std::mem;

use crate::{Context, SortSpan};

/// Index of the median element among three positions.
pub(crate) fn median3<T, F, X>(
    span: &SortSpan<'_, T, F, X>,
    mut a: usize,
    mut b: usize,
    mut c: usize,
) -> usize
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    sort2_idx(span, &mut a, &mut b);
    sort2_idx(span, &mut b, &mut c);
    sort2_idx(span, &mut a, &mut b);
    b
}

/// Median of three medians-of-three, sampled in the neighborhoods of the
/// quartiles. Callers guarantee `right - left >= 8`.
pub(crate) fn ninther<T, F, X>(span: &SortSpan<'_, T, F, X>, left: usize, right: usize) -> usize
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    let q = (right - left) / 4;
    let a = median3(span, left + q - 1, left + q, left + q + 1);
    let b = median3(span, left + 2 * q - 1, left + 2 * q, left + 2 * q + 1);
    let c = median3(span, left + 3 * q - 1, left + 3 * q, left + 3 * q + 1);
    median3(span, a, b, c)
}

// Orders an index pair by the elements they point at.
fn sort2_idx<T, F, X>(span: &SortSpan<'_, T, F, X>, a: &mut usize, b: &mut usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    if span.compare(*a, *b) == Ordering::Greater {
        mem::swap(a, b);
    }
}
