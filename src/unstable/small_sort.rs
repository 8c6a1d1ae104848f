//! Fixed compare/exchange chains for tiny ranges and pivot samples.

use std::cmp::Ordering;

use crate::{Context, SortSpan};

pub(crate) fn sort2<T, F, X>(span: &mut SortSpan<'_, T, F, X>, a: usize, b: usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    if span.compare(a, b) == Ordering::Greater {
        span.swap(a, b);
    }
}

pub(crate) fn sort3<T, F, X>(span: &mut SortSpan<'_, T, F, X>, a: usize, b: usize, c: usize)
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    sort2(span, a, b);
    sort2(span, b, c);
    sort2(span, a, b);
}

pub(crate) fn sort4<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    sort3(span, a, b, c);
    sort2(span, c, d);
    sort2(span, b, c);
    sort2(span, a, b);
}

pub(crate) fn sort5<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    e: usize,
) where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    sort4(span, a, b, c, d);
    sort2(span, d, e);
    sort2(span, c, d);
    sort2(span, b, c);
    sort2(span, a, b);
}
