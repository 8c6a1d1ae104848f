//! The textbook dual-pivot quicksort: the two boundary elements are always
//! the pivots. Simpler than the sampled variant, and quadratic on presorted
//! input for exactly that reason.

use std::cmp::Ordering;

use crate::stable::insertion_sort::insertion_sort;
use crate::unstable::small_sort::sort2;
use crate::{Context, SortSpan};

sort_impl!("dual_pivot_classic_unstable", 2_000);

const MAX_INSERTION: usize = 17;

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
        if len < MAX_INSERTION {
            insertion_sort(span, left, right);
            return;
        }

        let lo = left;
        let hi = right - 1;
        sort2(span, lo, hi);

        let ordered = span.compare(lo, hi);
        let p1 = span.read(lo);
        let p2 = span.read(hi);

        if ordered == Ordering::Less {
            let mut less = lo + 1;
            let mut great = hi - 1;
            let mut k = less;
            while k <= great {
                if span.compare_value(k, &p1) == Ordering::Less {
                    span.swap(k, less);
                    less += 1;
                } else if span.compare_value(k, &p2) == Ordering::Greater {
                    while k < great && span.compare_value(great, &p2) == Ordering::Greater {
                        great -= 1;
                    }
                    span.swap(k, great);
                    great -= 1;
                    if span.compare_value(k, &p1) == Ordering::Less {
                        span.swap(k, less);
                        less += 1;
                    }
                }
                k += 1;
            }

            span.swap(lo, less - 1);
            span.swap(hi, great + 1);

            let regions = [(lo, less - 1), (less, great + 1), (great + 2, right)];
            let mut largest = 0;
            for idx in 1..regions.len() {
                if regions[idx].1 - regions[idx].0 > regions[largest].1 - regions[largest].0 {
                    largest = idx;
                }
            }
            for (idx, &(l, r)) in regions.iter().enumerate() {
                if idx != largest {
                    sort_loop(span, l, r);
                }
            }
            left = regions[largest].0;
            right = regions[largest].1;
        } else {
            // Equal pivots: Dutch national flag around the single value.
            let p = p1;
            let mut lt = lo;
            let mut k = lo;
            let mut gt = hi;
            while k <= gt {
                match span.compare_value(k, &p) {
                    Ordering::Less => {
                        span.swap(k, lt);
                        lt += 1;
                        k += 1;
                    }
                    Ordering::Greater => {
                        span.swap(k, gt);
                        if gt == 0 {
                            break;
                        }
                        gt -= 1;
                    }
                    Ordering::Equal => {
                        k += 1;
                    }
                }
            }

            if gt + 1 <= lt {
                // Only an inconsistent comparator can erase the middle;
                // shrink by hand to keep the loop advancing.
                right -= 1;
                continue;
            }
            if lt - lo < right - (gt + 1) {
                sort_loop(span, lo, lt);
                left = gt + 1;
            } else {
                sort_loop(span, gt + 1, right);
                right = lt;
            }
        }
    }
}
