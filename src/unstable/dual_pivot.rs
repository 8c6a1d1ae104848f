//! Dual-pivot quicksort after Yaroslavskiy: two pivots from five ordered
//! samples, a single three-way scan, and a duplicate sweep when the middle
//! region dominates.

use std::cmp::Ordering;

use crate::stable::insertion_sort::insertion_sort;
use crate::unstable::small_sort::{sort2, sort5};
use crate::{Context, SortSpan};

sort_impl!("dual_pivot_unstable");

// Ranges shorter than this go straight to insertion sort.
const MAX_INSERTION: usize = 17;
// Ranges shorter than this take the boundary elements as pivots instead of
// sampling.
const FIVE_SAMPLE: usize = 47;

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

        if len >= FIVE_SAMPLE {
            // Order five samples spaced len/7 around the midpoint; the 2nd
            // and 4th become the pivots and move to the boundaries.
            let seventh = len / 7;
            let mid = left + len / 2;
            let e2 = mid - seventh;
            let e4 = mid + seventh;
            sort5(span, mid - 2 * seventh, e2, mid, e4, mid + 2 * seventh);
            span.swap(e2, lo);
            span.swap(e4, hi);
        } else {
            sort2(span, lo, hi);
        }

        let ordered = span.compare(lo, hi);
        let p1 = span.read(lo);
        let p2 = span.read(hi);

        if ordered == Ordering::Less {
            // Three cursors: [lo+1, less) < p1, [less, k) between the
            // pivots, (great, hi-1] > p2.
            let mut less = lo + 1;
            let mut great = hi - 1;
            let mut k = less;
            while k <= great {
                if span.compare_value(k, &p1) == Ordering::Less {
                    span.swap(k, less);
                    less += 1;
                } else if span.compare_value(k, &p2) == Ordering::Greater {
                    // Skip over the part of the tail that is already in the
                    // greater region.
                    while k < great && span.compare_value(great, &p2) == Ordering::Greater {
                        great -= 1;
                    }
                    span.swap(k, great);
                    great -= 1;
                    // The element swapped in from the back still needs a
                    // verdict against the first pivot.
                    if span.compare_value(k, &p1) == Ordering::Less {
                        span.swap(k, less);
                        less += 1;
                    }
                }
                k += 1;
            }

            // Pivots into their final boundary slots.
            span.swap(lo, less - 1);
            span.swap(hi, great + 1);

            let side_a = (lo, less - 1);
            let side_c = (great + 2, right);

            // When almost everything landed between the pivots, sweep the
            // elements equal to either pivot out to its edge before
            // recursing on the middle.
            let mut m_lo = less;
            let mut m_hi = great;
            if m_hi + 1 - m_lo > len - 13 {
                while m_lo <= m_hi && span.compare_value(m_lo, &p1) == Ordering::Equal {
                    m_lo += 1;
                }
                while m_hi >= m_lo && span.compare_value(m_hi, &p2) == Ordering::Equal {
                    m_hi -= 1;
                }
                let mut k = m_lo;
                while k <= m_hi {
                    if span.compare_value(k, &p1) == Ordering::Equal {
                        span.swap(k, m_lo);
                        m_lo += 1;
                    } else if span.compare_value(k, &p2) == Ordering::Equal {
                        while k < m_hi && span.compare_value(m_hi, &p2) == Ordering::Equal {
                            m_hi -= 1;
                        }
                        span.swap(k, m_hi);
                        m_hi -= 1;
                        if span.compare_value(k, &p1) == Ordering::Equal {
                            span.swap(k, m_lo);
                            m_lo += 1;
                        }
                    }
                    k += 1;
                }
            }
            let middle = (m_lo, m_hi + 1);

            // Iterate on the largest of the three regions, recurse on the
            // other two.
            let regions = [side_a, middle, side_c];
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

            // [lo, lt) < p, [lt, gt] == p, (gt, hi] > p.
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
