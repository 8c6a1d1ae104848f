//! Stable quicksort: instead of partitioning in place, each step classifies
//! the range three ways through a rented scratch buffer and writes the
//! regions back in input order, so equal elements never pass each other.

use std::cmp::Ordering;

use crate::stable::insertion_sort::insertion_sort;
use crate::stable::scratch::ScratchPool;
use crate::unstable::pivot::median3;
use crate::{BufferId, Context, SortSpan};

sort_impl!("quicksort_stable");

const MAX_INSERTION: usize = 16;

fn sort_span<T, F, X>(span: &mut SortSpan<'_, T, F, X>, left: usize, right: usize)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    if right - left < 2 {
        return;
    }

    let pool = ScratchPool::new();
    sort_loop(span, left, right, &pool);
}

fn sort_loop<T, F, X>(
    span: &mut SortSpan<'_, T, F, X>,
    mut left: usize,
    mut right: usize,
    pool: &ScratchPool<T>,
) where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    loop {
        let len = right - left;
        if len <= MAX_INSERTION {
            insertion_sort(span, left, right);
            return;
        }

        // The median selection only compares by index, so no element moves
        // before classification starts.
        let q = len / 4;
        let mid = median3(span, left + q, left + 2 * q, left + 3 * q);
        let pivot = span.read(mid);

        // One classifying sweep. The verdicts are recorded and reused by
        // the write pass, so an inconsistent comparator cannot
        // desynchronize the region layout from the counts.
        let mut classes = Vec::with_capacity(len);
        let mut n_lt = 0;
        let mut n_eq = 0;
        for k in left..right {
            let class = span.compare_value(k, &pivot);
            match class {
                Ordering::Less => n_lt += 1,
                Ordering::Equal => n_eq += 1,
                Ordering::Greater => {}
            }
            classes.push(class);
        }

        if n_eq == len {
            return;
        }
        if n_eq == 0 && (n_lt == 0 || n_lt == len) {
            // Only an inconsistent comparator can make the pivot's own
            // slot disappear; shrink by hand to keep the loop advancing.
            if n_lt == 0 {
                left += 1;
            } else {
                right -= 1;
            }
            continue;
        }

        // Lay the <, =, > regions out in the scratch buffer, preserving
        // input order within each, then copy everything back.
        {
            let mut scratch = pool.rent(len, &pivot);
            let mut scratch_span = span.scratch_span(&mut scratch, BufferId::SCRATCH);

            let mut dst_lt = 0;
            let mut dst_eq = n_lt;
            let mut dst_gt = n_lt + n_eq;
            for (offset, class) in classes.iter().enumerate() {
                let value = span.read(left + offset);
                let dst = match class {
                    Ordering::Less => {
                        let d = dst_lt;
                        dst_lt += 1;
                        d
                    }
                    Ordering::Equal => {
                        let d = dst_eq;
                        dst_eq += 1;
                        d
                    }
                    Ordering::Greater => {
                        let d = dst_gt;
                        dst_gt += 1;
                        d
                    }
                };
                scratch_span.write(dst, value);
            }

            scratch_span.copy_to(0, span, left, len);
        }

        // The equal region is final. Recurse into the smaller outer
        // region, iterate on the larger one.
        let gt_start = left + n_lt + n_eq;
        if n_lt < right - gt_start {
            sort_loop(span, left, left + n_lt, pool);
            left = gt_start;
        } else {
            sort_loop(span, gt_start, right, pool);
            right = left + n_lt;
        }
    }
}
