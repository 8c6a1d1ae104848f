//! In-place comparison sorts with observable element accesses.
//!
//! Every algorithm in this crate runs through a [`SortSpan`], which couples
//! the sequence being sorted with a comparator, an observer ([`Context`])
//! and a buffer id. The observer is a generic parameter, so sorting with
//! [`NullContext`] compiles to the same code as sorting without observation,
//! while a [`CountingContext`] or [`RecordingContext`] sees every read,
//! write, comparison and swap exactly once and in order, which is what
//! statistics collection and step-by-step visualization are built on.
//!
//! ```
//! use sortscope::{unstable::pdq_sort, CountingContext};
//!
//! let mut v = vec![5, 1, 4, 2, 3];
//! let ctx = CountingContext::new();
//! pdq_sort::sort_with(&mut v, &ctx);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! assert!(ctx.comparisons() > 0);
//! ```
//!
//! Algorithms are grouped by guarantee: [`stable`] sorts preserve the
//! relative order of equal elements, [`unstable`] sorts do not.

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        /// Sorts `v` in natural order.
        #[inline]
        pub fn sort<T>(v: &mut [T])
        where
            T: Ord + Clone,
        {
            sort_with(v, &$crate::NullContext);
        }

        /// Sorts `v` with a caller-supplied comparator.
        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], compare: F)
        where
            T: Clone,
            F: Fn(&T, &T) -> Ordering,
        {
            let len = v.len();
            let mut span = $crate::SortSpan::new(
                v,
                &compare,
                &$crate::NullContext,
                $crate::BufferId::MAIN,
            );
            sort_span(&mut span, 0, len);
        }

        /// Sorts `v` in natural order, reporting every element access to
        /// `ctx`.
        #[inline]
        pub fn sort_with<T, X>(v: &mut [T], ctx: &X)
        where
            T: Ord + Clone,
            X: $crate::Context<T>,
        {
            let len = v.len();
            let compare = |a: &T, b: &T| a.cmp(b);
            let mut span =
                $crate::SortSpan::new(v, &compare, ctx, $crate::BufferId::MAIN);
            sort_span(&mut span, 0, len);
        }

        /// Sorts `v[first..last]` in natural order, reporting to `ctx`.
        ///
        /// Returns a [`RangeError`](crate::RangeError) without touching any
        /// element if `first > last` or `last > v.len()`. Ranges of length
        /// zero or one succeed as no-ops.
        pub fn sort_range<T, X>(
            v: &mut [T],
            first: usize,
            last: usize,
            ctx: &X,
        ) -> Result<(), $crate::RangeError>
        where
            T: Ord + Clone,
            X: $crate::Context<T>,
        {
            sort_range_by(v, first, last, |a: &T, b: &T| a.cmp(b), ctx)
        }

        /// Sorts `v[first..last]` with a caller-supplied comparator,
        /// reporting to `ctx`.
        pub fn sort_range_by<T, F, X>(
            v: &mut [T],
            first: usize,
            last: usize,
            compare: F,
            ctx: &X,
        ) -> Result<(), $crate::RangeError>
        where
            T: Clone,
            F: Fn(&T, &T) -> Ordering,
            X: $crate::Context<T>,
        {
            $crate::check_range(v.len(), first, last)?;
            let mut span =
                $crate::SortSpan::new(v, &compare, ctx, $crate::BufferId::MAIN);
            sort_span(&mut span, first, last);
            Ok(())
        }

        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn max_test_len() -> usize {
                $max_test_len
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: Fn(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod context;
mod span;

pub mod stable;
pub mod unstable;

pub use context::{Context, CountingContext, Event, NullContext, OpCounts, RecordingContext};
pub use span::{BufferId, RangeError, SortSpan};

pub(crate) use span::check_range;
