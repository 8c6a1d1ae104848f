//! Instantiates the shared property suite for every algorithm in the crate.

macro_rules! suites {
    ($($algorithm:ident => $sort_impl:path),* $(,)?) => {
        $(
            paste::paste! {
                mod [<$algorithm _suite>] {
                    use sort_test_tools::instantiate_sort_tests;

                    type TestSort = $sort_impl;

                    instantiate_sort_tests!(TestSort);
                }
            }
        )*
    };
}

suites!(
    cocktail_sort => sortscope::stable::cocktail_sort::SortImpl,
    cocktail_sort_window => sortscope::stable::cocktail_sort_window::SortImpl,
    insertion_sort => sortscope::stable::insertion_sort::SortImpl,
    quicksort_stable => sortscope::stable::quicksort::SortImpl,
    comb_sort => sortscope::unstable::comb_sort::SortImpl,
    dual_pivot => sortscope::unstable::dual_pivot::SortImpl,
    dual_pivot_classic => sortscope::unstable::dual_pivot_classic::SortImpl,
    heap_sort => sortscope::unstable::heap_sort::SortImpl,
    introsort => sortscope::unstable::introsort::SortImpl,
    pdq_sort => sortscope::unstable::pdq_sort::SortImpl,
    quicksort => sortscope::unstable::quicksort::SortImpl,
    quicksort_median3 => sortscope::unstable::quicksort_median3::SortImpl,
    quicksort_median9 => sortscope::unstable::quicksort_median9::SortImpl,
    runtime_sort => sortscope::unstable::runtime_sort::SortImpl,
    std_sort => sortscope::unstable::std_sort::SortImpl,
);
