pub trait Sort {
    fn name() -> String;

    /// Upper bound on the shared suite's input sizes. Quadratic algorithms
    /// cap this so the suite stays runnable.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: Fn(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
