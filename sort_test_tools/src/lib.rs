//! Shared test and benchmark harness for sort implementations.

pub trait Sort {
    fn name() -> String;

    /// Inputs longer than this are skipped by the generic tests. Quadratic sorts lower it to
    /// keep test times reasonable.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
