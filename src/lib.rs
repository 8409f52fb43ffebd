//! Classic comparison sorts and their building blocks, written against the cursor tiers in
//! [`cursor`] so they run on slices, ring buffers and linked lists alike.
//!
//! Every sort module offers the same three entry points:
//!
//! * `sort(seq)`: orders by [`Ord`].
//! * `sort_by(seq, is_less)`: orders by a caller supplied `is_less(a, b)` predicate, which must
//!   be a strict weak ordering for the result to be meaningful. Violating it never leads to out
//!   of bounds access, the sequence then holds some permutation of its original elements.
//! * `sort_range(seq, first, last, &mut is_less)`: sorts only the half-open range `[first, last)`.
//!
//! All sorts work in place by swapping elements. Merge sort is the only one that allocates, a
//! scratch buffer of positions sized to the sub-range being merged.

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
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
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], mut compare: F)
            where
                F: FnMut(&T, &T) -> ::core::cmp::Ordering,
            {
                sort_by(arr, |a, b| compare(a, b) == ::core::cmp::Ordering::Less);
            }
        }
    };
}

pub mod cursor;
pub mod heap;
pub mod merge;
pub mod partition;
pub mod stable;
pub mod unstable;
