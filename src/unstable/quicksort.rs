//! Quicksort with the first element as pivot.

use crate::cursor::{self, BidirectionalSeq};
use crate::partition;

// Sorted, reverse sorted and low cardinality inputs are quadratic with a first element pivot.
sort_impl!("quicksort_unstable", 5_000);

#[inline]
pub fn sort<S>(seq: &mut S)
where
    S: BidirectionalSeq + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    sort_range(seq, first, last, &mut is_less);
}

pub fn sort_range<S, F>(seq: &mut S, first: S::Pos, last: S::Pos, is_less: &mut F)
where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = cursor::distance(seq, first, last);
    quicksort(seq, first, last, len, is_less);
}

/// `len` is the number of elements in `[first, last)`.
///
/// Worst case *O*(*n*^2) comparisons, but recursion only ever goes into the smaller partition
/// while the larger one is handled by the loop, which bounds the recursion depth to
/// *O*(log(*n*)).
fn quicksort<S, F>(
    seq: &mut S,
    mut first: S::Pos,
    mut last: S::Pos,
    mut len: usize,
    is_less: &mut F,
) where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while len >= 2 {
        let (mid, lt_count) = partition::partition_counted(seq, first, last, is_less);

        // The pivot at `mid - 1` is in its final place and excluded from both sides.
        let pivot_pos = seq.prev_pos(mid);
        let ge_count = len - lt_count - 1;

        if lt_count < ge_count {
            quicksort(seq, first, pivot_pos, lt_count, is_less);
            first = mid;
            len = ge_count;
        } else {
            quicksort(seq, mid, last, ge_count, is_less);
            last = pivot_pos;
            len = lt_count;
        }
    }
}
