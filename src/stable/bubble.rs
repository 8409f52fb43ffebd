//! Bubble sort with early exit.

use crate::cursor::BidirectionalSeq;

sort_impl!("bubble_stable", 2_048);

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

/// Each pass bubbles the largest element of the unsorted prefix to its end, which shrinks the
/// prefix by one. Stops after the first pass without swaps, so sorted input takes a single pass.
pub fn sort_range<S, F>(seq: &mut S, first: S::Pos, mut last: S::Pos, is_less: &mut F)
where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while first != last {
        let mut swapped = false;

        let mut left = first;
        let mut right = seq.next_pos(left);
        while right != last {
            // Only strictly smaller elements move forward, equal ones never pass each other.
            if is_less(seq.at(right), seq.at(left)) {
                seq.swap_at(left, right);
                swapped = true;
            }

            left = right;
            right = seq.next_pos(right);
        }

        if !swapped {
            break;
        }

        last = seq.prev_pos(last);
    }
}
