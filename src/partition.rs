//! Single pivot Hoare partition, the building block of quicksort.

use crate::cursor::BidirectionalSeq;

/// Partitions the non-empty range `[first, last)` around its first element, the pivot.
///
/// Returns the partition point `p`. Afterwards the pivot sits at `p - 1`, every element in
/// `[first, p - 1)` is less than the pivot and no element in `[p, last)` is. Elements equal to the
/// pivot can end up on either side, so this is not stable. A single element range returns the
/// position after it without calling `is_less`.
pub fn partition_with_pivot<S, F>(
    seq: &mut S,
    first: S::Pos,
    last: S::Pos,
    is_less: &mut F,
) -> S::Pos
where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    partition_counted(seq, first, last, is_less).0
}

/// Same as [`partition_with_pivot`], additionally returns the number of elements that ended up
/// left of the pivot.
pub(crate) fn partition_counted<S, F>(
    seq: &mut S,
    first: S::Pos,
    last: S::Pos,
    is_less: &mut F,
) -> (S::Pos, usize)
where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    debug_assert!(first != last, "partition requires a non-empty range");

    // The pivot stays at `first` until the very end, `l` never moves back to it and `r` never
    // moves before `l`.
    let pivot = first;
    let mut l = seq.next_pos(first);
    let mut r = last;
    let mut lt_count = 0;

    while l != r {
        // Skip elements that already are on the correct side at the front.
        while l != r && is_less(seq.at(l), seq.at(pivot)) {
            l = seq.next_pos(l);
            lt_count += 1;
        }

        if l == r {
            break;
        }

        // Skip elements that already are on the correct side at the back.
        loop {
            r = seq.prev_pos(r);
            if l == r || is_less(seq.at(r), seq.at(pivot)) {
                break;
            }
        }

        if l == r {
            break;
        }

        // Swap the found pair of out-of-order elements.
        seq.swap_at(l, r);
        l = seq.next_pos(l);
        lt_count += 1;
    }

    // Place the pivot between the two partitions.
    let pivot_pos = seq.prev_pos(l);
    seq.swap_at(pivot, pivot_pos);

    (l, lt_count)
}
