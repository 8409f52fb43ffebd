//! Insertion sort by adjacent swaps.

use crate::cursor::BidirectionalSeq;

sort_impl!("insertion_stable", 2_048);

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
    // `[first, next)` is sorted at the start of every iteration.
    let mut next = first;
    while next != last {
        insert_tail(seq, first, next, is_less);
        next = seq.next_pos(next);
    }
}

/// Walks the element at `tail` backwards into the sorted range `[first, tail)`, stopping at the
/// first predecessor that is not greater than it.
fn insert_tail<S, F>(seq: &mut S, first: S::Pos, tail: S::Pos, is_less: &mut F)
where
    S: BidirectionalSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut walker = tail;
    while walker != first {
        let right = walker;
        let left = seq.prev_pos(walker);
        if !is_less(seq.at(right), seq.at(left)) {
            break;
        }

        seq.swap_at(left, right);
        walker = left;
    }
}
