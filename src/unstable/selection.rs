//! Selection sort, only needs to walk forward.

use crate::cursor::ForwardSeq;

sort_impl!("selection_unstable", 2_048);

#[inline]
pub fn sort<S>(seq: &mut S)
where
    S: ForwardSeq + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: ForwardSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    sort_range(seq, first, last, &mut is_less);
}

pub fn sort_range<S, F>(seq: &mut S, mut first: S::Pos, last: S::Pos, is_less: &mut F)
where
    S: ForwardSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while first != last {
        let min = min_position(seq, first, last, is_less);
        // The swap can jump the element at `first` past equal ones, hence unstable.
        seq.swap_at(first, min);
        first = seq.next_pos(first);
    }
}

/// Position of the first minimum in the non-empty range `[first, last)`.
fn min_position<S, F>(seq: &S, first: S::Pos, last: S::Pos, is_less: &mut F) -> S::Pos
where
    S: ForwardSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut min = first;
    let mut pos = seq.next_pos(first);
    while pos != last {
        if is_less(seq.at(pos), seq.at(min)) {
            min = pos;
        }
        pos = seq.next_pos(pos);
    }

    min
}
