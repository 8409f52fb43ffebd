//! Heapsort on top of the [`heap`](crate::heap) primitives.

use crate::cursor::RandomAccessSeq;
use crate::heap;

sort_impl!("heapsort_unstable");

#[inline]
pub fn sort<S>(seq: &mut S)
where
    S: RandomAccessSeq + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    sort_range(seq, first, last, &mut is_less);
}

pub fn sort_range<S, F>(seq: &mut S, first: S::Pos, mut last: S::Pos, is_less: &mut F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    // Build the heap in linear time.
    heap::make_heap(seq, first, last, is_less);

    // Pop maximal elements from the heap, each lands right behind the shrinking heap.
    let mut len = seq.distance(first, last);
    while len > 1 {
        heap::pop_heap(seq, first, last, is_less);
        last = seq.prev_pos(last);
        len -= 1;
    }
}
