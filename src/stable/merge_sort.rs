//! Top-down recursive merge sort.

use crate::cursor::RandomAccessSeq;
use crate::merge;

sort_impl!("mergesort_stable");

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

/// Sorts both halves recursively, then merges them.
///
/// The merge does not move elements into a scratch buffer. Instead it merges the offsets of the two
/// halves, comparing the elements they refer to, and then moves every element to its merged offset
/// with swaps. The scratch buffer is sized to the sub-range and released before returning, and the
/// range holds its original elements at every point, even if `is_less` panics.
pub fn sort_range<S, F>(seq: &mut S, first: S::Pos, last: S::Pos, is_less: &mut F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(first, last);
    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mid_len = len / 2;
    let mid = seq.advance(first, mid_len);

    sort_range(seq, first, mid, is_less);
    sort_range(seq, mid, last, is_less);

    let mut merged_order = Vec::with_capacity(len);
    {
        let seq_ref = &*seq;
        merge::merge(
            0..mid_len,
            mid_len..len,
            &mut merged_order,
            |right: &usize, left: &usize| {
                is_less(
                    seq_ref.at(seq_ref.advance(first, *right)),
                    seq_ref.at(seq_ref.advance(first, *left)),
                )
            },
        );
    }

    apply_order(seq, first, &mut merged_order);
}

/// Rearranges the range starting at `first` so that offset `i` holds the element previously at
/// offset `order[i]`. `order` must be a permutation of `0..order.len()` and is left as the
/// identity permutation.
fn apply_order<S>(seq: &mut S, first: S::Pos, order: &mut [usize])
where
    S: RandomAccessSeq + ?Sized,
{
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }

        // Follow the cycle through `start`. Every swap puts one element into its final place.
        let mut dst = start;
        loop {
            let src = order[dst];
            order[dst] = dst;
            if src == start {
                break;
            }

            seq.swap_at(seq.advance(first, dst), seq.advance(first, src));
            dst = src;
        }
    }
}
