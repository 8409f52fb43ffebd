//! Implicit binary max-heap over a random access range.
//!
//! The range `[first, last)` is treated as a complete binary tree where the node at offset `i` has
//! its parent at `(i - 1) / 2` and its children at `2 * i + 1` and `2 * i + 2`. The heap respects
//! the invariant `!is_less(parent, child)`. All operations only ever swap elements, if `is_less`
//! panics the range still holds the original elements.

use crate::cursor::RandomAccessSeq;

/// Sift-down. Restores the heap invariant for the subtree rooted at `start`, assuming both of its
/// child subtrees already are valid heaps.
pub fn heapify<S, F>(seq: &mut S, first: S::Pos, last: S::Pos, start: S::Pos, is_less: &mut F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(first, last);
    let mut node = seq.distance(first, start);

    while node < len {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len
            && is_less(
                seq.at(seq.advance(first, largest)),
                seq.at(seq.advance(first, left)),
            )
        {
            largest = left;
        }
        if right < len
            && is_less(
                seq.at(seq.advance(first, largest)),
                seq.at(seq.advance(first, right)),
            )
        {
            largest = right;
        }

        // Stop if the invariant holds at `node`.
        if largest == node {
            return;
        }

        seq.swap_at(seq.advance(first, node), seq.advance(first, largest));
        node = largest;
    }
}

/// Sift-up. `[first, last - 1)` must be a valid heap, the element at `last - 1` is inserted.
pub fn push_heap<S, F>(seq: &mut S, first: S::Pos, last: S::Pos, is_less: &mut F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(first, last);
    if len < 2 {
        return;
    }

    let mut child = len - 1;
    while child > 0 {
        let parent = (child - 1) / 2;
        let parent_pos = seq.advance(first, parent);
        let child_pos = seq.advance(first, child);

        if !is_less(seq.at(parent_pos), seq.at(child_pos)) {
            break;
        }

        seq.swap_at(parent_pos, child_pos);
        child = parent;
    }
}

/// Moves the maximum of the heap `[first, last)` to `last - 1` and turns `[first, last - 1)` back
/// into a valid heap. Does nothing for an empty range.
pub fn pop_heap<S, F>(seq: &mut S, first: S::Pos, last: S::Pos, is_less: &mut F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return;
    }

    let last = seq.prev_pos(last);
    seq.swap_at(first, last);
    heapify(seq, first, last, first, is_less);
}

/// Builds a heap out of an arbitrary range in *O*(*n*).
pub fn make_heap<S, F>(seq: &mut S, first: S::Pos, last: S::Pos, is_less: &mut F)
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(first, last);

    // Every node at or after `len / 2` is a leaf.
    for node in (0..len / 2).rev() {
        let start = seq.advance(first, node);
        heapify(seq, first, last, start, is_less);
    }
}

/// Returns `true` if `[first, last)` satisfies the heap invariant.
pub fn is_heap<S, F>(seq: &S, first: S::Pos, last: S::Pos, is_less: &mut F) -> bool
where
    S: RandomAccessSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(first, last);

    (1..len).all(|child| {
        let parent = (child - 1) / 2;
        !is_less(seq.at(seq.advance(first, parent)), seq.at(seq.advance(first, child)))
    })
}
