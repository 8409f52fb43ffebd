//! Position based access to sequences, split into three capability tiers.
//!
//! Every algorithm in this crate is written against the weakest tier it needs:
//!
//! * [`ForwardSeq`]: read, write and swap at a position, step forward.
//! * [`BidirectionalSeq`]: additionally step backward.
//! * [`RandomAccessSeq`]: additionally jump `n` positions and measure distances in *O*(1).
//!
//! A position (`Pos`) is a plain value handed out by the sequence. A range is the half-open
//! interval `[first, last)` of two positions of the same sequence, where `last` is reachable from
//! `first` by repeated `next_pos`. `end()` is the past-the-end position and must never be read.
//! Handing in positions that violate this is a logic error, most implementations will panic.

use std::fmt::Debug;

mod list;
mod slice;

pub use list::{ForwardIter, ForwardList, Iter, List, ListPos};

pub trait ForwardSeq {
    type Item;
    type Pos: Copy + Eq + Debug;

    /// Position of the first element, equal to `end()` for an empty sequence.
    fn begin(&self) -> Self::Pos;

    /// Past-the-end position.
    fn end(&self) -> Self::Pos;

    fn next_pos(&self, pos: Self::Pos) -> Self::Pos;

    fn at(&self, pos: Self::Pos) -> &Self::Item;

    fn at_mut(&mut self, pos: Self::Pos) -> &mut Self::Item;

    /// Swaps the elements at `a` and `b`. Swapping a position with itself does nothing.
    fn swap_at(&mut self, a: Self::Pos, b: Self::Pos);
}

pub trait BidirectionalSeq: ForwardSeq {
    /// Must not be called with `begin()`.
    fn prev_pos(&self, pos: Self::Pos) -> Self::Pos;
}

pub trait RandomAccessSeq: BidirectionalSeq {
    /// Same as calling `next_pos` `n` times.
    fn advance(&self, pos: Self::Pos, n: usize) -> Self::Pos;

    /// Number of elements in `[from, to)`.
    fn distance(&self, from: Self::Pos, to: Self::Pos) -> usize;
}

/// Number of elements in `[first, last)`, found by walking the range.
pub fn distance<S>(seq: &S, first: S::Pos, last: S::Pos) -> usize
where
    S: ForwardSeq + ?Sized,
{
    let mut len = 0;
    let mut pos = first;
    while pos != last {
        pos = seq.next_pos(pos);
        len += 1;
    }

    len
}

/// Returns `true` if no element in `[first, last)` is less than its predecessor.
pub fn is_sorted_by<S, F>(seq: &S, first: S::Pos, last: S::Pos, mut is_less: F) -> bool
where
    S: ForwardSeq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return true;
    }

    let mut prev = first;
    let mut pos = seq.next_pos(first);
    while pos != last {
        if is_less(seq.at(pos), seq.at(prev)) {
            return false;
        }
        prev = pos;
        pos = seq.next_pos(pos);
    }

    true
}
