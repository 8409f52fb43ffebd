use std::collections::VecDeque;

use super::{BidirectionalSeq, ForwardSeq, RandomAccessSeq};

// Contiguous and ring-buffer storage, positions are plain indices.

impl<T> ForwardSeq for [T] {
    type Item = T;
    type Pos = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn next_pos(&self, pos: usize) -> usize {
        debug_assert!(pos < self.len());
        pos + 1
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> BidirectionalSeq for [T] {
    #[inline]
    fn prev_pos(&self, pos: usize) -> usize {
        debug_assert!(pos > 0 && pos <= self.len());
        pos - 1
    }
}

impl<T> RandomAccessSeq for [T] {
    #[inline]
    fn advance(&self, pos: usize, n: usize) -> usize {
        debug_assert!(pos + n <= self.len());
        pos + n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        debug_assert!(from <= to);
        to - from
    }
}

impl<T> ForwardSeq for Vec<T> {
    type Item = T;
    type Pos = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn next_pos(&self, pos: usize) -> usize {
        self.as_slice().next_pos(pos)
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> BidirectionalSeq for Vec<T> {
    #[inline]
    fn prev_pos(&self, pos: usize) -> usize {
        self.as_slice().prev_pos(pos)
    }
}

impl<T> RandomAccessSeq for Vec<T> {
    #[inline]
    fn advance(&self, pos: usize, n: usize) -> usize {
        self.as_slice().advance(pos, n)
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        self.as_slice().distance(from, to)
    }
}

impl<T> ForwardSeq for VecDeque<T> {
    type Item = T;
    type Pos = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn next_pos(&self, pos: usize) -> usize {
        debug_assert!(pos < self.len());
        pos + 1
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> BidirectionalSeq for VecDeque<T> {
    #[inline]
    fn prev_pos(&self, pos: usize) -> usize {
        debug_assert!(pos > 0 && pos <= self.len());
        pos - 1
    }
}

impl<T> RandomAccessSeq for VecDeque<T> {
    #[inline]
    fn advance(&self, pos: usize, n: usize) -> usize {
        debug_assert!(pos + n <= self.len());
        pos + n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        debug_assert!(from <= to);
        to - from
    }
}
