//! Two-way merge of already ordered inputs.

use std::iter::Peekable;

/// Merges `left` and `right` into `dest`.
///
/// Both inputs are expected to be ordered by `is_less`. Exactly `left.len() + right.len()`
/// elements are appended to `dest`. The front of `right` is only taken if it is less than the
/// front of `left`, so on equal keys the element from `left` comes first and the merge is stable.
pub fn merge<T, L, R, D, F>(left: L, right: R, dest: &mut D, is_less: F)
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    D: Extend<T>,
    F: FnMut(&T, &T) -> bool,
{
    dest.extend(merge_by(left, right, is_less));
}

/// Lazy version of [`merge`], yields the merged sequence one element at a time.
pub fn merge_by<T, L, R, F>(
    left: L,
    right: R,
    is_less: F,
) -> MergeBy<L::IntoIter, R::IntoIter, F>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    MergeBy {
        left: left.into_iter().peekable(),
        right: right.into_iter().peekable(),
        is_less,
    }
}

/// Iterator returned by [`merge_by`].
pub struct MergeBy<L: Iterator, R: Iterator, F> {
    left: Peekable<L>,
    right: Peekable<R>,
    is_less: F,
}

impl<L, R, F> Iterator for MergeBy<L, R, F>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    F: FnMut(&L::Item, &L::Item) -> bool,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<L::Item> {
        let take_right = match (self.left.peek(), self.right.peek()) {
            (Some(l), Some(r)) => (self.is_less)(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => return None,
        };

        if take_right {
            self.right.next()
        } else {
            self.left.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lo, left_hi) = self.left.size_hint();
        let (right_lo, right_hi) = self.right.size_hint();

        let hi = match (left_hi, right_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };

        (left_lo.saturating_add(right_lo), hi)
    }
}
