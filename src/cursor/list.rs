use std::fmt;
use std::iter::FromIterator;
use std::mem;

use super::{BidirectionalSeq, ForwardSeq};

// Both lists store their nodes in a Vec and link them by index. Node storage order is unrelated to
// list order, sorting only ever swaps values and never relinks nodes.

/// Position inside a [`List`] or [`ForwardList`]. `None` is the past-the-end position.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ListPos(Option<usize>);

impl ListPos {
    fn node(self) -> usize {
        match self.0 {
            Some(idx) => idx,
            None => panic!("the past-the-end position of a list does not refer to an element"),
        }
    }
}

fn swap_fields<N, T>(nodes: &mut [N], a: usize, b: usize, field: fn(&mut N) -> &mut T) {
    if a == b {
        return;
    }

    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (left, right) = nodes.split_at_mut(hi);
    mem::swap(field(&mut left[lo]), field(&mut right[0]));
}

// --- List ---

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list, supports the bidirectional but not the random access tier.
#[derive(Clone)]
pub struct List<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.nodes[head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }

    /// Consumes the list and returns its values in list order.
    pub fn into_vec(self) -> Vec<T> {
        let order = self.iter_indices();
        let mut slots = self
            .nodes
            .into_iter()
            .map(|node| Some(node.value))
            .collect::<Vec<_>>();

        order.into_iter().filter_map(|idx| slots[idx].take()).collect()
    }

    fn iter_indices(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut cur = self.head;
        while let Some(idx) = cur {
            order.push(idx);
            cur = self.nodes[idx].next;
        }

        order
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ForwardSeq for List<T> {
    type Item = T;
    type Pos = ListPos;

    fn begin(&self) -> ListPos {
        ListPos(self.head)
    }

    fn end(&self) -> ListPos {
        ListPos(None)
    }

    fn next_pos(&self, pos: ListPos) -> ListPos {
        ListPos(self.nodes[pos.node()].next)
    }

    fn at(&self, pos: ListPos) -> &T {
        &self.nodes[pos.node()].value
    }

    fn at_mut(&mut self, pos: ListPos) -> &mut T {
        &mut self.nodes[pos.node()].value
    }

    fn swap_at(&mut self, a: ListPos, b: ListPos) {
        swap_fields(&mut self.nodes, a.node(), b.node(), |node| &mut node.value);
    }
}

impl<T> BidirectionalSeq for List<T> {
    fn prev_pos(&self, pos: ListPos) -> ListPos {
        let prev = match pos.0 {
            Some(idx) => self.nodes[idx].prev,
            None => self.tail,
        };

        assert!(prev.is_some(), "stepped before the first element of a list");
        ListPos(prev)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cur: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.nodes[self.cur?];
        self.cur = node.next;
        Some(&node.value)
    }
}

// --- ForwardList ---

#[derive(Clone)]
struct ForwardNode<T> {
    value: T,
    next: Option<usize>,
}

/// Singly linked list, only supports the forward tier.
#[derive(Clone)]
pub struct ForwardList<T> {
    nodes: Vec<ForwardNode<T>>,
    head: Option<usize>,
    // Only used to append, there is no way to walk backwards.
    tail: Option<usize>,
}

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(ForwardNode {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(ForwardNode { value, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    pub fn iter(&self) -> ForwardIter<'_, T> {
        ForwardIter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }

    /// Consumes the list and returns its values in list order.
    pub fn into_vec(self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut cur = self.head;
        while let Some(idx) = cur {
            order.push(idx);
            cur = self.nodes[idx].next;
        }

        let mut slots = self
            .nodes
            .into_iter()
            .map(|node| Some(node.value))
            .collect::<Vec<_>>();

        order.into_iter().filter_map(|idx| slots[idx].take()).collect()
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ForwardSeq for ForwardList<T> {
    type Item = T;
    type Pos = ListPos;

    fn begin(&self) -> ListPos {
        ListPos(self.head)
    }

    fn end(&self) -> ListPos {
        ListPos(None)
    }

    fn next_pos(&self, pos: ListPos) -> ListPos {
        ListPos(self.nodes[pos.node()].next)
    }

    fn at(&self, pos: ListPos) -> &T {
        &self.nodes[pos.node()].value
    }

    fn at_mut(&mut self, pos: ListPos) -> &mut T {
        &mut self.nodes[pos.node()].value
    }

    fn swap_at(&mut self, a: ListPos, b: ListPos) {
        swap_fields(&mut self.nodes, a.node(), b.node(), |node| &mut node.value);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = ForwardIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

pub struct ForwardIter<'a, T> {
    nodes: &'a [ForwardNode<T>],
    cur: Option<usize>,
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.nodes[self.cur?];
        self.cur = node.next;
        Some(&node.value)
    }
}
