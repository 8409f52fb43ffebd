//! Sorts that keep equal elements in their original relative order.

pub mod bubble;
pub mod insertion;
pub mod merge_sort;
