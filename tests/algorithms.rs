use std::cell::Cell;
use std::collections::VecDeque;

use cursor_sort::cursor::{self, ForwardList, ForwardSeq, List};
use cursor_sort::{stable, unstable};

use sort_test_tools::patterns;

const TEST_LENS: [usize; 12] = [0, 1, 2, 3, 4, 5, 8, 16, 17, 50, 100, 333];

/// Sequence types the sorts are run on, built from and read back into plain values.
trait TestSeq: Sized {
    fn from_values(values: &[i32]) -> Self;

    fn values(&self) -> Vec<i32>;
}

impl TestSeq for Vec<i32> {
    fn from_values(values: &[i32]) -> Self {
        values.to_vec()
    }

    fn values(&self) -> Vec<i32> {
        self.clone()
    }
}

impl TestSeq for VecDeque<i32> {
    fn from_values(values: &[i32]) -> Self {
        // Push half of the values to the front, so the ring buffer wraps around.
        let (front, back) = values.split_at(values.len() / 2);
        let mut deque = VecDeque::with_capacity(values.len());
        deque.extend(back.iter().copied());
        for val in front.iter().rev() {
            deque.push_front(*val);
        }

        deque
    }

    fn values(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }
}

impl TestSeq for List<i32> {
    fn from_values(values: &[i32]) -> Self {
        // Same for the list, node storage order differs from list order.
        let (front, back) = values.split_at(values.len() / 2);
        let mut list = back.iter().copied().collect::<List<_>>();
        for val in front.iter().rev() {
            list.push_front(*val);
        }

        list
    }

    fn values(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }
}

impl TestSeq for ForwardList<i32> {
    fn from_values(values: &[i32]) -> Self {
        let (front, back) = values.split_at(values.len() / 2);
        let mut list = back.iter().copied().collect::<ForwardList<_>>();
        for val in front.iter().rev() {
            list.push_front(*val);
        }

        list
    }

    fn values(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }
}

macro_rules! tier_tests {
    ($($kind:ident::$module:ident => [$($seq_name:ident: $seq:ty),*]),* $(,)?) => {
        $($(
            paste::paste! {
                #[test]
                fn [<$module _sorts_ $seq_name>]() {
                    for len in TEST_LENS {
                        let input = patterns::random_uniform(len, 0..=(len as i32 / 2));
                        let mut expected = input.clone();
                        expected.sort();

                        let mut seq = <$seq as TestSeq>::from_values(&input);
                        $kind::$module::sort(&mut seq);
                        assert_eq!(seq.values(), expected, "len: {len}");

                        let mut seq = <$seq as TestSeq>::from_values(&input);
                        $kind::$module::sort_by(&mut seq, |a, b| b < a);
                        expected.reverse();
                        assert_eq!(seq.values(), expected, "len: {len}");
                    }
                }
            }
        )*)*
    };
}

tier_tests!(
    stable::bubble => [vec: Vec<i32>, vec_deque: VecDeque<i32>, list: List<i32>],
    stable::insertion => [vec: Vec<i32>, vec_deque: VecDeque<i32>, list: List<i32>],
    stable::merge_sort => [vec: Vec<i32>, vec_deque: VecDeque<i32>],
    unstable::selection => [
        vec: Vec<i32>,
        vec_deque: VecDeque<i32>,
        list: List<i32>,
        forward_list: ForwardList<i32>
    ],
    unstable::quicksort => [vec: Vec<i32>, vec_deque: VecDeque<i32>, list: List<i32>],
    unstable::heapsort => [vec: Vec<i32>, vec_deque: VecDeque<i32>],
);

// --- Fixed examples ---

#[test]
fn insertion_sorts_example() {
    let mut v = [5, 2, 4, 6, 1, 3];
    stable::insertion::sort(&mut v[..]);
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn heapsort_sorts_example() {
    let mut v = vec![9, 1, 8, 2, 7];
    unstable::heapsort::sort(&mut v);
    assert_eq!(v, [1, 2, 7, 8, 9]);
}

#[test]
fn quicksort_all_equal() {
    let mut v = vec![3, 3, 3];
    unstable::quicksort::sort(&mut v);
    assert_eq!(v, [3, 3, 3]);
}

#[test]
fn bubble_sorted_input_single_pass() {
    let mut v = vec![1, 2, 3];
    let mut comparisons = 0;
    stable::bubble::sort_by(&mut v, |a, b| {
        comparisons += 1;
        a < b
    });

    // One pass over three elements, nothing swapped so no second pass.
    assert_eq!(comparisons, 2);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn bubble_sorted_input_linear() {
    let len = 1_000;
    let mut v = patterns::ascending(len);
    let mut comparisons = 0;
    stable::bubble::sort_by(&mut v, |a, b| {
        comparisons += 1;
        a < b
    });

    assert_eq!(comparisons, len - 1);
    assert_eq!(v, patterns::ascending(len));
}

#[test]
fn insertion_sorted_input_linear() {
    let len = 1_000;
    let mut v = patterns::ascending(len);
    let mut comparisons = 0;
    stable::insertion::sort_by(&mut v, |a, b| {
        comparisons += 1;
        a < b
    });

    assert_eq!(comparisons, len - 1);
}

#[test]
fn empty_and_single_are_untouched() {
    let compare_panics = |_: &i32, _: &i32| -> bool { panic!("no comparison expected") };

    let mut empty: Vec<i32> = Vec::new();
    let mut single = vec![42];

    stable::bubble::sort_by(&mut empty, compare_panics);
    stable::bubble::sort_by(&mut single, compare_panics);
    stable::insertion::sort_by(&mut empty, compare_panics);
    stable::insertion::sort_by(&mut single, compare_panics);
    stable::merge_sort::sort_by(&mut empty, compare_panics);
    stable::merge_sort::sort_by(&mut single, compare_panics);
    unstable::selection::sort_by(&mut empty, compare_panics);
    unstable::selection::sort_by(&mut single, compare_panics);
    unstable::quicksort::sort_by(&mut empty, compare_panics);
    unstable::quicksort::sort_by(&mut single, compare_panics);
    unstable::heapsort::sort_by(&mut empty, compare_panics);
    unstable::heapsort::sort_by(&mut single, compare_panics);

    assert!(empty.is_empty());
    assert_eq!(single, [42]);
}

// --- Worst case behavior ---

#[test]
fn quicksort_reverse_input_quadratic() {
    let len = 1_000;
    let mut v = patterns::descending(len);
    let mut comparisons = 0;
    unstable::quicksort::sort_by(&mut v, |a, b| {
        comparisons += 1;
        a < b
    });

    assert_eq!(v, patterns::ascending(len));
    assert!(
        comparisons >= len * (len - 1) / 4,
        "expected quadratic comparisons, got {comparisons}"
    );
}

#[test]
fn quicksort_large_sorted_input() {
    // Every partition is maximally unbalanced, the recursion must still stay shallow.
    let len = 10_000;

    let mut v = patterns::ascending(len);
    unstable::quicksort::sort(&mut v);
    assert_eq!(v, patterns::ascending(len));

    let mut v = patterns::descending(len);
    unstable::quicksort::sort(&mut v);
    assert_eq!(v, patterns::ascending(len));
}

#[test]
fn merge_sort_comparisons_n_log_n() {
    let len = 4_096;
    let mut v = patterns::random(len);
    let mut comparisons = 0;
    stable::merge_sort::sort_by(&mut v, |a, b| {
        comparisons += 1;
        a < b
    });

    // len * log2(len)
    assert!(comparisons <= len * 12);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

// --- Sub-ranges ---

#[test]
fn sort_range_leaves_outside_untouched() {
    let input = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    let expected = [9, 8, 3, 4, 5, 6, 7, 2, 1, 0];

    macro_rules! check_range {
        ($($kind:ident::$module:ident),*) => {
            $(
                let mut v = input.to_vec();
                $kind::$module::sort_range(&mut v, 2, 7, &mut |a: &i32, b: &i32| a < b);
                assert_eq!(v, expected, stringify!($module));
            )*
        };
    }

    check_range!(
        stable::bubble,
        stable::insertion,
        stable::merge_sort,
        unstable::selection,
        unstable::quicksort,
        unstable::heapsort
    );
}

#[test]
fn sort_range_on_list() {
    let mut list = [5, 4, 3, 2, 1].into_iter().collect::<List<_>>();

    let first = list.next_pos(list.begin());
    let last = list.next_pos(list.next_pos(list.next_pos(first)));

    stable::insertion::sort_range(&mut list, first, last, &mut |a: &i32, b: &i32| a < b);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 2, 3, 4, 1]);

    let (first, last) = (list.begin(), list.end());
    unstable::quicksort::sort_range(&mut list, first, last, &mut |a: &i32, b: &i32| a < b);
    assert_eq!(list.into_vec(), [1, 2, 3, 4, 5]);
}

#[test]
fn sort_range_on_forward_list() {
    let mut list = [3, 1, 2, 0].into_iter().collect::<ForwardList<_>>();

    let first = list.begin();
    let last = list.next_pos(list.next_pos(list.next_pos(first)));

    unstable::selection::sort_range(&mut list, first, last, &mut |a: &i32, b: &i32| a < b);
    assert_eq!(list.into_vec(), [1, 2, 3, 0]);
}

// --- Stability ---

#[derive(Clone, Debug, PartialEq, Eq)]
struct Tagged {
    key: u8,
    tag: usize,
}

fn tagged(len: usize) -> Vec<Tagged> {
    patterns::random_uniform(len, 0..8)
        .into_iter()
        .enumerate()
        .map(|(tag, key)| Tagged {
            key: key as u8,
            tag,
        })
        .collect()
}

fn assert_stable(v: &[Tagged]) {
    assert!(
        v.windows(2)
            .all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag)),
        "not stable: {v:?}"
    );
}

#[test]
fn stable_sorts_keep_equal_order() {
    for len in TEST_LENS {
        let input = tagged(len);

        let mut v = input.clone();
        stable::bubble::sort_by(&mut v, |a, b| a.key < b.key);
        assert_stable(&v);

        let mut v = input.clone();
        stable::insertion::sort_by(&mut v, |a, b| a.key < b.key);
        assert_stable(&v);

        let mut v = input.clone();
        stable::merge_sort::sort_by(&mut v, |a, b| a.key < b.key);
        assert_stable(&v);

        let mut list = input.iter().cloned().collect::<List<_>>();
        stable::insertion::sort_by(&mut list, |a, b| a.key < b.key);
        assert_stable(&list.into_vec());
    }
}

// --- Moves only ---

/// Neither `Clone` nor `Copy`, counts its drops.
struct Token<'a> {
    val: i32,
    drops: &'a Cell<usize>,
}

impl Drop for Token<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn sorts_non_clone_elements() {
    let drops = Cell::new(0);
    let len = 200;

    let make = || {
        patterns::random(len)
            .into_iter()
            .map(|val| Token { val, drops: &drops })
            .collect::<Vec<_>>()
    };

    let check = |v: Vec<Token>| {
        assert_eq!(v.len(), len);
        assert!(v.windows(2).all(|w| w[0].val <= w[1].val));
    };

    let mut v = make();
    stable::merge_sort::sort_by(&mut v, |a, b| a.val < b.val);
    check(v);

    let mut v = make();
    unstable::heapsort::sort_by(&mut v, |a, b| a.val < b.val);
    check(v);

    let mut v = make();
    unstable::quicksort::sort_by(&mut v, |a, b| a.val < b.val);
    check(v);

    // Every element is dropped exactly once, nothing was duplicated or leaked.
    assert_eq!(drops.get(), len * 3);
}

#[test]
fn sorted_check_matches_sorts() {
    let mut v = patterns::random(100);
    assert!(!cursor::is_sorted_by(&v, v.begin(), v.end(), |a, b| a < b));

    unstable::heapsort::sort(&mut v);
    assert!(cursor::is_sorted_by(&v, v.begin(), v.end(), |a, b| a < b));
}
