#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;

use cursor_sort::cursor::ForwardList;
use cursor_sort::unstable::{heapsort, quicksort, selection};

fuzz_target!(|data: &[u8]| {
    let mut expected = data.to_vec();
    expected.sort();

    let mut v = data.to_vec();
    heapsort::sort(&mut v);
    assert_eq!(v, expected);

    let mut deque = data.iter().copied().collect::<VecDeque<_>>();
    quicksort::sort(&mut deque);
    assert!(deque.iter().eq(expected.iter()));

    if data.len() <= 512 {
        let mut list = data.iter().copied().collect::<ForwardList<_>>();
        selection::sort(&mut list);
        assert_eq!(list.into_vec(), expected);
    }
});
