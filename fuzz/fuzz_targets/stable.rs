#![no_main]

use libfuzzer_sys::fuzz_target;

use cursor_sort::cursor::List;
use cursor_sort::stable::{bubble, insertion, merge_sort};

fuzz_target!(|data: &[u8]| {
    // Low nibble is the key, the position tags equal keys.
    let tagged = data
        .iter()
        .enumerate()
        .map(|(idx, byte)| (byte & 0xF, idx))
        .collect::<Vec<_>>();

    let mut expected = tagged.clone();
    expected.sort_by_key(|(key, _)| *key);

    let mut v = tagged.clone();
    merge_sort::sort_by(&mut v, |a, b| a.0 < b.0);
    assert_eq!(v, expected);

    if tagged.len() <= 512 {
        let mut v = tagged.clone();
        insertion::sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v, expected);

        let mut list = tagged.iter().copied().collect::<List<_>>();
        bubble::sort_by(&mut list, |a, b| a.0 < b.0);
        assert_eq!(list.into_vec(), expected);
    }
});
