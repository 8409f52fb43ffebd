#![no_main]

use libfuzzer_sys::fuzz_target;

use cursor_sort::cursor::ForwardSeq;
use cursor_sort::heap;

fuzz_target!(|data: &[u8]| {
    // Every byte is either pushed onto the heap, or pops its maximum if it is odd.
    let mut heap_vals: Vec<u8> = Vec::new();

    for byte in data {
        if byte % 2 == 1 && !heap_vals.is_empty() {
            let (first, last) = (heap_vals.begin(), heap_vals.end());
            let max = heap_vals.iter().copied().max();
            heap::pop_heap(&mut heap_vals, first, last, &mut u8::lt);
            assert_eq!(heap_vals.pop(), max);
        } else {
            heap_vals.push(*byte);
            let (first, last) = (heap_vals.begin(), heap_vals.end());
            heap::push_heap(&mut heap_vals, first, last, &mut u8::lt);
        }

        let (first, last) = (heap_vals.begin(), heap_vals.end());
        assert!(heap::is_heap(&heap_vals, first, last, &mut u8::lt));
    }
});
