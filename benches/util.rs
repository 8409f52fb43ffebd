use std::env;

use criterion::{black_box, BatchSize, Criterion};
use once_cell::sync::OnceCell;
use regex::Regex;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Only benchmarks whose full name matches `CUSTOM_BENCH_REGEX` run, all of them if it is unset.
pub fn is_bench_name_ok(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX")
            .ok()
            .map(|filter_regex| Regex::new(&filter_regex).unwrap())
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

#[inline(never)]
pub fn bench_fn<Seq>(
    c: &mut Criterion,
    bench_name: &str,
    setup: impl Fn() -> Seq,
    test_fn: impl Fn(&mut Seq),
    test_len: usize,
) {
    if !is_bench_name_ok(bench_name) {
        return;
    }

    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(bench_name, |b| {
        b.iter_batched_ref(
            &setup,
            |test_data| {
                test_fn(black_box(&mut *test_data));
                black_box(test_data); // side-effect
            },
            batch_size,
        )
    });
}
