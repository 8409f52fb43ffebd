//! Input patterns for testing and benchmarking sorts. Currently limited to i32 values.
//!
//! All random patterns derive from one seed per process, printed by the tests, so a failing run
//! can be repeated with `OVERRIDE_SEED=<seed>`.

use std::cmp::Reverse;
use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Mutex;

use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let dist: Uniform<i32> = range.into();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, saw_count, |_| SawDirection::Ascending)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, saw_count, |_| SawDirection::Descending)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saws(len, saw_count, |i| SawDirection::from_coin(directions[i]))
}

pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::
    // Saw lengths are picked randomly from `range`.

    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let max_saws = len / range.start + 1;
    let directions = random_uniform(max_saws, 0..=1);
    let saw_lens = random_uniform(max_saws, (range.start as i32)..(range.end as i32));

    let mut start = 0;
    for (direction, saw_len) in directions.iter().zip(saw_lens.iter()) {
        if start >= len {
            break;
        }

        let end = (start + *saw_len as usize).min(len);
        SawDirection::from_coin(*direction).apply(&mut vals[start..end]);
        start = end;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let (front, back) = vals.split_at_mut(len / 2);
    SawDirection::Ascending.apply(front);
    SawDirection::Descending.apply(back);

    vals
}

/// Makes every call to a random pattern yield new values, instead of the same values per process.
/// Benchmarks should call this.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone)]
enum SawDirection {
    Ascending,
    Descending,
}

impl SawDirection {
    fn from_coin(coin: i32) -> Self {
        if coin == 0 {
            SawDirection::Ascending
        } else {
            SawDirection::Descending
        }
    }

    fn apply(self, saw: &mut [i32]) {
        match self {
            SawDirection::Ascending => saw.sort(),
            SawDirection::Descending => saw.sort_by_key(|&val| Reverse(val)),
        }
    }
}

fn saws(len: usize, saw_count: usize, direction: impl Fn(usize) -> SawDirection) -> Vec<i32> {
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let saw_len = (len / saw_count.max(1)).max(1);
    for (i, saw) in vals.chunks_mut(saw_len).enumerate() {
        direction(i.min(saw_count)).apply(saw);
    }

    vals
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed) = *SEED.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => (SeedType::ExternalOverride, u64::from_str(&seed).unwrap()),
            Err(_) => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    match seed_type {
        SeedType::RandomEachTime => (seed_type, thread_rng().gen()),
        _ => (seed_type, seed),
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
