#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Uniform random integers.
pub fn random_ints(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

/// Random integers drawn from a tiny value set (duplicate-heavy).
pub fn few_uniques(n: usize, distinct: i64, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..distinct)).collect()
}

/// Strictly ascending sequence.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Strictly descending sequence.
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// Ascending then descending (organ pipe).
pub fn organ_pipe(n: usize) -> Vec<i64> {
    let half = n / 2;
    (0..half as i64)
        .chain((0..(n - half) as i64).rev())
        .collect()
}

/// Repeating short ascending runs.
pub fn sawtooth(n: usize, period: i64) -> Vec<i64> {
    (0..n as i64).map(|i| i % period).collect()
}

/// Random positive integer with up to `max_digits` decimal digits.
pub fn random_number<R: Rng + ?Sized>(max_digits: u32, rng: &mut R) -> u64 {
    let digits = rng.gen_range(1..=max_digits);
    let lo = 10u64.pow(digits - 1);
    let hi = 10u64.pow(digits);
    rng.gen_range(lo..hi)
}
