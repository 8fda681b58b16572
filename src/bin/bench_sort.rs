//! Microbenchmark for the hybrid sort on random `i64` arrays.
//!
//! This is intentionally minimal: it compares `permsort::sort_ascending`
//! against `slice::sort_unstable()` on identical seeded inputs.
//!
//! Run (example):
//!   cargo run --release --bin bench_sort -- --sizes=1000,100000 --repeats=9

use permsort::sort_ascending;
use permsort::validation::check_sorted;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Config {
    sizes: Vec<usize>,
    iters: usize,
    repeats: usize,
    seed: u64,
    verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 100_000],
            iters: 20,
            repeats: 9,
            seed: 42,
            verify: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Stats {
    median_ns: f64,
    min_ns: f64,
    max_ns: f64,
}

impl Stats {
    fn jitter_pct(self) -> f64 {
        if self.median_ns == 0.0 {
            0.0
        } else {
            100.0 * (self.max_ns - self.min_ns) / self.median_ns
        }
    }
}

fn median(mut xs: Vec<f64>) -> f64 {
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = xs.len() / 2;
    if xs.len() % 2 == 0 {
        0.5 * (xs[mid - 1] + xs[mid])
    } else {
        xs[mid]
    }
}

fn parse_args() -> Config {
    let mut cfg = Config::default();
    for arg in std::env::args().skip(1) {
        let mut split = arg.splitn(2, '=');
        let key = split.next().unwrap_or("");
        let val = split.next();

        match (key, val) {
            ("--sizes", Some(v)) => {
                cfg.sizes = v
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<usize>().expect("invalid --sizes entry"))
                    .collect();
            }
            ("--iters", Some(v)) => cfg.iters = v.parse().expect("invalid --iters"),
            ("--repeats", Some(v)) => cfg.repeats = v.parse().expect("invalid --repeats"),
            ("--seed", Some(v)) => cfg.seed = v.parse().expect("invalid --seed"),
            ("--no-verify", None) => cfg.verify = false,
            ("--help", _) | ("-h", _) => {
                eprintln!(
                    "bench_sort options:\n  \
--sizes=1000,10000.. (comma list)\n  \
--iters=N (default 20)\n  \
--repeats=N (default 9)\n  \
--seed=N (default 42)\n  \
--no-verify (skip correctness checks)"
                );
                std::process::exit(0);
            }
            _ => {
                eprintln!("unknown arg: {arg} (use --help)");
                std::process::exit(2);
            }
        }
    }

    assert!(!cfg.sizes.is_empty(), "--sizes must be non-empty");
    assert!(cfg.iters > 0, "--iters must be > 0");
    assert!(cfg.repeats > 0, "--repeats must be > 0");
    cfg
}

fn generate_case(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

type SortFn = fn(&mut [i64]);

#[inline(never)]
fn std_sort(v: &mut [i64]) {
    v.sort_unstable();
}

#[inline(never)]
fn hybrid_sort(v: &mut [i64]) {
    sort_ascending(v);
}

fn benchmark(case: &[i64], f: SortFn, iters: usize, repeats: usize) -> Stats {
    let mut buf = vec![0i64; case.len()];

    // Warmup.
    for _ in 0..iters.min(5) {
        buf.copy_from_slice(case);
        (f)(&mut buf);
        black_box(buf.first().copied());
    }

    let mut samples = Vec::with_capacity(repeats);
    let mut min_ns = f64::INFINITY;
    let mut max_ns: f64 = 0.0;
    for _ in 0..repeats {
        let start = Instant::now();
        for _ in 0..iters {
            buf.copy_from_slice(case);
            (f)(&mut buf);
            black_box(buf.first().copied());
        }
        let ns = start.elapsed().as_nanos() as f64 / iters as f64;
        min_ns = min_ns.min(ns);
        max_ns = max_ns.max(ns);
        samples.push(ns);
    }

    Stats {
        median_ns: median(samples),
        min_ns,
        max_ns,
    }
}

fn verify_case(case: &[i64]) {
    let mut sorted = case.to_vec();
    sort_ascending(&mut sorted);

    let report = check_sorted(case, &sorted);
    assert!(report.is_valid(), "sort invariants violated: {report}");

    let mut expected = case.to_vec();
    expected.sort_unstable();
    assert_eq!(sorted, expected, "sort output diverges from std");
}

fn main() {
    let cfg = parse_args();

    println!("Hybrid Sort Bench (i64)");
    println!(
        "sizes={:?} iters={} repeats={} seed={}",
        cfg.sizes, cfg.iters, cfg.repeats, cfg.seed
    );
    println!();
    println!(
        "{:>9} {:>13} {:>8} {:>13} {:>8} {:>9}",
        "N", "std med", "std jit", "hybrid med", "jit", "speedup"
    );
    println!("{:-<66}", "");

    for &n in &cfg.sizes {
        let case = generate_case(n, cfg.seed ^ (n as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));

        if cfg.verify {
            verify_case(&case);
        }

        let std_s = benchmark(&case, std_sort, cfg.iters, cfg.repeats);
        let hybrid_s = benchmark(&case, hybrid_sort, cfg.iters, cfg.repeats);

        let speedup = std_s.median_ns / hybrid_s.median_ns;
        println!(
            "{:>9} {:>13.1} {:>7.1}% {:>13.1} {:>7.1}% {:>8.2}x",
            n,
            std_s.median_ns,
            std_s.jitter_pct(),
            hybrid_s.median_ns,
            hybrid_s.jitter_pct(),
            speedup
        );
    }
}
