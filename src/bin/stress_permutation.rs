//! Randomized stress harness for `nearest_bigger`.
//!
//! Run with: cargo run --release --bin stress_permutation
//!
//! Usage:
//!   stress_permutation                  Run the default 100k inputs
//!   stress_permutation --count 1000000  Run more inputs
//!   stress_permutation --max-digits 19  Allow inputs near the u64 limit
//!
//! Every output is checked against the digit-multiset and monotonicity
//! invariants; the process exits non-zero on the first batch containing a
//! violation.

use clap::Parser;
use permsort::validation::check_successor;
use permsort::{nearest_bigger, Error};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(about = "Stress-test nearest_bigger against its invariants")]
struct Args {
    /// Number of random inputs to test.
    #[arg(long, default_value_t = 100_000)]
    count: u64,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum number of decimal digits per input (1..=19).
    #[arg(long, default_value_t = 18)]
    max_digits: u32,
}

fn random_input<R: Rng>(rng: &mut R, max_digits: u32) -> u64 {
    let digits = rng.gen_range(1..=max_digits);
    let lo = 10u64.pow(digits - 1);
    let hi = 10u64.pow(digits);
    rng.gen_range(lo..hi)
}

fn main() {
    let args = Args::parse();
    assert!(
        (1..=19).contains(&args.max_digits),
        "--max-digits must be in 1..=19"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut unchanged = 0u64;
    let mut overflowed = 0u64;
    let mut failures = 0u64;

    for _ in 0..args.count {
        let n = random_input(&mut rng, args.max_digits);

        match nearest_bigger(n) {
            Ok(out) => {
                if out == n {
                    unchanged += 1;
                }
                let report = check_successor(n, out);
                if !report.is_valid() {
                    failures += 1;
                    eprintln!("invariant violation: {report}");
                }
            }
            Err(Error::Overflow) => overflowed += 1,
            Err(e) => {
                failures += 1;
                eprintln!("unexpected error for {n}: {e}");
            }
        }
    }

    println!(
        "checked {} inputs (seed={}, max_digits={})",
        args.count, args.seed, args.max_digits
    );
    println!(
        "  no successor: {:>10}\n  overflowed:   {:>10}\n  failures:     {:>10}",
        unchanged, overflowed, failures
    );

    if failures > 0 {
        std::process::exit(1);
    }
}
