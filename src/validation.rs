//! Result validation for sorting and digit-permutation runs.
//!
//! Provides report-producing checks for the algorithm outputs. Useful for
//! debugging, testing, and the stress/bench binaries.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Outcome of checking a sort result against its input.
#[derive(Debug, Clone)]
pub struct SortReport {
    /// Number of elements in the checked output.
    pub len: usize,
    /// Adjacent pairs that are out of order.
    pub inversions: usize,
    /// First index `i` with `sorted[i] > sorted[i + 1]`.
    pub first_violation: Option<usize>,
    /// Output uses exactly the input's element multiset.
    pub multiset_matches: bool,
}

impl SortReport {
    /// True when the output is non-decreasing and a permutation of the
    /// input.
    pub fn is_valid(&self) -> bool {
        self.inversions == 0 && self.multiset_matches
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "ok".to_string();
        }

        let mut issues = Vec::new();
        if self.inversions > 0 {
            let first = self.first_violation.unwrap_or(0);
            issues.push(format!(
                "{} adjacent inversions (first at index {})",
                self.inversions, first
            ));
        }
        if !self.multiset_matches {
            issues.push("output is not a permutation of the input".to_string());
        }
        issues.join(", ")
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SortReport {{ len={}, {} }}", self.len, self.summary())
    }
}

/// Check that `sorted` is a non-decreasing permutation of `original`.
pub fn check_sorted<T: Ord + Hash>(original: &[T], sorted: &[T]) -> SortReport {
    let mut inversions = 0;
    let mut first_violation = None;
    for i in 0..sorted.len().saturating_sub(1) {
        if sorted[i] > sorted[i + 1] {
            inversions += 1;
            if first_violation.is_none() {
                first_violation = Some(i);
            }
        }
    }

    SortReport {
        len: sorted.len(),
        inversions,
        first_violation,
        multiset_matches: multisets_equal(original, sorted),
    }
}

fn multisets_equal<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: FxHashMap<&T, i64> = FxHashMap::default();
    for x in a {
        *counts.entry(x).or_insert(0) += 1;
    }
    for x in b {
        match counts.get_mut(x) {
            Some(c) => *c -= 1,
            None => return false,
        }
    }
    counts.values().all(|&c| c == 0)
}

/// Outcome of checking a `nearest_bigger` result against its input.
#[derive(Debug, Clone, Copy)]
pub struct SuccessorReport {
    pub input: u64,
    pub output: u64,
    /// A successor was produced (output differs from input).
    pub changed: bool,
    /// The input's digit sequence contains an ascent, so a successor must
    /// exist.
    pub successor_expected: bool,
    /// Input and output use the same decimal digit multiset.
    pub digits_match: bool,
}

impl SuccessorReport {
    /// True when the output satisfies every invariant: same digit
    /// multiset, changed exactly when a successor exists, and strictly
    /// greater whenever changed.
    pub fn is_valid(&self) -> bool {
        self.digits_match
            && self.changed == self.successor_expected
            && (!self.changed || self.output > self.input)
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "ok".to_string();
        }

        let mut issues = Vec::new();
        if !self.digits_match {
            issues.push("digit multiset changed".to_string());
        }
        if self.changed != self.successor_expected {
            issues.push(format!(
                "successor expected: {}, output changed: {}",
                self.successor_expected, self.changed
            ));
        }
        if self.changed && self.output <= self.input {
            issues.push("output not strictly greater than input".to_string());
        }
        issues.join(", ")
    }
}

impl fmt::Display for SuccessorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SuccessorReport {{ input={}, output={}, {} }}",
            self.input,
            self.output,
            self.summary()
        )
    }
}

/// Check a `nearest_bigger` input/output pair.
///
/// `input` must be positive (the operation's domain).
pub fn check_successor(input: u64, output: u64) -> SuccessorReport {
    debug_assert!(input > 0);

    let digits = crate::digits::to_digits(input);
    let successor_expected = digits.windows(2).any(|w| w[0] < w[1]);

    SuccessorReport {
        input,
        output,
        changed: output != input,
        successor_expected,
        digits_match: digit_counts(input) == digit_counts(output),
    }
}

fn digit_counts(mut n: u64) -> [u32; 10] {
    let mut counts = [0u32; 10];
    loop {
        counts[(n % 10) as usize] += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    counts
}
