//! Adversarial input tests.
//!
//! Hostile orderings for the sort (presorted, reversed, duplicate runs,
//! organ pipe, sawtooth) and boundary digit patterns for the permutation.
//! Presorted input is the classic worst case for a naive quicksort, which
//! recurses O(n) deep; these tests pin the logarithmic stack bound.

mod support;

use permsort::validation::check_successor;
use permsort::{nearest_bigger, sort_ascending};
use support::cases::{ascending, descending, organ_pipe, sawtooth};

fn assert_sorted(v: &[i64]) {
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_presorted_input() {
    let mut v = ascending(100_000);
    let expected = v.clone();
    sort_ascending(&mut v);
    assert_eq!(v, expected);
}

#[test]
fn test_reverse_sorted_input() {
    let mut v = descending(100_000);
    sort_ascending(&mut v);
    assert_sorted(&v);
    assert_eq!(v[0], 0);
    assert_eq!(v[99_999], 99_999);
}

#[test]
fn test_all_equal_input() {
    let mut v = vec![7i64; 50_000];
    sort_ascending(&mut v);
    assert_eq!(v, vec![7i64; 50_000]);
}

#[test]
fn test_organ_pipe_input() {
    let mut v = organ_pipe(100_001);
    sort_ascending(&mut v);
    assert_sorted(&v);
}

#[test]
fn test_sawtooth_input() {
    for period in [2, 7, 1_000] {
        let mut v = sawtooth(50_000, period);
        sort_ascending(&mut v);
        assert_sorted(&v);
    }
}

#[test]
fn test_bounded_stack_on_hostile_inputs() {
    // Recursing only into the smaller partition caps the depth near
    // log2(n) ~ 20 here, so a stack a fraction of the default suffices.
    // A naive quicksort would need roughly a million frames for these.
    let handle = std::thread::Builder::new()
        .stack_size(512 * 1024)
        .spawn(|| {
            let mut v = ascending(1 << 20);
            sort_ascending(&mut v);
            assert_sorted(&v);

            let mut v = descending(1 << 20);
            sort_ascending(&mut v);
            assert_sorted(&v);
        })
        .expect("failed to spawn sort thread");
    handle.join().expect("sort thread panicked");
}

#[test]
fn test_nearest_bigger_boundary_patterns() {
    // Trailing zeros, interior zeros, long equal runs, near-limit values.
    for n in [
        10u64,
        100,
        1_000_000_000_000_000_000,
        101,
        1_010,
        110_000,
        999_999_999_999_999_998,
        1_111_111_111_111_111_112,
        123_456_789_987_654_321,
        9_876_543_210,
    ] {
        let out = nearest_bigger(n).expect("inputs chosen to have representable successors");
        let report = check_successor(n, out);
        assert!(report.is_valid(), "n={n}: {report}");
    }
}

#[test]
fn test_nearest_bigger_long_nonincreasing_is_unchanged() {
    assert_eq!(nearest_bigger(9_876_543_210), Ok(9_876_543_210));
    assert_eq!(nearest_bigger(9_999_999_999), Ok(9_999_999_999));
    assert_eq!(nearest_bigger(9_988_776_655), Ok(9_988_776_655));
}
