//! Square-matrix puzzles and array scans.

/// Clockwise spiral matrix of the given size, filled with 1..=size².
///
/// ```
/// # use permsort::spiral;
/// assert_eq!(
///     spiral(3),
///     vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]],
/// );
/// ```
pub fn spiral(size: usize) -> Vec<Vec<u32>> {
    if size == 0 {
        return Vec::new();
    }

    let mut matrix = vec![vec![0u32; size]; size];
    let mut value = 0u32;

    // Inclusive bounds of the unfilled region; signed so the final
    // decrements on a collapsed region are harmless.
    let mut row_start = 0isize;
    let mut row_end = size as isize - 1;
    let mut col_start = 0isize;
    let mut col_end = size as isize - 1;

    while row_start <= row_end && col_start <= col_end {
        for col in col_start..=col_end {
            value += 1;
            matrix[row_start as usize][col as usize] = value;
        }
        row_start += 1;

        for row in row_start..=row_end {
            value += 1;
            matrix[row as usize][col_end as usize] = value;
        }
        col_end -= 1;

        for col in (col_start..=col_end).rev() {
            value += 1;
            matrix[row_end as usize][col as usize] = value;
        }
        row_end -= 1;

        for row in (row_start..=row_end).rev() {
            value += 1;
            matrix[row as usize][col_start as usize] = value;
        }
        col_start += 1;
    }

    matrix
}

/// Rotate a square matrix 90° clockwise in place.
///
/// Works as a transpose followed by reversing each row, so no second
/// matrix is allocated.
pub fn rotate_clockwise<T>(matrix: &mut [Vec<T>]) {
    let n = matrix.len();
    debug_assert!(matrix.iter().all(|row| row.len() == n));

    for i in 0..n {
        for j in (i + 1)..n {
            let (upper, lower) = matrix.split_at_mut(j);
            std::mem::swap(&mut upper[i][j], &mut lower[0][i]);
        }
    }
    for row in matrix.iter_mut() {
        row.reverse();
    }
}

/// Index whose left-side sum equals its right-side sum, if any.
///
/// Sequences shorter than three elements have no balance point, and the
/// last element is never a candidate.
///
/// ```
/// # use permsort::balance_index;
/// assert_eq!(balance_index(&[1, 2, 5, 3, 0]), Some(2));
/// ```
pub fn balance_index(xs: &[i64]) -> Option<usize> {
    if xs.len() < 3 {
        return None;
    }

    let total: i64 = xs.iter().sum();
    let mut left = 0i64;
    for (i, &x) in xs.iter().take(xs.len() - 1).enumerate() {
        if left == total - left - x {
            return Some(i);
        }
        left += x;
    }
    None
}
