//! Dense linear system solving
//!
//! Gauss-Jordan elimination with partial pivoting, used by homography
//! estimation. The matrix is augmented with the right-hand side and fully
//! reduced to the identity, so the solution can be read directly off the
//! last column with no back-substitution pass.

use crate::{TransformError, TransformResult};

/// Absolute threshold below which a pivot is treated as zero.
///
/// This is an absolute bound, not relative to the matrix scale; callers
/// with very large or very small coefficient magnitudes may need to
/// pre-scale their systems.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Solve the dense square system `A · x = b`.
///
/// # Arguments
///
/// * `a` - Coefficient matrix, row-major (`n` rows of `n` values)
/// * `b` - Right-hand side (`n` values)
///
/// # Errors
///
/// Returns [`TransformError::SingularSystem`] if any pivot magnitude falls
/// below [`PIVOT_TOLERANCE`] during elimination, and
/// [`TransformError::InvalidParameters`] if `a` is not square with `b`'s
/// length.
pub fn solve(a: &[Vec<f64>], b: &[f64]) -> TransformResult<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(TransformError::InvalidParameters(format!(
            "expected a {n}x{n} matrix to match a right-hand side of {n} values"
        )));
    }

    // Augmented matrix [A | b], mutated in place.
    let mut m: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| {
            let mut aug = row.clone();
            aug.push(rhs);
            aug
        })
        .collect();

    for i in 0..n {
        // Partial pivoting: bring the largest remaining entry in column i
        // into the pivot position.
        let mut max_row = i;
        for r in (i + 1)..n {
            if m[r][i].abs() > m[max_row][i].abs() {
                max_row = r;
            }
        }
        m.swap(i, max_row);

        let pivot = m[i][i];
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(TransformError::SingularSystem);
        }

        for c in i..=n {
            m[i][c] /= pivot;
        }

        // Eliminate column i from every other row, reducing to the identity.
        for r in 0..n {
            if r == i {
                continue;
            }
            let factor = m[r][i];
            if factor == 0.0 {
                continue;
            }
            for c in i..=n {
                m[r][c] -= factor * m[i][c];
            }
        }
    }

    Ok(m.into_iter().map(|row| row[n]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect()
    }

    #[test]
    fn test_identity_system_returns_rhs() {
        let b: Vec<f64> = (1..=8).map(|v| v as f64).collect();
        let x = solve(&identity(8), &b).unwrap();
        for (xi, bi) in x.iter().zip(&b) {
            assert!((xi - bi).abs() < 1e-15);
        }
    }

    #[test]
    fn test_small_system() {
        // 2a + b = 3, a + 3b = 5  =>  a = 4/5, b = 7/5
        let a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
        let x = solve(&a, &[3.0, 5.0]).unwrap();
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_pivoting_handles_zero_leading_entry() {
        // Leading zero forces a row swap before elimination can proceed.
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let x = solve(&a, &[2.0, 3.0]).unwrap();
        assert!((x[0] - 3.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_row_is_singular() {
        let a = vec![vec![1.0, 2.0], vec![0.0, 0.0]];
        assert!(matches!(
            solve(&a, &[1.0, 1.0]),
            Err(TransformError::SingularSystem)
        ));
    }

    #[test]
    fn test_dependent_rows_are_singular() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert!(matches!(
            solve(&a, &[1.0, 2.0]),
            Err(TransformError::SingularSystem)
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = vec![vec![1.0, 0.0]];
        assert!(matches!(
            solve(&a, &[1.0, 2.0]),
            Err(TransformError::InvalidParameters(_))
        ));
    }
}
