//! Matrix construction and standard linear-algebraic operations on
//! matrices.
//!
//! A matrix is a borrowed slice of row vectors, `&[Vec<T>]`, so ragged
//! input is representable and rejected with a typed error where the
//! operation needs rectangular shape. Results are freshly allocated
//! `Vec<Vec<f64>>` with no aliasing between rows.

use crate::error::{LinalgError, LinalgResult};
use crate::utils::{ensure_rectangular, widen, Numeric};

/// Produces an identity matrix of a given size: 1.0 on the diagonal, 0.0
/// elsewhere.
///
/// # Errors
///
/// [`LinalgError::InvalidSize`] if `size` is 0.
pub fn identity(size: usize) -> LinalgResult<Vec<Vec<f64>>> {
    if size == 0 {
        return Err(LinalgError::InvalidSize { size });
    }

    Ok((0..size)
        .map(|i| {
            let mut row = vec![0.0; size];
            row[i] = 1.0;
            row
        })
        .collect())
}

/// Transposes a matrix, swapping rows and columns.
///
/// A matrix with zero rows transposes to the empty matrix with no error,
/// as does an `n × 0` matrix (its transpose has no rows to hold).
///
/// # Errors
///
/// [`LinalgError::NotRectangular`] if any row's length differs from the
/// first row's.
///
/// ```
/// use linalg::matrix::transpose;
///
/// let t = transpose(&[vec![1, 2, 3], vec![4, 5, 6]])?;
/// assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
/// # Ok::<(), linalg::LinalgError>(())
/// ```
pub fn transpose<T: Numeric>(m: &[Vec<T>]) -> LinalgResult<Vec<Vec<f64>>> {
    if m.is_empty() {
        return Ok(Vec::new());
    }
    let width = ensure_rectangular(m)?;

    let mut out = vec![vec![0.0; m.len()]; width];
    for (i, row) in m.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            out[j][i] = widen(x);
        }
    }

    Ok(out)
}

/// Multiplies two matrices, accumulating in double precision.
///
/// Both operands must be rectangular and `a`'s column count must equal
/// `b`'s row count; the result has `a`'s row count and `b`'s column count.
/// A product with zero-row `a` is the empty matrix.
///
/// # Errors
///
/// [`LinalgError::NotRectangular`] if either operand has ragged rows, then
/// [`LinalgError::DimensionMismatch`] if the inner dimensions disagree.
pub fn matmul<T, U>(a: &[Vec<T>], b: &[Vec<U>]) -> LinalgResult<Vec<Vec<f64>>>
where
    T: Numeric,
    U: Numeric,
{
    let a_cols = ensure_rectangular(a)?;
    let b_cols = ensure_rectangular(b)?;

    if a.is_empty() {
        return Ok(Vec::new());
    }
    if a_cols != b.len() {
        return Err(LinalgError::DimensionMismatch {
            expected: a_cols,
            actual: b.len(),
        });
    }

    let mut out = vec![vec![0.0; b_cols]; a.len()];
    for (i, row) in a.iter().enumerate() {
        for j in 0..b_cols {
            let mut acc = 0.0;
            for (k, &x) in row.iter().enumerate() {
                acc += widen(x) * widen(b[k][j]);
            }
            out[i][j] = acc;
        }
    }

    Ok(out)
}
