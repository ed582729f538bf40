//! Standard linear-algebraic operations on vectors.
//!
//! Vectors are borrowed slices of any primitive numeric type; the element
//! types of the two operands may differ. Results always come back as `f64`
//! (or vectors of them), widened before any arithmetic.

use crate::error::{LinalgError, LinalgResult};
use crate::utils::{ensure_equal_len, widen, Numeric};

/// Maximum permissible magnitude for a floating-point result to be
/// considered zero.
pub const EPSILON: f64 = 1e-8;

/// Computes the dot product of two equal-length vectors.
///
/// Elements are widened to `f64` and the products accumulated left to
/// right. Two empty vectors have a dot product of `0.0`.
///
/// # Errors
///
/// [`LinalgError::LengthMismatch`] if the operand lengths differ.
///
/// ```
/// use linalg::vector::dot;
///
/// let d = dot(&[1, 2, 3], &[4.0, 5.0, 6.0])?;
/// assert_eq!(d, 32.0);
/// # Ok::<(), linalg::LinalgError>(())
/// ```
pub fn dot<T, U>(a: &[T], b: &[U]) -> LinalgResult<f64>
where
    T: Numeric,
    U: Numeric,
{
    ensure_equal_len(a.len(), b.len())?;

    let mut acc = 0.0;
    for i in 0..a.len() {
        acc += widen(a[i]) * widen(b[i]);
    }

    Ok(acc)
}

/// Determines whether two vectors are orthogonal, i.e. their dot product is
/// zero within [`EPSILON`].
///
/// Absent (`None`) operands are rejected; a zero-length slice is a valid
/// vector here and two empty vectors count as orthogonal. Note the contrast
/// with [`add`], which treats `None` as a zero-length vector.
///
/// # Errors
///
/// [`LinalgError::NullInput`] if either operand is `None`, otherwise any
/// error from [`dot`].
pub fn is_orthogonal<T, U>(a: Option<&[T]>, b: Option<&[U]>) -> LinalgResult<bool>
where
    T: Numeric,
    U: Numeric,
{
    let (Some(a), Some(b)) = (a, b) else {
        return Err(LinalgError::NullInput);
    };

    let d = dot(a, b)?;
    Ok(d.abs() < EPSILON)
}

/// Computes the cross product of two 3-dimensional vectors.
///
/// The result is the standard right-hand-rule expansion
/// `(a1*b2 - a2*b1, a2*b0 - a0*b2, a0*b1 - a1*b0)`, evaluated in `f64`.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] if either operand does not have
/// length exactly 3.
pub fn cross<T, U>(a: &[T], b: &[U]) -> LinalgResult<Vec<f64>>
where
    T: Numeric,
    U: Numeric,
{
    if a.len() != 3 {
        return Err(LinalgError::DimensionMismatch {
            expected: 3,
            actual: a.len(),
        });
    }
    if b.len() != 3 {
        return Err(LinalgError::DimensionMismatch {
            expected: 3,
            actual: b.len(),
        });
    }

    let (a0, a1, a2) = (widen(a[0]), widen(a[1]), widen(a[2]));
    let (b0, b1, b2) = (widen(b[0]), widen(b[1]), widen(b[2]));

    Ok(vec![
        a1 * b2 - a2 * b1,
        a2 * b0 - a0 * b2,
        a0 * b1 - a1 * b0,
    ])
}

/// Adds two vectors elementwise.
///
/// Absent (`None`) operands are treated as zero-length vectors, so
/// `add(None, None)` succeeds with an empty result while `None` against a
/// non-empty vector fails the length check. [`is_orthogonal`] rejects
/// `None` instead.
///
/// # Errors
///
/// [`LinalgError::LengthMismatch`] if the resolved operand lengths differ.
pub fn add<T, U>(a: Option<&[T]>, b: Option<&[U]>) -> LinalgResult<Vec<f64>>
where
    T: Numeric,
    U: Numeric,
{
    let a = a.unwrap_or(&[]);
    let b = b.unwrap_or(&[]);
    ensure_equal_len(a.len(), b.len())?;

    Ok(a.iter()
        .zip(b)
        .map(|(&x, &y)| widen(x) + widen(y))
        .collect())
}

/// Multiplies a vector by a scalar value.
///
/// A zero scalar short-circuits to an exact all-zero vector of the same
/// length, even when `v` contains NaN or infinities.
///
/// # Errors
///
/// [`LinalgError::EmptyInput`] if `v` has zero length.
pub fn scalar_mul<T, S>(v: &[T], scalar: S) -> LinalgResult<Vec<f64>>
where
    T: Numeric,
    S: Numeric,
{
    if v.is_empty() {
        return Err(LinalgError::EmptyInput);
    }

    let s = widen(scalar);
    if s == 0.0 {
        return Ok(vec![0.0; v.len()]);
    }

    Ok(v.iter().map(|&x| widen(x) * s).collect())
}
