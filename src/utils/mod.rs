use log::trace;
use num_traits::AsPrimitive;

use crate::error::{LinalgError, LinalgResult};

/// Element types accepted by the operations: any primitive numeric type
/// (integer or float) that widens to `f64` with `as`-cast semantics.
pub trait Numeric: AsPrimitive<f64> {}

impl<T: AsPrimitive<f64>> Numeric for T {}

/// Widens a single element to double precision.
#[inline]
pub(crate) fn widen<T: Numeric>(x: T) -> f64 {
    x.as_()
}

/// Checks that two operand lengths are equal.
pub(crate) fn ensure_equal_len(left: usize, right: usize) -> LinalgResult<()> {
    if left != right {
        trace!("length check failed: {left} vs {right}");
        return Err(LinalgError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Checks that every row of `m` has the same length as the first row and
/// returns that common length. A matrix with zero rows is rectangular with
/// width 0.
pub(crate) fn ensure_rectangular<T>(m: &[Vec<T>]) -> LinalgResult<usize> {
    let expected = m.first().map_or(0, Vec::len);
    for (row, r) in m.iter().enumerate() {
        if r.len() != expected {
            trace!("rectangularity check failed at row {row}: {} vs {expected}", r.len());
            return Err(LinalgError::NotRectangular {
                row,
                expected,
                actual: r.len(),
            });
        }
    }
    Ok(expected)
}
