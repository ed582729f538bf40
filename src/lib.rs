//! Utility functions for standard linear-algebraic operations on vectors
//! and matrices.
//!
//! All numeric results are returned as `f64`, or vectors and matrices of
//! them; inputs may be slices of any primitive numeric type, mixed freely
//! between the two operands, and are widened to double precision before
//! any arithmetic.
//!
//! ```
//! use linalg::{dot, transpose};
//!
//! let d = dot(&[1, 2, 3], &[4.0, 5.0, 6.0])?;
//! assert_eq!(d, 32.0);
//!
//! let t = transpose(&[vec![1, 2], vec![3, 4], vec![5, 6]])?;
//! assert_eq!(t, vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]);
//! # Ok::<(), linalg::LinalgError>(())
//! ```

pub mod error;
pub mod matrix;
pub mod vector;
mod utils;

pub use error::{LinalgError, LinalgResult};
pub use matrix::{identity, matmul, transpose};
pub use utils::Numeric;
pub use vector::{add, cross, dot, is_orthogonal, scalar_mul, EPSILON};
