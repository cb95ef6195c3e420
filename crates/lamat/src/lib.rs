#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Re-exports the lamat crates under a single dependency.
//!
//! ```rust
//! use lamat::matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! assert_eq!(a.det().unwrap(), -2);
//! ```

#[doc(inline)]
pub use lamat_matrix as matrix;

pub use lamat_matrix::{Matrix, MatrixError};
