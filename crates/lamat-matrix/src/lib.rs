#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `lamat-matrix` provides [`Matrix`], a rectangular, dynamically-sized matrix with
//! owned row-major storage, and the classical linear algebra built directly on top
//! of it: addition, multiplication, transposition, cofactors, the adjugate, the
//! determinant and the inverse.
//!
//! Every operation that can fail returns a [`MatrixError`] instead of panicking,
//! and validates its preconditions before producing a result. The only panicking
//! entry point is the `m[(i, j)]` index operator.
//!
//! # Quick Start
//!
//! ```rust
//! use lamat_matrix::{Matrix, MatrixError};
//!
//! # fn main() -> Result<(), MatrixError> {
//! let a = Matrix::from_rows(&[[5.0, 1.0, 3.0], [-4.0, 1.0, -2.0], [0.0, 7.0, 0.0]])?;
//!
//! assert_eq!(a.det()?, -14.0);
//! assert_eq!(a.transposed().row(0)?, &[5.0, -4.0, 0.0]);
//!
//! let inv = a.inverse()?;
//! let id = (&inv * &a)?;
//! assert!(approx::relative_eq!(id, Matrix::<f64>::identity(3), epsilon = 1e-12));
//!
//! // shapes are checked at runtime
//! let b = Matrix::<f64>::new(2, 3);
//! assert!((&a + &b).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `rand`: [`Matrix::random_uniform`] to sample matrices from a uniform distribution.
//! - `serde`: `Serialize` and `Deserialize` for [`Matrix`].

/// Error types for matrix operations.
pub mod error;

/// Determinant, cofactors, adjugate and inverse.
pub mod linalg;

/// The matrix type: storage, construction and element access.
pub mod matrix;

/// Arithmetic between matrices and with scalars.
pub mod ops;

/// Traits describing the scalar element type.
pub mod scalar;

/// Printing of matrices.
pub mod display;

/// Tolerant comparison through the `approx` traits.
pub mod tolerance;

/// Random matrix construction.
#[cfg(feature = "rand")]
pub mod random;

/// Serialization support.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::error::MatrixError;
pub use crate::matrix::{is_nan, Matrix};
pub use crate::scalar::{MaybeNan, Scalar};
