//! Determinant, cofactors, adjugate and inverse.
//!
//! The determinant is computed by recursive Laplace expansion along the first
//! row. This has factorial cost in the matrix order but is exact for integer
//! scalars and reproduces the textbook values for small inputs.

use crate::{
    error::MatrixError,
    matrix::Matrix,
    scalar::{MaybeNan, Scalar},
};

impl<T: Scalar> Matrix<T> {
    fn ensure_square(&self, operation: &'static str) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square(operation, self.rows(), self.cols()));
        }
        Ok(self.rows())
    }

    /// The minor obtained by deleting row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or `(i, j)` is out of range.
    pub fn minor(&self, i: usize, j: usize) -> Result<Matrix<T>, MatrixError> {
        let n = self.ensure_square("minor")?;
        if i >= n || j >= n {
            return Err(MatrixError::index_out_of_bounds(i, j, self.shape()));
        }
        Ok(self.minor_unchecked(i, j))
    }

    fn minor_unchecked(&self, i: usize, j: usize) -> Matrix<T> {
        let n = self.rows();
        let data = self.as_slice();
        Matrix::from_shape_fn([n - 1, n - 1], |[r, c]| {
            let src_r = if r < i { r } else { r + 1 };
            let src_c = if c < j { c } else { c + 1 };
            data[src_r * n + src_c]
        })
    }

    /// The cofactor `(-1)^(i + j) * det(minor(i, j))`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or `(i, j)` is out of range.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        let minor = self.minor(i, j)?;
        Ok(signed(i + j, minor.det_unchecked()))
    }

    /// The matrix of all cofactors, `C(i, j) = cofactor(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn cofactor_matrix(&self) -> Result<Matrix<T>, MatrixError> {
        let n = self.ensure_square("cofactor_matrix")?;
        Ok(Matrix::from_shape_fn([n, n], |[i, j]| {
            signed(i + j, self.minor_unchecked(i, j).det_unchecked())
        }))
    }

    /// The determinant.
    ///
    /// The 0x0 matrix has determinant one, the neutral element of the expansion.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[5, 1, 3], [-4, 1, -2], [0, 7, 0]]).unwrap();
    /// assert_eq!(a.det().unwrap(), -14);
    /// ```
    pub fn det(&self) -> Result<T, MatrixError> {
        let n = self.ensure_square("det")?;
        log::trace!("determinant of a {n}x{n} matrix by cofactor expansion");
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> T {
        let n = self.rows();
        let a = self.as_slice();
        match n {
            0 => T::one(),
            1 => a[0],
            2 => a[0] * a[3] - a[1] * a[2],
            _ => (0..n).fold(T::zero(), |acc, j| {
                let term = a[j] * self.minor_unchecked(0, j).det_unchecked();
                if j % 2 == 0 {
                    acc + term
                } else {
                    acc - term
                }
            }),
        }
    }

    /// The adjugate (classical adjoint), the transpose of the cofactor matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.adjugate().unwrap().as_slice(), &[4, -2, -3, 1]);
    /// ```
    pub fn adjugate(&self) -> Result<Matrix<T>, MatrixError> {
        let n = self.ensure_square("adjugate")?;
        Ok(Matrix::from_shape_fn([n, n], |[i, j]| {
            signed(i + j, self.minor_unchecked(j, i).det_unchecked())
        }))
    }

    /// Alias of [`Matrix::adjugate`].
    pub fn adjoint(&self) -> Result<Matrix<T>, MatrixError> {
        self.adjugate()
    }

    /// The inverse, computed as `adjugate / det`.
    ///
    /// Only floating point scalars have an inverse; integer matrices can use
    /// [`Matrix::adjugate`] and [`Matrix::det`] directly.
    ///
    /// The singularity test is an exact comparison of the determinant with
    /// zero. A nonzero determinant whose reciprocal overflows is treated as
    /// singular too. Use the `approx` traits to compare the result against an
    /// expected matrix with a tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix and
    /// [`MatrixError::SingularMatrix`] when the determinant is zero or its
    /// reciprocal is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// let id = inv.matmul(&a).unwrap();
    /// assert!((id[(0, 0)] - 1.0_f64).abs() < 1e-12);
    /// assert!(id[(1, 0)].abs() < 1e-12);
    /// ```
    ///
    /// Integer matrices do not have an `inverse`:
    ///
    /// ```compile_fail
    /// use lamat_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[2i64, 0], [0, 2]]).unwrap();
    /// let _ = a.inverse();
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError>
    where
        T: num_traits::Float,
    {
        let n = self.ensure_square("inverse")?;
        let det = self.det_unchecked();
        let reciprocal = T::one() / det;
        if det == T::zero() || !MaybeNan::is_finite(&reciprocal) {
            log::debug!("{n}x{n} matrix is singular, no inverse");
            return Err(MatrixError::SingularMatrix);
        }
        Ok(self.adjugate()?.mul_scalar(reciprocal))
    }
}

/// Applies the checkerboard sign `(-1)^k` to `value`.
#[inline]
fn signed<T: Scalar>(k: usize, value: T) -> T {
    if k % 2 == 0 {
        value
    } else {
        T::zero() - value
    }
}
