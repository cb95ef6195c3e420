//! Arithmetic on matrices.
//!
//! The fallible operations are methods returning `Result`; the operator
//! implementations on references forward to them, so `&a + &b` yields a
//! `Result<Matrix<T>, MatrixError>` as well. Division by a scalar is written
//! `&a / s`. Scaling is infallible: `&a * s` is implemented for the primitive
//! numeric types and returns the matrix directly.

use num_traits::{One, Zero};

use crate::{error::MatrixError, matrix::Matrix, scalar::MaybeNan};

impl<T> Matrix<T>
where
    T: Copy,
{
    fn element_wise_op<F>(
        &self,
        other: &Matrix<T>,
        operation: &'static str,
        op: F,
    ) -> Result<Matrix<T>, MatrixError>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension_mismatch(
                operation,
                self.shape(),
                other.shape(),
            ));
        }

        let data = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();

        Matrix::from_shape_vec(self.shape(), data)
    }

    /// Element-wise sum of two matrices of the same shape.
    ///
    /// # Errors
    ///
    /// If the shapes differ, a [`MatrixError::DimensionMismatch`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_rows(&[[10, 20], [30, 40]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[11, 22, 33, 44]);
    ///
    /// assert!(a.add(&Matrix::new(2, 3)).is_err());
    /// ```
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: std::ops::Add<Output = T>,
    {
        self.element_wise_op(other, "add", |a, b| a + b)
    }

    /// Element-wise difference of two matrices of the same shape.
    ///
    /// # Errors
    ///
    /// If the shapes differ, a [`MatrixError::DimensionMismatch`] is returned.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: std::ops::Sub<Output = T>,
    {
        self.element_wise_op(other, "sub", |a, b| a - b)
    }

    /// Matrix product `self * other`.
    ///
    /// The result is `self.rows() x other.cols()`. Each element is accumulated
    /// left to right over the inner dimension with the scalar's own `+` and
    /// `*`, without any compensation for rounding.
    ///
    /// # Errors
    ///
    /// If `self.cols() != other.rows()`, a [`MatrixError::DimensionMismatch`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let a = Matrix::<f64>::new(2, 3);
    /// assert_eq!(a.matmul(&Matrix::new(3, 24)).unwrap().shape(), [2, 24]);
    /// assert!(a.matmul(&Matrix::new(4, 24)).is_err());
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: Zero + std::ops::Mul<Output = T>,
    {
        if self.cols() != other.rows() {
            return Err(MatrixError::dimension_mismatch(
                "matmul",
                self.shape(),
                other.shape(),
            ));
        }

        let (m, n, p) = (self.rows(), self.cols(), other.cols());
        let lhs = self.as_slice();
        let rhs = other.as_slice();
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            for k in 0..p {
                let mut acc = T::zero();
                for j in 0..n {
                    acc = acc + lhs[i * n + j] * rhs[j * p + k];
                }
                data.push(acc);
            }
        }

        Matrix::from_shape_vec([m, p], data)
    }

    /// Multiplies every element by `scalar`.
    pub fn mul_scalar(&self, scalar: T) -> Matrix<T>
    where
        T: std::ops::Mul<Output = T>,
    {
        self.map(|&v| v * scalar)
    }

    /// Divides the matrix by `scalar`, multiplying every element by `1 / scalar`.
    ///
    /// For integer scalars the reciprocal truncates, so only `1` and `-1` give
    /// an exact quotient.
    ///
    /// # Errors
    ///
    /// If `scalar` is zero, or so small that its reciprocal is not finite, a
    /// [`MatrixError::DivisionByZero`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::{Matrix, MatrixError};
    ///
    /// let m = Matrix::from_rows(&[[2.0, 4.0]]).unwrap();
    /// assert_eq!(m.div_scalar(2.0).unwrap().as_slice(), &[1.0, 2.0]);
    /// assert_eq!(m.div_scalar(0.0), Err(MatrixError::DivisionByZero));
    /// assert_eq!(m.div_scalar(1e-310), Err(MatrixError::DivisionByZero));
    /// ```
    pub fn div_scalar(&self, scalar: T) -> Result<Matrix<T>, MatrixError>
    where
        T: Zero
            + One
            + PartialEq
            + MaybeNan
            + std::ops::Mul<Output = T>
            + std::ops::Div<Output = T>,
    {
        if scalar == T::zero() {
            return Err(MatrixError::DivisionByZero);
        }
        let reciprocal = T::one() / scalar;
        if !reciprocal.is_finite() {
            log::debug!("reciprocal of the divisor is not finite");
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.mul_scalar(reciprocal))
    }
}

impl<T> std::ops::Add for &Matrix<T>
where
    T: Copy + std::ops::Add<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<T> std::ops::Sub for &Matrix<T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::sub(self, rhs)
    }
}

impl<T> std::ops::Mul for &Matrix<T>
where
    T: Copy + Zero + std::ops::Mul<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul(rhs)
    }
}

macro_rules! impl_mul_scalar {
    ($($t:ty),*) => {
        $(
            impl std::ops::Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }
        )*
    };
}

impl_mul_scalar!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> std::ops::Div<T> for &Matrix<T>
where
    T: Copy
        + Zero
        + One
        + PartialEq
        + MaybeNan
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn div(self, rhs: T) -> Self::Output {
        self.div_scalar(rhs)
    }
}
