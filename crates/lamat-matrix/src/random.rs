use rand::distr::{uniform::SampleUniform, Distribution, Uniform};
use rand::Rng;

use crate::{error::MatrixError, matrix::Matrix};

impl<T> Matrix<T>
where
    T: SampleUniform,
{
    /// Creates a matrix with every element drawn from `Uniform(low, high)`.
    ///
    /// The interval is half-open, `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSampleRange`] if `low >= high` or either bound is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let m = Matrix::<f64>::random_uniform(2, 3, -10.0, 10.0, &mut rng).unwrap();
    /// assert_eq!(m.shape(), [2, 3]);
    /// assert!(m.iter().all(|v| (-10.0..10.0).contains(v)));
    /// ```
    pub fn random_uniform<R>(
        rows: usize,
        cols: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> Result<Self, MatrixError>
    where
        R: Rng + ?Sized,
    {
        let dist =
            Uniform::new(low, high).map_err(|e| MatrixError::InvalidSampleRange(e.to_string()))?;
        let data = dist.sample_iter(rng).take(rows * cols).collect();
        Matrix::from_shape_vec([rows, cols], data)
    }
}
