use num_traits::{One, Zero};

use crate::error::MatrixError;

/// A dense, row-major matrix with owned, heap-allocated storage.
///
/// The dimensions are fixed for the lifetime of the buffer: operations that
/// produce a different shape return a new matrix instead of resizing.
/// Cloning performs a deep copy, two matrices never share storage.
///
/// # Examples
///
/// ```
/// use lamat_matrix::Matrix;
///
/// let mut m = Matrix::<f64>::new(2, 3);
/// assert_eq!(m.shape(), [2, 3]);
/// assert_eq!(m.as_slice(), &[0.0; 6]);
///
/// *m.at_mut(1, 2).unwrap() = 4.0;
/// assert_eq!(m[(1, 2)], 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// The empty 0x0 matrix, meant as an assignment target.
impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Matrix<T> {
    /// Creates a new matrix of the given size with every element set to zero.
    ///
    /// Either dimension may be zero, in which case the matrix holds no
    /// elements and every indexed access fails.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Clone + Zero,
    {
        Self::zeros(rows, cols)
    }

    /// Creates a new matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Clone + Zero,
    {
        Self::from_shape_val([rows, cols], T::zero())
    }

    /// Creates the `n x n` multiplicative identity.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let id = Matrix::<i32>::identity(2);
    /// assert_eq!(id.as_slice(), &[1, 0, 0, 1]);
    /// ```
    pub fn identity(n: usize) -> Self
    where
        T: Clone + Zero + One,
    {
        Self::from_shape_fn([n, n], |[i, j]| if i == j { T::one() } else { T::zero() })
    }

    /// Creates a new matrix with the given shape and every element set to `value`.
    pub fn from_shape_val(shape: [usize; 2], value: T) -> Self
    where
        T: Clone,
    {
        let [rows, cols] = shape;
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// If `data.len()` differs from `rows * cols`, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let m = Matrix::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    ///
    /// assert!(Matrix::from_shape_vec([2, 2], vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, MatrixError> {
        let [rows, cols] = shape;
        let numel = rows * cols;
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new matrix from a list of rows.
    ///
    /// An empty list produces the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// If the rows do not all have the same length, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[5, 1, 3], [-4, 1, -2]]).unwrap();
    /// assert_eq!(m.shape(), [2, 3]);
    /// assert_eq!(m[(1, 2)], -2);
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                let actual = rows.iter().map(|r| r.as_ref().len()).sum();
                return Err(MatrixError::invalid_shape(rows.len() * cols, actual));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a new matrix by calling `f` with the `[row, col]` index of each element.
    pub fn from_shape_fn<F>(shape: [usize; 2], f: F) -> Self
    where
        F: Fn([usize; 2]) -> T,
    {
        let [rows, cols] = shape;
        let data = (0..rows * cols).map(|k| f([k / cols, k % cols])).collect();
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if `rows == cols`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator over the rows as slices.
    ///
    /// Yields nothing for a matrix without columns.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, T> {
        // chunks_exact panics on a zero chunk size; any non-zero size works on empty data
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Returns row `i` as a slice.
    ///
    /// # Errors
    ///
    /// If `i >= rows`, an error is returned.
    pub fn row(&self, i: usize) -> Result<&[T], MatrixError> {
        if i >= self.rows {
            return Err(MatrixError::index_out_of_bounds(i, 0, self.shape()));
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> Result<usize, MatrixError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::index_out_of_bounds(i, j, self.shape()));
        }
        Ok(i * self.cols + j)
    }

    /// Returns a reference to the element at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// If `i >= rows` or `j >= cols`, an error is returned.
    pub fn at(&self, i: usize, j: usize) -> Result<&T, MatrixError> {
        let offset = self.offset(i, j)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// If `i >= rows` or `j >= cols`, an error is returned.
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T, MatrixError> {
        let offset = self.offset(i, j)?;
        Ok(&mut self.data[offset])
    }

    /// Sets the element at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// If `i >= rows` or `j >= cols`, an error is returned and the matrix is left untouched.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), MatrixError> {
        *self.at_mut(i, j)? = value;
        Ok(())
    }

    /// Returns the element at row `i`, column `j`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.offset(i, j).ok().map(|offset| &self.data[offset])
    }

    /// Applies `f` to each element and returns the result as a new matrix.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: Fn(&T) -> U,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Returns the transpose, a `cols x rows` matrix with `out(i, j) = self(j, i)`.
    ///
    /// # Example
    ///
    /// ```
    /// use lamat_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let t = m.transposed();
    /// assert_eq!(t.shape(), [3, 2]);
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transposed(&self) -> Self
    where
        T: Clone,
    {
        Self::from_shape_fn([self.cols, self.rows], |[i, j]| {
            self.data[j * self.cols + i].clone()
        })
    }

    /// Returns true if any element is not-a-number.
    ///
    /// Always false for integer scalars.
    pub fn has_nan(&self) -> bool
    where
        T: crate::scalar::MaybeNan,
    {
        self.data.iter().any(|v| v.is_nan())
    }
}

/// Returns true if any element of `matrix` is not-a-number.
///
/// # Example
///
/// ```
/// use lamat_matrix::{is_nan, Matrix};
///
/// let mut m = Matrix::<f64>::new(2, 2);
/// assert!(!is_nan(&m));
/// m[(0, 1)] = f64::NAN;
/// assert!(is_nan(&m));
/// ```
pub fn is_nan<T: crate::scalar::MaybeNan>(matrix: &Matrix<T>) -> bool {
    matrix.has_nan()
}

/// Panicking element access, `m[(i, j)]`.
///
/// Use [`Matrix::at`] for the checked form.
impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        match self.at(i, j) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        match self.offset(i, j) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{is_nan, Matrix};
    use crate::error::MatrixError;

    #[test]
    fn constructor_zero_filled() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.numel(), 6);
        assert!(m.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn default_is_empty() {
        let m = Matrix::<f64>::default();
        assert_eq!(m.shape(), [0, 0]);
        assert!(m.is_empty());
        assert!(m.is_square());
        assert!(m.at(0, 0).is_err());
    }

    #[test]
    fn degenerate_shapes() {
        let m = Matrix::<i32>::new(0, 4);
        assert_eq!(m.shape(), [0, 4]);
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 0);
        assert_eq!(m.at(0, 0), Err(MatrixError::index_out_of_bounds(0, 0, [0, 4])));

        let m = Matrix::<i32>::new(3, 0);
        assert_eq!(m.transposed().shape(), [0, 3]);
        assert!(m.get(0, 0).is_none());
    }

    #[test]
    fn at_bounds() -> Result<(), MatrixError> {
        let mut m = Matrix::<i32>::new(2, 3);
        *m.at_mut(1, 2)? = 7;
        m.set(0, 1, 3)?;
        assert_eq!(*m.at(1, 2)?, 7);
        assert_eq!(m.get(0, 1), Some(&3));
        assert_eq!(m.as_slice(), &[0, 3, 0, 0, 0, 7]);

        assert_eq!(
            m.at(2, 0),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(m.at(0, 3).is_err());
        assert!(m.set(5, 5, 1).is_err());
        assert_eq!(m.as_slice(), &[0, 3, 0, 0, 0, 7]);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let m = Matrix::<i32>::new(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn from_shape_vec_checks_len() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(
            Matrix::from_shape_vec([3, 2], vec![1, 2]),
            Err(MatrixError::InvalidShape {
                expected: 6,
                actual: 2
            })
        );
        Ok(())
    }

    #[test]
    fn from_rows_ragged() -> Result<(), MatrixError> {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Matrix::<f64>::from_rows(&rows),
            Err(MatrixError::invalid_shape(4, 3))
        );

        let rows = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]];
        assert_eq!(
            Matrix::<i32>::from_rows(&rows),
            Err(MatrixError::invalid_shape(9, 7))
        );

        let empty: [[f64; 0]; 0] = [];
        assert_eq!(Matrix::from_rows(&empty)?.shape(), [0, 0]);
        Ok(())
    }

    #[test]
    fn identity() {
        let id = Matrix::<f64>::identity(3);
        assert_eq!(id.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rows_iteration() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]])?;
        assert_eq!(m.row(1)?, &[4, 5, 6]);
        assert!(m.row(2).is_err());
        let sums: Vec<i32> = m.iter_rows().map(|r| r.iter().sum()).collect();
        assert_eq!(sums, vec![6, 15]);
        Ok(())
    }

    #[test]
    fn equality() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]])?;
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b, a);

        // same elements, different shape
        let c = Matrix::from_shape_vec([3, 2], a.clone().into_vec())?;
        assert_ne!(a, c);
        assert_ne!(Matrix::<i32>::new(2, 3), Matrix::<i32>::new(3, 2));
        Ok(())
    }

    #[test]
    fn clone_is_deep() {
        let a = Matrix::<i32>::new(2, 2);
        let mut b = a.clone();
        b[(0, 0)] = 9;
        assert_eq!(a[(0, 0)], 0);
        assert_eq!(b[(0, 0)], 9);
    }

    #[test]
    fn transpose() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[5, 1, 3], [-4, 1, -2], [0, 7, 0]])?;
        let expected = Matrix::from_rows(&[[5, -4, 0], [1, 1, 7], [3, -2, 0]])?;
        assert_eq!(a.transposed(), expected);
        assert_eq!(a.transposed().transposed(), a);

        let r = Matrix::from_rows(&[[1, 2, 3]])?;
        assert_eq!(r.transposed().shape(), [3, 1]);
        Ok(())
    }

    #[test]
    fn nan_detection() {
        let mut m = Matrix::<f32>::new(2, 2);
        assert!(!is_nan(&m));
        m[(1, 1)] = f32::NAN;
        assert!(is_nan(&m));
        assert!(m.has_nan());

        let i = Matrix::<i64>::identity(4);
        assert!(!is_nan(&i));
    }

    #[test]
    fn map_elements() {
        let m = Matrix::<i32>::identity(2).map(|&v| v as f64 * 0.5);
        assert_eq!(m.as_slice(), &[0.5, 0.0, 0.0, 0.5]);
    }
}
